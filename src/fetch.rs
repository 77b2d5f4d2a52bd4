//! One-shot page fetch.
//!
//! A single blocking GET with browser-mimicry headers. No retries, no
//! caching, no timeout beyond whatever the agent is configured with;
//! callers that need those wrap the agent themselves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),
}

/// Ordered request headers sent with the page fetch.
///
/// The default set mimics a desktop browser navigation. Everything is
/// optional except the user agent, without which the source site tends to
/// block the request.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    headers: Vec<(String, String)>,
}

impl HeaderConfig {
    /// Empty header set.
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        let defaults = [
            (
                "user-agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
            ),
            (
                "accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,\
                 image/avif,image/webp,*/*;q=0.8",
            ),
            ("accept-language", "en-GB,en-US;q=0.9,en;q=0.8"),
            ("referer", "https://www.amazon.in/"),
            ("dnt", "1"),
            ("upgrade-insecure-requests", "1"),
            ("sec-fetch-site", "none"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-user", "?1"),
            ("sec-fetch-dest", "document"),
        ];
        Self {
            headers: defaults
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// Fetch one page and return its body as text.
pub fn fetch_page(
    agent: &ureq::Agent,
    url: &str,
    headers: &HeaderConfig,
) -> Result<String, FetchError> {
    let url = url::Url::parse(url)?;

    let mut request = agent.get(url.as_str());
    for (name, value) in headers.iter() {
        request = request.header(name, value);
    }

    let response = request.call().map_err(|err| match err {
        ureq::Error::StatusCode(code) => FetchError::Status(code),
        other => FetchError::Transport(other),
    })?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    Ok(response.into_body().read_to_string()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_carry_browser_identity() {
        let headers = HeaderConfig::default();
        assert!(headers.get("user-agent").unwrap().starts_with("Mozilla/5.0"));
        assert_eq!(
            headers.get("accept-language").unwrap(),
            "en-GB,en-US;q=0.9,en;q=0.8"
        );
        assert!(headers.get("cookie").is_none());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let headers = HeaderConfig::new().with_header("User-Agent", "test-agent");
        assert_eq!(headers.get("user-agent"), Some("test-agent"));
    }

    #[test]
    fn invalid_url_fails_before_any_io() {
        let agent = ureq::Agent::new_with_defaults();
        let result = fetch_page(&agent, "not a url", &HeaderConfig::default());
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
