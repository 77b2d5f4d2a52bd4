//! Document tree capability
//!
//! The extractor never talks to a parsing engine directly. It goes through
//! the [`DocumentTree`] trait, which exposes the two query primitives it
//! needs (first match, all matches) plus per-node text/attribute access.
//! [`HtmlTree`] is the scraper-backed implementation.

use scraper::{ElementRef, Html, Selector};

/// An addressable element inside a parsed document.
pub trait DocumentNode {
    /// Concatenated text of the node and its descendants, with leading and
    /// trailing whitespace removed.
    fn text(&self) -> String;

    /// Attribute value, or `None` when the attribute is missing.
    fn attribute(&self, name: &str) -> Option<String>;

    /// All descendants of this node matching `query`, in document order.
    fn select_all(&self, query: &str) -> Vec<Self>
    where
        Self: Sized;
}

/// A parsed, immutable document supporting structural queries.
///
/// "No match" is an explicit `None`/empty result, never an error. A query
/// string the engine cannot parse also behaves as "no match".
pub trait DocumentTree {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// First node matching `query`, in document order.
    fn select_first(&self, query: &str) -> Option<Self::Node<'_>>;

    /// All nodes matching `query`, in document order.
    fn select_all(&self, query: &str) -> Vec<Self::Node<'_>>;
}

/// Document tree backed by `scraper::Html`.
pub struct HtmlTree {
    html: Html,
}

impl HtmlTree {
    /// Parse raw markup. scraper is lenient: malformed input still yields a
    /// tree, just one where most queries come back empty.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

pub struct HtmlNode<'a>(ElementRef<'a>);

impl DocumentNode for HtmlNode<'_> {
    fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(String::from)
    }

    fn select_all(&self, query: &str) -> Vec<Self> {
        let Ok(selector) = Selector::parse(query) else {
            return Vec::new();
        };
        self.0.select(&selector).map(HtmlNode).collect()
    }
}

impl DocumentTree for HtmlTree {
    type Node<'a>
        = HtmlNode<'a>
    where
        Self: 'a;

    fn select_first(&self, query: &str) -> Option<HtmlNode<'_>> {
        let selector = Selector::parse(query).ok()?;
        self.html.select(&selector).next().map(HtmlNode)
    }

    fn select_all(&self, query: &str) -> Vec<HtmlNode<'_>> {
        let Ok(selector) = Selector::parse(query) else {
            return Vec::new();
        };
        self.html.select(&selector).map(HtmlNode).collect()
    }
}
