//! Product attribute extraction.
//!
//! [`ProductExtractor`] wraps one parsed page (or no page at all, when the
//! fetch failed) and exposes one read-only accessor per product attribute.
//! Accessors are independent, idempotent and side-effect free: each call
//! re-queries the tree, and a missing attribute comes back as the empty
//! value, never as an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dom::{DocumentNode, DocumentTree, HtmlTree};
use crate::fetch::{self, HeaderConfig};
use crate::normalize;
use crate::selectors;

/// Deal information for a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealSignal {
    /// Whether the deal badge is present.
    Badge(bool),
    /// Raw text of the regular-price node, when it was requested and found.
    RegularPrice(String),
}

/// Extracts product attributes from one parsed product page.
///
/// Holds `None` when the page could not be fetched or parsed; every
/// accessor then returns its empty value.
pub struct ProductExtractor<T: DocumentTree = HtmlTree> {
    tree: Option<T>,
}

impl ProductExtractor<HtmlTree> {
    /// Build an extractor over already-downloaded markup.
    pub fn from_html(markup: &str) -> Self {
        Self::new(Some(HtmlTree::parse(markup)))
    }

    /// Fetch `url` with the default browser-mimicry headers and build an
    /// extractor over the response.
    pub fn from_url(url: &str) -> Self {
        let agent = ureq::Agent::new_with_defaults();
        Self::from_url_with(&agent, url, &HeaderConfig::default())
    }

    /// Fetch `url` with a caller-provided agent and header set.
    ///
    /// A failed fetch is reported as a diagnostic only; the returned
    /// extractor is in the no-document state and all accessors degrade to
    /// empty values.
    pub fn from_url_with(agent: &ureq::Agent, url: &str, headers: &HeaderConfig) -> Self {
        match fetch::fetch_page(agent, url, headers) {
            Ok(body) => Self::from_html(&body),
            Err(err) => {
                warn!(url = %url, error = %err, "request failure, extractor has no document");
                Self::new(None)
            }
        }
    }
}

impl<T: DocumentTree> ProductExtractor<T> {
    pub fn new(tree: Option<T>) -> Self {
        Self { tree }
    }

    /// Whether a document is available at all.
    pub fn has_document(&self) -> bool {
        self.tree.is_some()
    }

    fn first_text(&self, query: &str) -> String {
        self.tree
            .as_ref()
            .and_then(|tree| tree.select_first(query))
            .map(|node| node.text())
            .unwrap_or_default()
    }

    /// Product title.
    pub fn title(&self) -> String {
        self.first_text(selectors::TITLE)
    }

    /// Availability line, e.g. "In stock" or "Currently unavailable".
    pub fn availability(&self) -> String {
        self.first_text(selectors::AVAILABILITY)
    }

    /// Pre-discount (strikethrough) price, reduced to digits and dots.
    pub fn original_price(&self) -> String {
        self.tree
            .as_ref()
            .and_then(|tree| selectors::ORIGINAL_PRICE.resolve(tree))
            .map(|node| normalize::digits_and_dot(&node.text()))
            .unwrap_or_default()
    }

    /// Current price, with separators and currency symbol stripped.
    pub fn price(&self) -> String {
        self.tree
            .as_ref()
            .and_then(|tree| selectors::PRICE.resolve(tree))
            .map(|node| normalize::strip_price_markup(&node.text()))
            .unwrap_or_default()
    }

    /// Discount percentage derived from [`Self::original_price`] and
    /// [`Self::price`]. 0.0 whenever either fails to parse or there is no
    /// positive margin.
    pub fn discount_percent(&self) -> f64 {
        normalize::discount_percent(&self.original_price(), &self.price())
    }

    /// Brand or manufacturer byline.
    pub fn brand(&self) -> String {
        self.first_text(selectors::BRAND)
    }

    /// Main product image URL. At most one entry; empty when the image node
    /// is absent or has no `src` attribute.
    pub fn images(&self) -> Vec<String> {
        self.tree
            .as_ref()
            .and_then(|tree| tree.select_first(selectors::MAIN_IMAGE))
            .and_then(|node| node.attribute("src"))
            .map(|src| vec![src])
            .unwrap_or_default()
    }

    /// Star rating text, e.g. "4.3 out of 5 stars".
    pub fn rating(&self) -> String {
        self.first_text(selectors::RATING)
    }

    /// Review count text, e.g. "1,204 ratings".
    pub fn review_count(&self) -> String {
        self.first_text(selectors::REVIEW_COUNT)
    }

    /// Deal badge presence, or the regular-price text when
    /// `want_regular_price` is set and the regular-price node exists.
    pub fn deal(&self, want_regular_price: bool) -> DealSignal {
        let Some(tree) = self.tree.as_ref() else {
            return DealSignal::Badge(false);
        };
        if want_regular_price {
            if let Some(node) = tree.select_first(selectors::DEAL_REGULAR_PRICE) {
                return DealSignal::RegularPrice(node.text());
            }
        }
        DealSignal::Badge(tree.select_first(selectors::DEAL_BADGE).is_some())
    }

    /// Whether the deal badge is present.
    pub fn has_deal(&self) -> bool {
        self.deal(false) == DealSignal::Badge(true)
    }

    /// Category trail from the breadcrumb list, trimmed, empty entries
    /// dropped.
    pub fn category(&self) -> Vec<String> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };
        tree.select_all(selectors::BREADCRUMB_ITEMS)
            .iter()
            .map(|node| node.text())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Feature bullet points, trimmed, empty entries dropped. Empty when
    /// the bullet container is absent.
    pub fn features(&self) -> Vec<String> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };
        let Some(list) = tree.select_first(selectors::FEATURE_BULLETS) else {
            return Vec::new();
        };
        list.select_all(selectors::FEATURE_ITEM)
            .iter()
            .map(|node| node.text())
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Seller name.
    pub fn sold_by(&self) -> String {
        self.first_text(selectors::SELLER)
    }

    /// Product description. Tries the description paragraph, then the
    /// description container, then falls back to the first two feature
    /// bullets joined by a space.
    pub fn description(&self) -> String {
        let paragraph = self.first_text(selectors::DESCRIPTION_PARAGRAPH);
        if !paragraph.is_empty() {
            return paragraph;
        }
        let container = self.first_text(selectors::DESCRIPTION_CONTAINER);
        if !container.is_empty() {
            return container;
        }
        let features = self.features();
        if features.is_empty() {
            return String::new();
        }
        features
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve every accessor once and bundle the results.
    pub fn snapshot(&self) -> Product {
        Product {
            title: self.title(),
            availability: self.availability(),
            price: self.price(),
            original_price: self.original_price(),
            discount_percent: self.discount_percent(),
            brand: self.brand(),
            images: self.images(),
            rating: self.rating(),
            review_count: self.review_count(),
            has_deal: self.has_deal(),
            category: self.category(),
            features: self.features(),
            sold_by: self.sold_by(),
            description: self.description(),
        }
    }
}

/// Aggregate of all scalar and list accessors for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub availability: String,
    pub price: String,
    pub original_price: String,
    pub discount_percent: f64,
    pub brand: String,
    pub images: Vec<String>,
    pub rating: String,
    pub review_count: String,
    pub has_deal: bool,
    pub category: Vec<String>,
    pub features: Vec<String>,
    pub sold_by: String,
    pub description: String,
}
