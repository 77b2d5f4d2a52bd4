//! CSS queries for the product page layout.
//!
//! All queries used against a product page live here. When the source site
//! changes its markup, update this file and the extractor fixtures together.

use crate::dom::{DocumentNode, DocumentTree};

pub const TITLE: &str = "span#productTitle";
pub const AVAILABILITY: &str = "#availability span";
pub const BRAND: &str = "#bylineInfo";
pub const MAIN_IMAGE: &str = "div#imgTagWrapperId img";
pub const RATING: &str = "span.a-icon-alt";
pub const REVIEW_COUNT: &str = "span#acrCustomerReviewText";
pub const DEAL_BADGE: &str = "#dealBadgeSupportingText";
pub const DEAL_REGULAR_PRICE: &str = "#corePrice_feature_div span.a-price-whole";
pub const BREADCRUMB_ITEMS: &str =
    "ul.a-unordered-list.a-horizontal.a-size-small li span.a-list-item";
pub const FEATURE_BULLETS: &str = "#feature-bullets ul";
pub const FEATURE_ITEM: &str = "li";
pub const SELLER: &str = "#sellerProfileTriggerId";
pub const DESCRIPTION_PARAGRAPH: &str = "#productDescription p";
pub const DESCRIPTION_CONTAINER: &str = "#productDescription";

/// How a [`SelectorList`] picks among its candidate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Stop at the first query whose node has non-empty trimmed text.
    FirstMatch,
    /// Evaluate every query; the last one that matches any node wins.
    LastMatch,
}

/// Ordered fallback list of queries with an explicit match policy.
///
/// Order is significant: it encodes which page layout is tried first
/// (typically a legacy layout before the current one).
#[derive(Debug, Clone, Copy)]
pub struct SelectorList {
    pub queries: &'static [&'static str],
    pub policy: MatchPolicy,
}

/// Current price. First layout that yields a price wins.
pub const PRICE: SelectorList = SelectorList {
    queries: &[
        "#priceblock_ourprice",
        "#corePriceDisplay_desktop_feature_div span.a-price-whole",
        "#corePrice_desktop span.a-offscreen",
    ],
    policy: MatchPolicy::FirstMatch,
};

/// Pre-discount (strikethrough) price.
///
/// Last-match, not first-match: downstream output was captured against this
/// behavior, so it stays until the selectors themselves are revised.
pub const ORIGINAL_PRICE: SelectorList = SelectorList {
    queries: &[
        "#priceblock_strikeprice",
        "span.a-text-price > span.a-offscreen",
        "span.a-price.a-text-price span.a-offscreen",
    ],
    policy: MatchPolicy::LastMatch,
};

impl SelectorList {
    /// Run the list against a tree and return the winning node, if any.
    pub fn resolve<'a, T: DocumentTree>(&self, tree: &'a T) -> Option<T::Node<'a>> {
        match self.policy {
            MatchPolicy::FirstMatch => self
                .queries
                .iter()
                .find_map(|query| tree.select_first(query).filter(|node| !node.text().is_empty())),
            MatchPolicy::LastMatch => {
                let mut candidate = None;
                for query in self.queries {
                    if let Some(node) = tree.select_first(query) {
                        candidate = Some(node);
                    }
                }
                candidate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HtmlTree;

    const FIRST: SelectorList = SelectorList {
        queries: &["#a", "#b", "#c"],
        policy: MatchPolicy::FirstMatch,
    };

    const LAST: SelectorList = SelectorList {
        queries: &["#a", "#b", "#c"],
        policy: MatchPolicy::LastMatch,
    };

    #[test]
    fn first_match_takes_first_matching_query() {
        let tree = HtmlTree::parse(r#"<div id="b">beta</div><div id="c">gamma</div>"#);
        let node = FIRST.resolve(&tree).unwrap();
        assert_eq!(node.text(), "beta");
    }

    #[test]
    fn first_match_skips_nodes_with_empty_text() {
        let tree = HtmlTree::parse(r#"<div id="a">  </div><div id="b">beta</div>"#);
        let node = FIRST.resolve(&tree).unwrap();
        assert_eq!(node.text(), "beta");
    }

    #[test]
    fn last_match_overwrites_earlier_matches() {
        let tree = HtmlTree::parse(
            r#"<div id="a">alpha</div><div id="b">beta</div><div id="c">gamma</div>"#,
        );
        let node = LAST.resolve(&tree).unwrap();
        assert_eq!(node.text(), "gamma");
    }

    #[test]
    fn last_match_keeps_earlier_match_when_later_queries_miss() {
        let tree = HtmlTree::parse(r#"<div id="b">beta</div>"#);
        let node = LAST.resolve(&tree).unwrap();
        assert_eq!(node.text(), "beta");
    }

    #[test]
    fn no_query_matches() {
        let tree = HtmlTree::parse("<p>nothing here</p>");
        assert!(FIRST.resolve(&tree).is_none());
        assert!(LAST.resolve(&tree).is_none());
    }
}
