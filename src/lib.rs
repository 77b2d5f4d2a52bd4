//! Product page extractor
//!
//! Pulls structured product attributes out of one downloaded product page:
//! - Ordered CSS-selector fallback lists with explicit match policies
//! - Text and price normalization (currency symbols, thousands separators)
//! - Derived values (discount percentage, description fallback)
//! - One-shot blocking fetch with browser-mimicry headers
//!
//! This is a page extractor, not a crawler: no queueing, no retries, no
//! persistence. A failed fetch degrades to a "no document" extractor whose
//! accessors all return empty values.

pub mod dom;
pub mod extractor;
pub mod fetch;
pub mod normalize;
pub mod selectors;

pub use dom::{DocumentNode, DocumentTree, HtmlTree};
pub use extractor::{DealSignal, Product, ProductExtractor};
pub use fetch::{fetch_page, FetchError, HeaderConfig};
pub use selectors::{MatchPolicy, SelectorList};
