//! Guidelines module - the static policy knowledge base and its lookup.
//!
//! Retrieval is a keyword substring match over five hardcoded excerpts;
//! there is no index or ranking.

mod catalog;
mod code;
mod search;

pub use catalog::{all_guidelines, get_guideline, guideline, Guideline};
pub use code::GuidelineCode;
pub use search::{search_guidelines, GuidelineMatch};
