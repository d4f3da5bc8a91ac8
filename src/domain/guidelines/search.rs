//! Keyword lookup over the guideline catalog.

use super::{guideline, Guideline, GuidelineCode};

/// Trigger keywords per guideline, in reporting order.
const KEYWORDS: &[(GuidelineCode, &[&str])] = &[
    (GuidelineCode::G, &["alcohol", "dui", "drink"]),
    (GuidelineCode::H, &["drug", "substance", "marijuana"]),
    (GuidelineCode::D, &["sexual", "harassment"]),
    (GuidelineCode::J, &["assault", "violence", "criminal"]),
    (GuidelineCode::E, &["dishonest", "falsif"]),
];

/// A guideline hit together with the keyword that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidelineMatch {
    pub code: GuidelineCode,
    pub keyword: &'static str,
    pub guideline: &'static Guideline,
}

/// Case-insensitive substring search of `query` against the keyword table.
///
/// Each guideline appears at most once; results follow the G, H, D, J, E
/// order regardless of where the keywords occur in the query.
pub fn search_guidelines(query: &str) -> Vec<GuidelineMatch> {
    let query = query.to_lowercase();
    if query.trim().is_empty() {
        return Vec::new();
    }

    KEYWORDS
        .iter()
        .filter_map(|(code, words)| {
            words
                .iter()
                .find(|w| query.contains(*w))
                .copied()
                .map(|keyword| GuidelineMatch {
                    code: *code,
                    keyword,
                    guideline: guideline(*code),
                })
        })
        .collect()
}
