//! Search index and matching for project cards
//!
//! Matching is a plain case-insensitive substring test against a lowercase
//! blob computed once per card. No tokenizing, no fuzziness.

use crate::model::Project;

/// Lowercase concatenation of every searchable field of a project
pub fn search_index(project: &Project) -> String {
    [
        project.title.as_str(),
        project.subtitle.as_str(),
        project.description.as_str(),
    ]
    .into_iter()
    .chain(project.tags.iter().map(String::as_str))
    .chain(project.highlights.iter().map(String::as_str))
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Trim and lowercase a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether a card with `index` matches an already normalized query
pub fn matches(index: &str, normalized_query: &str) -> bool {
    normalized_query.is_empty() || index.contains(normalized_query)
}
