//! Free-text matching over feature attributes.
//!
//! A [`Query`] is the normalized form of whatever the user typed: trimmed
//! and lower-cased. The empty query is a sentinel meaning "no filter" — it
//! matches every feature, and the controller uses it to drop back to the
//! base layer.
//!
//! Matching is a case-insensitive substring test over the three text
//! attributes (`name`, `type`, `category`). A missing attribute simply never
//! matches; it never errors. Results keep the input collection's order — no
//! ranking or tie-breaking happens here.

use crate::types::Feature;

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(String);

impl Query {
    /// Normalize raw input: trim surrounding whitespace, lower-case.
    pub fn parse(raw: &str) -> Self {
        Query(raw.trim().to_lowercase())
    }

    /// The "no filter" sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True iff the query is empty or is a substring of any text attribute.
    pub fn matches(&self, feature: &Feature) -> bool {
        if self.0.is_empty() {
            return true;
        }
        attr_contains(feature.name.as_deref(), &self.0)
            || attr_contains(feature.kind.as_deref(), &self.0)
            || attr_contains(feature.category.as_deref(), &self.0)
    }

    /// Filter a collection, preserving input order.
    pub fn filter(&self, features: &[Feature]) -> Vec<Feature> {
        features
            .iter()
            .filter(|f| self.matches(f))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn attr_contains(attr: Option<&str>, needle: &str) -> bool {
    attr.is_some_and(|value| value.to_lowercase().contains(needle))
}
