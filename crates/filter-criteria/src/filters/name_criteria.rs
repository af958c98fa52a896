//! Case-insensitive, separator-tolerant name criterion.

use crate::traits::Criterion;
use parking_lot::RwLock;
use view_files::ViewFile;

/// Separator that stands in for whitespace in stored names
pub const NAME_SEPARATOR: &str = ".";

/// A normalized name query.
///
/// ## Algorithm
/// 1. Text that is empty or only whitespace becomes the empty query
/// 2. First candidate: the raw text, lowercased
/// 3. Second candidate: step 2 with each whitespace run replaced by
///    `NAME_SEPARATOR`, skipped when identical to the first
///
/// Names stored as "My.File.Name" and "My File Name" both match
/// "my file name" this way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    candidates: Vec<String>,
}

impl NameQuery {
    pub fn new(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self {
                candidates: vec![String::new()],
            };
        }

        let query = raw.to_lowercase();
        let separated = replace_whitespace_runs(&query, NAME_SEPARATOR);

        let mut candidates = vec![query];
        if separated != candidates[0] {
            candidates.push(separated);
        }
        Self { candidates }
    }

    /// True when the query accepts every name
    pub fn is_empty(&self) -> bool {
        self.candidates[0].is_empty()
    }

    /// The normalized query text
    pub fn as_str(&self) -> &str {
        &self.candidates[0]
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn matches(&self, name: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        let search = name.to_lowercase();
        self.candidates
            .iter()
            .any(|candidate| search.contains(candidate.as_str()))
    }
}

fn replace_whitespace_runs(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push_str(separator);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

impl Default for NameQuery {
    fn default() -> Self {
        Self::new("")
    }
}

/// Accepts files whose name contains the query.
#[derive(Debug, Default)]
pub struct NameCriteria {
    query: RwLock<NameQuery>,
}

impl NameCriteria {
    /// Create a criterion that accepts every name
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> NameQuery {
        self.query.read().clone()
    }

    /// Replace the query, returning `false` if it normalized to the
    /// current one and nothing changed.
    pub fn set_query(&self, raw: &str) -> bool {
        let query = NameQuery::new(raw);
        let mut current = self.query.write();
        if *current == query {
            return false;
        }
        *current = query;
        true
    }
}

impl Criterion for NameCriteria {
    fn name(&self) -> &str {
        "NameCriteria"
    }

    fn meets_criteria(&self, file: &ViewFile) -> bool {
        self.query.read().matches(&file.name)
    }
}
