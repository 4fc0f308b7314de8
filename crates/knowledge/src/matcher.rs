//! Keyword matcher — filters and ranks thesis sections for a question.
//!
//! Matching is plain case-insensitive substring containment, not whole-word
//! matching: the token "form" matches "formulas". Two different haystacks
//! are used on purpose:
//!
//! - **filter**: title, content and keywords. A section is a candidate when
//!   any token occurs anywhere in it.
//! - **score**: title and keywords only. Content decides *whether* a section
//!   shows up, never *how high* it ranks.
//!
//! Candidates are ordered by descending score with a stable sort, so equal
//! scores keep content-store order and repeated queries rank identically.

use cryochat_core::Section;
use serde::Serialize;
use tracing::debug;

use crate::store::ContentStore;

/// Tokens this short or shorter are dropped as stop words.
const MIN_TOKEN_CHARS: usize = 4;

/// A candidate section and its title+keyword overlap score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredSection {
    pub section: &'static Section,
    pub score: usize,
}

/// Lowercase the query, split on whitespace and drop tokens of three
/// characters or fewer.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

fn filter_haystack(section: &Section) -> String {
    format!(
        "{} {} {}",
        section.title,
        section.content,
        section.keywords.join(" ")
    )
    .to_lowercase()
}

fn score_haystack(section: &Section) -> String {
    // No separator between title and keywords, so a token can straddle the
    // seam. Kept that way to rank exactly like the deployed assistant.
    format!("{}{}", section.title, section.keywords.join(" ")).to_lowercase()
}

fn count_hits(tokens: &[String], haystack: &str) -> usize {
    tokens.iter().filter(|t| haystack.contains(t.as_str())).count()
}

/// Ranks a content store against free-text questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    store: ContentStore,
}

impl Matcher {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Candidates with their scores, best first.
    pub fn rank(&self, query: &str) -> Vec<ScoredSection> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            debug!("Matcher: no usable tokens in query");
            return Vec::new();
        }

        let mut ranked: Vec<ScoredSection> = self
            .store
            .sections()
            .iter()
            .filter(|section| count_hits(&tokens, &filter_haystack(section)) > 0)
            .map(|section| ScoredSection {
                section,
                score: count_hits(&tokens, &score_haystack(section)),
            })
            .collect();

        // `sort_by` is stable: ties keep store order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            tokens = tokens.len(),
            candidates = ranked.len(),
            top = ranked.first().map(|r| r.section.id).unwrap_or("-"),
            "Matcher: ranked sections"
        );

        ranked
    }

    /// Relevant sections, best first.
    pub fn find(&self, query: &str) -> Vec<&'static Section> {
        self.rank(query).into_iter().map(|r| r.section).collect()
    }
}
