//! Thesis sections and the citations derived from them.

use serde::{Deserialize, Serialize};

/// One static, citable chunk of the thesis.
///
/// Sections are defined at compile time and never mutated, so every field
/// borrows `'static` data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Unique identifier within a content store
    pub id: &'static str,

    /// Short human-readable label
    pub title: &'static str,

    /// Body paragraph(s)
    pub content: &'static str,

    /// Page where the section starts in the source document
    pub page_start: u32,

    /// Lowercase terms that boost ranking
    pub keywords: &'static [&'static str],
}

impl Section {
    /// Coarse chapter label for this section's starting page.
    pub fn chapter(&self) -> &'static str {
        chapter_label(self.page_start)
    }
}

/// Map a page number onto the thesis chapter it falls in.
pub fn chapter_label(page: u32) -> &'static str {
    match page {
        0..15 => "Chapter 1",
        15..37 => "Chapter 2",
        37..60 => "Chapter 3",
        _ => "Chapter 4",
    }
}

/// A pointer from a reply back to the section it drew on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// The cited section's id
    pub id: String,

    /// Display text (the section title)
    pub text: String,

    /// Chapter label, e.g. "Chapter 2"
    pub section: String,

    /// Starting page of the cited section
    pub page: u32,
}

impl From<&Section> for Citation {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.to_string(),
            text: section.title.to_string(),
            section: section.chapter().to_string(),
            page: section.page_start,
        }
    }
}
