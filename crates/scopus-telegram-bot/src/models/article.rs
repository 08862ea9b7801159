//! Scopus search response models and the mapped article record.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Placeholder strings substituted for absent response fields.
pub mod placeholder {
    /// Shown when an entry has no title.
    pub const NO_TITLE: &str = "No title";

    /// Shown when an entry has no journal name.
    pub const NO_JOURNAL: &str = "No journal";

    /// Shown when an entry has no cover date.
    pub const NO_DATE: &str = "No date";

    /// Shown when an entry has no creator field.
    pub const UNKNOWN_AUTHOR: &str = "Unknown";

    /// Sentinel link for entries without a DOI.
    pub const NO_LINK: &str = "Link unavailable";
}

/// Angle-bracket-delimited tag spans, non-greedy.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

/// Remove all `<tag>`-shaped substrings from a raw title.
///
/// Scopus titles may carry HTML markup (`<i>`, `<sup>`, ...) which has no
/// place in a plain-text chat message. Text without tags passes through
/// unchanged.
#[must_use]
pub fn strip_tags(raw: &str) -> String {
    TAG_RE.replace_all(raw, "").into_owned()
}

/// Top-level Scopus search response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// The nested result container.
    #[serde(rename = "search-results")]
    pub search_results: SearchResults,
}

impl SearchResponse {
    /// Consume the response and yield its entries in API order.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.search_results.entry
    }
}

/// The `search-results` object of a Scopus response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Matched entries; absent when nothing matched.
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One raw record of a Scopus search response, prior to mapping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    /// Article title, possibly carrying HTML markup.
    #[serde(rename = "dc:title", default)]
    pub title: Option<String>,

    /// Digital Object Identifier.
    #[serde(rename = "prism:doi", default)]
    pub doi: Option<String>,

    /// Journal name.
    #[serde(rename = "prism:publicationName", default)]
    pub publication_name: Option<String>,

    /// Publication date (ISO-like string).
    #[serde(rename = "prism:coverDate", default)]
    pub cover_date: Option<String>,

    /// Author field; may list several authors comma-joined.
    #[serde(rename = "dc:creator", default)]
    pub creator: Option<String>,
}

/// One matched article, display-ready. Immutable; discarded after the
/// reply message is composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Title with markup stripped.
    pub title: String,

    /// DOI, empty when the entry carried none.
    pub doi: String,

    /// Journal name.
    pub journal: String,

    /// Cover date.
    pub cover_date: String,

    /// Author string.
    pub authors: String,

    /// `https://doi.org/<DOI>` when a DOI is present, else a sentinel.
    pub link: String,
}

impl From<Entry> for Article {
    fn from(entry: Entry) -> Self {
        let doi = entry.doi.unwrap_or_default();
        let link = if doi.is_empty() {
            placeholder::NO_LINK.to_string()
        } else {
            format!("https://doi.org/{doi}")
        };

        Self {
            title: strip_tags(entry.title.as_deref().unwrap_or(placeholder::NO_TITLE)),
            doi,
            journal: entry.publication_name.unwrap_or_else(|| placeholder::NO_JOURNAL.to_string()),
            cover_date: entry.cover_date.unwrap_or_else(|| placeholder::NO_DATE.to_string()),
            authors: entry.creator.unwrap_or_else(|| placeholder::UNKNOWN_AUTHOR.to_string()),
            link,
        }
    }
}

impl Article {
    /// Whether the entry carried a DOI.
    #[must_use]
    pub fn has_doi(&self) -> bool {
        !self.doi.is_empty()
    }
}
