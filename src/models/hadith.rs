//! Hadith lookup models: what the user asked for and what came back.

use serde::{Deserialize, Serialize};

use super::catalog::{Edition, Language};

/// The three inputs of a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSelection {
    /// Hadith number as typed (trimmed before it is sent)
    pub query: String,

    /// Collection to look in
    pub edition: Edition,

    /// Translation language
    pub language: Language,
}

impl SearchSelection {
    /// Create a new selection
    pub fn new(query: impl Into<String>, edition: Edition, language: Language) -> Self {
        Self {
            query: query.into(),
            edition,
            language,
        }
    }

    /// The query with surrounding whitespace removed
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Whether the query is blank once trimmed
    pub fn is_blank(&self) -> bool {
        self.trimmed_query().is_empty()
    }

    /// The `{language}-{edition}` directory name on the CDN
    pub fn edition_key(&self) -> String {
        format!("{}-{}", self.language.code(), self.edition.code())
    }
}

/// A scholarly grading attached to a hadith
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub scholar: Option<String>,
    pub grade: Option<String>,
}

impl Grade {
    pub fn new(scholar: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            scholar: Some(scholar.into()),
            grade: Some(grade.into()),
        }
    }
}

/// One looked-up hadith together with its collection metadata.
///
/// Every field is optional: a partially filled document is still a result,
/// and absent fields are only replaced by a placeholder when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithResult {
    /// Collection name from the document metadata
    pub collection_name: Option<String>,

    /// Section title from the document metadata
    pub section: Option<String>,

    /// Hadith number within the collection
    pub hadith_number: Option<String>,

    /// Hadith text in the requested language
    pub text: Option<String>,

    /// Gradings, `None` when the document carries no grade list at all
    pub grades: Option<Vec<Grade>>,

    /// Book reference
    pub book_reference: Option<String>,

    /// Hadith reference within the book
    pub hadith_reference: Option<String>,
}

/// Summary of the most recent successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSearched {
    pub number: String,
    pub edition: String,
    pub language: String,
}

impl LastSearched {
    /// Build the summary from a selection, resolving catalog labels
    pub fn from_selection(selection: &SearchSelection) -> Self {
        Self {
            number: selection.trimmed_query().to_string(),
            edition: selection.edition.label().to_string(),
            language: selection.language.label().to_string(),
        }
    }
}

impl std::fmt::Display for LastSearched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing hadith #{} from {} ({})",
            self.number, self.edition, self.language
        )
    }
}
