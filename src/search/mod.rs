//! The lookup flow: form state, submission, and the result container.
//!
//! [`SearchForm`] owns the inputs and drives one lookup at a time through a
//! [`HadithSource`](crate::sources::HadithSource). [`HadithContainer`] holds
//! the form together with the most recent result and decides whether a card
//! is shown.
//!
//! ```rust,no_run
//! use prophet_says::models::{Edition, Language};
//! use prophet_says::search::HadithContainer;
//! use prophet_says::sources::CdnSource;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CdnSource::new()?;
//! let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);
//! page.form_mut().set_query("1035");
//! page.submit(&source).await;
//! if let Some(result) = page.current() {
//!     println!("{:?}", result.collection_name);
//! }
//! # Ok(())
//! # }
//! ```

mod container;
mod form;

pub use container::HadithContainer;
pub use form::{SearchForm, SearchOutcome, SearchPhase};

/// Shown when the query is blank
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a hadith number";

/// Shown when the document lists no hadiths
pub const NOT_FOUND_MESSAGE: &str = "No hadith found with this number";

/// Shown when the document could not be fetched or read
pub const UNAVAILABLE_MESSAGE: &str = "Sorry, this part hasn't been translated yet.";

/// Shown when a submit arrives while a lookup is in flight
pub const BUSY_MESSAGE: &str = "A search is already in progress";

/// Why a lookup came back without a hadith
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    /// The document parsed but listed no hadiths
    NoHadith,

    /// The document could not be fetched or decoded
    Unavailable,
}

impl Miss {
    /// Text shown to the user for this miss
    pub fn message(&self) -> &'static str {
        match self {
            Miss::NoHadith => NOT_FOUND_MESSAGE,
            Miss::Unavailable => UNAVAILABLE_MESSAGE,
        }
    }
}

/// User-facing search errors.
///
/// Display output is the exact text shown to the user. Technical causes are
/// logged where they happen and never carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{}", EMPTY_QUERY_MESSAGE)]
    EmptyQuery,

    #[error("{}", .0.message())]
    NotFoundOrUnavailable(Miss),

    #[error("{}", BUSY_MESSAGE)]
    Busy,
}
