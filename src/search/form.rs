//! Search form state machine.

use crate::models::{Edition, HadithResult, Language, LastSearched, SearchSelection};
use crate::sources::{FetchOutcome, HadithSource, SourceError};

use super::{Miss, SearchError};

/// Where the form is in the lookup cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Waiting for input
    Idle,
    /// A request is in flight; submit is disabled
    Loading,
    /// The last lookup found a hadith
    Success,
    /// The last lookup returned a document without hadiths
    NotFound,
    /// The last lookup failed to fetch or decode
    Unavailable,
}

impl SearchPhase {
    /// Whether a new submit is accepted
    pub fn can_submit(&self) -> bool {
        !matches!(self, SearchPhase::Loading)
    }
}

/// What a submit produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(HadithResult),
    Failed(SearchError),
}

/// Input state for a lookup: query, selection, loading flag, error, and the
/// summary of the last successful search.
#[derive(Debug, Clone)]
pub struct SearchForm {
    query: String,
    edition: Edition,
    language: Language,
    phase: SearchPhase,
    error: Option<SearchError>,
    last_searched: Option<LastSearched>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(Edition::default(), Language::default())
    }
}

impl SearchForm {
    /// Create an idle form with the given selection
    pub fn new(edition: Edition, language: Language) -> Self {
        Self {
            query: String::new(),
            edition,
            language,
            phase: SearchPhase::Idle,
            error: None,
            last_searched: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The error currently displayed, if any
    pub fn error(&self) -> Option<SearchError> {
        self.error
    }

    /// The confirmation banner; hidden while an error is displayed
    pub fn banner(&self) -> Option<&LastSearched> {
        if self.error.is_some() {
            None
        } else {
            self.last_searched.as_ref()
        }
    }

    /// The summary of the last successful search, regardless of errors
    pub fn last_searched(&self) -> Option<&LastSearched> {
        self.last_searched.as_ref()
    }

    /// Replace the query text. Typing clears any displayed error.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.error = None;
        self.settle();
    }

    /// Change the edition. Never fetches and never clears results.
    pub fn set_edition(&mut self, edition: Edition) {
        self.edition = edition;
        self.settle();
    }

    /// Change the language. Never fetches and never clears results.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.settle();
    }

    /// The selection a submit would send right now
    pub fn selection(&self) -> SearchSelection {
        SearchSelection::new(self.query.clone(), self.edition, self.language)
    }

    /// Validate the inputs and enter `Loading`.
    ///
    /// On success the caller must issue exactly one fetch for the returned
    /// selection and hand its result to [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<SearchSelection, SearchError> {
        if !self.phase.can_submit() {
            tracing::debug!("Submit ignored, a lookup is already in flight");
            return Err(SearchError::Busy);
        }

        let selection = self.selection();
        if selection.is_blank() {
            self.error = Some(SearchError::EmptyQuery);
            self.phase = SearchPhase::Idle;
            return Err(SearchError::EmptyQuery);
        }

        self.phase = SearchPhase::Loading;
        self.error = None;
        tracing::info!(
            query = selection.trimmed_query(),
            edition = selection.edition.code(),
            language = selection.language.code(),
            "Looking up hadith"
        );
        Ok(selection)
    }

    /// Apply the result of the fetch started by [`begin_submit`](Self::begin_submit).
    ///
    /// Loading is cleared on every path.
    pub fn finish_submit(
        &mut self,
        selection: &SearchSelection,
        result: Result<FetchOutcome, SourceError>,
    ) -> SearchOutcome {
        match result {
            Ok(FetchOutcome::Found(hadith)) => {
                self.phase = SearchPhase::Success;
                self.error = None;
                self.last_searched = Some(LastSearched::from_selection(selection));
                SearchOutcome::Found(hadith)
            }
            Ok(FetchOutcome::Empty) => {
                tracing::info!(
                    query = selection.trimmed_query(),
                    edition_key = %selection.edition_key(),
                    "Document lists no hadiths"
                );
                self.fail(SearchPhase::NotFound, Miss::NoHadith)
            }
            Err(e) => {
                tracing::debug!(
                    query = selection.trimmed_query(),
                    edition_key = %selection.edition_key(),
                    error = %e,
                    "Error fetching hadith"
                );
                self.fail(SearchPhase::Unavailable, Miss::Unavailable)
            }
        }
    }

    /// Abandon an in-flight lookup without touching error or result state.
    pub fn cancel_submit(&mut self) {
        if self.is_loading() {
            tracing::debug!("Lookup cancelled");
            self.phase = SearchPhase::Idle;
        }
    }

    /// Validate, fetch once from `source`, and apply the result.
    pub async fn submit(&mut self, source: &dyn HadithSource) -> SearchOutcome {
        let selection = match self.begin_submit() {
            Ok(selection) => selection,
            Err(e) => return SearchOutcome::Failed(e),
        };
        let result = source.fetch(&selection).await;
        self.finish_submit(&selection, result)
    }

    fn fail(&mut self, phase: SearchPhase, miss: Miss) -> SearchOutcome {
        let error = SearchError::NotFoundOrUnavailable(miss);
        self.phase = phase;
        self.error = Some(error);
        SearchOutcome::Failed(error)
    }

    // Input changes return a finished lookup to idle.
    fn settle(&mut self) {
        if !self.is_loading() {
            self.phase = SearchPhase::Idle;
        }
    }
}
