//! Display container: the form plus the most recent result.

use crate::models::{Edition, HadithResult, Language, SearchSelection};
use crate::sources::{FetchOutcome, HadithSource, SourceError};
use crate::ui::card::CardFields;

use super::{SearchForm, SearchOutcome};

/// Holds the search form and the result it last produced.
///
/// The collection metadata and the hadith body always arrive together, so
/// they are stored as one optional value and a card is never half filled.
/// A failed lookup leaves the previous result in place until the next
/// success replaces it.
#[derive(Debug, Clone, Default)]
pub struct HadithContainer {
    form: SearchForm,
    current: Option<HadithResult>,
}

impl HadithContainer {
    pub fn new(edition: Edition, language: Language) -> Self {
        Self {
            form: SearchForm::new(edition, language),
            current: None,
        }
    }

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SearchForm {
        &mut self.form
    }

    /// The result on display, if any
    pub fn current(&self) -> Option<&HadithResult> {
        self.current.as_ref()
    }

    /// Resolved card fields for the result on display
    pub fn card(&self) -> Option<CardFields> {
        self.current.as_ref().map(CardFields::from_result)
    }

    /// Submit the form against `source` and keep any hadith found.
    pub async fn submit(&mut self, source: &dyn HadithSource) -> SearchOutcome {
        let outcome = self.form.submit(source).await;
        self.apply(&outcome);
        outcome
    }

    /// Finish a lookup started with [`SearchForm::begin_submit`] on the inner form.
    pub fn finish(
        &mut self,
        selection: &SearchSelection,
        result: Result<FetchOutcome, SourceError>,
    ) -> SearchOutcome {
        let outcome = self.form.finish_submit(selection, result);
        self.apply(&outcome);
        outcome
    }

    fn apply(&mut self, outcome: &SearchOutcome) {
        if let SearchOutcome::Found(result) = outcome {
            self.current = Some(result.clone());
        }
    }
}
