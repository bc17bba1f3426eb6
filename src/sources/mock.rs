//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{Grade, HadithResult, SearchSelection};
use crate::sources::{FetchOutcome, HadithSource, SourceError};

/// What the mock answers with
#[derive(Debug, Clone)]
enum MockReply {
    Outcome(FetchOutcome),
    Failure(String),
}

/// A mock source that returns a predefined reply and counts calls.
#[derive(Debug)]
pub struct MockSource {
    reply: Mutex<MockReply>,
    calls: AtomicUsize,
    last_selection: Mutex<Option<SearchSelection>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create a mock that reports an empty document.
    pub fn new() -> Self {
        Self {
            reply: Mutex::new(MockReply::Outcome(FetchOutcome::Empty)),
            calls: AtomicUsize::new(0),
            last_selection: Mutex::new(None),
        }
    }

    /// Create a mock that finds `result`.
    pub fn found(result: HadithResult) -> Self {
        let mock = Self::new();
        mock.set_outcome(FetchOutcome::Found(result));
        mock
    }

    /// Create a mock whose fetch fails with a network error.
    pub fn failing(message: &str) -> Self {
        let mock = Self::new();
        mock.set_failure(message);
        mock
    }

    /// Set the outcome to return.
    pub fn set_outcome(&self, outcome: FetchOutcome) {
        let mut guard = self.reply.lock().unwrap();
        *guard = MockReply::Outcome(outcome);
    }

    /// Make subsequent fetches fail.
    pub fn set_failure(&self, message: &str) {
        let mut guard = self.reply.lock().unwrap();
        *guard = MockReply::Failure(message.to_string());
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The selection of the most recent fetch.
    pub fn last_selection(&self) -> Option<SearchSelection> {
        self.last_selection.lock().unwrap().clone()
    }
}

#[async_trait]
impl HadithSource for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn fetch(&self, selection: &SearchSelection) -> Result<FetchOutcome, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_selection.lock().unwrap() = Some(selection.clone());

        let guard = self.reply.lock().unwrap();
        match &*guard {
            MockReply::Outcome(outcome) => Ok(outcome.clone()),
            MockReply::Failure(message) => Err(SourceError::Network(message.clone())),
        }
    }
}

/// Helper function to create a fully populated result for testing.
pub fn make_result(number: &str, collection: &str) -> HadithResult {
    HadithResult {
        collection_name: Some(collection.to_string()),
        section: Some("Prayer".to_string()),
        hadith_number: Some(number.to_string()),
        text: Some(format!("Text of hadith {}", number)),
        grades: Some(vec![Grade::new("Al-Albani", "Sahih")]),
        book_reference: Some("1".to_string()),
        hadith_reference: Some(format!("Book 2, Hadith {}", number)),
    }
}
