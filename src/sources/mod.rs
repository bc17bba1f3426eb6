//! Hadith sources.
//!
//! This module defines the [`HadithSource`] trait that the search form talks
//! to. The production implementation is [`CdnSource`], which reads the
//! static JSON documents published by the hadith-api project. [`MockSource`]
//! returns canned outcomes and records how often it was asked.
//!
//! # Response shapes
//!
//! A source answers a lookup with one of three shapes:
//!
//! - [`FetchOutcome::Found`]: the document had at least one hadith
//! - [`FetchOutcome::Empty`]: the document parsed but listed no hadiths
//! - `Err(SourceError)`: transport failure, HTTP error, or a malformed document

mod cdn;
pub mod mock;

pub use cdn::{CdnSource, DEFAULT_BASE_URL};
pub use mock::MockSource;

use async_trait::async_trait;

use crate::models::{HadithResult, SearchSelection};

/// The interface the search form uses to resolve a selection
#[async_trait]
pub trait HadithSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Fetch the hadith described by `selection`.
    ///
    /// Issues at most one request. Callers validate the selection first.
    async fn fetch(&self, selection: &SearchSelection) -> Result<FetchOutcome, SourceError>;
}

/// Result of a successful round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The document contained at least one hadith; the first one is kept
    Found(HadithResult),

    /// The document contained no hadiths
    Empty,
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("API error: status {status} for {url}")]
    Api { status: u16, url: String },

    /// The document could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidRequest(format!("URL: {}", err))
    }
}
