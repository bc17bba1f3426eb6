//! # ProphetSays
//!
//! Look up a hadith by number in a chosen collection and language, using the
//! public hadith-api documents served from jsDelivr.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Edition, Language, HadithResult, etc.)
//! - [`sources`]: The [`HadithSource`] trait, the CDN source and a mock
//! - [`search`]: The search form state machine and its display container
//! - [`ui`]: Card rendering and terminal chrome
//! - [`utils`]: HTTP client and text layout helpers
//! - [`config`]: Configuration management
//!
//! ```rust,no_run
//! use prophet_says::{CdnSource, HadithContainer, SearchOutcome};
//! use prophet_says::models::{Edition, Language};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CdnSource::new()?;
//! let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);
//! page.form_mut().set_query("1035");
//!
//! if let SearchOutcome::Found(result) = page.submit(&source).await {
//!     println!("{:?}", result.collection_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod models;
pub mod search;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::HadithResult;
pub use search::{HadithContainer, SearchError, SearchForm, SearchOutcome, SearchPhase};
pub use sources::{CdnSource, FetchOutcome, HadithSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
