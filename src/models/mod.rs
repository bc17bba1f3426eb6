//! Core data models for hadith lookups.

mod catalog;
mod hadith;

pub use catalog::{CatalogError, Edition, Language};
pub use hadith::{Grade, HadithResult, LastSearched, SearchSelection};
