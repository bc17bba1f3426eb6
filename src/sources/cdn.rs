//! hadith-api CDN source implementation.
//!
//! Reads the pre-rendered edition documents published by the hadith-api
//! project through jsDelivr. One document exists per hadith number and
//! `{language}-{edition}` pair.
//! Project page: <https://github.com/fawazahmed0/hadith-api>

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::models::{Grade, HadithResult, SearchSelection};
use crate::sources::{FetchOutcome, HadithSource, SourceError};
use crate::utils::HttpClient;

/// Root of the published edition documents
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1/editions";

/// hadith-api CDN source
#[derive(Debug, Clone)]
pub struct CdnSource {
    client: Arc<HttpClient>,
    base_url: Url,
}

impl CdnSource {
    /// Create a source against the public CDN
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_BASE_URL, Arc::new(HttpClient::new()?))
    }

    /// Create a source against a custom root (mirrors, tests)
    pub fn with_base_url(base_url: &str, client: Arc<HttpClient>) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidRequest(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    /// Create a source from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let client = HttpClient::with_options(
            &config.api.user_agent,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Self::with_base_url(&config.api.base_url, Arc::new(client))
    }

    /// The configured root
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{language}-{edition}/{query}.json`.
    ///
    /// The query is trimmed and pushed as a single path segment, so it is
    /// percent-encoded and can never escape the edition directory.
    pub fn build_url(&self, selection: &SearchSelection) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SourceError::InvalidRequest(format!("Base URL cannot carry a path: {}", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .push(&selection.edition_key())
                .push(&format!("{}.json", selection.trimmed_query()));
        }
        Ok(url)
    }

    /// Interpret a downloaded document.
    pub fn parse_document(body: &[u8]) -> Result<FetchOutcome, SourceError> {
        let document: EditionDocument = serde_json::from_slice(body)?;
        Ok(document.into_outcome())
    }
}

#[async_trait]
impl HadithSource for CdnSource {
    fn id(&self) -> &str {
        "cdn"
    }

    fn name(&self) -> &str {
        "hadith-api (jsDelivr)"
    }

    async fn fetch(&self, selection: &SearchSelection) -> Result<FetchOutcome, SourceError> {
        let url = self.build_url(selection)?;
        tracing::debug!(url = %url, "Fetching hadith document");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read body of {}: {}", url, e)))?;
        tracing::trace!(bytes = body.len(), "Received hadith document");

        Self::parse_document(&body)
    }
}

/// Edition document as published on the CDN.
///
/// Only `hadiths` is strict. Every other field decodes leniently: a value of
/// the wrong shape reads as absent and renders as a placeholder.
#[derive(Debug, Deserialize)]
struct EditionDocument {
    #[serde(default, deserialize_with = "lenient")]
    metadata: Option<DocumentMetadata>,
    #[serde(default)]
    hadiths: Option<Vec<DocumentHadith>>,
}

#[derive(Debug, Default, Deserialize)]
struct DocumentMetadata {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<Scalar>,
    #[serde(default)]
    section: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DocumentHadith {
    #[serde(default, deserialize_with = "lenient")]
    hadithnumber: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    number: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    text: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    grades: Option<Vec<serde_json::Value>>,
    #[serde(default, deserialize_with = "lenient")]
    reference: Option<DocumentReference>,
}

#[derive(Debug, Deserialize)]
struct DocumentGrade {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    scholar: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    grade: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
struct DocumentReference {
    #[serde(default, deserialize_with = "lenient")]
    book: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    hadith: Option<Scalar>,
}

/// Decode `T` if the value has its shape, otherwise treat it as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A leaf value that may be published as a string or a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        let text = match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        };
        non_empty(text)
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn text_of(value: Option<Scalar>) -> Option<String> {
    value.and_then(Scalar::into_text)
}

/// Pick the section title from the `section` map.
///
/// Numeric keys are ordered numerically, other keys keep document order.
fn section_title(section: serde_json::Value) -> Option<String> {
    match section {
        serde_json::Value::Object(map) => {
            let numbered = map
                .iter()
                .filter_map(|(k, v)| k.parse::<u64>().ok().map(|n| (n, v)))
                .min_by_key(|(n, _)| *n)
                .map(|(_, v)| v.clone());
            let chosen = numbered.or_else(|| map.values().next().cloned())?;
            value_text(chosen)
        }
        other => value_text(other),
    }
}

fn value_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => non_empty(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl EditionDocument {
    fn into_outcome(self) -> FetchOutcome {
        let first = match self.hadiths.and_then(|h| h.into_iter().next()) {
            Some(hadith) => hadith,
            None => return FetchOutcome::Empty,
        };

        let metadata = self.metadata.unwrap_or_default();
        let reference = first.reference.unwrap_or_default();

        FetchOutcome::Found(HadithResult {
            collection_name: text_of(metadata.name),
            section: metadata.section.and_then(section_title),
            hadith_number: text_of(first.hadithnumber).or_else(|| text_of(first.number)),
            text: text_of(first.text),
            grades: first.grades.map(|grades| {
                grades
                    .into_iter()
                    .filter_map(|g| serde_json::from_value::<DocumentGrade>(g).ok())
                    .map(|g| Grade {
                        scholar: text_of(g.name).or_else(|| text_of(g.scholar)),
                        grade: text_of(g.grade),
                    })
                    .collect()
            }),
            book_reference: text_of(reference.book),
            hadith_reference: text_of(reference.hadith),
        })
    }
}
