//! Static edition and language catalog.
//!
//! The hadith-api CDN publishes one directory per `{language}-{edition}`
//! pair. These tables list the pairs this client knows how to request,
//! together with the labels shown to the user.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A hadith collection published by the CDN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    AbuDawud,
    #[default]
    Bukhari,
    Dehlawi,
    IbnMajah,
    Malik,
    Muslim,
    Nasai,
    Nawawi,
    Qudsi,
    Tirmidhi,
}

impl Edition {
    /// Every known edition, in display order
    pub const ALL: [Edition; 10] = [
        Edition::AbuDawud,
        Edition::Bukhari,
        Edition::Dehlawi,
        Edition::IbnMajah,
        Edition::Malik,
        Edition::Muslim,
        Edition::Nasai,
        Edition::Nawawi,
        Edition::Qudsi,
        Edition::Tirmidhi,
    ];

    /// Code used in CDN paths
    pub fn code(&self) -> &'static str {
        match self {
            Edition::AbuDawud => "abudawud",
            Edition::Bukhari => "bukhari",
            Edition::Dehlawi => "dehlawi",
            Edition::IbnMajah => "ibnmajah",
            Edition::Malik => "malik",
            Edition::Muslim => "muslim",
            Edition::Nasai => "nasai",
            Edition::Nawawi => "nawawi",
            Edition::Qudsi => "qudsi",
            Edition::Tirmidhi => "tirmidhi",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Edition::AbuDawud => "Abu Dawud",
            Edition::Bukhari => "Bukhari",
            Edition::Dehlawi => "Dehlawi",
            Edition::IbnMajah => "Ibn Majah",
            Edition::Malik => "Malik",
            Edition::Muslim => "Muslim",
            Edition::Nasai => "Nasai",
            Edition::Nawawi => "Nawawi",
            Edition::Qudsi => "Qudsi",
            Edition::Tirmidhi => "Tirmidhi",
        }
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Edition {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Edition::ALL
            .iter()
            .copied()
            .find(|e| e.code() == needle || e.label().to_lowercase() == needle)
            .ok_or_else(|| CatalogError::UnknownEdition(s.to_string()))
    }
}

/// A translation language published by the CDN
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "urd")]
    Urdu,
    #[serde(rename = "ara")]
    Arabic,
}

impl Language {
    /// Every known language, in display order
    pub const ALL: [Language; 3] = [Language::English, Language::Urdu, Language::Arabic];

    /// Code used in CDN paths
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Urdu => "urd",
            Language::Arabic => "ara",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Arabic => "Arabic",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.code() == needle || l.label().to_lowercase() == needle)
            .ok_or_else(|| CatalogError::UnknownLanguage(s.to_string()))
    }
}

/// Errors from parsing catalog codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown edition: {0} (expected one of abudawud, bukhari, dehlawi, ibnmajah, malik, muslim, nasai, nawawi, qudsi, tirmidhi)")]
    UnknownEdition(String),

    #[error("Unknown language: {0} (expected one of eng, urd, ara)")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edition_codes_are_unique() {
        let mut codes: Vec<&str> = Edition::ALL.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_edition_from_str() {
        assert_eq!("abudawud".parse::<Edition>(), Ok(Edition::AbuDawud));
        assert_eq!("Ibn Majah".parse::<Edition>(), Ok(Edition::IbnMajah));
        assert_eq!(" TIRMIDHI ".parse::<Edition>(), Ok(Edition::Tirmidhi));
        assert!("sahih".parse::<Edition>().is_err());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("eng".parse::<Language>(), Ok(Language::English));
        assert_eq!("urdu".parse::<Language>(), Ok(Language::Urdu));
        assert!("fra".parse::<Language>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Edition::default(), Edition::Bukhari);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&Edition::IbnMajah).unwrap(),
            "\"ibnmajah\""
        );
        assert_eq!(serde_json::to_string(&Language::Arabic).unwrap(), "\"ara\"");
        let lang: Language = serde_json::from_str("\"urd\"").unwrap();
        assert_eq!(lang, Language::Urdu);
    }
}
