use crate::error::{ModelError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static IMDB_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^tt[0-9]{7,8}$").expect("imdb id regex should compile")
});

/// Strongly typed IMDb title identifier (`tt` followed by 7 or 8 digits)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ImdbId(String);

impl ImdbId {
    /// Validate and wrap an identifier. Surrounding whitespace is ignored.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if IMDB_ID_PATTERN.is_match(trimmed) {
            Ok(ImdbId(trimmed.to_string()))
        } else {
            Err(ModelError::InvalidImdbId(raw.as_ref().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Page path of the film on the tracker, e.g. `/films/tt0133093`
    pub fn film_path(&self) -> String {
        format!("/films/{}", self.0)
    }

    /// Path of the film's feedback entry resource
    pub fn entry_path(&self) -> String {
        format!("/films/{}/entry", self.0)
    }
}

impl std::fmt::Display for ImdbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImdbId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        ImdbId::new(s)
    }
}

impl TryFrom<String> for ImdbId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        ImdbId::new(value)
    }
}

impl From<ImdbId> for String {
    fn from(id: ImdbId) -> Self {
        id.0
    }
}

impl AsRef<str> for ImdbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
