//! URL identifier derived from an event title

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

// Anything that is not an ASCII word character, whitespace or a hyphen
static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug strip regex"));
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid slug separator regex"));
static HYPHEN_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("valid hyphen run regex"));

/// Lowercase, hyphen-delimited token sequence matching
/// `^[a-z0-9]+(-[a-z0-9]+)*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive the slug for a title.
    ///
    /// The title is lowercased and trimmed, every character other than word
    /// characters, whitespace and hyphens is dropped, whitespace runs become a
    /// single hyphen and hyphen runs collapse. Underscores count as separators
    /// and hyphens at either end are removed so the result always fits the
    /// slug pattern; a title with no letters or digits has no slug.
    pub fn derive(title: &str) -> AppResult<Self> {
        let lowered = title.to_lowercase();
        let stripped = DISALLOWED_RE.replace_all(lowered.trim(), "");
        let hyphenated = SEPARATOR_RE.replace_all(&stripped, "-");
        let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
        let slug = collapsed.trim_matches('-');

        if !Validator::is_valid_slug(slug) {
            return Err(AppError::ValidationError(format!(
                "Title '{}' must contain at least one letter or digit",
                title.trim()
            )));
        }

        Ok(Self(slug.to_string()))
    }

    /// Accept an already-formed slug, e.g. a path parameter.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if !Validator::is_valid_slug(trimmed) {
            return Err(AppError::ValidationError(
                "Invalid or missing slug parameter".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap a value read back from storage, where the unique column only ever
    /// receives derived slugs.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Slug::parse(&raw).map_err(serde::de::Error::custom)
    }
}
