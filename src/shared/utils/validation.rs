use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::AppError;

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));

// Simplified RFC 5322: something@something.something with no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub struct Validator;

impl Validator {
    /// Trim a required text field, rejecting it when nothing is left.
    pub fn required_text(field: &str, value: &str) -> Result<String, AppError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} is required",
                capitalize(field)
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Trim every entry of a required list; the list and each entry must be non-empty.
    pub fn required_list(field: &str, values: &[String]) -> Result<Vec<String>, AppError> {
        if values.is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} must contain at least one item",
                capitalize(field)
            )));
        }

        values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(AppError::ValidationError(format!(
                        "{} item {} cannot be empty",
                        capitalize(field),
                        idx + 1
                    )))
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect()
    }

    pub fn is_valid_slug(slug: &str) -> bool {
        SLUG_RE.is_match(slug)
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
