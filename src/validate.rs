use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::AppParams;

static APP_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[@a-zA-Z0-9_]+(-?[@_a-zA-Z0-9/]+)*$").expect("valid app key regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingParameter(String),
    #[error("{name} is not a valid key (got `{value}`)")]
    InvalidKeyFormat { name: String, value: String },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingParameter(_) => "missing-parameter",
            ValidationError::InvalidKeyFormat { .. } => "invalid-key-format",
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Registry key of an application. Letters, digits, `_` and `@`, optionally
/// continued by segments that may start with `-` and may contain `/`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AppKey(String);

impl AppKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AppKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_key(value: &str) -> bool {
    APP_KEY_RE.is_match(value)
}

pub fn require_non_empty<'a>(name: &str, value: Option<&'a str>) -> ValidationResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingParameter(name.to_string())),
    }
}

pub fn require_valid_key(name: &str, value: Option<&str>) -> ValidationResult<AppKey> {
    let value = require_non_empty(name, value)?;
    if !is_valid_key(value) {
        return Err(ValidationError::InvalidKeyFormat {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(AppKey(value.to_string()))
}

/// Parameters that survived [`require_add_parameters`].
#[derive(Debug, Clone)]
pub struct ValidatedApp<'a> {
    pub key: AppKey,
    pub title: &'a str,
    pub filename: &'a str,
}

pub fn require_add_parameters(params: &AppParams) -> ValidationResult<ValidatedApp<'_>> {
    let key = require_valid_key("APP_KEY", params.key.as_deref())?;
    let title = require_non_empty("APP_TITLE", params.title.as_deref())?;
    let filename = require_non_empty("APP_FILENAME", params.filename.as_deref())?;
    Ok(ValidatedApp {
        key,
        title,
        filename,
    })
}
