use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a candidate name was rejected. Checks run in declaration order and
/// the first failing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationFailure {
    TooShort { length: usize, min: usize },
    TooLong { length: usize, max: usize },
    InvalidFormat,
    NotLowercase,
}

impl ValidationFailure {
    /// Short machine-friendly tag for the failure.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ValidationFailure::TooShort { .. } => "too short",
            ValidationFailure::TooLong { .. } => "too long",
            ValidationFailure::InvalidFormat => "invalid characters or format",
            ValidationFailure::NotLowercase => "must be lowercase only",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::TooShort { length, min } => write!(
                f,
                "Name too short. Minimum {} characters, got {}.",
                min, length
            ),
            ValidationFailure::TooLong { length, max } => write!(
                f,
                "Name too long. Maximum {} characters, got {}.",
                max, length
            ),
            ValidationFailure::InvalidFormat => {
                write!(f, "Name contains invalid characters or format.")
            }
            ValidationFailure::NotLowercase => write!(f, "Name must be lowercase only."),
        }
    }
}

/// Validation result as handed to a front end: a flag plus a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Result<(), ValidationFailure>> for ValidationOutcome {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => ValidationOutcome {
                valid: true,
                reason: None,
            },
            Err(failure) => ValidationOutcome {
                valid: false,
                reason: Some(failure.to_string()),
            },
        }
    }
}

/// Validate a resource-type key as used in config files and on the CLI.
/// Rules: `[a-z0-9_]`, max 63 chars, must start with a letter.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        bail!("resource type key must not be empty");
    }
    if key.len() > 63 {
        bail!(
            "resource type key '{}' exceeds 63 characters (got {})",
            key,
            key.len()
        );
    }
    if !key.starts_with(|c: char| c.is_ascii_lowercase()) {
        bail!("resource type key '{}' must start with a lowercase letter", key);
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        bail!(
            "resource type key '{}' must contain only lowercase letters, digits, and underscores [a-z0-9_]",
            key
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(validate_key("storage_account").is_ok());
        assert!(validate_key("vnet").is_ok());
        assert!(validate_key("app2").is_ok());
        assert!(validate_key("a").is_ok());
    }

    #[test]
    fn invalid_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("Storage_Account").is_err());
        assert!(validate_key("storage-account").is_err());
        assert!(validate_key("_leading").is_err());
        assert!(validate_key("9lives").is_err());
        assert!(validate_key("special!char").is_err());
        assert!(validate_key(&"a".repeat(64)).is_err());
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            ValidationFailure::TooShort { length: 2, min: 3 }.to_string(),
            "Name too short. Minimum 3 characters, got 2."
        );
        assert_eq!(
            ValidationFailure::TooLong { length: 25, max: 24 }.to_string(),
            "Name too long. Maximum 24 characters, got 25."
        );
        assert_eq!(
            ValidationFailure::InvalidFormat.to_string(),
            "Name contains invalid characters or format."
        );
        assert_eq!(
            ValidationFailure::NotLowercase.to_string(),
            "Name must be lowercase only."
        );
    }

    #[test]
    fn reason_codes() {
        assert_eq!(
            ValidationFailure::TooShort { length: 0, min: 1 }.reason_code(),
            "too short"
        );
        assert_eq!(
            ValidationFailure::TooLong { length: 9, max: 8 }.reason_code(),
            "too long"
        );
        assert_eq!(
            ValidationFailure::InvalidFormat.reason_code(),
            "invalid characters or format"
        );
        assert_eq!(
            ValidationFailure::NotLowercase.reason_code(),
            "must be lowercase only"
        );
    }

    #[test]
    fn outcome_from_result() {
        let ok = ValidationOutcome::from(Ok(()));
        assert!(ok.valid);
        assert!(ok.reason.is_none());

        let failed = ValidationOutcome::from(Err(ValidationFailure::NotLowercase));
        assert!(!failed.valid);
        assert_eq!(failed.reason.as_deref(), Some("Name must be lowercase only."));
    }
}
