use pkg_constants::naming::SEPARATOR;
use pkg_types::validate::{ValidationFailure, ValidationOutcome};
use serde::Serialize;
use tracing::debug;

use crate::error::NamingError;
use crate::registry::{Registry, RegistryEntry};
use crate::sanitize::{normalize_instance, strict_clean};

/// Raw, unsanitized tokens for one name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRequest<'a> {
    pub workload: &'a str,
    pub environment: &'a str,
    /// Ignored unless the resource type requires a region.
    pub region: &'a str,
    pub instance: &'a str,
}

/// Assemble a name for `key` from raw tokens.
///
/// Workload, environment and region are cleaned to `[a-z0-9]`; the instance
/// is zero-padded if numeric. Hyphenless types concatenate the tokens,
/// others join the non-empty tokens with `-`.
pub fn generate_name(
    registry: &Registry,
    key: &str,
    request: &NameRequest<'_>,
) -> Result<String, NamingError> {
    let spec = registry.get(key)?.spec();

    let workload = strict_clean(request.workload);
    let environment = strict_clean(request.environment);
    let region = if spec.is_regional() {
        strict_clean(request.region)
    } else {
        String::new()
    };
    let instance = normalize_instance(request.instance);

    let mut tokens: Vec<&str> = vec![spec.prefix(), workload.as_str(), environment.as_str()];
    if spec.is_regional() {
        tokens.push(&region);
    }
    tokens.push(&instance);

    let name = if spec.is_hyphenless() {
        tokens.concat()
    } else {
        tokens
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    };

    debug!("Generated {} name {}", key, name);
    Ok(name)
}

/// Check `name` exactly as given against an entry's rules. The first failing
/// check wins: length bounds, then pattern, then casing.
pub fn validate_name(entry: &RegistryEntry, name: &str) -> Result<(), ValidationFailure> {
    let spec = entry.spec();
    let length = name.chars().count();

    let result = if length < spec.min_length() {
        Err(ValidationFailure::TooShort {
            length,
            min: spec.min_length(),
        })
    } else if length > spec.max_length() {
        Err(ValidationFailure::TooLong {
            length,
            max: spec.max_length(),
        })
    } else if !entry.matches(name) {
        Err(ValidationFailure::InvalidFormat)
    } else if spec.is_lowercase_only() && name.chars().any(char::is_uppercase) {
        Err(ValidationFailure::NotLowercase)
    } else {
        Ok(())
    };

    if let Err(failure) = &result {
        debug!("{} name {:?} rejected: {}", spec.key(), name, failure.reason_code());
    }
    result
}

/// A generated name with its validation result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
    pub resource_type: String,
    pub name: String,
    pub length: usize,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

/// Front-end facing handle over a registry.
#[derive(Debug, Clone, Copy)]
pub struct NameEngine<'a> {
    registry: &'a Registry,
}

impl<'a> NameEngine<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn generate(&self, key: &str, request: &NameRequest<'_>) -> Result<String, NamingError> {
        generate_name(self.registry, key, request)
    }

    /// Validate a name for `key`. An unknown key is an error; a rule violation
    /// is reported in the inner result.
    pub fn validate(
        &self,
        key: &str,
        name: &str,
    ) -> Result<Result<(), ValidationFailure>, NamingError> {
        Ok(validate_name(self.registry.get(key)?, name))
    }

    pub fn generate_and_validate(
        &self,
        key: &str,
        request: &NameRequest<'_>,
    ) -> Result<GeneratedName, NamingError> {
        let name = self.generate(key, request)?;
        let outcome = self.validate(key, &name)?.into();
        Ok(GeneratedName {
            resource_type: key.to_string(),
            length: name.chars().count(),
            name,
            outcome,
        })
    }
}
