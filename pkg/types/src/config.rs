use serde::{Deserialize, Serialize};

use crate::resource::ResourceTypeSpec;
use crate::validate::validate_key;

/// CLI configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// environment: dev
/// region: westeurope
/// instance: "001"
/// resource-types:
///   - key: key_vault
///     name: Key Vault
///     prefix: kv
///     min-length: 3
///     max-length: 24
///     pattern: '^[a-zA-Z][a-zA-Z0-9-]{1,22}[a-zA-Z0-9]$'
///     scope: Global
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamerConfigFile {
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
    /// Extra or replacement resource types, merged over the built-in set.
    #[serde(default, alias = "resource-types")]
    pub resource_types: Vec<ResourceTypeSpec>,
}

impl NamerConfigFile {
    /// Reject resource-type entries whose keys could not be typed on the CLI.
    pub fn check(&self) -> anyhow::Result<()> {
        for spec in &self.resource_types {
            validate_key(spec.key())?;
        }
        Ok(())
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_default() {
        let cfg: NamerConfigFile = load_config_file("/nonexistent/cafname/config.yaml").unwrap();
        assert!(cfg.environment.is_none());
        assert!(cfg.resource_types.is_empty());
    }

    #[test]
    fn test_load_defaults_and_types() {
        let file = write_config(
            r#"
environment: prod
region: westeurope
instance: "007"
resource-types:
  - key: key_vault
    name: Key Vault
    prefix: kv
    min-length: 3
    max-length: 24
    pattern: '^[a-zA-Z][a-zA-Z0-9-]{1,22}[a-zA-Z0-9]$'
    scope: Global
"#,
        );
        let cfg: NamerConfigFile = load_config_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.environment.as_deref(), Some("prod"));
        assert_eq!(cfg.region.as_deref(), Some("westeurope"));
        assert_eq!(cfg.instance.as_deref(), Some("007"));
        assert_eq!(cfg.resource_types.len(), 1);
        assert_eq!(cfg.resource_types[0].prefix(), "kv");
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let file = write_config("resource-types: [ {key: }");
        let result: anyhow::Result<NamerConfigFile> =
            load_config_file(file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_check_rejects_bad_key() {
        let cfg = NamerConfigFile {
            resource_types: vec![ResourceTypeSpec::new(
                "Key-Vault",
                "Key Vault",
                "kv",
                3,
                24,
                "^[a-z]+$",
                "Global",
            )],
            ..Default::default()
        };
        assert!(cfg.check().is_err());
    }
}
