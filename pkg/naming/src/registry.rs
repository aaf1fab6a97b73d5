use pkg_types::resource::ResourceTypeSpec;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::error::NamingError;

/// A spec together with its compiled, fully anchored pattern.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    spec: ResourceTypeSpec,
    matcher: Regex,
}

impl RegistryEntry {
    fn compile(spec: ResourceTypeSpec) -> Result<Self, NamingError> {
        if spec.min_length() > spec.max_length() {
            return Err(NamingError::InvalidBounds {
                key: spec.key().to_string(),
                min: spec.min_length(),
                max: spec.max_length(),
            });
        }
        // Wrapped so the whole name must match even if the pattern is unanchored.
        let matcher = Regex::new(&format!("^(?:{})$", spec.pattern())).map_err(|source| {
            NamingError::InvalidPattern {
                key: spec.key().to_string(),
                source,
            }
        })?;
        Ok(Self { spec, matcher })
    }

    pub fn spec(&self) -> &ResourceTypeSpec {
        &self.spec
    }

    /// Full-string match against the spec's pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }
}

/// Read-only set of resource-type specs, keyed by identifier.
///
/// Iteration follows insertion order so front ends can number a menu from it.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new(specs: Vec<ResourceTypeSpec>) -> Result<Self, NamingError> {
        let mut entries = Vec::with_capacity(specs.len());
        let mut index = HashMap::with_capacity(specs.len());
        for spec in specs {
            let key = spec.key().to_string();
            if index.contains_key(&key) {
                return Err(NamingError::DuplicateKey(key));
            }
            entries.push(RegistryEntry::compile(spec)?);
            index.insert(key, entries.len() - 1);
        }
        debug!("Built naming registry with {} resource types", entries.len());
        Ok(Self { entries, index })
    }

    /// The built-in Azure Cloud Adoption Framework rule set.
    pub fn azure_caf() -> Result<Self, NamingError> {
        Self::new(azure_caf_specs())
    }

    /// Merge `specs` over this registry: matching keys are replaced in place,
    /// new keys are appended.
    pub fn with_overrides(self, specs: Vec<ResourceTypeSpec>) -> Result<Self, NamingError> {
        if specs.is_empty() {
            return Ok(self);
        }
        let mut merged: Vec<ResourceTypeSpec> =
            self.entries.into_iter().map(|e| e.spec).collect();
        for spec in specs {
            match merged.iter_mut().find(|s| s.key() == spec.key()) {
                Some(slot) => {
                    debug!("Overriding resource type {}", spec.key());
                    *slot = spec;
                }
                None => merged.push(spec),
            }
        }
        Self::new(merged)
    }

    pub fn get(&self, key: &str) -> Result<&RegistryEntry, NamingError> {
        self.index
            .get(key)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| NamingError::UnknownResourceType(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.spec.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- Built-in Azure CAF rules ---

fn azure_caf_specs() -> Vec<ResourceTypeSpec> {
    vec![
        ResourceTypeSpec::new(
            "storage_account",
            "Storage Account",
            "st",
            3,
            24,
            r"^[a-z0-9]{3,24}$",
            "Global",
        )
        .requires_region(false)
        .lowercase_only()
        .no_hyphens(),
        ResourceTypeSpec::new(
            "blob_container",
            "Blob Container",
            "",
            3,
            63,
            r"^[a-z0-9][a-z0-9-]{1,61}[a-z0-9]$",
            "Storage Account",
        )
        .requires_region(false)
        .lowercase_only(),
        ResourceTypeSpec::new(
            "vpn_gateway",
            "VPN Gateway",
            "vpng",
            1,
            80,
            r"^[a-zA-Z0-9][a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_]$",
            "Resource Group",
        ),
        ResourceTypeSpec::new(
            "vpn_connection",
            "VPN Connection",
            "vcn",
            1,
            80,
            r"^[a-zA-Z0-9][a-zA-Z0-9_.-]{0,78}[a-zA-Z0-9_]$",
            "VPN Gateway",
        ),
        ResourceTypeSpec::new(
            "sql_server",
            "SQL Server",
            "sql",
            1,
            63,
            r"^[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$",
            "Global",
        )
        .lowercase_only(),
        ResourceTypeSpec::new(
            "sql_database",
            "SQL Database",
            "sqldb",
            1,
            128,
            r"^[^<>*%&:\\/?]{1,128}$",
            "SQL Server",
        )
        .requires_region(false),
        ResourceTypeSpec::new(
            "resource_group",
            "Resource Group",
            "rg",
            1,
            90,
            r"^[a-zA-Z0-9._-]+$",
            "Subscription",
        ),
        ResourceTypeSpec::new(
            "virtual_network",
            "Virtual Network",
            "vnet",
            2,
            64,
            r"^[a-zA-Z0-9][a-zA-Z0-9_.-]{0,62}[a-zA-Z0-9_]$",
            "Resource Group",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_spec(key: &str, prefix: &str) -> ResourceTypeSpec {
        ResourceTypeSpec::new(key, key, prefix, 1, 20, r"[a-z0-9-]+", "Resource Group")
    }

    #[test]
    fn test_builtin_registry() {
        let registry = Registry::azure_caf().unwrap();
        assert_eq!(registry.len(), 8);
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(
            keys,
            vec![
                "storage_account",
                "blob_container",
                "vpn_gateway",
                "vpn_connection",
                "sql_server",
                "sql_database",
                "resource_group",
                "virtual_network",
            ]
        );
    }

    #[test]
    fn test_builtin_storage_account() {
        let registry = Registry::azure_caf().unwrap();
        let spec = registry.get("storage_account").unwrap().spec();
        assert_eq!(spec.prefix(), "st");
        assert_eq!(spec.min_length(), 3);
        assert_eq!(spec.max_length(), 24);
        assert!(!spec.is_regional());
        assert!(spec.is_lowercase_only());
        assert!(spec.is_hyphenless());
        assert!(spec.is_globally_unique());
    }

    #[test]
    fn test_unknown_key() {
        let registry = Registry::azure_caf().unwrap();
        assert!(!registry.contains("nonexistent_type"));
        assert!(matches!(
            registry.get("nonexistent_type"),
            Err(NamingError::UnknownResourceType(k)) if k == "nonexistent_type"
        ));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Registry::new(vec![make_spec("a", "x"), make_spec("a", "y")]);
        assert!(matches!(result, Err(NamingError::DuplicateKey(k)) if k == "a"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let spec = ResourceTypeSpec::new("a", "A", "x", 10, 5, "[a-z]+", "Global");
        assert!(matches!(
            Registry::new(vec![spec]),
            Err(NamingError::InvalidBounds { min: 10, max: 5, .. })
        ));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let spec = ResourceTypeSpec::new("a", "A", "x", 1, 5, "[a-z", "Global");
        assert!(matches!(
            Registry::new(vec![spec]),
            Err(NamingError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_unanchored_pattern_matches_whole_name() {
        let registry = Registry::new(vec![make_spec("a", "x")]).unwrap();
        let entry = registry.get("a").unwrap();
        assert!(entry.matches("abc-123"));
        assert!(!entry.matches("abc_123"));
        assert!(!entry.matches("ABC"));
    }

    #[test]
    fn test_overrides_replace_in_place_and_append() {
        let registry = Registry::azure_caf()
            .unwrap()
            .with_overrides(vec![
                make_spec("resource_group", "grp"),
                make_spec("key_vault", "kv"),
            ])
            .unwrap();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.keys().nth(6), Some("resource_group"));
        assert_eq!(registry.get("resource_group").unwrap().spec().prefix(), "grp");
        assert_eq!(registry.keys().last(), Some("key_vault"));
    }

    #[test]
    fn test_registries_are_independent() {
        let custom = Registry::new(vec![make_spec("only", "o")]).unwrap();
        let builtin = Registry::azure_caf().unwrap();
        assert!(custom.get("storage_account").is_err());
        assert!(builtin.get("only").is_err());
    }
}
