use serde::{Deserialize, Serialize};

/// Naming rules for one resource type.
///
/// Immutable once built: the flag setters consume `self` and re-derive the
/// display template, so a finished spec never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResourceTypeSpecFile")]
pub struct ResourceTypeSpec {
    key: String,
    name: String,
    prefix: String,
    min_length: usize,
    max_length: usize,
    pattern: String,
    scope: String,
    requires_region: bool,
    lowercase_only: bool,
    no_hyphens: bool,
    pattern_template: String,
}

impl ResourceTypeSpec {
    /// Create a spec that requires a region, allows uppercase and joins
    /// tokens with hyphens. Use the setters below to change the flags.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        prefix: impl Into<String>,
        min_length: usize,
        max_length: usize,
        pattern: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        let mut spec = Self {
            key: key.into(),
            name: name.into(),
            prefix: prefix.into(),
            min_length,
            max_length,
            pattern: pattern.into(),
            scope: scope.into(),
            requires_region: true,
            lowercase_only: false,
            no_hyphens: false,
            pattern_template: String::new(),
        };
        spec.pattern_template = spec.derive_template();
        spec
    }

    pub fn requires_region(mut self, requires_region: bool) -> Self {
        self.requires_region = requires_region;
        self.pattern_template = self.derive_template();
        self
    }

    pub fn lowercase_only(mut self) -> Self {
        self.lowercase_only = true;
        self
    }

    pub fn no_hyphens(mut self) -> Self {
        self.no_hyphens = true;
        self.pattern_template = self.derive_template();
        self
    }

    fn derive_template(&self) -> String {
        let prefix = &self.prefix;
        if self.requires_region {
            format!("{prefix}-<workload>-<env>-<region>-<instance>")
        } else if self.no_hyphens {
            format!("{prefix}<workload><env><instance>")
        } else {
            format!("{prefix}-<workload>-<env>-<instance>")
        }
    }

    /// Registry identifier, e.g. `storage_account`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable name, e.g. `Storage Account`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Pattern source the whole name must match.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Uniqueness domain label. Descriptive only.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn is_regional(&self) -> bool {
        self.requires_region
    }

    pub fn is_lowercase_only(&self) -> bool {
        self.lowercase_only
    }

    pub fn is_hyphenless(&self) -> bool {
        self.no_hyphens
    }

    /// Token order for display, e.g. `rg-<workload>-<env>-<region>-<instance>`.
    pub fn pattern_template(&self) -> &str {
        &self.pattern_template
    }

    /// True when the name must be unique across all of Azure.
    pub fn is_globally_unique(&self) -> bool {
        self.scope == "Global"
    }
}

/// On-disk form of [`ResourceTypeSpec`] (YAML).
///
/// Example entry:
/// ```yaml
/// key: key_vault
/// name: Key Vault
/// prefix: kv
/// min-length: 3
/// max-length: 24
/// pattern: '^[a-zA-Z][a-zA-Z0-9-]{1,22}[a-zA-Z0-9]$'
/// scope: Global
/// requires-region: true
/// ```
#[derive(Debug, Clone, Deserialize)]
struct ResourceTypeSpecFile {
    key: String,
    name: String,
    #[serde(default)]
    prefix: String,
    #[serde(alias = "min-length")]
    min_length: usize,
    #[serde(alias = "max-length")]
    max_length: usize,
    pattern: String,
    scope: String,
    #[serde(default = "default_requires_region", alias = "requires-region")]
    requires_region: bool,
    #[serde(default, alias = "lowercase-only")]
    lowercase_only: bool,
    #[serde(default, alias = "no-hyphens")]
    no_hyphens: bool,
}

fn default_requires_region() -> bool {
    true
}

impl From<ResourceTypeSpecFile> for ResourceTypeSpec {
    fn from(file: ResourceTypeSpecFile) -> Self {
        let mut spec = ResourceTypeSpec::new(
            file.key,
            file.name,
            file.prefix,
            file.min_length,
            file.max_length,
            file.pattern,
            file.scope,
        )
        .requires_region(file.requires_region);
        if file.lowercase_only {
            spec = spec.lowercase_only();
        }
        if file.no_hyphens {
            spec = spec.no_hyphens();
        }
        spec
    }
}
