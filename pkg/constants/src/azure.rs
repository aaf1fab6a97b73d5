//! Azure-specific hint lists shown by the front end.

/// Azure region short names offered as examples when a region is required.
pub const REGIONS: &[&str] = &[
    // Americas
    "eastus",
    "eastus2",
    "westus",
    "westus2",
    "westus3",
    "centralus",
    "northcentralus",
    "southcentralus",
    "westcentralus",
    "canadacentral",
    "canadaeast",
    "brazilsouth",
    // Europe
    "northeurope",
    "westeurope",
    "uksouth",
    "ukwest",
    "francecentral",
    "germanywestcentral",
    "norwayeast",
    "swedencentral",
    "switzerlandnorth",
    // Asia Pacific
    "australiaeast",
    "australiasoutheast",
    "australiacentral",
    "eastasia",
    "southeastasia",
    "japaneast",
    "japanwest",
    "koreacentral",
    "centralindia",
    "southindia",
    "westindia",
    // Middle East / Africa
    "uaenorth",
    "southafricanorth",
];

/// Common environment tokens.
pub const ENVIRONMENTS: &[&str] = &["dev", "test", "stg", "prod", "uat", "qa", "sandbox"];
