//! Azure CAF naming rules: a registry of per-resource-type specs and the
//! pure functions that assemble and validate names against them.

pub mod engine;
pub mod error;
pub mod registry;
pub mod sanitize;

pub use engine::{GeneratedName, NameEngine, NameRequest, generate_name, validate_name};
pub use error::NamingError;
pub use registry::{Registry, RegistryEntry};
