//! Name assembly constants.

/// Instance token used when the caller supplies none.
pub const DEFAULT_INSTANCE: &str = "001";

/// Width all-digit instance tokens are zero-padded to.
pub const INSTANCE_WIDTH: usize = 3;

/// Token separator for resource types that allow hyphens.
pub const SEPARATOR: &str = "-";
