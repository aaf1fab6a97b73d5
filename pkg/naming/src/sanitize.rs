//! Token sanitizers applied to raw user input before assembly.

use pkg_constants::naming::INSTANCE_WIDTH;

/// Lowercase `raw` and drop everything outside `[a-z0-9]`.
pub fn strict_clean(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Lowercase `raw`, delete spaces, and drop everything outside `[a-z0-9-]`.
///
/// Not used by [`crate::generate_name`], which cleans every token strictly.
pub fn clean_with_hyphens(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Zero-pad an all-digit instance token to [`INSTANCE_WIDTH`]. Longer digit
/// strings and non-numeric tokens pass through unchanged.
pub fn normalize_instance(raw: &str) -> String {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        format!("{:0>width$}", raw, width = INSTANCE_WIDTH)
    } else {
        raw.to_string()
    }
}
