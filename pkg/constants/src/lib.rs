//! Centralized constants for the cafname project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod azure;
pub mod naming;
pub mod paths;
