use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamingError {
    #[error("unknown resource type '{0}'")]
    UnknownResourceType(String),

    #[error("resource type '{0}' is defined more than once")]
    DuplicateKey(String),

    #[error("resource type '{key}' has min length {min} greater than max length {max}")]
    InvalidBounds { key: String, min: usize, max: usize },

    #[error("resource type '{key}' has an invalid pattern: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}
