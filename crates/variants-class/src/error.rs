//! Error types for variants-class

/// Result type for variants-class operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building class-merge resolvers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern for conflict group '{group}': {source}")]
    InvalidPattern {
        group: String,
        #[source]
        source: regex::Error,
    },

    #[error("Conflict group '{group}' overrides unknown group '{target}'")]
    UnknownOverride { group: String, target: String },
}
