//! Error types for variants-core

/// Result type for variants-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while ingesting configuration or building an engine.
///
/// Resolution itself never fails; unknown values and inert rules are
/// tolerated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An axis has no values, so it has no "first declared value" to fall back to
    #[error("Variant axis '{axis}' declares no values")]
    EmptyAxis { axis: String },

    /// Configuration text could not be parsed
    #[error("Failed to parse {format} config: {message}")]
    ConfigParse { format: String, message: String },

    /// Configuration format could not be determined
    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    /// A class-merge resolver could not be built
    #[error(transparent)]
    Class(#[from] variants_class::Error),
}
