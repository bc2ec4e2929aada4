// =============================================================================
// Error Types
// =============================================================================
//
// One error enum for the whole library. Everything that can go wrong does so
// at model-construction time; evaluation calls on an already-built model are
// infallible.
//
// =============================================================================

use thiserror::Error;

/// Errors that can occur when building or evaluating a halo model.
#[derive(Error, Debug)]
pub enum HaloError {
    /// The configured dark matter halo family is not one of the supported set.
    #[error("the dark matter model set isn't supported! It is set to {0}")]
    UnknownModel(String),

    /// The configured geometry makes no physical sense
    /// (e.g. inner radius >= outer radius).
    #[error("unphysical halo configuration: {0}")]
    Unphysical(String),

    /// The adaptive quadrature did not converge within its subdivision limit.
    #[error("numerical integration failed: {0}")]
    IntegrationFailed(String),

    /// A scale parameter or distance is outside its valid domain.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Array arguments could not be broadcast against each other.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Configuration file could not be loaded or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, HaloError>;
