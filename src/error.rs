//! Error types for the kbandit library.

use thiserror::Error;

/// Result type alias for construction operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Malformed construction input.
///
/// Every variant is raised before any statistics exist, so a failed
/// construction never leaves a partially built state behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A bandit needs at least one arm.
    #[error("no arms: arm count must be at least 1")]
    NoArms,

    /// Explicit means did not match the arm count.
    #[error("means length mismatch: expected {expected}, got {got}")]
    MeansLengthMismatch { expected: usize, got: usize },

    /// The means mode string was neither "random" nor "sequence".
    #[error("unknown means mode: {mode:?} (expected \"random\" or \"sequence\")")]
    UnknownMeansMode { mode: String },

    /// An experiment was configured without any policy to compare.
    #[error("no policies: an experiment needs at least one labelled policy")]
    NoPolicies,

    /// Builder configuration error.
    #[error("builder error: {message}")]
    BuilderError { message: String },
}
