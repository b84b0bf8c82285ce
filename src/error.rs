use thiserror::Error;

/// Errors reported by console operations.
///
/// Malformed input never produces an error; it degrades into `NaN` tokens,
/// unsubstituted specifiers or warning lines. Only broken state transitions
/// and failing output streams are surfaced.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The operation is not valid in the current state (e.g. `group_end`
    /// with no open group).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Writing to the output stream failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be converted into its structured form.
    #[error("value encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = ConsoleError> = core::result::Result<T, E>;
