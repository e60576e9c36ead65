//! Record extraction errors.

/// Errors raised while configuring record extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Sentinel prefix must not be empty")]
    EmptySentinel,
}
