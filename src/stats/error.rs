//! Aggregation errors.

/// Errors raised by aggregation queries.
///
/// These signal invalid arguments from the caller, never problems with the
/// record data itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Unknown record field '{0}' (expected person, division, group or department)")]
    UnknownField(String),
}
