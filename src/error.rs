//! Error types for stipple operations.

use thiserror::Error;

/// Errors reported when an operation is given parameters it cannot work with.
///
/// Every check happens before any sampling or simplification work starts, so
/// an error never comes with partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StippleError {
    /// A construction or input parameter is out of its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the parameter was required to satisfy.
        reason: &'static str,
    },
}

impl StippleError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        log::debug!("rejecting parameter `{name}`: {reason}");
        Self::InvalidParameter { name, reason }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StippleError>;
