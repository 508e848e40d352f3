//! Error types for the splitting core.
//!
//! Validation failures are detected before any computation, so a returned
//! error never comes with a partially built buffer. Randomness failures
//! abort the split immediately; whether to retry is the caller's policy,
//! never this crate's.

use thiserror::Error;

/// Errors from split and merge operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Stripe count below the minimum of 1
    #[error("invalid stripe count {stripes}: at least 1 stripe is required")]
    InvalidStripeCount {
        /// The rejected stripe count
        stripes: usize,
    },

    /// Split buffer does not hold a whole number of stripes
    #[error("unaligned split buffer: {len} bytes is not divisible into {stripes} stripes")]
    UnalignedBuffer {
        /// Length of the rejected buffer
        len: usize,
        /// Stripe count the buffer was checked against
        stripes: usize,
    },

    /// Requested split is larger than the address space
    #[error("splitting {len} bytes into {stripes} stripes overflows the buffer length")]
    SplitTooLarge {
        /// Secret length that was requested
        len: usize,
        /// Stripe count that was requested
        stripes: usize,
    },

    /// The caller-supplied random source failed to produce bytes
    #[error("random source failed: {reason}")]
    RandomSource {
        /// Failure reported by the generator
        reason: String,
    },
}

impl SplitError {
    /// Returns true if this error is transient and may succeed on retry.
    ///
    /// Only entropy acquisition can be transient. Argument validation
    /// failures indicate a caller bug and will never succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RandomSource { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_source_is_transient() {
        let err = SplitError::RandomSource { reason: "entropy pool exhausted".to_string() };
        assert!(err.is_transient());
    }

    #[test]
    fn validation_errors_are_not_transient() {
        assert!(!SplitError::InvalidStripeCount { stripes: 0 }.is_transient());
        assert!(!SplitError::UnalignedBuffer { len: 7, stripes: 2 }.is_transient());
        assert!(!SplitError::SplitTooLarge { len: 2, stripes: usize::MAX }.is_transient());
    }

    #[test]
    fn display_names_the_offending_values() {
        let err = SplitError::UnalignedBuffer { len: 125, stripes: 4 };
        let message = err.to_string();
        assert!(message.contains("125"));
        assert!(message.contains("4"));
    }
}
