//! Randomness capability consumed by [`split`](crate::split()).
//!
//! The core never seeds, selects, or manages a generator. Callers hand in
//! whatever CSPRNG their environment provides; tests hand in deterministic
//! fillers. Failure to produce entropy is reported to the caller, never
//! retried here.

use rand_core::{CryptoRng, RngCore};

use crate::error::SplitError;

/// Capability that yields cryptographically secure random bytes on demand.
///
/// Implementations must be honest about entropy failure: returning
/// predictable bytes instead of an error would silently void the
/// anti-forensic guarantee of the random stripes.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// [`SplitError::RandomSource`] when the generator cannot supply the
    /// requested bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SplitError>;
}

/// Every cryptographically secure `rand` generator is a valid source.
///
/// `OsRng` and seeded `StdRng` instances plug in directly. The `CryptoRng`
/// marker bound keeps plain PRNGs out at compile time.
impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), SplitError> {
        self.try_fill_bytes(dest)
            .map_err(|err| SplitError::RandomSource { reason: err.to_string() })
    }
}
