//! Anti-Forensic Information Splitting
//!
//! Reversible stripe expansion for secrets that must be destroyable by
//! partial overwrite. Pure functions with deterministic outputs; callers
//! provide random bytes, which keeps the core testable and free of any
//! generator policy.
//!
//! # Transform
//!
//! Splitting inflates an L-byte secret into S stripes of L bytes each.
//! Stripes `0..S-1` are pure randomness; a diffusion accumulator is
//! chained through them and the final stripe XOR-closes the chain against
//! the secret:
//!
//! ```text
//! Secret (L bytes)
//!        │
//!        ▼
//! Random stripes 0..S-1 ──► acc = diffuse(acc ⊕ stripe_i)   (chained)
//!        │
//!        ▼
//! Stripe S-1 = acc ⊕ secret
//!        │
//!        ▼
//! Split buffer (S × L bytes) ──► storage
//! ```
//!
//! Merging replays the identical chain from the stored stripes and XORs
//! the last stripe out, recovering the secret exactly when every stripe
//! is intact.
//!
//! # Security
//!
//! Anti-forensics:
//! - Every stripe is required: stripes `0..S-1` alone are independent
//!   randomness and carry no information about the secret
//! - Hash-in-counter-mode diffusion gives avalanche: one destroyed byte
//!   in any early stripe garbles roughly half the recovered bytes
//! - Overwriting any small slice of the stored buffer is therefore an
//!   effective secure erase of the whole secret
//!
//! Hygiene:
//! - Diffusion accumulators are zeroized on every exit path
//! - A failed entropy read aborts the split and zeroizes the partial
//!   buffer before it is dropped
//! - The hash is an explicit type parameter, never hidden global state
//!
//! What this crate does not do: derive keys from passphrases, encrypt
//! stripes, or define any on-disk layout. Key-slot management decides
//! stripe counts and storage; this crate only transforms bytes in memory.
//!
//! # Example
//!
//! ```
//! use afsplit_core::{merge_sha256, split_sha256};
//! use rand::rngs::OsRng;
//!
//! let key = [0x2Au8; 16];
//!
//! // Inflate the key into 4 stripes for storage.
//! let stored = split_sha256(&key, 4, &mut OsRng)?;
//! assert_eq!(stored.len(), 4 * key.len());
//!
//! // All 64 bytes intact: recovery is exact.
//! let recovered = merge_sha256(&stored, 4)?;
//! assert_eq!(recovered, key);
//! # Ok::<(), afsplit_core::SplitError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod diffuse;
pub mod error;
pub mod random;
pub mod split;

pub use diffuse::diffuse;
pub use error::SplitError;
pub use random::RandomSource;
pub use split::{merge, split};

use sha2::Sha256;

/// [`split()`] with the default SHA-256 diffusion hash.
///
/// # Errors
///
/// Same as [`split()`].
pub fn split_sha256<R: RandomSource + ?Sized>(
    secret: &[u8],
    stripes: usize,
    random: &mut R,
) -> Result<Vec<u8>, SplitError> {
    split::<Sha256, R>(secret, stripes, random)
}

/// [`merge()`] with the default SHA-256 diffusion hash.
///
/// # Errors
///
/// Same as [`merge()`].
pub fn merge_sha256(buffer: &[u8], stripes: usize) -> Result<Vec<u8>, SplitError> {
    merge::<Sha256>(buffer, stripes)
}
