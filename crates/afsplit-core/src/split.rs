//! Anti-forensic stripe expansion and recovery.
//!
//! [`split()`] inflates an L-byte secret into `stripes × L` bytes such
//! that every stripe is required to get the secret back. All stripes but
//! the last are pure randomness; the last XOR-closes a diffusion chain
//! threaded through every earlier stripe. Destroying any part of any
//! stripe therefore breaks the chain and with it the secret, which is what
//! makes overwriting a small slice of a stored key slot an effective
//! secure erase.
//!
//! [`merge()`] rebuilds the same chain from the stored stripes and XORs
//! the final stripe out. There is no verification step: merge always
//! yields L bytes, and those bytes equal the secret only when every stripe
//! is intact.

use sha2::digest::{Digest, FixedOutputReset};
use zeroize::Zeroize;

use crate::{diffuse::diffuse, error::SplitError, random::RandomSource};

/// XOR `src` into `dst`. Both slices must have the same length.
fn xor_into(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Split `secret` into `stripes` equal-length stripes.
///
/// Returns a buffer of `stripes × secret.len()` bytes: stripes
/// `0..stripes-1` filled from `random`, and the final stripe set to
/// `acc XOR secret` where `acc` is the diffusion accumulator chained over
/// the random stripes. A stripe count of 1 degenerates to a plain copy and
/// consumes no randomness.
///
/// The accumulator is zeroized on every exit path. On a randomness
/// failure the partially written buffer is zeroized before being dropped.
///
/// # Errors
///
/// - [`SplitError::InvalidStripeCount`]: `stripes` is zero
/// - [`SplitError::SplitTooLarge`]: `stripes × secret.len()` overflows
/// - [`SplitError::RandomSource`]: the generator could not supply bytes
pub fn split<H, R>(secret: &[u8], stripes: usize, random: &mut R) -> Result<Vec<u8>, SplitError>
where
    H: Digest + FixedOutputReset,
    R: RandomSource + ?Sized,
{
    if stripes < 1 {
        return Err(SplitError::InvalidStripeCount { stripes });
    }

    let len = secret.len();
    if len == 0 {
        // Empty secret splits to an empty buffer at any stripe count.
        return Ok(Vec::new());
    }

    let Some(total) = stripes.checked_mul(len) else {
        return Err(SplitError::SplitTooLarge { len, stripes });
    };

    let mut buffer = vec![0u8; total];
    let mut acc = vec![0u8; len];

    for i in 0..stripes - 1 {
        let stripe = &mut buffer[i * len..(i + 1) * len];
        if let Err(err) = random.fill(stripe) {
            buffer.zeroize();
            acc.zeroize();
            return Err(err);
        }
        xor_into(&mut acc, stripe);
        diffuse::<H>(&mut acc);
    }

    let last = &mut buffer[(stripes - 1) * len..];
    last.copy_from_slice(secret);
    xor_into(last, &acc);

    acc.zeroize();
    Ok(buffer)
}

/// Recover the secret from a buffer produced by [`split()`].
///
/// `buffer` must hold exactly `stripes` contiguous stripes; its length
/// determines the secret length. The output equals the original secret
/// only if every stripe is unmodified.
///
/// # Errors
///
/// - [`SplitError::InvalidStripeCount`]: `stripes` is zero
/// - [`SplitError::UnalignedBuffer`]: `buffer.len()` is not divisible by
///   `stripes`
pub fn merge<H>(buffer: &[u8], stripes: usize) -> Result<Vec<u8>, SplitError>
where
    H: Digest + FixedOutputReset,
{
    if stripes < 1 {
        return Err(SplitError::InvalidStripeCount { stripes });
    }
    if buffer.len() % stripes != 0 {
        return Err(SplitError::UnalignedBuffer { len: buffer.len(), stripes });
    }

    let len = buffer.len() / stripes;
    if len == 0 {
        return Ok(Vec::new());
    }

    let mut acc = vec![0u8; len];

    for i in 0..stripes - 1 {
        xor_into(&mut acc, &buffer[i * len..(i + 1) * len]);
        diffuse::<H>(&mut acc);
    }

    let mut secret = buffer[(stripes - 1) * len..].to_vec();
    xor_into(&mut secret, &acc);

    acc.zeroize();
    Ok(secret)
}
