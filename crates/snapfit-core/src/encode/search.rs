//! Quality search toward a byte-size budget.
//!
//! Encodes at a starting quality, then scales quality by
//! `target / size * DAMPING` until the output fits, quality hits the floor,
//! or the attempt budget runs out. Lossless formats get a single attempt.
//!
//! Missing the target is not an error. The last encode is returned as a
//! best effort and [`SearchOutcome::converged`] reports whether it fits.

use tracing::{debug, info};

use super::{EncodeError, QualityEncoder};
use crate::decode::SourceImage;
use crate::format::ImageFormat;
use crate::payload::encoded_size_kb;

/// Quality of the first attempt.
pub const INITIAL_QUALITY: f64 = 0.9;
/// Quality floor; an attempt at or below it always ends the search.
pub const MIN_QUALITY: f64 = 0.1;
/// Hard ceiling on encode calls per search.
pub const MAX_ITERATIONS: u32 = 10;
/// Multiplier applied on top of the proportional correction.
pub const DAMPING: f64 = 0.9;

/// Result of a target-size search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Bytes of the final attempt.
    pub bytes: Vec<u8>,
    /// Quality used for the final attempt.
    pub quality: f64,
    /// Number of encode calls made (1..=MAX_ITERATIONS).
    pub attempts: u32,
    /// Derived size of `bytes` in kilobytes.
    pub size_kb: f64,
    /// Whether `size_kb <= target_kb`.
    pub converged: bool,
}

/// Search for the largest encoding that fits within `target_kb`.
///
/// Callers must not assume the result fits: check
/// [`SearchOutcome::converged`] if it matters.
///
/// # Errors
///
/// Only errors from the encoder itself are returned.
pub fn search_to_target<E: QualityEncoder + ?Sized>(
    encoder: &E,
    image: &SourceImage,
    width: u32,
    height: u32,
    format: ImageFormat,
    target_kb: f64,
) -> Result<SearchOutcome, EncodeError> {
    let mut quality = INITIAL_QUALITY;
    let mut attempts = 0;

    loop {
        let bytes = encoder.encode(image, width, height, format, quality)?;
        attempts += 1;

        let size_kb = encoded_size_kb(bytes.len());
        let converged = size_kb <= target_kb;
        debug!(attempt = attempts, quality, size_kb, target_kb, "target size attempt");

        if converged
            || !format.is_lossy()
            || quality <= MIN_QUALITY
            || attempts >= MAX_ITERATIONS
        {
            if !converged {
                info!(
                    attempts,
                    quality, size_kb, target_kb, "target size not reached, keeping last attempt"
                );
            }
            return Ok(SearchOutcome {
                bytes,
                quality,
                attempts,
                size_kb,
                converged,
            });
        }

        let ratio = target_kb / size_kb;
        quality = (quality * ratio * DAMPING).max(MIN_QUALITY);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
