use crate::{BitSequence, SacError, SBOX_SIZE};

/// Number of positions where `original` and `shifted` differ, ie the Hamming weight of their XOR.
///
/// Returns [SacError::LengthMismatch] if the sequences don't have the same length.
pub fn disagreement_count(original: &BitSequence, shifted: &BitSequence) -> Result<u64, SacError> {
    Ok(original.xor(shifted)?.count_ones())
}

/// [disagreement_count] divided by the S-box size (256).
///
/// The divisor is always 256, whatever the sequence length.
///
/// # Example
/// ```rust
/// use sbox_sac::{disagreement_ratio, BitSequence};
///
/// let original: BitSequence = "01".repeat(128).parse().unwrap();
/// let shifted: BitSequence = "10".repeat(128).parse().unwrap();
/// assert_eq!(disagreement_ratio(&original, &shifted).unwrap(), 1.0);
/// ```
pub fn disagreement_ratio(original: &BitSequence, shifted: &BitSequence) -> Result<f64, SacError> {
    Ok(disagreement_count(original, shifted)? as f64 / SBOX_SIZE as f64)
}
