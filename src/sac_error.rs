use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an S-box or evaluating its avalanche behaviour.
#[derive(Error, Debug)]
pub enum SacError {
    /// The S-box file could not be read.
    #[error("Unable to read S-box file {}: {source}", .path.display())]
    Io {
        /// Path of the file that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Not enough table entries once the file layout has been applied.
    #[error("S-box table has {found} usable entries, expected {expected}")]
    TooFewEntries {
        /// Number of entries available.
        found: usize,
        /// Number of entries required.
        expected: usize,
    },
    /// The raw file is shorter than its layout requires.
    #[error("S-box file has {found} bytes, expected at least {expected}")]
    TooFewBytes {
        /// Number of bytes in the file.
        found: usize,
        /// Minimum number of bytes for the layout.
        expected: usize,
    },
    /// A table value does not fit in a byte.
    #[error("S-box value {value} at index {index} is outside the 0..=255 range")]
    ValueOutOfRange {
        /// Index of the offending entry.
        index: usize,
        /// Offending value.
        value: u32,
    },
    /// The file layout stride must be at least 1.
    #[error("S-box file layout stride must be >= 1")]
    InvalidLayout,
    /// Two bit sequences being compared don't have the same length.
    #[error("Bit sequence length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the original function.
        left: usize,
        /// Length of the shifted function.
        right: usize,
    },
    /// Chunk size 0 can't split a bit sequence.
    #[error("Chunk size must be >= 1")]
    ZeroChunkSize,
    /// Flip distance is not one of 1, 2, 4, ..., 128.
    #[error("Invalid flip distance {0}, must be a power of 2 <= 128")]
    InvalidFlipDistance(u32),
    /// A character other than '0' or '1' in a bit string.
    #[error("Invalid bit character {character:?} at position {position}")]
    InvalidBitCharacter {
        /// Position of the character in the string.
        position: usize,
        /// The character itself.
        character: char,
    },
    /// `input XOR distance` falls outside the sequence.
    #[error("Cannot flip input by {distance} on a sequence of length {len}")]
    InputXorOutOfRange {
        /// Sequence length.
        len: usize,
        /// Flip distance.
        distance: usize,
    },
}
