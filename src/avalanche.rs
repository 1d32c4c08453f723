//! Avalanche-shifted functions: the value of a bit plane once a single input bit is flipped.

use crate::{BitPlane, BitSequence, SacError};
use itertools::Itertools;
use std::fmt;

/// Positional weight of a single flipped input bit: one of 1, 2, 4, ..., 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlipDistance(u32);

impl FlipDistance {
    /// The 8 flip distances of an 8-bit input, from input bit 0 to input bit 7.
    pub const ALL: [FlipDistance; 8] = [
        FlipDistance(1),
        FlipDistance(2),
        FlipDistance(4),
        FlipDistance(8),
        FlipDistance(16),
        FlipDistance(32),
        FlipDistance(64),
        FlipDistance(128),
    ];

    /// Creates a flip distance, which must be a power of 2 lower or equal to 128.
    pub fn new(distance: u32) -> Result<Self, SacError> {
        if distance.count_ones() != 1 || distance > 128 {
            return Err(SacError::InvalidFlipDistance(distance));
        }
        Ok(FlipDistance(distance))
    }

    /// Flipped input bit, 0 being the least significant.
    #[inline]
    pub fn input_bit(&self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Distance as a chunk size over the sequence positions.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FlipDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the avalanche-shifted function is derived from a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftStrategy {
    /// Swap each pair of adjacent chunks, see [avalanche_shift].
    #[default]
    ChunkSwap,
    /// Evaluate the function at `input XOR distance`, see [input_xor_shift].
    InputXor,
}

/// Splits `function` into consecutive chunks of `chunk_size` positions and emits every pair of chunks in swapped order:
/// chunk 1, chunk 0, chunk 3, chunk 2, ...
///
/// The last chunk may be shorter than `chunk_size`. When the chunk count is odd, the trailing unpaired chunk is dropped,
/// so the result is shorter than the input.
///
/// # Returns
/// The shifted sequence, or [SacError::ZeroChunkSize] if `chunk_size` is 0.
///
/// # Example
/// ```rust
/// use sbox_sac::{avalanche_shift, BitSequence};
///
/// let function: BitSequence = "01101001".parse().unwrap();
/// assert_eq!(avalanche_shift(&function, 2).unwrap().to_string(), "10010110");
/// ```
pub fn avalanche_shift(function: &BitSequence, chunk_size: usize) -> Result<BitSequence, SacError> {
    if chunk_size == 0 {
        return Err(SacError::ZeroChunkSize);
    }
    let grouped = function.iter().chunks(chunk_size);
    let chunks = (&grouped)
        .into_iter()
        .map(|chunk| chunk.collect::<Vec<bool>>())
        .collect::<Vec<Vec<bool>>>();
    Ok(BitSequence::from_bits(
        chunks
            .into_iter()
            .tuples()
            .flat_map(|(first, second)| second.into_iter().chain(first)),
    ))
}

/// Computes $x \longmapsto f(x \oplus d)$ over the positions of `function`.
///
/// # Returns
/// The shifted sequence, or [SacError::InputXorOutOfRange] if some `position XOR distance` falls past the end of the
/// sequence, ie the length is not a multiple of `2 * distance`.
pub fn input_xor_shift(function: &BitSequence, distance: usize) -> Result<BitSequence, SacError> {
    let len = function.len();
    if distance == 0 || len % (distance << 1) != 0 {
        return Err(SacError::InputXorOutOfRange { len, distance });
    }
    Ok(BitSequence::from_bits(
        (0..len).map(|x| function.get(x ^ distance).unwrap_or_default()),
    ))
}

/// A bit plane evaluated with one input bit flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftedFunction {
    distance: FlipDistance,
    strategy: ShiftStrategy,
    function: BitSequence,
}

impl ShiftedFunction {
    /// Derives the shifted version of `plane` for `distance`, using `strategy`.
    pub fn new(
        plane: &BitPlane,
        distance: FlipDistance,
        strategy: ShiftStrategy,
    ) -> Result<Self, SacError> {
        let function = match strategy {
            ShiftStrategy::ChunkSwap => avalanche_shift(plane.function(), distance.chunk_size())?,
            ShiftStrategy::InputXor => input_xor_shift(plane.function(), distance.chunk_size())?,
        };
        Ok(ShiftedFunction {
            distance,
            strategy,
            function,
        })
    }

    /// Flip distance used.
    pub fn distance(&self) -> FlipDistance {
        self.distance
    }

    /// Strategy used.
    pub fn strategy(&self) -> ShiftStrategy {
        self.strategy
    }

    /// Values of the shifted function.
    pub fn function(&self) -> &BitSequence {
        &self.function
    }
}
