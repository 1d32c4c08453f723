use crate::SacError;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// Immutable fixed-length sequence of bits.
///
/// Position $i$ of the sequence is stored in bit $i$ of a [BigUint], the same way a Boolean function truth table stores
/// $f(i)$ in its $i$-th bit. The explicit length keeps leading zero positions, which the integer alone would lose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    len: usize,
    bits: BigUint,
}

impl BitSequence {
    /// Builds a sequence from successive bit values, position 0 first.
    ///
    /// # Example
    /// ```rust
    /// use sbox_sac::BitSequence;
    ///
    /// let sequence = BitSequence::from_bits([false, true, true, false]);
    /// assert_eq!(sequence.to_string(), "0110");
    /// ```
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut truth_table = BigUint::zero();
        let mut len = 0usize;
        for (position, bit) in bits.into_iter().enumerate() {
            if bit {
                truth_table.set_bit(position as u64, true);
            }
            len = position + 1;
        }
        BitSequence {
            len,
            bits: truth_table,
        }
    }

    /// Sequence of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        BitSequence {
            len,
            bits: BigUint::zero(),
        }
    }

    /// Number of positions in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the sequence holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at `position`, or `None` past the end of the sequence.
    #[inline]
    pub fn get(&self, position: usize) -> Option<bool> {
        if position >= self.len {
            return None;
        }
        Some(self.bits.bit(position as u64))
    }

    /// Number of positions holding 1.
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Iterator over the values of the sequence, position 0 first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |position| self.bits.bit(position as u64))
    }

    /// Backing integer, bit $i$ holding position $i$.
    pub fn as_biguint(&self) -> &BigUint {
        &self.bits
    }

    /// Position-wise XOR of two sequences of equal length.
    ///
    /// Returns [SacError::LengthMismatch] if the lengths differ.
    pub fn xor(&self, other: &BitSequence) -> Result<BitSequence, SacError> {
        if self.len != other.len {
            return Err(SacError::LengthMismatch {
                left: self.len,
                right: other.len,
            });
        }
        Ok(BitSequence {
            len: self.len,
            bits: &self.bits ^ &other.bits,
        })
    }
}

/// Parses a string of '0' and '1' characters, first character being position 0.
impl FromStr for BitSequence {
    type Err = SacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(SacError::InvalidBitCharacter {
                    position,
                    character,
                }),
            })
            .collect::<Result<Vec<bool>, SacError>>()?;
        Ok(Self::from_bits(bits))
    }
}

/// Renders the sequence as '0'/'1' characters, position 0 first.
impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
