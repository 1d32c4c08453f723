use crate::{BitSequence, SboxTable};

/// Number of output bits of an 8-bit S-box, ie the number of bit planes.
pub const OUTPUT_BITS: usize = 8;

/// One output bit of an S-box, seen as a Boolean function of the 8 input bits.
///
/// Position $i$ of the plane holds bit `output_bit` of `table[i]`, bits being numbered from the most significant (0)
/// to the least significant (7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPlane {
    output_bit: usize,
    function: BitSequence,
}

impl BitPlane {
    /// Extracts a single plane.
    ///
    /// # Panics
    /// If `output_bit` is greater than 7.
    pub fn extract(table: &SboxTable, output_bit: usize) -> Self {
        assert!(output_bit < OUTPUT_BITS, "Output bit must be < {}", OUTPUT_BITS);
        let shift = OUTPUT_BITS - 1 - output_bit;
        BitPlane {
            output_bit,
            function: BitSequence::from_bits(
                table.as_bytes().iter().map(|&output| (output >> shift) & 1 == 1),
            ),
        }
    }

    /// Extracts the 8 planes of the table, most significant output bit first.
    ///
    /// # Example
    /// ```rust
    /// use sbox_sac::{BitPlane, SboxTable};
    ///
    /// let planes = BitPlane::extract_all(&SboxTable::identity());
    /// assert_eq!(planes[7].function().get(1), Some(true));
    /// assert_eq!(planes[0].function().get(1), Some(false));
    /// assert_eq!(planes[0].function().get(128), Some(true));
    /// ```
    pub fn extract_all(table: &SboxTable) -> [BitPlane; OUTPUT_BITS] {
        std::array::from_fn(|output_bit| Self::extract(table, output_bit))
    }

    /// Output bit position this plane was taken from, 0 being the most significant.
    #[inline]
    pub fn output_bit(&self) -> usize {
        self.output_bit
    }

    /// Values of the plane for each input.
    #[inline]
    pub fn function(&self) -> &BitSequence {
        &self.function
    }
}

impl SboxTable {
    /// Shortcut for [BitPlane::extract_all].
    pub fn bit_planes(&self) -> [BitPlane; OUTPUT_BITS] {
        BitPlane::extract_all(self)
    }
}
