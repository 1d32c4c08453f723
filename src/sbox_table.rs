use crate::SacError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Number of entries of an 8-bit S-box, ie the number of possible 8-bit inputs.
pub const SBOX_SIZE: usize = 256;

/// Where the S-box entries sit inside a raw file.
///
/// Entry $k$ of the table is read from raw byte $offset + k \cdot stride$, bytes in between are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SboxLayout {
    /// Distance between two consecutive entries, in bytes.
    pub stride: usize,
    /// Position of the first entry, in bytes.
    pub offset: usize,
}

impl SboxLayout {
    /// One entry every other byte, starting at byte 0 (odd-indexed bytes are padding).
    pub const INTERLEAVED: SboxLayout = SboxLayout {
        stride: 2,
        offset: 0,
    };

    /// One entry per byte.
    pub const PACKED: SboxLayout = SboxLayout {
        stride: 1,
        offset: 0,
    };

    /// Minimum raw length holding the 256 records of `stride` bytes, including the byte of the last entry.
    ///
    /// 512 bytes for [SboxLayout::INTERLEAVED], 256 bytes for [SboxLayout::PACKED].
    pub fn min_file_len(&self) -> usize {
        (self.stride * SBOX_SIZE).max(self.offset + self.stride * (SBOX_SIZE - 1) + 1)
    }

    /// Extracts the table entries from raw file bytes.
    ///
    /// Returns [SacError::TooFewBytes] if `raw` is shorter than [min_file_len](Self::min_file_len).
    pub fn entries<'a>(&self, raw: &'a [u8]) -> Result<impl Iterator<Item = u8> + 'a, SacError> {
        if self.stride == 0 {
            return Err(SacError::InvalidLayout);
        }
        if raw.len() < self.min_file_len() {
            return Err(SacError::TooFewBytes {
                found: raw.len(),
                expected: self.min_file_len(),
            });
        }
        Ok(raw.iter().skip(self.offset).step_by(self.stride).copied())
    }
}

impl Default for SboxLayout {
    fn default() -> Self {
        Self::INTERLEAVED
    }
}

/// Truth table of an 8-bit S-box: output byte for each of the 256 inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SboxTable {
    table: [u8; SBOX_SIZE],
}

impl SboxTable {
    /// Creates a table from its output values, in input order.
    ///
    /// Only the first 256 values are used.
    ///
    /// # Returns
    /// The S-box table, or [SacError::TooFewEntries] if fewer than 256 values are given.
    pub fn from_bytes(values: &[u8]) -> Result<Self, SacError> {
        if values.len() < SBOX_SIZE {
            return Err(SacError::TooFewEntries {
                found: values.len(),
                expected: SBOX_SIZE,
            });
        }
        if values.len() > SBOX_SIZE {
            warn!(
                entries = values.len(),
                "S-box has more than {} entries, trailing entries ignored", SBOX_SIZE
            );
        }
        let mut table = [0u8; SBOX_SIZE];
        table.copy_from_slice(&values[..SBOX_SIZE]);
        Ok(SboxTable { table })
    }

    /// Creates a table from wider integer values, checking each one fits in a byte.
    ///
    /// # Example
    /// ```rust
    /// use sbox_sac::SboxTable;
    ///
    /// let table = SboxTable::try_from_values((0..256).map(|x| 255 - x)).unwrap();
    /// assert_eq!(table.get(0), 255);
    /// assert!(SboxTable::try_from_values((0..256).map(|x| x + 1)).is_err());
    /// ```
    pub fn try_from_values<I: IntoIterator<Item = u32>>(values: I) -> Result<Self, SacError> {
        let bytes = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                u8::try_from(value).map_err(|_| SacError::ValueOutOfRange { index, value })
            })
            .collect::<Result<Vec<u8>, SacError>>()?;
        Self::from_bytes(&bytes)
    }

    /// Creates a table from raw file content, picking entries as described by `layout`.
    pub fn from_raw_bytes(raw: &[u8], layout: SboxLayout) -> Result<Self, SacError> {
        let entries = layout.entries(raw)?.collect::<Vec<u8>>();
        debug!(
            raw_len = raw.len(),
            entries = entries.len(),
            stride = layout.stride,
            offset = layout.offset,
            "extracted S-box entries"
        );
        Self::from_bytes(&entries)
    }

    /// Reads an S-box file.
    ///
    /// # Returns
    /// The S-box table, or an error if the file can't be read or doesn't hold 256 entries for the given layout.
    pub fn load<P: AsRef<Path>>(path: P, layout: SboxLayout) -> Result<Self, SacError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| SacError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw_bytes(&raw, layout)
    }

    /// The identity S-box, mapping each input to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; SBOX_SIZE];
        table
            .iter_mut()
            .enumerate()
            .for_each(|(input, output)| *output = input as u8);
        SboxTable { table }
    }

    /// Output of the S-box for `input`.
    #[inline]
    pub fn get(&self, input: u8) -> u8 {
        self.table[input as usize]
    }

    /// All outputs, in input order.
    pub fn as_bytes(&self) -> &[u8; SBOX_SIZE] {
        &self.table
    }
}
