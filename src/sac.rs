use crate::{
    disagreement_ratio, BitPlane, FlipDistance, SacError, SboxTable, ShiftStrategy,
    ShiftedFunction, OUTPUT_BITS,
};
use tracing::debug;

/// Full result of a SAC evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SacReport {
    /// `matrix[p][j]`: disagreement ratio between plane `p` and its shift by [FlipDistance::ALL]`[j]`.
    pub matrix: [[f64; 8]; OUTPUT_BITS],
    /// Average of each matrix row over the 8 flip distances.
    pub plane_scores: [f64; OUTPUT_BITS],
    /// Average of the plane scores, the SAC of the S-box.
    pub score: f64,
}

/// Drives the shift and comparison of every (plane, flip distance) pair and averages the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SacAggregator {
    strategy: ShiftStrategy,
}

impl SacAggregator {
    /// Creates an aggregator deriving shifted functions with `strategy`.
    pub fn new(strategy: ShiftStrategy) -> Self {
        SacAggregator { strategy }
    }

    /// Shift strategy in use.
    pub fn strategy(&self) -> ShiftStrategy {
        self.strategy
    }

    /// Evaluates all 64 (plane, flip distance) pairs of `table`.
    ///
    /// Plane scores are summed in distance order then divided by 8, and the final score is the sum of plane scores in
    /// plane order divided by 8, so the result is reproducible bit for bit.
    pub fn report(&self, table: &SboxTable) -> Result<SacReport, SacError> {
        let planes = BitPlane::extract_all(table);
        let mut matrix = [[0f64; 8]; OUTPUT_BITS];
        let mut plane_scores = [0f64; OUTPUT_BITS];
        let mut total = 0f64;

        for (plane, (row, plane_score)) in planes
            .iter()
            .zip(matrix.iter_mut().zip(plane_scores.iter_mut()))
        {
            let mut sum = 0f64;
            for (distance, cell) in FlipDistance::ALL.iter().zip(row.iter_mut()) {
                let shifted = ShiftedFunction::new(plane, *distance, self.strategy)?;
                *cell = disagreement_ratio(plane.function(), shifted.function())?;
                sum += *cell;
            }
            *plane_score = sum / FlipDistance::ALL.len() as f64;
            debug!(
                output_bit = plane.output_bit(),
                score = *plane_score,
                "bit plane evaluated"
            );
            total += *plane_score;
        }

        let score = total / OUTPUT_BITS as f64;
        debug!(score, strategy = ?self.strategy, "SAC evaluated");
        Ok(SacReport {
            matrix,
            plane_scores,
            score,
        })
    }

    /// Same as [report](Self::report), returning only the final score.
    pub fn score(&self, table: &SboxTable) -> Result<f64, SacError> {
        Ok(self.report(table)?.score)
    }
}

/// Computes the Strict Avalanche Criterion of an S-box, with the default chunk-swap strategy.
///
/// # Returns
/// A score in $[0, 1]$, close to 0.5 for an S-box with good avalanche behaviour.
///
/// # Example
/// ```rust
/// use sbox_sac::{strict_avalanche_criterion, SboxTable};
///
/// let constant = SboxTable::from_bytes(&[0x3c; 256]).unwrap();
/// assert_eq!(strict_avalanche_criterion(&constant).unwrap(), 0.0);
/// ```
pub fn strict_avalanche_criterion(table: &SboxTable) -> Result<f64, SacError> {
    SacAggregator::default().score(table)
}

/// Computes the full SAC report of an S-box for the given strategy.
pub fn sac_report(table: &SboxTable, strategy: ShiftStrategy) -> Result<SacReport, SacError> {
    SacAggregator::new(strategy).report(table)
}

#[cfg(test)]
mod tests {
    use crate::{
        sac_report, strict_avalanche_criterion, SacAggregator, SboxTable, ShiftStrategy,
    };
    use rand::seq::SliceRandom;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rayon::prelude::*;

    const AES_SBOX: [u8; 256] = [
        0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab,
        0x76, 0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4,
        0x72, 0xc0, 0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71,
        0xd8, 0x31, 0x15, 0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2,
        0xeb, 0x27, 0xb2, 0x75, 0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6,
        0xb3, 0x29, 0xe3, 0x2f, 0x84, 0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb,
        0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf, 0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45,
        0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8, 0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5,
        0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2, 0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44,
        0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73, 0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a,
        0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb, 0xe0, 0x32, 0x3a, 0x0a, 0x49,
        0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79, 0xe7, 0xc8, 0x37, 0x6d,
        0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08, 0xba, 0x78, 0x25,
        0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a, 0x70, 0x3e,
        0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e, 0xe1,
        0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
        0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb,
        0x16,
    ];

    fn random_table(seed: u64) -> SboxTable {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut values = [0u8; 256];
        rng.fill_bytes(&mut values);
        SboxTable::from_bytes(&values).unwrap()
    }

    #[test]
    fn test_identity_sbox() {
        // each plane only depends on one input bit: one distance gives full disagreement, the 7 others none
        let report = sac_report(&SboxTable::identity(), ShiftStrategy::ChunkSwap).unwrap();
        assert_eq!(report.score, 0.125);
        for (p, row) in report.matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                assert_eq!(cell, if j == 7 - p { 1.0 } else { 0.0 });
            }
            assert_eq!(report.plane_scores[p], 0.125);
        }
        assert_eq!(strict_avalanche_criterion(&SboxTable::identity()).unwrap(), 0.125);
    }

    #[test]
    fn test_constant_sbox() {
        for k in [0x00u8, 0xff, 0x5a, 0x81] {
            let table = SboxTable::from_bytes(&[k; 256]).unwrap();
            let report = sac_report(&table, ShiftStrategy::ChunkSwap).unwrap();
            assert_eq!(report.score, 0.0);
            assert!(report.matrix.iter().flatten().all(|&cell| cell == 0.0));
        }
    }

    #[test]
    fn test_aes_sbox() {
        let table = SboxTable::from_bytes(&AES_SBOX).unwrap();
        let report = sac_report(&table, ShiftStrategy::ChunkSwap).unwrap();
        assert!(report.score > 0.45 && report.score < 0.55);
        assert!(report.plane_scores.iter().all(|&s| s > 0.4 && s < 0.6));
    }

    #[test]
    fn test_strategies_agree() {
        let tables = [
            SboxTable::identity(),
            SboxTable::from_bytes(&AES_SBOX).unwrap(),
            random_table(7),
        ];
        for table in tables {
            let chunk_swap = sac_report(&table, ShiftStrategy::ChunkSwap).unwrap();
            let input_xor = sac_report(&table, ShiftStrategy::InputXor).unwrap();
            assert_eq!(chunk_swap, input_xor);
        }
    }

    #[test]
    fn test_score_in_unit_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for seed in 0..32 {
            let score = strict_avalanche_criterion(&random_table(seed)).unwrap();
            assert!((0.0..=1.0).contains(&score));

            let mut permutation = (0..=255u8).collect::<Vec<u8>>();
            permutation.shuffle(&mut rng);
            let table = SboxTable::from_bytes(&permutation).unwrap();
            let score = strict_avalanche_criterion(&table).unwrap();
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_report_consistency() {
        let table = random_table(99);
        let aggregator = SacAggregator::default();
        assert_eq!(aggregator.strategy(), ShiftStrategy::ChunkSwap);
        let report = aggregator.report(&table).unwrap();
        assert_eq!(aggregator.score(&table).unwrap(), report.score);
        for (row, &plane_score) in report.matrix.iter().zip(report.plane_scores.iter()) {
            assert_eq!(row.iter().sum::<f64>() / 8.0, plane_score);
        }
        assert_eq!(report.plane_scores.iter().sum::<f64>() / 8.0, report.score);
    }

    #[test]
    fn test_deterministic() {
        let tables = (0..16).map(random_table).collect::<Vec<SboxTable>>();
        let sequential = tables
            .iter()
            .map(|t| strict_avalanche_criterion(t).unwrap().to_bits())
            .collect::<Vec<u64>>();
        let parallel = tables
            .par_iter()
            .map(|t| strict_avalanche_criterion(t).unwrap().to_bits())
            .collect::<Vec<u64>>();
        assert_eq!(sequential, parallel);
        assert_eq!(
            strict_avalanche_criterion(&tables[0]).unwrap().to_bits(),
            sequential[0]
        );
    }
}
