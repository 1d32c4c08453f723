//! # S-box Strict Avalanche Criterion analysis library

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code, unused_must_use)]
#![forbid(
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates
)]

pub mod avalanche;
mod bit_plane;
mod bit_sequence;
mod disagreement;
mod sac;
mod sac_error;
mod sbox_table;

pub use crate::avalanche::{
    avalanche_shift, input_xor_shift, FlipDistance, ShiftStrategy, ShiftedFunction,
};
pub use crate::bit_plane::{BitPlane, OUTPUT_BITS};
pub use crate::bit_sequence::BitSequence;
pub use crate::disagreement::{disagreement_count, disagreement_ratio};
pub use crate::sac::{sac_report, strict_avalanche_criterion, SacAggregator, SacReport};
pub use crate::sac_error::SacError;
pub use crate::sbox_table::{SboxLayout, SboxTable, SBOX_SIZE};
