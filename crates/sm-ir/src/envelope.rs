//! Envelope stages and their tagged outlet form.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

use crate::error::Error;

/// Identifies the output row that envelope entries belong to.
pub type RowTag = i32;

/// The amplitude-envelope phase active at a step.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumCount, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeStage {
    #[default]
    Full,
    Attack,
    Sustain,
    Release,
}

impl EnvelopeStage {
    /// Decode a stage from its wire code (0-3).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Full),
            1 => Some(Self::Attack),
            2 => Some(Self::Sustain),
            3 => Some(Self::Release),
            _ => None,
        }
    }

    /// The wire code for this stage.
    pub const fn code(self) -> i32 {
        match self {
            Self::Full => 0,
            Self::Attack => 1,
            Self::Sustain => 2,
            Self::Release => 3,
        }
    }

    /// The stage as heard with time running backwards.
    ///
    /// Attack and release swap roles; full and sustain are unchanged.
    /// Applying this twice yields the original stage.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Full => Self::Full,
            Self::Attack => Self::Release,
            Self::Sustain => Self::Sustain,
            Self::Release => Self::Attack,
        }
    }
}

/// Decode a list of wire codes into stages.
///
/// Fails on the first unknown code, reporting its position.
pub fn decode_stages(codes: &[i32]) -> Result<Vec<EnvelopeStage>, Error> {
    codes
        .iter()
        .enumerate()
        .map(|(index, &code)| {
            EnvelopeStage::from_code(code).ok_or(Error::InvalidStage { index, code })
        })
        .collect()
}

/// One emitted envelope entry: position, row and stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaggedStage {
    /// Step position within the sequence
    pub index: usize,
    /// Output row the entry is routed to
    pub row: RowTag,
    /// Envelope phase at this step
    pub stage: EnvelopeStage,
}

impl TaggedStage {
    pub const fn new(index: usize, row: RowTag, stage: EnvelopeStage) -> Self {
        Self { index, row, stage }
    }

    /// Flat `[index, row, code]` triple as sent over the outlet.
    ///
    /// Indices beyond `i32::MAX` saturate.
    pub fn to_triple(self) -> [i32; 3] {
        let index = i32::try_from(self.index).unwrap_or(i32::MAX);
        [index, self.row, self.stage.code()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip() {
        for stage in EnvelopeStage::iter() {
            assert_eq!(EnvelopeStage::from_code(stage.code()), Some(stage));
        }
        assert_eq!(EnvelopeStage::from_code(4), None);
        assert_eq!(EnvelopeStage::from_code(-1), None);
    }

    #[test]
    fn inverse_swaps_attack_and_release() {
        assert_eq!(EnvelopeStage::Attack.inverse(), EnvelopeStage::Release);
        assert_eq!(EnvelopeStage::Release.inverse(), EnvelopeStage::Attack);
        assert_eq!(EnvelopeStage::Full.inverse(), EnvelopeStage::Full);
        assert_eq!(EnvelopeStage::Sustain.inverse(), EnvelopeStage::Sustain);
    }

    #[test]
    fn inverse_is_self_inverse() {
        for stage in EnvelopeStage::iter() {
            assert_eq!(stage.inverse().inverse(), stage);
        }
    }

    #[test]
    fn decode_reports_bad_position() {
        assert_eq!(
            decode_stages(&[0, 1, 7, 2]),
            Err(Error::InvalidStage { index: 2, code: 7 })
        );
        assert_eq!(
            decode_stages(&[1, 2, 3]).unwrap(),
            alloc::vec![EnvelopeStage::Attack, EnvelopeStage::Sustain, EnvelopeStage::Release]
        );
    }

    #[test]
    fn tagged_triple() {
        let t = TaggedStage::new(3, 7, EnvelopeStage::Release);
        assert_eq!(t.to_triple(), [3, 7, 3]);
    }

    #[test]
    fn oversized_index_saturates() {
        let t = TaggedStage::new(usize::MAX, 0, EnvelopeStage::Full);
        assert_eq!(t.to_triple(), [i32::MAX, 0, 0]);
    }
}
