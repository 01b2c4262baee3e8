//! True reverse: the whole sequence runs backwards in time.

use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Pitch, RowTag, TaggedStage, UpdateMode};

use crate::config::EngineConfig;
use crate::transform::{tag_stages, Transform, TransformInfo, Transformed};

static INFO: TransformInfo = TransformInfo {
    name: "True Reverse",
    short_name: "TRev",
    mode: UpdateMode::TrueReverse,
};

pub struct TrueReverse;

impl Transform for TrueReverse {
    fn info(&self) -> &TransformInfo { &INFO }

    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error> {
        Ok(Transformed {
            pitches: reverse_pitches(pitches),
            envelope: reverse_envelope(envelope, config.row_tag),
        })
    }
}

/// Rests included: position i takes the value at `len - 1 - i`.
pub(crate) fn reverse_pitches(pitches: &[Pitch]) -> Vec<Pitch> {
    pitches.iter().rev().copied().collect()
}

/// Reverse the stages and swap attack with release.
pub(crate) fn reverse_envelope(stages: &[EnvelopeStage], row: RowTag) -> Vec<TaggedStage> {
    tag_stages(stages.iter().rev().map(|s| s.inverse()), row)
}
