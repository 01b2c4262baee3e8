//! Reverse inverse: true reverse applied to the output of inverse.

use sm_ir::{EnvelopeStage, Error, Pitch, UpdateMode};

use super::inverse::Inverse;
use super::true_reverse::{reverse_envelope, reverse_pitches};
use crate::config::EngineConfig;
use crate::transform::{Transform, TransformInfo, Transformed};

static INFO: TransformInfo = TransformInfo {
    name: "Reverse Inverse",
    short_name: "RInv",
    mode: UpdateMode::ReverseInverse,
};

pub struct ReverseInverse;

impl Transform for ReverseInverse {
    fn info(&self) -> &TransformInfo { &INFO }

    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error> {
        let inverted = Inverse.apply(pitches, envelope, config)?;
        Ok(Transformed {
            pitches: reverse_pitches(&inverted.pitches),
            envelope: reverse_envelope(&inverted.stages(), config.row_tag),
        })
    }
}
