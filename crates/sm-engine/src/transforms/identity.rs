//! Identity transform: pitches and envelope pass through unchanged.

use sm_ir::{EnvelopeStage, Error, Pitch, UpdateMode};

use crate::config::EngineConfig;
use crate::transform::{tag_stages, Transform, TransformInfo, Transformed};

static INFO: TransformInfo = TransformInfo {
    name: "Identity",
    short_name: "Id",
    mode: UpdateMode::Identity,
};

pub struct Identity;

impl Transform for Identity {
    fn info(&self) -> &TransformInfo { &INFO }

    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error> {
        Ok(Transformed {
            pitches: pitches.to_vec(),
            envelope: tag_stages(envelope.iter().copied(), config.row_tag),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sm_ir::TaggedStage;
    use EnvelopeStage::*;

    #[test]
    fn leaves_everything_unchanged() {
        let config = EngineConfig { row_tag: 5, ..Default::default() };
        let out = Identity.apply(&[60, -1, 64], &[Attack, Release], &config).unwrap();
        assert_eq!(out.pitches, vec![60, -1, 64]);
        assert_eq!(
            out.envelope,
            vec![TaggedStage::new(0, 5, Attack), TaggedStage::new(1, 5, Release)]
        );
    }

    #[test]
    fn empty_pitches_allowed() {
        let out = Identity.apply(&[], &[Full], &EngineConfig::default()).unwrap();
        assert!(out.pitches.is_empty());
        assert_eq!(out.envelope.len(), 1);
    }
}
