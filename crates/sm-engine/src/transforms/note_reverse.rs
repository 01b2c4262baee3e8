//! Note reverse: sounding notes play in reverse order, rests stay put.

use alloc::vec;
use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Pitch, UpdateMode};

use crate::config::EngineConfig;
use crate::transform::{tag_stages, Transform, TransformInfo, Transformed};

static INFO: TransformInfo = TransformInfo {
    name: "Note Reverse",
    short_name: "NRev",
    mode: UpdateMode::NoteReverse,
};

pub struct NoteReverse;

impl Transform for NoteReverse {
    fn info(&self) -> &TransformInfo { &INFO }

    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error> {
        Ok(Transformed {
            pitches: reverse_notes(pitches, config),
            envelope: tag_stages(envelope.iter().copied(), config.row_tag),
        })
    }
}

/// The k-th sounding value moves to the k-th sounding slot counted from
/// the end. Every other slot is a rest.
fn reverse_notes(pitches: &[Pitch], config: &EngineConfig) -> Vec<Pitch> {
    let rest = config.rest_value;
    let slots: Vec<usize> = pitches
        .iter()
        .enumerate()
        .filter(|(_, &p)| !rest.is_rest(p))
        .map(|(i, _)| i)
        .collect();

    let mut out = vec![rest.value(); pitches.len()];
    for (&from, &to) in slots.iter().zip(slots.iter().rev()) {
        out[to] = pitches[from];
    }
    out
}
