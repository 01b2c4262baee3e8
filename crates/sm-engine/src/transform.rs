//! Transform trait and its output.

use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Output, Outputs, Pitch, RowTag, TaggedStage, UpdateMode};

use crate::config::EngineConfig;

/// Static metadata about a transform.
pub struct TransformInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    pub mode: UpdateMode,
}

/// A step-sequence transform selected by an `UpdateMode`.
///
/// Implementations are stateless: everything they read arrives through
/// the arguments, and the result is built fresh on every call.
pub trait Transform: Send + Sync {
    fn info(&self) -> &TransformInfo;

    /// Transform `pitches` against a non-empty `envelope`.
    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error>;
}

/// The pair produced by one transform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transformed {
    /// Same length as the input pitch sequence
    pub pitches: Vec<Pitch>,
    /// One entry per stored envelope step, ascending index
    pub envelope: Vec<TaggedStage>,
}

impl Transformed {
    /// Outlet emissions in send order: envelope first (only when
    /// non-empty), then pitches.
    pub fn outputs(self) -> Outputs {
        let mut outputs = Outputs::new();
        if !self.envelope.is_empty() {
            outputs.push(Output::Envelope(self.envelope));
        }
        outputs.push(Output::Pitches(self.pitches));
        outputs
    }

    /// The bare stages of the envelope output, in index order.
    pub fn stages(&self) -> Vec<EnvelopeStage> {
        self.envelope.iter().map(|e| e.stage).collect()
    }
}

/// Tag stages with ascending indices on `row`.
pub(crate) fn tag_stages<I>(stages: I, row: RowTag) -> Vec<TaggedStage>
where
    I: IntoIterator<Item = EnvelopeStage>,
{
    stages
        .into_iter()
        .enumerate()
        .map(|(index, stage)| TaggedStage::new(index, row, stage))
        .collect()
}
