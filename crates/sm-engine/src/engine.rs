//! The transform engine: one sequence store plus transform dispatch.

use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Pitch, UpdateMode};

use crate::config::EngineConfig;
use crate::store::SequenceStore;
use crate::transform::Transformed;

/// A single engine instance.
///
/// Owns all state that the transforms consult. Each `transform` call reads
/// a snapshot of that state and does not remember previous pitch inputs.
#[derive(Clone, Debug, Default)]
pub struct TransformEngine {
    store: SequenceStore,
}

impl TransformEngine {
    /// Create an engine with no envelope and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        Ok(Self { store: SequenceStore::with_config(config)? })
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SequenceStore {
        &mut self.store
    }

    pub fn config(&self) -> &EngineConfig {
        self.store.config()
    }

    // --- Configuration ---

    pub fn set_envelope(&mut self, stages: Vec<EnvelopeStage>) {
        self.store.set_envelope(stages);
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.store.set_mode(mode);
    }

    pub fn set_modulo_base(&mut self, base: i32) -> Result<(), Error> {
        self.store.set_modulo_base(base)
    }

    // --- Transform ---

    /// Transform `pitches` under the current mode.
    pub fn transform(&self, pitches: &[Pitch]) -> Result<Transformed, Error> {
        self.store.snapshot().transform(pitches)
    }
}
