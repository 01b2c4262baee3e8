//! Sequence store: the envelope sequence and engine configuration.

use alloc::sync::Arc;
use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Pitch, RestValue, RowTag, UpdateMode};

use crate::config::EngineConfig;
use crate::transform::Transformed;
use crate::transforms::transform_for;

/// Holds the most recent envelope sequence and the configuration.
///
/// The envelope is replaced wholesale on every set and shared with
/// snapshots, so taking a snapshot never copies the sequence.
#[derive(Clone, Debug, Default)]
pub struct SequenceStore {
    envelope: Option<Arc<[EnvelopeStage]>>,
    config: EngineConfig,
}

impl SequenceStore {
    /// Create a store with no envelope and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;
        config.warn_rest_collision();
        Ok(Self { envelope: None, config })
    }

    pub fn set_envelope(&mut self, stages: Vec<EnvelopeStage>) {
        log::trace!("envelope set: {} steps", stages.len());
        self.envelope = Some(stages.into());
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        log::trace!("mode set: {:?}", mode);
        self.config.mode = mode;
    }

    /// Set the inverse wrap bound. Rejects non-positive values.
    pub fn set_modulo_base(&mut self, base: i32) -> Result<(), Error> {
        if base <= 0 {
            log::warn!("rejected modulo base {}", base);
            return Err(Error::InvalidModuloBase(base));
        }
        log::trace!("modulo base set: {}", base);
        self.config.modulo_base = base;
        self.config.warn_rest_collision();
        Ok(())
    }

    pub fn set_row_tag(&mut self, row: RowTag) {
        log::trace!("row tag set: {}", row);
        self.config.row_tag = row;
    }

    pub fn set_rest_value(&mut self, rest: RestValue) {
        log::trace!("rest value set: {}", rest.value());
        self.config.rest_value = rest;
        self.config.warn_rest_collision();
    }

    /// Store the scale length. Rejects non-positive values.
    pub fn set_scale_length(&mut self, length: i32) -> Result<(), Error> {
        if length <= 0 {
            log::warn!("rejected scale length {}", length);
            return Err(Error::InvalidScaleLength(length));
        }
        log::trace!("scale length set: {}", length);
        self.config.scale_length = length;
        Ok(())
    }

    /// Replace the whole configuration after validating it.
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), Error> {
        config.validate()?;
        log::trace!("config replaced: {:?}", config);
        config.warn_rest_collision();
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The stored envelope sequence.
    pub fn current_envelope(&self) -> Result<&[EnvelopeStage], Error> {
        self.envelope.as_deref().ok_or(Error::UnconfiguredState)
    }

    /// Immutable view of the current state for one transform.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { envelope: self.envelope.clone(), config: self.config }
    }

    /// Forget the envelope and restore the default configuration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State captured at the start of a transform.
///
/// Later changes to the store do not affect a snapshot already taken.
#[derive(Clone, Debug)]
pub struct Snapshot {
    envelope: Option<Arc<[EnvelopeStage]>>,
    config: EngineConfig,
}

impl Snapshot {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the configured transform on `pitches`.
    ///
    /// Fails with `MissingEnvelope` if no non-empty envelope was captured.
    pub fn transform(&self, pitches: &[Pitch]) -> Result<Transformed, Error> {
        let envelope = match self.envelope.as_deref() {
            Some(stages) if !stages.is_empty() => stages,
            _ => return Err(Error::MissingEnvelope),
        };
        let transform = transform_for(self.config.mode);
        log::debug!(
            "{}: {} pitches, {} envelope steps",
            transform.info().name,
            pitches.len(),
            envelope.len()
        );
        transform.apply(pitches, envelope, &self.config)
    }
}
