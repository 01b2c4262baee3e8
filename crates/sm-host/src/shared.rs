//! Thread-safe engine handle for hosts with concurrent callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sm_engine::{EngineConfig, SequenceStore, Transformed};
use sm_ir::{Error, Outputs, Payload, Pitch};

use crate::dispatch::{ConfigChange, Request};

/// A cloneable handle to one engine instance.
///
/// All clones share one store behind a single lock. A transform holds the
/// lock only long enough to take a snapshot, then runs unlocked, so a
/// concurrent reconfiguration can never be observed halfway through.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    store: Arc<Mutex<SequenceStore>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        Ok(Self {
            store: Arc::new(Mutex::new(SequenceStore::with_config(config)?)),
        })
    }

    // Every store write is a single assignment, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, SequenceStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> EngineConfig {
        *self.lock().config()
    }

    pub fn configure(&self, change: ConfigChange) -> Result<(), Error> {
        change.apply(&mut self.lock())
    }

    /// Transform `pitches` against the state current at entry.
    pub fn transform(&self, pitches: &[Pitch]) -> Result<Transformed, Error> {
        let snapshot = self.lock().snapshot();
        snapshot.transform(pitches)
    }

    /// Handle one message arriving on `inlet`. See `Controller::handle`.
    pub fn handle(&self, inlet: usize, payload: Payload) -> Result<Outputs, Error> {
        match Request::parse(inlet, payload)? {
            Request::Transform(pitches) => Ok(self.transform(&pitches)?.outputs()),
            Request::Configure(change) => {
                self.configure(change)?;
                Ok(Outputs::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_ir::{EnvelopeStage, UpdateMode};
    use std::thread;

    #[test]
    fn clones_share_state() {
        let engine = SharedEngine::new();
        let other = engine.clone();
        other
            .configure(ConfigChange::Envelope(vec![EnvelopeStage::Attack]))
            .unwrap();
        other.configure(ConfigChange::Mode(UpdateMode::TrueReverse)).unwrap();

        let out = engine.transform(&[1, 2]).unwrap();
        assert_eq!(out.pitches, vec![2, 1]);
        assert_eq!(out.stages(), vec![EnvelopeStage::Release]);
    }

    #[test]
    fn concurrent_reconfiguration_never_tears() {
        let engine = SharedEngine::new();
        engine.handle(1, Payload::List(vec![1, 2, 3])).unwrap();

        let writer = {
            let engine = engine.clone();
            thread::spawn(move || {
                for i in 0..500 {
                    let mode = if i % 2 == 0 { 0 } else { 2 };
                    engine.handle(2, Payload::Int(mode)).unwrap();
                }
            })
        };

        for _ in 0..500 {
            let out = engine.transform(&[1, 2, 3]).unwrap();
            // Identity and TrueReverse both map this envelope to itself;
            // pitches must be one whole result or the other.
            assert_eq!(
                out.stages(),
                vec![EnvelopeStage::Attack, EnvelopeStage::Sustain, EnvelopeStage::Release]
            );
            assert!(out.pitches == vec![1, 2, 3] || out.pitches == vec![3, 2, 1]);
        }
        writer.join().unwrap();
    }
}
