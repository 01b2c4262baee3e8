//! Host-facing controller for seqmorph.
//!
//! Routes inlet messages to an engine instance and returns what the
//! outlets emit, in the order the host must send it. Both the CLI and
//! embedding hosts share this API.

mod dispatch;
mod rack;
mod shared;
pub mod script;

use sm_engine::TransformEngine;

// Re-export common types so callers don't need sm-ir/sm-engine directly.
pub use dispatch::{ConfigChange, Request};
pub use rack::{EngineId, Rack};
pub use shared::SharedEngine;
pub use sm_engine::{EngineConfig, Transformed};
pub use sm_ir::{EnvelopeStage, Error, Inlet, Outlet, Output, Outputs, Payload, UpdateMode};

/// Single-threaded controller owning one engine instance.
#[derive(Clone, Debug, Default)]
pub struct Controller {
    engine: TransformEngine,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        Ok(Self { engine: TransformEngine::with_config(config)? })
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TransformEngine {
        &mut self.engine
    }

    /// Handle one message arriving on `inlet`.
    ///
    /// A pitch list returns the outlet emissions; configuration messages
    /// return nothing. On error nothing is emitted and state is unchanged.
    pub fn handle(&mut self, inlet: usize, payload: Payload) -> Result<Outputs, Error> {
        match Request::parse(inlet, payload)? {
            Request::Transform(pitches) => Ok(self.engine.transform(&pitches)?.outputs()),
            Request::Configure(change) => {
                change.apply(self.engine.store_mut())?;
                Ok(Outputs::new())
            }
        }
    }

    /// Forget the envelope and restore default configuration.
    pub fn reset(&mut self) {
        self.engine.store_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i32]) -> Payload {
        Payload::List(values.to_vec())
    }

    #[test]
    fn emits_envelope_then_pitches() {
        let mut ctrl = Controller::new();
        assert!(ctrl.handle(1, list(&[1, 2, 3])).unwrap().is_empty());
        assert!(ctrl.handle(2, Payload::Int(2)).unwrap().is_empty());

        let out = ctrl.handle(0, list(&[1, 2, 3])).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].outlet(), Outlet::Envelope);
        assert_eq!(out[0].to_values(), vec![0, 0, 1, 1, 0, 2, 2, 0, 3]);
        assert_eq!(out[1], Output::Pitches(vec![3, 2, 1]));
    }

    #[test]
    fn pitches_before_envelope_emit_nothing() {
        let mut ctrl = Controller::new();
        assert_eq!(ctrl.handle(0, list(&[1, 2])), Err(Error::MissingEnvelope));
        assert!(ctrl.engine().store().current_envelope().is_err());
    }

    #[test]
    fn bad_codes_leave_state_untouched() {
        let mut ctrl = Controller::new();
        ctrl.handle(1, list(&[0, 1])).unwrap();
        assert_eq!(
            ctrl.handle(1, list(&[2, 9])),
            Err(Error::InvalidStage { index: 1, code: 9 })
        );
        assert_eq!(ctrl.handle(2, Payload::Int(7)), Err(Error::InvalidMode(7)));
        assert_eq!(ctrl.handle(3, Payload::Int(0)), Err(Error::InvalidModuloBase(0)));
        assert_eq!(
            ctrl.engine().store().current_envelope().unwrap(),
            &[EnvelopeStage::Full, EnvelopeStage::Attack]
        );
        assert_eq!(ctrl.engine().config().mode, UpdateMode::Identity);
    }

    #[test]
    fn modulo_base_reaches_inverse() {
        let mut ctrl = Controller::new();
        ctrl.handle(1, list(&[0])).unwrap();
        ctrl.handle(2, Payload::Int(3)).unwrap();
        ctrl.handle(3, Payload::Int(15)).unwrap();
        let out = ctrl.handle(0, list(&[5, 3, 7, -1, 2])).unwrap();
        assert_eq!(out[1], Output::Pitches(vec![5, 7, 3, -1, 8]));
    }

    #[test]
    fn reset_forgets_envelope() {
        let mut ctrl = Controller::new();
        ctrl.handle(1, list(&[0])).unwrap();
        ctrl.reset();
        assert_eq!(ctrl.handle(0, list(&[1])), Err(Error::MissingEnvelope));
    }
}
