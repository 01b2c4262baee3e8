//! Decoding of inlet messages into engine requests.

use sm_engine::SequenceStore;
use sm_ir::{decode_stages, EnvelopeStage, Error, Inlet, Payload, Pitch, UpdateMode};

/// A decoded inlet message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Run the current transform on these pitches
    Transform(Vec<Pitch>),
    /// Update the sequence store
    Configure(ConfigChange),
}

/// A validated change to the sequence store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigChange {
    Envelope(Vec<EnvelopeStage>),
    Mode(UpdateMode),
    ModuloBase(i32),
}

impl Request {
    /// Decode a message on the given host port.
    ///
    /// All codes are checked here so a rejected message never touches
    /// the store.
    pub fn parse(inlet: usize, payload: Payload) -> Result<Self, Error> {
        let inlet = Inlet::from_index(inlet)?;
        let mismatch = Error::UnexpectedPayload { inlet: inlet.index() };
        Ok(match (inlet, payload) {
            (Inlet::Pitches, Payload::List(pitches)) => Request::Transform(pitches),
            (Inlet::Envelope, Payload::List(codes)) => {
                Request::Configure(ConfigChange::Envelope(decode_stages(&codes)?))
            }
            (Inlet::Mode, Payload::Int(code)) => {
                let mode = UpdateMode::from_code(code).ok_or(Error::InvalidMode(code))?;
                Request::Configure(ConfigChange::Mode(mode))
            }
            (Inlet::ModuloBase, Payload::Int(base)) => {
                if base <= 0 {
                    return Err(Error::InvalidModuloBase(base));
                }
                Request::Configure(ConfigChange::ModuloBase(base))
            }
            _ => return Err(mismatch),
        })
    }
}

impl ConfigChange {
    pub fn apply(self, store: &mut SequenceStore) -> Result<(), Error> {
        match self {
            ConfigChange::Envelope(stages) => store.set_envelope(stages),
            ConfigChange::Mode(mode) => store.set_mode(mode),
            ConfigChange::ModuloBase(base) => store.set_modulo_base(base)?,
        }
        Ok(())
    }
}
