//! Error taxonomy shared by the store, the engine and the host.

use thiserror::Error;

/// Errors reported by seqmorph operations.
///
/// Every error is scoped to the request that produced it; engine state is
/// left as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A transform was requested before any envelope sequence was set
    #[error("no envelope sequence has been set")]
    MissingEnvelope,
    /// An inverse transform was given an empty pitch sequence
    #[error("pitch sequence is empty")]
    EmptyInput,
    /// Stored state was read before it was configured
    #[error("state has not been configured")]
    UnconfiguredState,
    /// Mode code outside 0-4
    #[error("unknown update mode {0}")]
    InvalidMode(i32),
    /// Envelope code outside 0-3
    #[error("unknown envelope stage {code} at position {index}")]
    InvalidStage { index: usize, code: i32 },
    /// Modulo base must be positive
    #[error("modulo base must be positive, got {0}")]
    InvalidModuloBase(i32),
    /// Scale length must be positive
    #[error("scale length must be positive, got {0}")]
    InvalidScaleLength(i32),
    /// Message arrived on an inlet that does not exist
    #[error("no inlet with index {0}")]
    UnknownInlet(usize),
    /// Message shape does not match what the inlet accepts
    #[error("unexpected payload for inlet {inlet}")]
    UnexpectedPayload { inlet: usize },
    /// No engine instance with the requested id
    #[error("engine instance not found")]
    UnknownEngine,
}
