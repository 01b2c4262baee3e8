//! Core types for the seqmorph transform engine.
//!
//! This crate defines the values that flow between the host, the sequence
//! store and the transforms: pitch steps, envelope stages, update modes and
//! the messages exchanged over inlets and outlets.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod envelope;
mod error;
mod message;
mod mode;
mod pitch;

pub use envelope::{decode_stages, EnvelopeStage, RowTag, TaggedStage};
pub use error::Error;
pub use message::{Inlet, Outlet, Output, Outputs, Payload};
pub use mode::UpdateMode;
pub use pitch::{Pitch, RestValue};
