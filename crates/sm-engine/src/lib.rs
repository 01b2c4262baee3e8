//! Transform engine for seqmorph.
//!
//! Holds the sequence store and the five step-sequence transforms, and
//! turns an incoming pitch sequence into the pair of outlet emissions.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod config;
mod engine;
mod store;
mod transform;
pub mod transforms;

pub use config::EngineConfig;
pub use engine::TransformEngine;
pub use store::{SequenceStore, Snapshot};
pub use transform::{Transform, TransformInfo, Transformed};
pub use transforms::transform_for;
