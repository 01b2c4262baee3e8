//! Inlet and outlet message types exchanged with the host.

use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::envelope::TaggedStage;
use crate::error::Error;
use crate::pitch::Pitch;

/// Inbound channels, by host port index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inlet {
    /// 0: pitch list, triggers a transform
    Pitches,
    /// 1: envelope stage codes
    Envelope,
    /// 2: update mode code
    Mode,
    /// 3: modulo base for the inverse walk
    ModuloBase,
}

impl Inlet {
    pub const COUNT: usize = 4;

    /// Resolve a host port index.
    pub const fn from_index(index: usize) -> Result<Self, Error> {
        match index {
            0 => Ok(Self::Pitches),
            1 => Ok(Self::Envelope),
            2 => Ok(Self::Mode),
            3 => Ok(Self::ModuloBase),
            _ => Err(Error::UnknownInlet(index)),
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Pitches => 0,
            Self::Envelope => 1,
            Self::Mode => 2,
            Self::ModuloBase => 3,
        }
    }

    /// Whether this inlet takes a list rather than a single integer.
    pub const fn takes_list(self) -> bool {
        matches!(self, Self::Pitches | Self::Envelope)
    }
}

/// Payload carried by an inbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    List(Vec<i32>),
    Int(i32),
}

/// Outbound channels, by host port index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outlet {
    /// 0: transformed pitches
    Pitches,
    /// 1: tagged envelope entries
    Envelope,
}

impl Outlet {
    pub const fn index(self) -> usize {
        match self {
            Self::Pitches => 0,
            Self::Envelope => 1,
        }
    }
}

/// One emission on an outlet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Envelope(Vec<TaggedStage>),
    Pitches(Vec<Pitch>),
}

impl Output {
    pub const fn outlet(&self) -> Outlet {
        match self {
            Output::Envelope(_) => Outlet::Envelope,
            Output::Pitches(_) => Outlet::Pitches,
        }
    }

    /// Flatten to the integer list the host sends.
    ///
    /// Envelope entries become consecutive `index row code` triples.
    pub fn to_values(&self) -> Vec<i32> {
        match self {
            Output::Envelope(entries) => entries.iter().flat_map(|e| e.to_triple()).collect(),
            Output::Pitches(pitches) => pitches.clone(),
        }
    }
}

/// Emissions from one transform, in send order.
pub type Outputs = ArrayVec<Output, 2>;
