//! Update modes selecting the active transform.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Which transform runs when a pitch sequence arrives.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, EnumCount, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateMode {
    /// Pass everything through unchanged
    #[default]
    Identity,
    /// Reverse the order of sounding notes, keep rests in place
    NoteReverse,
    /// Reverse the whole sequence in time
    TrueReverse,
    /// Re-walk the note intervals from the first value, wrapped
    Inverse,
    /// Inverse followed by a true reverse
    ReverseInverse,
}

impl UpdateMode {
    /// Decode a mode from its wire code (0-4).
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Identity),
            1 => Some(Self::NoteReverse),
            2 => Some(Self::TrueReverse),
            3 => Some(Self::Inverse),
            4 => Some(Self::ReverseInverse),
            _ => None,
        }
    }

    /// The wire code for this mode.
    pub const fn code(self) -> i32 {
        match self {
            Self::Identity => 0,
            Self::NoteReverse => 1,
            Self::TrueReverse => 2,
            Self::Inverse => 3,
            Self::ReverseInverse => 4,
        }
    }

    /// Whether this mode needs at least one pitch to anchor on.
    pub const fn requires_input(self) -> bool {
        matches!(self, Self::Inverse | Self::ReverseInverse)
    }
}
