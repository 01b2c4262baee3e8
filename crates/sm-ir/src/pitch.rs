//! Pitch values and the rest sentinel.

use serde::{Deserialize, Serialize};

/// A pitch or offset at one time step. Range is not constrained here.
pub type Pitch = i32;

/// The sentinel pitch that marks a step as a rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestValue(pub Pitch);

impl RestValue {
    /// Returns true if `pitch` is this sentinel.
    #[inline]
    pub const fn is_rest(self, pitch: Pitch) -> bool {
        pitch == self.0
    }

    /// The raw sentinel value.
    #[inline]
    pub const fn value(self) -> Pitch {
        self.0
    }
}

impl Default for RestValue {
    fn default() -> Self {
        Self(-1)
    }
}
