//! Built-in transform implementations, one per update mode.

mod identity;
mod inverse;
mod note_reverse;
mod reverse_inverse;
mod true_reverse;

pub use identity::Identity;
pub use inverse::Inverse;
pub use note_reverse::NoteReverse;
pub use reverse_inverse::ReverseInverse;
pub use true_reverse::TrueReverse;

use sm_ir::UpdateMode;

use crate::transform::Transform;

/// The transform that runs for `mode`.
pub fn transform_for(mode: UpdateMode) -> &'static dyn Transform {
    match mode {
        UpdateMode::Identity => &Identity,
        UpdateMode::NoteReverse => &NoteReverse,
        UpdateMode::TrueReverse => &TrueReverse,
        UpdateMode::Inverse => &Inverse,
        UpdateMode::ReverseInverse => &ReverseInverse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_mode_has_a_matching_transform() {
        for mode in UpdateMode::iter() {
            assert_eq!(transform_for(mode).info().mode, mode);
        }
    }
}
