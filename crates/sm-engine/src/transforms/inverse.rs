//! Inverse: re-walk the intervals between sounding notes from a new origin.
//!
//! Each step between consecutive sounding inputs `prev -> cur` contributes
//! `prev - cur` to a running value that starts at the first input and is
//! wrapped into `[0, modulo_base)` with a Euclidean remainder. Rests are
//! copied through and contribute nothing. Only element 0 is left unwrapped.

use alloc::vec::Vec;
use sm_ir::{EnvelopeStage, Error, Pitch, UpdateMode};

use crate::config::EngineConfig;
use crate::transform::{tag_stages, Transform, TransformInfo, Transformed};

static INFO: TransformInfo = TransformInfo {
    name: "Inverse",
    short_name: "Inv",
    mode: UpdateMode::Inverse,
};

pub struct Inverse;

impl Transform for Inverse {
    fn info(&self) -> &TransformInfo { &INFO }

    fn apply(
        &self,
        pitches: &[Pitch],
        envelope: &[EnvelopeStage],
        config: &EngineConfig,
    ) -> Result<Transformed, Error> {
        Ok(Transformed {
            pitches: invert(pitches, config)?,
            envelope: tag_stages(envelope.iter().copied(), config.row_tag),
        })
    }
}

pub(crate) fn invert(pitches: &[Pitch], config: &EngineConfig) -> Result<Vec<Pitch>, Error> {
    let (&first, tail) = pitches.split_first().ok_or(Error::EmptyInput)?;
    let rest = config.rest_value;
    let base = i64::from(config.modulo_base);

    let mut out = Vec::with_capacity(pitches.len());
    out.push(first);

    // (last sounding input, its output). Unset while only rests were seen.
    let mut cursor = (!rest.is_rest(first)).then_some((first, first));

    for &pitch in tail {
        if rest.is_rest(pitch) {
            out.push(pitch);
            continue;
        }
        let next = match cursor {
            Some((prev_in, prev_out)) => {
                let delta = i64::from(prev_in) - i64::from(pitch);
                // base fits in i32, so the remainder does too
                (i64::from(prev_out) + delta).rem_euclid(base) as Pitch
            }
            // first sounding note after leading rests anchors the walk
            None => i64::from(pitch).rem_euclid(base) as Pitch,
        };
        cursor = Some((pitch, next));
        out.push(next);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn config(base: i32) -> EngineConfig {
        EngineConfig { modulo_base: base, ..Default::default() }
    }

    #[test]
    fn rest_does_not_move_the_cursor() {
        assert_eq!(invert(&[5, 3, 7, -1, 2], &config(15)).unwrap(), vec![5, 7, 3, -1, 8]);
    }

    #[test]
    fn negative_sums_wrap_upward() {
        // 0 -> 4 gives -4, wrapped into 12
        assert_eq!(invert(&[0, 4], &config(16)).unwrap(), vec![0, 12]);
        assert_eq!(invert(&[2, 30], &config(12)).unwrap(), vec![2, 10]);
    }

    #[test]
    fn first_value_is_not_wrapped() {
        assert_eq!(invert(&[40, 40], &config(12)).unwrap(), vec![40, 4]);
        assert_eq!(invert(&[-1], &config(12)).unwrap(), vec![-1]);
    }

    #[test]
    fn leading_rests_anchor_at_first_note() {
        assert_eq!(invert(&[-1, -1, 5, 3], &config(12)).unwrap(), vec![-1, -1, 5, 7]);
    }

    #[test]
    fn anchor_after_leading_rest_is_wrapped() {
        // 40 wraps to 4, then 40 -> 41 steps down by one
        assert_eq!(invert(&[-1, 40, 41], &config(12)).unwrap(), vec![-1, 4, 3]);
        assert_eq!(invert(&[-1, -1, -30], &config(12)).unwrap(), vec![-1, -1, 6]);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let out = invert(&[i32::MAX, i32::MIN + 1, i32::MAX], &config(7)).unwrap();
        assert!(out[1..].iter().all(|&p| (0..7).contains(&p)));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(invert(&[], &config(12)), Err(Error::EmptyInput));
        assert_eq!(
            Inverse.apply(&[], &[EnvelopeStage::Full], &config(12)),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn envelope_passes_through() {
        let out = Inverse
            .apply(&[1, 2], &[EnvelopeStage::Attack, EnvelopeStage::Release], &config(12))
            .unwrap();
        assert_eq!(out.stages(), vec![EnvelopeStage::Attack, EnvelopeStage::Release]);
    }
}
