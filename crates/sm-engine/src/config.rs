//! Engine configuration.

use serde::{Deserialize, Serialize};
use sm_ir::{Error, RestValue, RowTag, UpdateMode};

/// Configuration consulted by the transforms.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Active transform
    pub mode: UpdateMode,
    /// Wrap bound for the inverse walk, always positive
    pub modulo_base: i32,
    /// Row attached to every emitted envelope entry
    pub row_tag: RowTag,
    /// Sentinel marking a rest step
    pub rest_value: RestValue,
    /// Stored only; no transform reads it
    pub scale_length: i32,
}

impl EngineConfig {
    pub const DEFAULT_MODULO_BASE: i32 = 16;
    pub const DEFAULT_SCALE_LENGTH: i32 = 12;

    /// Check the ranges a deserialized config may have skipped.
    pub fn validate(&self) -> Result<(), Error> {
        if self.modulo_base <= 0 {
            return Err(Error::InvalidModuloBase(self.modulo_base));
        }
        if self.scale_length <= 0 {
            return Err(Error::InvalidScaleLength(self.scale_length));
        }
        Ok(())
    }

    /// Whether a wrapped inverse output can equal the rest sentinel.
    pub fn rest_in_wrap_range(&self) -> bool {
        (0..self.modulo_base).contains(&self.rest_value.value())
    }

    pub(crate) fn warn_rest_collision(&self) {
        if self.rest_in_wrap_range() {
            log::warn!(
                "rest value {} lies inside the inverse wrap range [0, {}); wrapped notes may read as rests",
                self.rest_value.value(),
                self.modulo_base
            );
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: UpdateMode::Identity,
            modulo_base: Self::DEFAULT_MODULO_BASE,
            row_tag: 0,
            rest_value: RestValue::default(),
            scale_length: Self::DEFAULT_SCALE_LENGTH,
        }
    }
}
