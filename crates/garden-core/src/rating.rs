//! The 1-5 rating every leaf metric is expressed in.
//!
//! `Rating` can only hold values in `1..=5`. Deserialization rejects anything
//! else, so a persisted impact block with a `0` or `7` fails to load instead
//! of silently skewing the weighted averages.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A leaf sub-score on the inclusive 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Build a rating, rejecting values outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=5).contains(v))
            .map(Self)
            .ok_or(CoreError::RatingOutOfRange { value })
    }

    /// Const-friendly constructor, `None` outside `1..=5`.
    #[must_use]
    pub const fn checked(value: u8) -> Option<Self> {
        if value >= 1 && value <= 5 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Build a rating by clamping into `1..=5`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Round a raw heuristic value to the nearest integer, then clamp.
    ///
    /// Non-finite input maps to the minimum rating.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::MIN;
        }
        Self::clamped(raw.round().clamp(-1.0, 6.0) as i64)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The value as `f64`, for weighted averaging.
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0)
    }

    /// `6 - value`: flips a "higher is harder" rating into "higher is easier".
    #[must_use]
    pub fn inverted(self) -> f64 {
        6.0 - self.value()
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl JsonSchema for Rating {
    fn schema_name() -> Cow<'static, str> {
        "Rating".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 5
        })
    }
}
