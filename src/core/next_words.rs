//! # Generation Parameter
//!
//! How many words the generation service should append to the prompt.
//! The value is bounded to `[MIN, MAX]`; anything outside is clamped on the
//! way in, so a `NextWords` held anywhere in the app is always valid.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct NextWords(u8);

impl NextWords {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 15;
    pub const DEFAULT: u8 = 8;

    /// Builds a value, clamping into `[MIN, MAX]`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step up, saturating at `MAX`.
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One step down, saturating at `MIN`.
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Position within the range as 0.0..=1.0, used by the settings gauge.
    pub fn ratio(self) -> f64 {
        f64::from(self.0 - Self::MIN) / f64::from(Self::MAX - Self::MIN)
    }

    /// Midpoint of the range, shown on the gauge scale.
    pub fn midpoint() -> u8 {
        (Self::MIN + Self::MAX) / 2
    }
}

impl Default for NextWords {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for NextWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for NextWords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
