//! Color temperature control.

use serde::{Deserialize, Serialize};

/// Color temperature in Kelvin, with valid values from 1700K to 6500K
/// (the tunable-white range of Yeelight bulbs).
///
/// Lower values produce warmer (more yellow/orange) light, while higher
/// values produce cooler (more blue) light. Typical values:
/// - 2700K: Warm white (incandescent-like)
/// - 4000K: Neutral white
/// - 6500K: Daylight
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Default for Kelvin {
    fn default() -> Self {
        Self::new()
    }
}

impl Kelvin {
    pub const MIN: u16 = 1700;
    pub const MAX: u16 = 6500;

    /// Create a new Kelvin at neutral white (4000K).
    pub fn new() -> Self {
        Kelvin { kelvin: 4000 }
    }

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` if value is outside the valid range (1700-6500).
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Kelvin;
    ///
    /// assert!(Kelvin::create(1699).is_none());
    /// assert!(Kelvin::create(1700).is_some());
    /// assert!(Kelvin::create(6500).is_some());
    /// assert!(Kelvin::create(6501).is_none());
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&kelvin) {
            Some(Kelvin { kelvin })
        } else {
            None
        }
    }

    /// Clamp an arbitrary reported value into the valid range.
    pub fn clamped(kelvin: u16) -> Self {
        Kelvin {
            kelvin: kelvin.clamp(Self::MIN, Self::MAX),
        }
    }
}
