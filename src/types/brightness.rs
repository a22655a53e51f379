//! Brightness control for Yeelight bulbs.

use serde::{Deserialize, Serialize};

/// Brightness level from 1 to 100 percent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Fixed step used by the brighten/dim commands.
    pub const STEP: u8 = 4;

    /// Create a new Brightness at the maximum (100%).
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (1-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_none());
    /// assert!(Brightness::create(1).is_some());
    /// assert!(Brightness::create(100).is_some());
    /// assert!(Brightness::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Returns default (100%) if value is invalid.
    pub fn create_or(value: u8) -> Self {
        if Self::is_valid(value) {
            Brightness { value }
        } else {
            Self::new()
        }
    }

    /// Clamp an arbitrary value into the valid range.
    pub fn clamped(value: u8) -> Self {
        Brightness {
            value: value.clamp(Self::MIN, Self::MAX),
        }
    }

    /// One step brighter, clamped at 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Brightness;
    ///
    /// assert_eq!(Brightness::create(50).unwrap().stepped_up().value(), 54);
    /// assert_eq!(Brightness::create(98).unwrap().stepped_up().value(), 100);
    /// ```
    pub fn stepped_up(&self) -> Self {
        Self::clamped(self.value.saturating_add(Self::STEP))
    }

    /// One step dimmer, clamped at 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Brightness;
    ///
    /// assert_eq!(Brightness::create(50).unwrap().stepped_down().value(), 46);
    /// assert_eq!(Brightness::create(3).unwrap().stepped_down().value(), 1);
    /// ```
    pub fn stepped_down(&self) -> Self {
        Self::clamped(self.value.saturating_sub(Self::STEP))
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_at_bounds() {
        for value in Brightness::MIN..=Brightness::MAX {
            let b = Brightness::create(value).unwrap();
            assert!(b.stepped_up().value() <= Brightness::MAX);
            assert!(b.stepped_down().value() >= Brightness::MIN);
        }
    }

    #[test]
    fn test_step_is_noop_only_at_bounds() {
        assert_eq!(
            Brightness::clamped(100).stepped_up(),
            Brightness::clamped(100)
        );
        assert_eq!(Brightness::clamped(1).stepped_down(), Brightness::clamped(1));
        assert_ne!(Brightness::clamped(96).stepped_up(), Brightness::clamped(96));
    }
}
