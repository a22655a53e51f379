//! RGB color representation, including the packed 24-bit device encoding.

use serde::{Deserialize, Serialize};

/// An RGB color with red, green, and blue components (0-255 each).
///
/// Yeelight bulbs report their color as a single packed 24-bit integer;
/// [`Color::from_packed`] and [`Color::to_packed`] convert between the two
/// representations.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Decode a packed 24-bit `0xRRGGBB` integer as reported by the bulb.
    ///
    /// Bits above the low 24 are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Color;
    ///
    /// let gold = Color::from_packed(0xFFD700);
    /// assert_eq!((gold.red(), gold.green(), gold.blue()), (255, 215, 0));
    /// ```
    pub fn from_packed(packed: u32) -> Self {
        Self {
            red: ((packed >> 16) & 0xFF) as u8,
            green: ((packed >> 8) & 0xFF) as u8,
            blue: (packed & 0xFF) as u8,
        }
    }

    /// Encode back to the packed 24-bit integer form.
    pub fn to_packed(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_round_trip() {
        for packed in [0u32, 0x000001, 0x0000FF, 0x00FF00, 0xFF0000, 0xFFD700, 0xFFFFFF] {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }
        // Sampled sweep over the full 24-bit space.
        for packed in (0..0x0100_0000u32).step_by(4099) {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }
    }

    #[test]
    fn test_packed_ignores_high_bits() {
        assert_eq!(Color::from_packed(0xFF_0000FF), Color::rgb(0, 0, 255));
    }
}
