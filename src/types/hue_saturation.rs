//! Hue and saturation color representation.

use serde::{Deserialize, Serialize};

use super::Color;

/// Hue angle on the color wheel, 0-359 degrees.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Hue {
    pub(crate) value: u16,
}

impl Hue {
    pub const MAX: u16 = 359;

    /// Returns None if value is outside the valid range (0-359).
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Hue;
    ///
    /// assert!(Hue::create(0).is_some());
    /// assert!(Hue::create(359).is_some());
    /// assert!(Hue::create(360).is_none());
    /// ```
    pub fn create(value: u16) -> Option<Self> {
        (value <= Self::MAX).then_some(Hue { value })
    }

    pub fn value(&self) -> u16 {
        self.value
    }
}

/// Color saturation, 0-100 percent.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Saturation {
    pub(crate) value: u8,
}

impl Saturation {
    pub const MAX: u8 = 100;

    /// Returns None if value is outside the valid range (0-100).
    pub fn create(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Saturation { value })
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Hue and saturation pair.
///
/// An alternative way to specify colors using:
/// - Hue: the color angle on the color wheel (0-359 degrees)
/// - Saturation: the intensity of the color (0-100 percent)
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HueSaturation {
    pub(crate) hue: Hue,
    pub(crate) saturation: Saturation,
}

impl HueSaturation {
    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0, 100).is_some());
    /// assert!(HueSaturation::create(120, 50).is_some());
    /// assert!(HueSaturation::create(360, 50).is_none());
    /// assert!(HueSaturation::create(180, 101).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        Some(HueSaturation {
            hue: Hue::create(hue)?,
            saturation: Saturation::create(saturation)?,
        })
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn saturation(&self) -> Saturation {
        self.saturation
    }

    /// Convert to an RGB [`Color`].
    ///
    /// Uses HSV to RGB conversion with Value fixed at maximum brightness.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::HueSaturation;
    ///
    /// let hs = HueSaturation::create(0, 100).unwrap();
    /// let color = hs.to_color();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 0);
    /// assert_eq!(color.blue(), 0);
    /// ```
    pub fn to_color(&self) -> Color {
        let h = f32::from(self.hue.value);
        let s = f32::from(self.saturation.value) / 100.0;
        let v = 1.0;

        if s == 0.0 {
            let gray = (v * 255.0) as u8;
            return Color::rgb(gray, gray, gray);
        }

        let h = h / 60.0;
        let i = h.floor() as i32;
        let f = h - i as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }
}

impl From<&HueSaturation> for Color {
    fn from(hs: &HueSaturation) -> Self {
        hs.to_color()
    }
}
