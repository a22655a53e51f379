//! Catalog of common color names and their RGB values.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::types::Color;

/// The fixed set of named colors the engine accepts by numeric id (0-23).
///
/// The names are purely descriptive; commands reference colors by id.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum NamedColor {
    Aqua = 0,
    Azure = 1,
    Beige = 2,
    Blue = 3,
    Chartreuse = 4,
    Coral = 5,
    Crimson = 6,
    #[strum(serialize = "forest green")]
    ForestGreen = 7,
    Fuchsia = 8,
    Golden = 9,
    Gray = 10,
    Green = 11,
    #[strum(serialize = "hot pink")]
    HotPink = 12,
    Indigo = 13,
    Lavender = 14,
    Lime = 15,
    Maroon = 16,
    #[strum(serialize = "navy blue")]
    NavyBlue = 17,
    Olive = 18,
    Red = 19,
    #[strum(serialize = "royal blue")]
    RoyalBlue = 20,
    Tan = 21,
    Teal = 22,
    White = 23,
}

impl NamedColor {
    /// Look up a named color by its id.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::NamedColor;
    ///
    /// assert_eq!(NamedColor::create(9), Some(NamedColor::Golden));
    /// assert_eq!(NamedColor::create(24), None);
    /// ```
    pub fn create(id: u8) -> Option<Self> {
        NamedColor::iter().find(|color| *color as u8 == id)
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// The RGB value for this named color.
    pub fn color(&self) -> Color {
        let (r, g, b) = match self {
            NamedColor::Aqua => (127, 255, 212),
            NamedColor::Azure => (0, 127, 255),
            NamedColor::Beige => (245, 245, 220),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Chartreuse => (127, 255, 0),
            NamedColor::Coral => (0, 63, 72),
            NamedColor::Crimson => (220, 20, 60),
            NamedColor::ForestGreen => (34, 139, 34),
            NamedColor::Fuchsia => (255, 119, 255),
            NamedColor::Golden => (255, 215, 0),
            NamedColor::Gray => (128, 128, 128),
            NamedColor::Green => (0, 255, 0),
            NamedColor::HotPink => (252, 15, 192),
            NamedColor::Indigo => (75, 0, 130),
            NamedColor::Lavender => (181, 126, 220),
            NamedColor::Lime => (191, 255, 0),
            NamedColor::Maroon => (128, 0, 0),
            NamedColor::NavyBlue => (0, 0, 128),
            NamedColor::Olive => (128, 128, 0),
            NamedColor::Red => (255, 0, 0),
            NamedColor::RoyalBlue => (8, 76, 158),
            NamedColor::Tan => (210, 180, 140),
            NamedColor::Teal => (0, 128, 128),
            NamedColor::White => (255, 255, 255),
        };
        Color::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_contiguous() {
        for (position, color) in NamedColor::iter().enumerate() {
            assert_eq!(color.id() as usize, position);
            assert_eq!(NamedColor::create(color.id()), Some(color));
        }
        assert_eq!(NamedColor::iter().count(), 24);
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(NamedColor::create(24), None);
        assert_eq!(NamedColor::create(99), None);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(NamedColor::Golden.color(), Color::rgb(255, 215, 0));
        assert_eq!(NamedColor::White.color(), Color::rgb(255, 255, 255));
        assert_eq!(NamedColor::Red.color(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(NamedColor::ForestGreen.to_string(), "forest green");
        assert_eq!(NamedColor::Golden.to_string(), "golden");
    }
}
