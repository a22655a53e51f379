//! Value types for light control parameters.

mod brightness;
mod color;
mod hue_saturation;
mod kelvin;

pub use brightness::Brightness;
pub use color::Color;
pub use hue_saturation::{Hue, HueSaturation, Saturation};
pub use kelvin::Kelvin;
