//! Abstract bulb commands.
//!
//! Every host-facing operation is one variant of [`Command`]; the translator
//! in [`crate::bulb`] turns a variant into the right device-call sequence.

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, Color, Hue, HueSaturation, Kelvin, Saturation};

/// Minimum transition duration, used by the "fast" command variants and by
/// automatic power-on.
pub const MIN_DURATION_MS: u64 = 30;

/// Long transition used by fade-to-extreme operations.
pub const FADE_DURATION_MS: u64 = 4000;

/// An abstract command against a single bulb.
///
/// Commands carrying an explicit duration always use it; otherwise the
/// bulb's stored default transition duration applies, except for the "fast"
/// variants which use [`MIN_DURATION_MS`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Command {
    /// Turn on, optionally adjusting brightness at the same time.
    PowerOn { brightness: Option<Brightness> },
    /// Turn on instantly at full brightness.
    PowerOnFast,
    /// Turn off.
    PowerOff,
    /// Turn off instantly.
    PowerOffFast,
    /// Store a new default transition duration. Local only; no device call.
    SetTransition { duration_ms: u64 },
    /// Set the white color temperature.
    SetColorTemp { kelvin: Kelvin },
    /// Set color temperature and brightness together with an explicit
    /// duration.
    SetColorTempBrightness {
        kelvin: Kelvin,
        brightness: Brightness,
        duration_ms: u64,
    },
    /// Set an explicit RGB color with an explicit duration.
    SetRgb { color: Color, duration_ms: u64 },
    /// Set a color from the named-color catalog by id.
    SetNamedColor { id: u8 },
    /// Full HSV set with an explicit duration.
    SetHsv {
        color: HueSaturation,
        brightness: Brightness,
        duration_ms: u64,
    },
    /// Change hue only; the write carries the cached saturation/brightness.
    SetHue { hue: Hue },
    /// Change saturation only; the write carries the cached hue/brightness.
    SetSaturation { saturation: Saturation },
    /// Change brightness only. Uses the brightness device operation rather
    /// than an HSV write, so it also works in color-temperature mode.
    SetBrightness { brightness: Brightness },
    /// Step brightness up by the fixed increment.
    Brighten,
    /// Step brightness down by the fixed increment.
    Dim,
    /// Fade to full brightness over the long fade duration.
    FadeUp,
    /// Fade to minimum brightness over the long fade duration.
    FadeDown,
    /// Halt an in-progress fade at whatever brightness it reached.
    FadeStop,
    /// Start the catalog effect with this 1-based index, or stop any running
    /// effect when the index is 0.
    SetEffect { index: u8 },
}

impl Command {
    /// Stable command name, as exposed to the host integration layer.
    pub fn name(&self) -> &'static str {
        match self {
            Command::PowerOn { .. } => "power_on",
            Command::PowerOnFast => "power_on_fast",
            Command::PowerOff => "power_off",
            Command::PowerOffFast => "power_off_fast",
            Command::SetTransition { .. } => "set_transition",
            Command::SetColorTemp { .. } => "set_color_temp",
            Command::SetColorTempBrightness { .. } => "set_color_temp_brightness",
            Command::SetRgb { .. } => "set_rgb",
            Command::SetNamedColor { .. } => "set_named_color",
            Command::SetHsv { .. } => "set_hsv",
            Command::SetHue { .. } => "set_hue",
            Command::SetSaturation { .. } => "set_saturation",
            Command::SetBrightness { .. } => "set_brightness",
            Command::Brighten => "brighten",
            Command::Dim => "dim",
            Command::FadeUp => "fade_up",
            Command::FadeDown => "fade_down",
            Command::FadeStop => "fade_stop",
            Command::SetEffect { .. } => "set_effect",
        }
    }
}
