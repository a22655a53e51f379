//! Cached per-bulb state.

use serde::{Deserialize, Serialize};

use crate::device::DeviceProperties;
use crate::identity::DeviceIdentity;
use crate::types::{Brightness, Color, Hue, Kelvin, Saturation};

/// Default transition duration applied to commands without an explicit one.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// An edge-triggered power transition observed during a refresh.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PowerEdge {
    TurnedOn,
    TurnedOff,
}

/// The last-known and pending properties of one bulb.
///
/// One `BulbState` exists per device for the process lifetime. It is mutated
/// only by the refresh path (reconciling queried device properties) and the
/// command path (committing successful writes); a device that goes offline
/// keeps its last-known-good state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BulbState {
    address: String,
    display_name: String,
    power: bool,
    brightness: Brightness,
    hue: Hue,
    saturation: Saturation,
    color_temp: Kelvin,
    color: Color,
    color_mode: u8,
    music_mode: bool,
    transition_ms: u64,
    effect_active: bool,
}

impl BulbState {
    /// Create the initial state for a newly observed device.
    pub fn new(identity: &DeviceIdentity) -> Self {
        BulbState {
            address: identity.address().to_string(),
            display_name: identity.display_name(),
            power: false,
            brightness: Brightness::new(),
            hue: Hue::default(),
            saturation: Saturation::create(100).unwrap_or_default(),
            color_temp: Kelvin::new(),
            color: Color::new(),
            color_mode: 0,
            music_mode: false,
            transition_ms: DEFAULT_DURATION_MS,
            effect_active: false,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn power(&self) -> bool {
        self.power
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    pub fn saturation(&self) -> Saturation {
        self.saturation
    }

    pub fn color_temp(&self) -> Kelvin {
        self.color_temp
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Device-reported color mode, passed through opaquely.
    pub fn color_mode(&self) -> u8 {
        self.color_mode
    }

    pub fn music_mode(&self) -> bool {
        self.music_mode
    }

    /// Default transition duration for commands without an explicit one.
    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    /// Whether a canned effect flow is believed to be running.
    pub fn effect_active(&self) -> bool {
        self.effect_active
    }

    /// Reconcile freshly queried device properties into the cache.
    ///
    /// Returns a [`PowerEdge`] when the power state actually changed since
    /// the previous observation; repeated observations of the same state
    /// yield nothing. The local transition duration is a control parameter,
    /// not a device property, and is never overwritten here.
    pub fn apply_properties(&mut self, props: &DeviceProperties) -> Option<PowerEdge> {
        let edge = match (self.power, props.power) {
            (false, true) => Some(PowerEdge::TurnedOn),
            (true, false) => Some(PowerEdge::TurnedOff),
            _ => None,
        };

        self.power = props.power;
        self.brightness = Brightness::create_or(props.brightness);
        self.hue = Hue::create(props.hue).unwrap_or_default();
        self.saturation = Saturation::create(props.saturation).unwrap_or_default();
        self.color_temp = Kelvin::clamped(props.color_temp);
        self.color = Color::from_packed(props.rgb);
        self.color_mode = props.color_mode;
        self.music_mode = props.music_on;

        edge
    }

    pub(crate) fn set_power(&mut self, on: bool) {
        self.power = on;
        self.effect_active = false;
    }

    pub(crate) fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
        self.effect_active = false;
    }

    pub(crate) fn set_color_temp(&mut self, kelvin: Kelvin) {
        self.color_temp = kelvin;
        self.effect_active = false;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
        self.effect_active = false;
    }

    pub(crate) fn set_hsv(&mut self, hue: Hue, saturation: Saturation, brightness: Brightness) {
        self.hue = hue;
        self.saturation = saturation;
        self.brightness = brightness;
        self.effect_active = false;
    }

    pub(crate) fn set_transition_ms(&mut self, duration_ms: u64) {
        self.transition_ms = duration_ms;
    }

    pub(crate) fn set_effect_active(&mut self, active: bool) {
        self.effect_active = active;
    }

    /// Observable attributes for the host integration layer, suitable for
    /// display or polling. Reads the cache only; no device contact.
    pub fn attributes(&self) -> serde_json::Value {
        serde_json::json!({
            "address": self.address,
            "name": self.display_name,
            "power": self.power,
            "brightness": self.brightness.value(),
            "hue": self.hue.value(),
            "saturation": self.saturation.value(),
            "color_temp": self.color_temp.kelvin(),
            "rgb": {
                "red": self.color.red(),
                "green": self.color.green(),
                "blue": self.color.blue(),
            },
            "color_mode": self.color_mode,
            "music_mode": self.music_mode,
            "transition_ms": self.transition_ms,
            "effect_active": self.effect_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> DeviceIdentity {
        DeviceIdentity::manual("0x000000000d4e31", "10.0.0.9", None)
    }

    fn props(power: bool) -> DeviceProperties {
        DeviceProperties {
            power,
            brightness: 75,
            hue: 120,
            saturation: 40,
            color_temp: 3500,
            rgb: 0x22_8B22,
            color_mode: 2,
            music_on: false,
        }
    }

    #[test]
    fn test_power_edges_fire_once() {
        let mut state = BulbState::new(&identity());
        assert_eq!(state.apply_properties(&props(true)), Some(PowerEdge::TurnedOn));
        assert_eq!(state.apply_properties(&props(true)), None);
        assert_eq!(
            state.apply_properties(&props(false)),
            Some(PowerEdge::TurnedOff)
        );
        assert_eq!(state.apply_properties(&props(false)), None);
    }

    #[test]
    fn test_refresh_decodes_fields() {
        let mut state = BulbState::new(&identity());
        state.apply_properties(&props(true));
        assert_eq!(state.brightness().value(), 75);
        assert_eq!(state.hue().value(), 120);
        assert_eq!(state.saturation().value(), 40);
        assert_eq!(state.color_temp().kelvin(), 3500);
        assert_eq!(state.color(), Color::rgb(0x22, 0x8B, 0x22));
        assert_eq!(state.color_mode(), 2);
        assert!(!state.music_mode());
    }

    #[test]
    fn test_refresh_keeps_transition_duration() {
        let mut state = BulbState::new(&identity());
        state.set_transition_ms(1500);
        state.apply_properties(&props(true));
        assert_eq!(state.transition_ms(), 1500);
    }

    #[test]
    fn test_attributes_mirror_cache() {
        let mut state = BulbState::new(&identity());
        state.apply_properties(&props(true));
        let attrs = state.attributes();
        assert_eq!(attrs["power"], true);
        assert_eq!(attrs["brightness"], 75);
        assert_eq!(attrs["rgb"]["green"], 0x8B);
        assert_eq!(attrs["transition_ms"], DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_defaults() {
        let state = BulbState::new(&identity());
        assert!(!state.power());
        assert_eq!(state.brightness().value(), 100);
        assert_eq!(state.transition_ms(), DEFAULT_DURATION_MS);
        assert!(!state.effect_active());
        assert_eq!(state.display_name(), "YeeLight 0d4e");
    }
}
