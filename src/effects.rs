//! Catalog of canned lighting effects ("flows").
//!
//! Each effect expands to a [`FlowProgram`]: a finite list of transition
//! steps the bulb replays forever until a flow is stopped or another command
//! overrides it. The step lists mirror the stock Yeelight flow presets.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::types::{Brightness, Color, HueSaturation, Kelvin};

/// A single transition step within a flow program.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// Transition to an RGB color at the given brightness.
    Rgb {
        color: Color,
        brightness: Brightness,
        duration_ms: u64,
    },
    /// Transition to a white color temperature at the given brightness.
    Temperature {
        kelvin: Kelvin,
        brightness: Brightness,
        duration_ms: u64,
    },
    /// Hold the current appearance.
    Sleep { duration_ms: u64 },
}

impl FlowStep {
    fn hsv(hue: u16, saturation: u8, brightness: u8, duration_ms: u64) -> Self {
        let hs = HueSaturation::create(hue, saturation).unwrap_or_default();
        FlowStep::Rgb {
            color: hs.to_color(),
            brightness: Brightness::clamped(brightness),
            duration_ms,
        }
    }

    fn rgb(red: u8, green: u8, blue: u8, brightness: u8, duration_ms: u64) -> Self {
        FlowStep::Rgb {
            color: Color::rgb(red, green, blue),
            brightness: Brightness::clamped(brightness),
            duration_ms,
        }
    }

    fn temperature(kelvin: u16, brightness: u8, duration_ms: u64) -> Self {
        FlowStep::Temperature {
            kelvin: Kelvin::clamped(kelvin),
            brightness: Brightness::clamped(brightness),
            duration_ms,
        }
    }

    fn sleep(duration_ms: u64) -> Self {
        FlowStep::Sleep { duration_ms }
    }
}

/// A flow program: an ordered step list plus a repeat count.
///
/// A count of zero means repeat forever, matching the device protocol.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FlowProgram {
    steps: Vec<FlowStep>,
    count: u32,
}

impl FlowProgram {
    /// Create a program that repeats its steps forever.
    pub fn repeating(steps: Vec<FlowStep>) -> Self {
        FlowProgram { steps, count: 0 }
    }

    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    /// Repeat count sent to the device; zero means forever.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn repeats_forever(&self) -> bool {
        self.count == 0
    }
}

/// The fixed set of canned effects, addressed by 1-based index.
///
/// Index 0 is reserved as the "stop effect" sentinel and is not a catalog
/// entry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Effect {
    Disco = 1,
    TemperatureCycle = 2,
    Strobe = 3,
    ColorStrobe = 4,
    Alarm = 5,
    Police = 6,
    PolicePulse = 7,
    Christmas = 8,
    RgbCycle = 9,
    RandomLoop = 10,
    Lsd = 11,
    SlowDown = 12,
}

impl Effect {
    /// Look up an effect by its 1-based catalog index.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_control_rs::Effect;
    ///
    /// assert_eq!(Effect::create(1), Some(Effect::Disco));
    /// assert_eq!(Effect::create(12), Some(Effect::SlowDown));
    /// assert_eq!(Effect::create(0), None);
    /// assert_eq!(Effect::create(13), None);
    /// ```
    pub fn create(index: u8) -> Option<Self> {
        Effect::iter().find(|effect| *effect as u8 == index)
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Build the flow program for this effect.
    ///
    /// Programs are rebuilt on every call; the random-hue effects produce a
    /// fresh hue sequence each time.
    pub fn program(&self) -> FlowProgram {
        let steps = match self {
            Effect::Disco => disco(120),
            Effect::TemperatureCycle => temperature_cycle(),
            Effect::Strobe => strobe(),
            Effect::ColorStrobe => color_strobe(),
            Effect::Alarm => alarm(250),
            Effect::Police => police(300),
            Effect::PolicePulse => police_pulse(250),
            Effect::Christmas => christmas(250, 3000),
            Effect::RgbCycle => rgb_cycle(250, 3000),
            Effect::RandomLoop => random_loop(750, 9),
            Effect::Lsd => lsd(3000),
            Effect::SlowDown => slow_down(2000, 8),
        };
        FlowProgram::repeating(steps)
    }
}

fn disco(bpm: u64) -> Vec<FlowStep> {
    let beat = 60_000 / bpm;
    [0, 90, 180, 270]
        .iter()
        .flat_map(|&hue| {
            [
                FlowStep::hsv(hue, 100, 100, beat),
                FlowStep::hsv(hue, 100, 1, beat),
            ]
        })
        .collect()
}

fn temperature_cycle() -> Vec<FlowStep> {
    vec![
        FlowStep::temperature(1700, 100, 40_000),
        FlowStep::temperature(6500, 100, 40_000),
    ]
}

fn strobe() -> Vec<FlowStep> {
    vec![FlowStep::hsv(0, 0, 100, 50), FlowStep::sleep(50)]
}

fn color_strobe() -> Vec<FlowStep> {
    vec![FlowStep::hsv(240, 100, 100, 50), FlowStep::hsv(60, 100, 100, 50)]
}

fn alarm(duration_ms: u64) -> Vec<FlowStep> {
    vec![
        FlowStep::hsv(0, 100, 100, duration_ms),
        FlowStep::hsv(0, 100, 60, duration_ms),
    ]
}

fn police(duration_ms: u64) -> Vec<FlowStep> {
    vec![
        FlowStep::rgb(255, 0, 0, 100, duration_ms),
        FlowStep::rgb(0, 0, 255, 100, duration_ms),
    ]
}

fn police_pulse(duration_ms: u64) -> Vec<FlowStep> {
    vec![
        FlowStep::rgb(255, 0, 0, 100, duration_ms),
        FlowStep::rgb(255, 0, 0, 1, duration_ms),
        FlowStep::rgb(255, 0, 0, 100, duration_ms),
        FlowStep::sleep(duration_ms),
        FlowStep::rgb(0, 0, 255, 100, duration_ms),
        FlowStep::rgb(0, 0, 255, 1, duration_ms),
        FlowStep::rgb(0, 0, 255, 100, duration_ms),
        FlowStep::sleep(duration_ms),
    ]
}

fn christmas(duration_ms: u64, sleep_ms: u64) -> Vec<FlowStep> {
    vec![
        FlowStep::rgb(255, 0, 0, 100, duration_ms),
        FlowStep::sleep(sleep_ms),
        FlowStep::rgb(0, 255, 0, 100, duration_ms),
        FlowStep::sleep(sleep_ms),
    ]
}

fn rgb_cycle(duration_ms: u64, sleep_ms: u64) -> Vec<FlowStep> {
    vec![
        FlowStep::rgb(255, 0, 0, 100, duration_ms),
        FlowStep::sleep(sleep_ms),
        FlowStep::rgb(0, 255, 0, 100, duration_ms),
        FlowStep::sleep(sleep_ms),
        FlowStep::rgb(0, 0, 255, 100, duration_ms),
        FlowStep::sleep(sleep_ms),
    ]
}

fn random_loop(duration_ms: u64, count: usize) -> Vec<FlowStep> {
    let mut hues = HueSequence::new();
    (0..count)
        .map(|_| FlowStep::hsv(hues.next_hue(), 100, 100, duration_ms))
        .collect()
}

fn lsd(duration_ms: u64) -> Vec<FlowStep> {
    [(3, 85), (20, 90), (55, 95), (93, 50), (198, 97)]
        .iter()
        .map(|&(hue, saturation)| FlowStep::hsv(hue, saturation, 100, duration_ms))
        .collect()
}

fn slow_down(duration_ms: u64, count: u64) -> Vec<FlowStep> {
    let mut hues = HueSequence::new();
    (1..=count)
        .map(|step| FlowStep::hsv(hues.next_hue(), 100, 100, duration_ms * step))
        .collect()
}

/// Small time-seeded generator for the random-hue effects.
struct HueSequence {
    state: u64,
}

impl HueSequence {
    fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5DEECE66D);
        HueSequence { state: seed | 1 }
    }

    fn next_hue(&mut self) -> u16 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 33) % 360) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indexes() {
        for (position, effect) in Effect::iter().enumerate() {
            assert_eq!(effect.index() as usize, position + 1);
            assert_eq!(Effect::create(effect.index()), Some(effect));
        }
        assert_eq!(Effect::iter().count(), 12);
    }

    #[test]
    fn test_sentinel_and_out_of_range() {
        assert_eq!(Effect::create(0), None);
        assert_eq!(Effect::create(13), None);
    }

    #[test]
    fn test_programs_repeat_forever() {
        for effect in Effect::iter() {
            let program = effect.program();
            assert!(program.repeats_forever());
            assert!(!program.steps().is_empty());
        }
    }

    #[test]
    fn test_police_steps() {
        let program = Effect::Police.program();
        assert_eq!(
            program.steps(),
            &[
                FlowStep::rgb(255, 0, 0, 100, 300),
                FlowStep::rgb(0, 0, 255, 100, 300),
            ]
        );
    }

    #[test]
    fn test_random_hues_in_range() {
        let mut hues = HueSequence::new();
        for _ in 0..1000 {
            assert!(hues.next_hue() < 360);
        }
    }

    #[test]
    fn test_slow_down_durations_grow() {
        let program = Effect::SlowDown.program();
        let durations: Vec<u64> = program
            .steps()
            .iter()
            .map(|step| match step {
                FlowStep::Rgb { duration_ms, .. } => *duration_ms,
                _ => panic!("unexpected step kind"),
            })
            .collect();
        assert!(durations.windows(2).all(|w| w[0] < w[1]));
    }
}
