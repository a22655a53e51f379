//! # yeelight_control_rs
//!
//! An async Rust library for controlling Yeelight smart bulbs over a local
//! network.
//!
//! The crate models each bulb as a locally cached state plus a
//! command-translation engine: abstract commands (power, brightness, color
//! temperature, RGB, HSV, named colors, fades, canned effects) are turned
//! into the right sequence of device calls, with automatic power-on before
//! color changes, per-command transition durations, and no-op avoidance.
//! Periodic refreshes reconcile the cache against the device and surface
//! edge-triggered power notifications.
//!
//! The wire protocol itself is out of scope: the engine drives any
//! [`DeviceHandle`] implementation, which makes it straightforward to test
//! and to plug different transports in.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yeelight_control_rs::{Bulb, Command, DeviceIdentity};
//!
//! async fn control(handle: impl yeelight_control_rs::DeviceHandle) -> Result<(), Box<dyn std::error::Error>> {
//!     let identity = DeviceIdentity::manual("0x000000000d4e31", "192.168.1.40", Some("Desk"));
//!     let mut bulb = Bulb::new(&identity, handle);
//!
//!     // Reconcile the cache, then fade the bulb to golden.
//!     bulb.refresh().await?;
//!     bulb.apply(&Command::SetNamedColor { id: 9 }).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Cached state**: [`BulbState`] mirrors each device's last-known
//!   properties and survives the device going offline
//! - **Commands**: the closed [`Command`] set covers power, brightness
//!   steps and fades, color temperature, RGB/HSV, and named colors
//! - **Catalogs**: 24 [`NamedColor`]s and 12 canned [`Effect`] flow programs
//! - **Edge detection**: refreshes report [`PowerEdge`]s exactly once per
//!   actual on/off transition
//! - **Fleet handling**: a [`Registry`] refreshes many bulbs in parallel,
//!   with per-device failure isolation

mod bulb;
mod colors;
mod command;
mod device;
mod effects;
mod errors;
mod identity;
mod registry;
mod state;
mod types;

// Re-export public API
pub use bulb::Bulb;
pub use colors::NamedColor;
pub use command::{Command, FADE_DURATION_MS, MIN_DURATION_MS};
pub use device::{DeviceError, DeviceHandle, DeviceProperties};
pub use effects::{Effect, FlowProgram, FlowStep};
pub use errors::Error;
pub use identity::DeviceIdentity;
pub use registry::Registry;
pub use state::{BulbState, DEFAULT_DURATION_MS, PowerEdge};
pub use types::{Brightness, Color, Hue, HueSaturation, Kelvin, Saturation};
