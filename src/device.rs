//! The device transport boundary.
//!
//! The engine never speaks the wire protocol itself; it drives a
//! [`DeviceHandle`] implementation that owns the connection to one bulb.

use serde::{Deserialize, Serialize};

use crate::effects::FlowProgram;
use crate::types::{Brightness, Color, Hue, Kelvin, Saturation};

/// A transport-level failure from a device call.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The underlying connection failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The device did not answer within the request timeout.
    #[error("request timed out")]
    Timeout,

    /// The device answered, but with something the transport could not
    /// interpret or an explicit error result.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// The property set a bulb reports when queried.
///
/// Values are raw as decoded from the device answer; `rgb` is the packed
/// 24-bit `0xRRGGBB` form and `color_mode` is the device's mode discriminant
/// passed through opaquely.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProperties {
    pub power: bool,
    pub brightness: u8,
    pub hue: u16,
    pub saturation: u8,
    pub color_temp: u16,
    pub rgb: u32,
    pub color_mode: u8,
    pub music_on: bool,
}

/// Remote-control surface of a single bulb.
///
/// Every call may block on network I/O and may fail; the engine applies its
/// own per-call timeout on top. Mutating calls take a transition duration in
/// milliseconds over which the bulb moves to the new state.
pub trait DeviceHandle: Send + Sync {
    fn query_properties(
        &self,
    ) -> impl Future<Output = Result<DeviceProperties, DeviceError>> + Send;

    fn set_power(
        &self,
        on: bool,
        duration_ms: u64,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    fn set_brightness(
        &self,
        brightness: Brightness,
        duration_ms: u64,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    fn set_color_temp(
        &self,
        kelvin: Kelvin,
        duration_ms: u64,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    fn set_rgb(
        &self,
        color: Color,
        duration_ms: u64,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    fn set_hsv(
        &self,
        hue: Hue,
        saturation: Saturation,
        brightness: Brightness,
        duration_ms: u64,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    /// Start a flow program. A running flow is replaced by a new start.
    fn start_flow(
        &self,
        program: &FlowProgram,
    ) -> impl Future<Output = Result<(), DeviceError>> + Send;

    fn stop_flow(&self) -> impl Future<Output = Result<(), DeviceError>> + Send;
}
