use crate::device::DeviceError;

/// All error types that can occur when driving Yeelight bulbs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The device could not be queried during a state refresh; the cached
    /// state was left untouched.
    #[error("device unreachable during refresh: {0}")]
    SyncUnavailable(#[source] DeviceError),

    /// A device write failed or timed out; the cached state was left
    /// untouched except where already committed by earlier sub-steps.
    #[error("device command {operation} failed: {source}")]
    DeviceCommandFailed {
        operation: &'static str,
        #[source]
        source: DeviceError,
    },

    /// The named-color id is outside the catalog (0-23).
    #[error("unknown color id {0}")]
    UnknownColorId(u8),

    /// The effect index is outside the valid range (0-12).
    #[error("invalid effect index {0}")]
    InvalidEffectIndex(u8),

    /// A brightness step was already at its boundary; no device call was
    /// made. Benign.
    #[error("brightness already at its limit; nothing to change")]
    NoEffectiveChange,

    /// The operation requires the device to already be on.
    #[error("device is off")]
    DeviceOff,

    /// No bulb with the given address is registered.
    #[error("unknown device {0}")]
    UnknownDevice(String),
}

impl Error {
    /// Create a new device-command failure for the given operation.
    pub fn command(operation: &'static str, source: DeviceError) -> Self {
        Error::DeviceCommandFailed { operation, source }
    }

    /// Whether this error is benign (the command simply had nothing to do).
    pub fn is_benign(&self) -> bool {
        matches!(self, Error::NoEffectiveChange)
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
