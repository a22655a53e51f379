//! Individual bulb control: state synchronization and command translation.

use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use crate::command::{Command, FADE_DURATION_MS, MIN_DURATION_MS};
use crate::colors::NamedColor;
use crate::device::{DeviceError, DeviceHandle};
use crate::effects::Effect;
use crate::errors::Error;
use crate::identity::DeviceIdentity;
use crate::state::{BulbState, PowerEdge};
use crate::types::{Brightness, Color, Hue, Kelvin, Saturation};

type Result<T> = std::result::Result<T, Error>;

/// One bulb: a transport handle paired with its cached state.
///
/// `refresh` reconciles the cache against freshly queried device properties;
/// `apply` translates an abstract [`Command`] into device calls. Both mutate
/// the cache, so a given bulb must not be refreshed and commanded
/// concurrently; different bulbs are fully independent.
///
/// # Example
///
/// ```no_run
/// use yeelight_control_rs::{Bulb, Command, DeviceIdentity};
/// # use yeelight_control_rs::DeviceHandle;
/// # async fn control<H: DeviceHandle>(handle: H) -> Result<(), Box<dyn std::error::Error>> {
/// let identity = DeviceIdentity::manual("0x000000000d4e31", "192.168.1.40", Some("Desk"));
/// let mut bulb = Bulb::new(&identity, handle);
///
/// bulb.refresh().await?;
/// bulb.apply(&Command::SetNamedColor { id: 9 }).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bulb<H: DeviceHandle> {
    state: BulbState,
    handle: H,
    timeout: Duration,
}

impl<H: DeviceHandle> Bulb<H> {
    const TIMEOUT_MS: u64 = 1000;

    pub fn new(identity: &DeviceIdentity, handle: H) -> Self {
        Bulb {
            state: BulbState::new(identity),
            handle,
            timeout: Duration::from_millis(Self::TIMEOUT_MS),
        }
    }

    /// Override the per-call request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The cached state, last synchronized or committed.
    pub fn state(&self) -> &BulbState {
        &self.state
    }

    pub fn address(&self) -> &str {
        self.state.address()
    }

    /// Query the device and reconcile its properties into the cache.
    ///
    /// Returns the power edge when the device flipped on or off since the
    /// last observation. On failure the cache is left untouched and the
    /// error is scoped to this bulb only.
    pub async fn refresh(&mut self) -> Result<Option<PowerEdge>> {
        let props = match timeout(self.timeout, self.handle.query_properties()).await {
            Ok(Ok(props)) => props,
            Ok(Err(err)) => return Err(Error::SyncUnavailable(err)),
            Err(_) => return Err(Error::SyncUnavailable(DeviceError::Timeout)),
        };
        debug!("{}: properties {:?}", self.state.display_name(), props);
        Ok(self.state.apply_properties(&props))
    }

    /// Translate one abstract command into device calls.
    ///
    /// Validation happens before any device I/O; cache fields are committed
    /// only after the corresponding device call succeeded.
    pub async fn apply(&mut self, command: &Command) -> Result<()> {
        debug!("{}: {}", self.state.display_name(), command.name());
        match command {
            Command::PowerOn { brightness } => self.power_on(*brightness, false).await,
            Command::PowerOnFast => self.power_on(Some(Brightness::new()), true).await,
            Command::PowerOff => self.power_off(false).await,
            Command::PowerOffFast => self.power_off(true).await,
            Command::SetTransition { duration_ms } => {
                self.state.set_transition_ms(*duration_ms);
                Ok(())
            }
            Command::SetColorTemp { kelvin } => self.color_temp(*kelvin, None, None).await,
            Command::SetColorTempBrightness {
                kelvin,
                brightness,
                duration_ms,
            } => {
                self.color_temp(*kelvin, Some(*brightness), Some(*duration_ms))
                    .await
            }
            Command::SetRgb { color, duration_ms } => self.rgb(*color, *duration_ms).await,
            Command::SetNamedColor { id } => self.named_color(*id).await,
            Command::SetHsv {
                color,
                brightness,
                duration_ms,
            } => {
                self.hsv(
                    color.hue(),
                    color.saturation(),
                    *brightness,
                    Some(*duration_ms),
                )
                .await
            }
            Command::SetHue { hue } => {
                let (saturation, brightness) = (self.state.saturation(), self.state.brightness());
                self.hsv(*hue, saturation, brightness, None).await
            }
            Command::SetSaturation { saturation } => {
                let (hue, brightness) = (self.state.hue(), self.state.brightness());
                self.hsv(hue, *saturation, brightness, None).await
            }
            Command::SetBrightness { brightness } => self.brightness_only(*brightness).await,
            Command::Brighten => self.step_brightness(true).await,
            Command::Dim => self.step_brightness(false).await,
            Command::FadeUp => self.fade_up().await,
            Command::FadeDown => self.fade_down().await,
            Command::FadeStop => self.fade_stop().await,
            Command::SetEffect { index } => self.effect(*index).await,
        }
    }

    async fn power_on(&mut self, brightness: Option<Brightness>, fast: bool) -> Result<()> {
        let duration = if fast {
            MIN_DURATION_MS
        } else {
            self.state.transition_ms()
        };
        self.call("set_power", self.handle.set_power(true, duration))
            .await?;
        self.state.set_power(true);

        if let Some(target) = brightness
            && target != self.state.brightness()
        {
            self.call("set_brightness", self.handle.set_brightness(target, duration))
                .await?;
            self.state.set_brightness(target);
        }
        Ok(())
    }

    async fn power_off(&mut self, fast: bool) -> Result<()> {
        let duration = if fast {
            MIN_DURATION_MS
        } else {
            self.state.transition_ms()
        };
        self.call("set_power", self.handle.set_power(false, duration))
            .await?;
        self.state.set_power(false);
        Ok(())
    }

    /// Shared precondition for color/brightness writes: a bulb that is off
    /// is powered on first, and a failure here aborts the whole operation.
    async fn power_on_if_off(&mut self, duration_ms: u64) -> Result<()> {
        if self.state.power() {
            return Ok(());
        }
        self.call("set_power", self.handle.set_power(true, duration_ms))
            .await?;
        self.state.set_power(true);
        Ok(())
    }

    async fn color_temp(
        &mut self,
        kelvin: Kelvin,
        brightness: Option<Brightness>,
        duration_ms: Option<u64>,
    ) -> Result<()> {
        let duration = duration_ms.unwrap_or_else(|| self.state.transition_ms());
        self.power_on_if_off(MIN_DURATION_MS).await?;
        self.call(
            "set_color_temp",
            self.handle.set_color_temp(kelvin, duration),
        )
        .await?;
        self.state.set_color_temp(kelvin);

        if let Some(target) = brightness {
            self.call("set_brightness", self.handle.set_brightness(target, duration))
                .await?;
            self.state.set_brightness(target);
        }
        Ok(())
    }

    async fn rgb(&mut self, color: Color, duration_ms: u64) -> Result<()> {
        self.power_on_if_off(MIN_DURATION_MS).await?;
        self.call("set_rgb", self.handle.set_rgb(color, duration_ms))
            .await?;
        self.state.set_color(color);
        Ok(())
    }

    async fn named_color(&mut self, id: u8) -> Result<()> {
        let named = NamedColor::create(id).ok_or(Error::UnknownColorId(id))?;
        self.power_on_if_off(MIN_DURATION_MS).await?;
        let duration = self.state.transition_ms();
        let color = named.color();
        self.call("set_rgb", self.handle.set_rgb(color, duration))
            .await?;
        self.state.set_color(color);
        Ok(())
    }

    async fn hsv(
        &mut self,
        hue: Hue,
        saturation: Saturation,
        brightness: Brightness,
        duration_ms: Option<u64>,
    ) -> Result<()> {
        self.power_on_if_off(MIN_DURATION_MS).await?;
        let duration = duration_ms.unwrap_or_else(|| self.state.transition_ms());
        self.call(
            "set_hsv",
            self.handle.set_hsv(hue, saturation, brightness, duration),
        )
        .await?;
        self.state.set_hsv(hue, saturation, brightness);
        Ok(())
    }

    /// Brightness-only change. Goes through the brightness device operation
    /// because a bulb in color-temperature mode does not reflect brightness
    /// set through the HSV path.
    async fn brightness_only(&mut self, brightness: Brightness) -> Result<()> {
        self.power_on_if_off(MIN_DURATION_MS).await?;
        let duration = self.state.transition_ms();
        self.call(
            "set_brightness",
            self.handle.set_brightness(brightness, duration),
        )
        .await?;
        self.state.set_brightness(brightness);
        Ok(())
    }

    async fn step_brightness(&mut self, up: bool) -> Result<()> {
        if up {
            self.power_on_if_off(MIN_DURATION_MS).await?;
        }
        let current = self.state.brightness();
        let target = if up {
            current.stepped_up()
        } else {
            current.stepped_down()
        };
        if target == current {
            warn!(
                "{}: brightness already at {}",
                self.state.display_name(),
                current.value()
            );
            return Err(Error::NoEffectiveChange);
        }
        let duration = self.state.transition_ms();
        self.call("set_brightness", self.handle.set_brightness(target, duration))
            .await?;
        self.state.set_brightness(target);
        Ok(())
    }

    async fn fade_up(&mut self) -> Result<()> {
        self.power_on_if_off(MIN_DURATION_MS).await?;
        self.fade_to(Brightness::new(), FADE_DURATION_MS).await
    }

    async fn fade_down(&mut self) -> Result<()> {
        if !self.state.power() {
            return Err(Error::DeviceOff);
        }
        self.fade_to(Brightness::clamped(Brightness::MIN), FADE_DURATION_MS)
            .await
    }

    /// Halt an in-progress fade: re-sync first to capture whatever
    /// brightness the fade reached, then pin the bulb there.
    async fn fade_stop(&mut self) -> Result<()> {
        if !self.state.power() {
            return Err(Error::DeviceOff);
        }
        self.refresh().await?;
        self.fade_to(self.state.brightness(), MIN_DURATION_MS).await
    }

    async fn fade_to(&mut self, target: Brightness, duration_ms: u64) -> Result<()> {
        self.call(
            "set_brightness",
            self.handle.set_brightness(target, duration_ms),
        )
        .await?;
        self.state.set_brightness(target);
        Ok(())
    }

    async fn effect(&mut self, index: u8) -> Result<()> {
        if index == 0 {
            // The stop call is attempted even when the bulb looks off; the
            // cache may be stale and stopping is harmless.
            if !self.state.power() {
                warn!(
                    "{} is off; attempting to stop the effect anyway",
                    self.state.display_name()
                );
            }
            self.call("stop_flow", self.handle.stop_flow()).await?;
            self.state.set_effect_active(false);
            return Ok(());
        }

        let effect = Effect::create(index).ok_or(Error::InvalidEffectIndex(index))?;
        self.power_on_if_off(self.state.transition_ms()).await?;
        let program = effect.program();
        debug!("{}: starting effect {}", self.state.display_name(), effect);
        self.call("start_flow", self.handle.start_flow(&program))
            .await?;
        self.state.set_effect_active(true);
        Ok(())
    }

    /// Run one device call under the request timeout; a timeout is reported
    /// exactly like a transport failure.
    async fn call<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, DeviceError>>,
    {
        match timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(Error::command(operation, err)),
            Err(_) => Err(Error::command(operation, DeviceError::Timeout)),
        }
    }
}
