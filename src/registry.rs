//! Registry of known bulbs, keyed by derived device address.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use futures::future::join_all;
use log::{info, warn};

use crate::bulb::Bulb;
use crate::command::Command;
use crate::device::DeviceHandle;
use crate::errors::Error;
use crate::identity::DeviceIdentity;
use crate::state::{BulbState, PowerEdge};

type Result<T> = std::result::Result<T, Error>;

/// Owns the set of known bulbs for the process lifetime.
///
/// Bulbs are registered once per derived address and never removed; a bulb
/// that goes offline keeps failing individual operations while the rest of
/// the registry keeps working. Refreshes fan out in parallel and complete
/// independently, so one slow device never delays the others.
pub struct Registry<H: DeviceHandle> {
    bulbs: HashMap<String, Bulb<H>>,
}

impl<H: DeviceHandle> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DeviceHandle> Registry<H> {
    pub fn new() -> Self {
        Registry {
            bulbs: HashMap::new(),
        }
    }

    /// Register a newly observed device.
    ///
    /// Idempotent: an already-known address keeps its existing bulb (and its
    /// cached state) untouched.
    pub fn register(&mut self, identity: &DeviceIdentity, handle: H) -> &Bulb<H> {
        match self.bulbs.entry(identity.address().to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                info!(
                    "adding bulb id: {}, name: {}",
                    identity.address(),
                    identity.display_name()
                );
                entry.insert(Bulb::new(identity, handle))
            }
        }
    }

    pub fn get(&self, address: &str) -> Option<&Bulb<H>> {
        self.bulbs.get(address)
    }

    pub fn get_mut(&mut self, address: &str) -> Option<&mut Bulb<H>> {
        self.bulbs.get_mut(address)
    }

    pub fn len(&self) -> usize {
        self.bulbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bulbs.is_empty()
    }

    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.bulbs.keys().map(String::as_str)
    }

    /// Route a command to the bulb with the given address.
    pub async fn apply(&mut self, address: &str, command: &Command) -> Result<()> {
        let bulb = self
            .bulbs
            .get_mut(address)
            .ok_or_else(|| Error::UnknownDevice(address.to_string()))?;
        bulb.apply(command).await
    }

    /// Refresh every bulb in parallel.
    ///
    /// Each device completes on its own; a failure is logged, reported in
    /// the returned list, and never aborts the other refreshes.
    pub async fn refresh_all(&mut self) -> Vec<(String, Result<Option<PowerEdge>>)> {
        let refreshes = self.bulbs.values_mut().map(|bulb| async move {
            let outcome = bulb.refresh().await;
            if let Err(err) = &outcome {
                warn!("{}: refresh failed: {}", bulb.state().display_name(), err);
            }
            (bulb.address().to_string(), outcome)
        });
        join_all(refreshes).await
    }

    /// Report the cached state of every bulb without contacting any device.
    pub fn report_all(&self) -> Vec<BulbState> {
        self.bulbs.values().map(|bulb| bulb.state().clone()).collect()
    }
}
