//! Received-traffic counters and connectivity via sysinfo.

use std::net::IpAddr;

use sysinfo::{NetworkData, Networks};

use crate::{
    platform::{ConnectivitySource, CounterSource},
    utils::error::Result,
};

/// Whether an interface name refers to a loopback device.
fn is_loopback_interface(name: &str) -> bool {
    name == "lo" || name.starts_with("lo0") || name.starts_with("Loopback")
}

/// Whether an address can actually route traffic off the machine.
fn is_routable(addr: &IpAddr) -> bool {
    if addr.is_loopback() || addr.is_unspecified() {
        return false;
    }

    match addr {
        IpAddr::V4(v4) => !v4.is_link_local(),
        IpAddr::V6(v6) => (v6.segments()[0] & 0xffc0) != 0xfe80,
    }
}

fn has_routable_address(data: &NetworkData) -> bool {
    data.ip_networks()
        .iter()
        .any(|network| is_routable(&network.addr))
}

/// Sums the received bytes of every non-loopback interface.
fn total_received<'a>(
    interfaces: impl IntoIterator<Item = (&'a String, &'a NetworkData)>,
) -> u64 {
    interfaces
        .into_iter()
        .filter(|(name, _)| !is_loopback_interface(name))
        .fold(0u64, |acc, (_, data)| acc.saturating_add(data.total_received()))
}

/// A [`CounterSource`] reading the cumulative received bytes of all
/// non-loopback interfaces.
///
/// An interface disappearing makes the sum go down, which the sampler handles
/// as a counter reset.
pub struct SysinfoCounter {
    networks: Networks,
}

impl Default for SysinfoCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCounter {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl CounterSource for SysinfoCounter {
    fn total_rx_bytes(&mut self) -> Result<u64> {
        self.networks.refresh(true);
        Ok(total_received(self.networks.list()))
    }
}

/// A [`ConnectivitySource`] that considers the machine connected if any
/// non-loopback interface has a routable address.
pub struct SysinfoConnectivity {
    networks: Networks,
}

impl Default for SysinfoConnectivity {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoConnectivity {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl ConnectivitySource for SysinfoConnectivity {
    fn is_connected(&mut self) -> Result<bool> {
        self.networks.refresh(true);

        Ok(self
            .networks
            .list()
            .iter()
            .any(|(name, data)| !is_loopback_interface(name) && has_routable_address(data)))
    }
}
