//! A received-traffic meter.
//!
//! A [`TrafficSampler`](sampler::TrafficSampler) polls the system's cumulative
//! received-byte counter once a second, shows the current rate while traffic
//! flows, and shows the total of a burst for a few seconds after it ends.
//! Everything platform-specific is behind the traits in [`platform`].

pub mod utils {
    pub mod cancellation_token;
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod constants;
pub mod display;
pub mod formatter;
pub mod options;
pub mod platform;
pub mod runtime;
pub mod sampler;

use std::{
    io::{self, IsTerminal},
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
};

use log::debug;

use crate::{
    collection::{SysinfoConnectivity, SysinfoCounter},
    constants::CONNECTIVITY_POLL_INTERVAL,
    display::TerminalDisplay,
    platform::{Collaborators, ConnectivitySource, MonotonicClock},
    runtime::{create_sampler_thread, SamplerEvent, SamplerHandle, TickTimer},
    sampler::TrafficSampler,
    utils::cancellation_token::CancellationToken,
};

/// Whether stdout is a terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Builds a sampler backed by sysinfo that writes to stdout, and spawns the
/// thread that owns it.
pub fn spawn_system_sampler(inline: bool) -> SamplerHandle {
    let timer = TickTimer::default();
    let sampler = TrafficSampler::new(Collaborators {
        counter: Box::new(SysinfoCounter::new()),
        connectivity: Box::new(SysinfoConnectivity::new()),
        clock: Box::new(MonotonicClock),
        scheduler: Box::new(timer.clone()),
        display: Box::new(TerminalDisplay::new(io::stdout(), inline)),
    });

    create_sampler_thread(sampler, timer)
}

/// Polls `connectivity` and notifies the sampler thread whenever the
/// connection state flips, until `cancellation_token` is cancelled.
pub fn create_connectivity_thread(
    mut connectivity: impl ConnectivitySource + Send + 'static, sender: Sender<SamplerEvent>,
    cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut last = connectivity.is_connected().unwrap_or(false);

        while !cancellation_token.sleep_with_cancellation(CONNECTIVITY_POLL_INTERVAL) {
            let connected = connectivity.is_connected().unwrap_or(false);

            if connected != last {
                debug!("Connectivity went from {last} to {connected}.");
                last = connected;

                if sender.send(SamplerEvent::ConnectivityChanged).is_err() {
                    debug!("Sampler thread is gone, stopping the connectivity watcher.");
                    break;
                }
            }
        }
    })
}
