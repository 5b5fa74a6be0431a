//! The received-traffic sampler.
//!
//! Every tick reads the cumulative received-byte counter, shows the current
//! rate while traffic flows, and once the traffic stops shows the total of the
//! whole burst for a few seconds before hiding.

#[cfg(test)]
pub(crate) mod test_utils;

use std::time::Instant;

use log::{debug, info};

use crate::{
    constants::{KEEP_VISIBLE, TICK_INTERVAL},
    formatter::format_traffic,
    platform::{Clock, Collaborators, ConnectivitySource, CounterSource, DisplaySink, Scheduler},
};

/// Per-run sampling state. Created by [`TrafficSampler::start`] and dropped
/// whenever sampling stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleState {
    /// The last observed cumulative counter value.
    pub total_rx_bytes: u64,
    pub last_update_time: Instant,
    /// When the current burst window opened; `None` if there is no open window.
    pub burst_start_time: Option<Instant>,
    /// The counter value when the current burst window opened.
    pub burst_start_bytes: u64,
}

impl SampleState {
    fn new(total_rx_bytes: u64, now: Instant) -> Self {
        Self {
            total_rx_bytes,
            last_update_time: now,
            burst_start_time: None,
            burst_start_bytes: total_rx_bytes,
        }
    }
}

pub struct TrafficSampler {
    enabled: bool,
    attached: bool,
    /// The last visibility sent to the display.
    visible: bool,
    /// The display stays up until this deadline even if there is no traffic.
    keep_visible_until: Option<Instant>,
    state: Option<SampleState>,

    counter: Box<dyn CounterSource + Send>,
    connectivity: Box<dyn ConnectivitySource + Send>,
    clock: Box<dyn Clock + Send>,
    scheduler: Box<dyn Scheduler + Send>,
    display: Box<dyn DisplaySink + Send>,
}

impl TrafficSampler {
    /// Creates a disabled, detached sampler.
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            counter,
            connectivity,
            clock,
            scheduler,
            display,
        } = collaborators;

        Self {
            enabled: false,
            attached: false,
            visible: false,
            keep_visible_until: None,
            state: None,
            counter,
            connectivity,
            clock,
            scheduler,
            display,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a sampling run is in progress.
    pub fn is_sampling(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&SampleState> {
        self.state.as_ref()
    }

    /// Sets whether sampling is enabled, and re-applies the settings.
    pub fn configure(&mut self, enabled: bool) {
        debug!("Traffic sampling configured: enabled = {enabled}");
        self.enabled = enabled;
        self.apply_settings();
    }

    /// Re-evaluates whether sampling should run after the network changed.
    pub fn on_connectivity_changed(&mut self) {
        debug!("Connectivity changed.");
        self.apply_settings();
    }

    /// Marks the sampler as attached to its display. Sampling only runs while
    /// attached.
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            self.apply_settings();
        }
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.stop();
        }
    }

    /// Stops sampling while the screen is off and restarts when it comes back,
    /// if still attached.
    pub fn on_screen_state_changed(&mut self, screen_on: bool) {
        if !screen_on {
            self.stop();
        } else if self.attached {
            self.start();
        }
    }

    /// Starts a new sampling run from the current counter value.
    ///
    /// This does nothing if disabled, or if there is no connection. A failing
    /// connectivity or counter source counts as no connection.
    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }

        if !self.connect_available() {
            debug!("Not starting traffic sampling, no connection available.");
            return;
        }

        let total_rx_bytes = match self.counter.total_rx_bytes() {
            Ok(total) => total,
            Err(err) => {
                debug!("Not starting traffic sampling: {err}");
                return;
            }
        };

        self.state = Some(SampleState::new(total_rx_bytes, self.clock.now()));
        self.scheduler.cancel();
        self.scheduler.post_delayed(TICK_INTERVAL);
    }

    /// Cancels the pending tick and clears the text.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        self.state = None;
        self.display.set_text("");
    }

    /// A single sampling step. Reschedules itself while enabled.
    pub fn on_tick(&mut self) {
        if !self.enabled {
            return;
        }

        let Some(mut state) = self.state else {
            return;
        };

        let now = self.clock.now();
        let elapsed_ms = now.saturating_duration_since(state.last_update_time).as_millis();

        if elapsed_ms == 0 {
            // Nothing to measure against yet.
            self.scheduler.post_delayed(TICK_INTERVAL);
            return;
        }

        let current = match self.counter.total_rx_bytes() {
            Ok(current) => current,
            Err(err) => {
                debug!("Skipping traffic sample: {err}");
                self.scheduler.post_delayed(TICK_INTERVAL);
                return;
            }
        };

        let delta = if current < state.total_rx_bytes {
            debug!(
                "Received-byte counter went from {} to {current}, treating it as a reset.",
                state.total_rx_bytes
            );
            state.burst_start_time = None;
            state.burst_start_bytes = current;
            0
        } else {
            current - state.total_rx_bytes
        };

        if delta == 0 {
            if let Some(burst_start_time) = state.burst_start_time {
                let burst_bytes = current.saturating_sub(state.burst_start_bytes);

                if burst_bytes != 0 {
                    self.display.set_text(&format_traffic(burst_bytes, false));

                    info!(
                        "Traffic burst ended: {burst_bytes}B in {}s",
                        now.saturating_duration_since(burst_start_time).as_secs()
                    );
                    self.keep_visible_until = Some(now + KEEP_VISIBLE);
                    state.burst_start_time = None;
                    state.burst_start_bytes = current;
                }
            }

            // Hide if there is no traffic.
            let deadline_passed = match self.keep_visible_until {
                Some(deadline) => now >= deadline,
                None => true,
            };

            if self.visible && deadline_passed {
                self.display.set_text("");
                self.show(false);
            }
        } else {
            if state.burst_start_time.is_none() {
                state.burst_start_time = Some(state.last_update_time);
                state.burst_start_bytes = state.total_rx_bytes;
            }

            let bytes_per_second = u128::from(delta) * 1000 / elapsed_ms;
            let bytes_per_second = u64::try_from(bytes_per_second).unwrap_or(u64::MAX);
            self.display.set_text(&format_traffic(bytes_per_second, true));

            self.show(true);
        }

        state.total_rx_bytes = current;
        state.last_update_time = now;
        self.state = Some(state);

        if self.enabled {
            self.scheduler.post_delayed(TICK_INTERVAL);
        }
    }

    fn apply_settings(&mut self) {
        if self.enabled && self.connect_available() {
            self.display.set_visible(true);
            self.visible = true;

            if self.attached {
                self.start();
            }
        } else {
            self.scheduler.cancel();
            self.state = None;
            self.display.set_visible(false);
            self.visible = false;
            self.display.set_text("");
        }
    }

    fn connect_available(&mut self) -> bool {
        match self.connectivity.is_connected() {
            Ok(connected) => connected,
            Err(err) => {
                debug!("Treating unknown connectivity as disconnected: {err}");
                false
            }
        }
    }

    /// Only sends a visibility change if it differs from the last one sent.
    fn show(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.display.set_visible(visible);
        }
    }
}
