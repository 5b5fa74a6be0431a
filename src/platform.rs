//! The collaborators a [`TrafficSampler`](crate::sampler::TrafficSampler)
//! talks to. Everything platform-specific sits behind these traits.

use std::time::{Duration, Instant};

use crate::utils::error::Result;

/// A source of the cumulative received-byte count.
pub trait CounterSource {
    /// The total number of bytes received since the last device or interface
    /// reset.
    fn total_rx_bytes(&mut self) -> Result<u64>;
}

/// Tells whether a usable network path currently exists.
pub trait ConnectivitySource {
    fn is_connected(&mut self) -> Result<bool>;
}

/// A monotonic clock.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// A single-timer scheduler. Posting again replaces the pending tick.
pub trait Scheduler {
    /// Schedule the next tick after `delay`.
    fn post_delayed(&mut self, delay: Duration);

    /// Cancel the pending tick, if any.
    fn cancel(&mut self);
}

/// Where the formatted output goes. The sampler never reads anything back.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
    fn set_visible(&mut self, visible: bool);
}

/// A [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The full set of collaborators a sampler is built from.
pub struct Collaborators {
    pub counter: Box<dyn CounterSource + Send>,
    pub connectivity: Box<dyn ConnectivitySource + Send>,
    pub clock: Box<dyn Clock + Send>,
    pub scheduler: Box<dyn Scheduler + Send>,
    pub display: Box<dyn DisplaySink + Send>,
}
