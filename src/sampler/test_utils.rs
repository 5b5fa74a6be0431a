//! Recording fakes for the sampler's collaborators.

use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use crate::{
    platform::{Clock, Collaborators, ConnectivitySource, CounterSource, DisplaySink, Scheduler},
    sampler::TrafficSampler,
    utils::error::{Result, RxError},
};

#[derive(Clone, Default)]
pub(crate) struct FakeCounter {
    bytes: Arc<AtomicU64>,
    failing: Arc<AtomicBool>,
}

impl FakeCounter {
    pub(crate) fn set(&self, bytes: u64) {
        self.bytes.store(bytes, Ordering::SeqCst);
    }

    pub(crate) fn add(&self, bytes: u64) {
        self.bytes.fetch_add(bytes, Ordering::SeqCst);
    }

    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl CounterSource for FakeCounter {
    fn total_rx_bytes(&mut self) -> Result<u64> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RxError::CounterUnavailable("fake failure".to_string()))
        } else {
            Ok(self.bytes.load(Ordering::SeqCst))
        }
    }
}

#[derive(Clone)]
pub(crate) struct FakeConnectivity {
    connected: Arc<AtomicBool>,
    failing: Arc<AtomicBool>,
}

impl FakeConnectivity {
    pub(crate) fn set(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl ConnectivitySource for FakeConnectivity {
    fn is_connected(&mut self) -> Result<bool> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RxError::ConnectivityUnknown("fake failure".to_string()))
        } else {
            Ok(self.connected.load(Ordering::SeqCst))
        }
    }
}

/// A clock that only moves when told to.
#[derive(Clone)]
pub(crate) struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub(crate) fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingScheduler {
    pending: Arc<Mutex<Option<Duration>>>,
    posts: Arc<AtomicUsize>,
}

impl RecordingScheduler {
    /// The delay of the pending tick, if there is one.
    pub(crate) fn pending(&self) -> Option<Duration> {
        *self.pending.lock().unwrap()
    }

    pub(crate) fn take(&self) -> Option<Duration> {
        self.pending.lock().unwrap().take()
    }

    /// How many times a tick was posted.
    pub(crate) fn posts(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }
}

impl Scheduler for RecordingScheduler {
    fn post_delayed(&mut self, delay: Duration) {
        *self.pending.lock().unwrap() = Some(delay);
        self.posts.fetch_add(1, Ordering::SeqCst);
    }

    fn cancel(&mut self) {
        *self.pending.lock().unwrap() = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DisplayEvent {
    Text(String),
    Visible(bool),
}

#[derive(Clone, Default)]
pub(crate) struct RecordingDisplay {
    events: Arc<Mutex<Vec<DisplayEvent>>>,
}

impl RecordingDisplay {
    pub(crate) fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn take(&self) -> Vec<DisplayEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub(crate) fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl DisplaySink for RecordingDisplay {
    fn set_text(&mut self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::Text(text.to_string()));
    }

    fn set_visible(&mut self, visible: bool) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::Visible(visible));
    }
}

/// Handles to every fake a test sampler was built with.
#[derive(Clone)]
pub(crate) struct Fakes {
    pub(crate) counter: FakeCounter,
    pub(crate) connectivity: FakeConnectivity,
    pub(crate) clock: ManualClock,
    pub(crate) scheduler: RecordingScheduler,
    pub(crate) display: RecordingDisplay,
}

impl Fakes {
    /// A connected set of fakes with the counter at `initial_bytes`.
    pub(crate) fn new(initial_bytes: u64) -> Self {
        let fakes = Self {
            counter: FakeCounter::default(),
            connectivity: FakeConnectivity {
                connected: Arc::new(AtomicBool::new(true)),
                failing: Arc::default(),
            },
            clock: ManualClock {
                now: Arc::new(Mutex::new(Instant::now())),
            },
            scheduler: RecordingScheduler::default(),
            display: RecordingDisplay::default(),
        };
        fakes.counter.set(initial_bytes);

        fakes
    }

    /// Builds collaborators that share state with these handles, but with the
    /// given scheduler.
    pub(crate) fn collaborators_with_scheduler(
        &self, scheduler: Box<dyn Scheduler + Send>,
    ) -> Collaborators {
        Collaborators {
            counter: Box::new(self.counter.clone()),
            connectivity: Box::new(self.connectivity.clone()),
            clock: Box::new(self.clock.clone()),
            scheduler,
            display: Box::new(self.display.clone()),
        }
    }
}

/// A new sampler wired up to fresh fakes.
pub(crate) fn sampler_with_fakes(initial_bytes: u64) -> (TrafficSampler, Fakes) {
    let fakes = Fakes::new(initial_bytes);
    let sampler = TrafficSampler::new(
        fakes.collaborators_with_scheduler(Box::new(fakes.scheduler.clone())),
    );

    (sampler, fakes)
}
