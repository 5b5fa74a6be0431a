//! The sampler thread. A [`TrafficSampler`] is owned by exactly one thread,
//! which applies incoming [`SamplerEvent`]s and fires ticks in between them,
//! so nothing ever touches the sampler concurrently.

use std::{
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc, Mutex,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::{platform::Scheduler, sampler::TrafficSampler};

/// Events that drive the sampler thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerEvent {
    Configure(bool),
    ConnectivityChanged,
    Attach,
    Detach,
    ScreenStateChanged(bool),
    Terminate,
}

/// A [`Scheduler`] that holds at most one pending deadline, which the sampler
/// thread waits on.
///
/// Clones share the same deadline.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    deadline: Arc<Mutex<Option<Instant>>>,
}

impl TickTimer {
    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.deadline.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Takes the deadline if it has been reached by `now`.
    fn take_due(&self, now: Instant) -> bool {
        let mut guard = match self.deadline.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        match *guard {
            Some(deadline) if deadline <= now => {
                *guard = None;
                true
            }
            _ => false,
        }
    }

    fn set(&self, deadline: Option<Instant>) {
        match self.deadline.lock() {
            Ok(mut guard) => *guard = deadline,
            Err(poisoned) => *poisoned.into_inner() = deadline,
        }
    }
}

impl Scheduler for TickTimer {
    fn post_delayed(&mut self, delay: Duration) {
        self.set(Some(Instant::now() + delay));
    }

    fn cancel(&mut self) {
        self.set(None);
    }
}

/// A handle to a running sampler thread.
pub struct SamplerHandle {
    sender: mpsc::Sender<SamplerEvent>,
    thread: JoinHandle<TrafficSampler>,
}

impl SamplerHandle {
    /// Sends an event to the sampler thread. Returns false if the thread has
    /// already exited.
    pub fn send(&self, event: SamplerEvent) -> bool {
        self.sender.send(event).is_ok()
    }

    /// Attaches the sampler and configures it. Returns false, with a warning,
    /// if the sampler thread has already exited.
    pub fn attach_and_configure(&self, enabled: bool) -> bool {
        let delivered =
            self.send(SamplerEvent::Attach) && self.send(SamplerEvent::Configure(enabled));

        if !delivered {
            warn!("The sampler thread exited before it could be configured.");
        }

        delivered
    }

    /// A sender that can be handed to other threads, such as a connectivity
    /// watcher.
    pub fn sender(&self) -> mpsc::Sender<SamplerEvent> {
        self.sender.clone()
    }

    /// Terminates the sampler thread and returns the sampler it owned.
    pub fn shutdown(self) -> thread::Result<TrafficSampler> {
        let _ = self.sender.send(SamplerEvent::Terminate);
        self.thread.join()
    }
}

/// Spawns the thread owning `sampler`. `timer` must be the scheduler the
/// sampler was built with.
pub fn create_sampler_thread(sampler: TrafficSampler, timer: TickTimer) -> SamplerHandle {
    let (sender, receiver) = mpsc::channel();

    let thread = thread::spawn(move || {
        let mut sampler = sampler;

        loop {
            let event = match timer.deadline() {
                Some(deadline) => {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match receiver.recv_timeout(wait) {
                        Ok(event) => Some(event),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match receiver.recv() {
                    Ok(event) => Some(event),
                    Err(_) => break,
                },
            };

            match event {
                Some(SamplerEvent::Configure(enabled)) => sampler.configure(enabled),
                Some(SamplerEvent::ConnectivityChanged) => sampler.on_connectivity_changed(),
                Some(SamplerEvent::Attach) => sampler.attach(),
                Some(SamplerEvent::Detach) => sampler.detach(),
                Some(SamplerEvent::ScreenStateChanged(on)) => sampler.on_screen_state_changed(on),
                Some(SamplerEvent::Terminate) => break,
                None => {
                    if timer.take_due(Instant::now()) {
                        sampler.on_tick();
                    }
                }
            }
        }

        debug!("Sampler thread exiting.");
        sampler.stop();
        sampler
    });

    SamplerHandle { sender, thread }
}
