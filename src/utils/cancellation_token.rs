use std::{
    sync::{Condvar, Mutex},
    time::{Duration, Instant},
};

/// A cancellation token shared between the main thread, the ctrl-c handler
/// and helper threads.
pub struct CancellationToken {
    // Setting this to true marks the token as cancelled.
    mutex: Mutex<bool>,
    cvar: Condvar,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self {
            mutex: Mutex::new(false),
            cvar: Condvar::new(),
        }
    }
}

impl CancellationToken {
    /// Mark the [`CancellationToken`] as cancelled.
    ///
    /// This is idempotent, and once cancelled, will stay cancelled.
    pub fn cancel(&self) {
        let mut guard = match self.mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if !*guard {
            *guard = true;
            self.cvar.notify_all();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        match self.mutex.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Sleeps for up to `duration`, waking early if cancelled.
    ///
    /// Returns whether the token is cancelled.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut guard = match self.mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Loop to ride out spurious wakeups.
        while !*guard {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            guard = match self.cvar.wait_timeout(guard, remaining) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }

        *guard
    }

    /// Blocks until cancelled, or until `timeout` passes if one is given.
    ///
    /// Returns whether the token is cancelled.
    pub fn wait(&self, timeout: Option<Duration>) -> bool {
        match timeout {
            Some(timeout) => self.sleep_with_cancellation(timeout),
            None => {
                let mut guard = match self.mutex.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };

                while !*guard {
                    guard = match self.cvar.wait(guard) {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                }

                true
            }
        }
    }
}
