use std::result;

use thiserror::Error;

/// A type alias for handling errors raised by the sampler's collaborators.
pub type Result<T> = result::Result<T, RxError>;

/// An error that can occur while reading the platform's network state.
///
/// None of these are fatal; the sampler logs them and carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RxError {
    /// The received-byte counter could not be read.
    #[error("Counter unavailable, {0}")]
    CounterUnavailable(String),
    /// The connectivity state could not be determined.
    #[error("Connectivity unknown, {0}")]
    ConnectivityUnknown(String),
}
