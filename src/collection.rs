//! Platform-backed sources for the sampler.

pub mod network;

pub use network::{SysinfoConnectivity, SysinfoCounter};
