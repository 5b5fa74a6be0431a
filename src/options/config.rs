pub mod display;
pub mod traffic;

use serde::Deserialize;

use self::{display::DisplayConfig, traffic::TrafficConfig};

/// The overall config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct Config {
    #[serde(default)]
    pub traffic: TrafficConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
