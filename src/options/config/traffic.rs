use serde::Deserialize;

/// Traffic sampler configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct TrafficConfig {
    /// Whether sampling is enabled on startup.
    pub enabled: Option<bool>,
}
