use serde::Deserialize;

/// Terminal display configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub struct DisplayConfig {
    /// Rewrite one line in place rather than printing a line per update.
    pub inline: Option<bool>,
}
