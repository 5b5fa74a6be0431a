//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub use error::{OptionError, OptionResult};

use self::{args::Args, config::Config};
use crate::constants::*;

/// The resolved settings the binary runs with, after merging the arguments
/// over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub enabled: bool,
    pub inline: bool,
    pub run_for: Option<Duration>,
}

/// Returns the config path to use. If `override_config_path` is set, that is
/// used; otherwise the default location under the user's config directory.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_CONFIG_FILE_LOCATION);
        path
    })
}

/// Get the config at `config_path`. If there is no config file at the given
/// path, a default one is written there.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let Some(path) = config_path else {
        // Don't write, the config path was somehow None...
        return Ok(Config::default());
    };

    if let Ok(config_string) = fs::read_to_string(path) {
        Ok(toml_edit::de::from_str(&config_string)?)
    } else {
        if let Some(parent_path) = path.parent() {
            fs::create_dir_all(parent_path)?;
        }

        fs::File::create(path)
            .and_then(|mut file| file.write_all(CONFIG_TEXT.as_bytes()))
            .map_err(|err| {
                OptionError::other(format!(
                    "failed to create a default config file at '{}': {err}",
                    path.display()
                ))
            })?;

        Ok(Config::default())
    }
}

/// Parses a time value that is either a number in milliseconds or a human
/// duration such as `30s`.
fn parse_time(value: &str) -> Option<Duration> {
    let value = value.trim();

    if let Ok(ms) = value.parse::<u64>() {
        Some(Duration::from_millis(ms))
    } else {
        humantime::parse_duration(value).ok()
    }
}

/// Merges the arguments over the config file.
///
/// `is_terminal` is whether the output is a terminal; without one the display
/// always prints plain lines.
pub fn init_settings(args: &Args, config: &Config, is_terminal: bool) -> OptionResult<Settings> {
    let enabled = !args.disable && config.traffic.enabled.unwrap_or(true);
    let inline = is_terminal && !args.plain && config.display.inline.unwrap_or(true);

    let run_for = match &args.run_for {
        Some(value) => match parse_time(value) {
            Some(duration) if !duration.is_zero() => Some(duration),
            _ => return Err(OptionError::invalid_arg_value("run-for", value)),
        },
        None => None,
    };

    Ok(Settings {
        enabled,
        inline,
        run_for,
    })
}
