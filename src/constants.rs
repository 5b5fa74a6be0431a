use std::time::Duration;

use indoc::indoc;

// Sampling timings.
pub const TICK_INTERVAL_MILLISECONDS: u64 = 1000;
pub const KEEP_VISIBLE_MILLISECONDS: u64 = 3000;
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MILLISECONDS);
pub const KEEP_VISIBLE: Duration = Duration::from_millis(KEEP_VISIBLE_MILLISECONDS);

/// How often the binary re-checks connectivity for change notifications.
pub const CONNECTIVITY_POLL_INTERVAL: Duration = Duration::from_secs(5);

// Byte thresholds used for display scaling.
pub const KIBI_LIMIT: u64 = 1024;
pub const MEBI_LIMIT: u64 = 1024 * 1024;
pub const KIBI_LIMIT_F32: f32 = 1024.0;
pub const MEBI_LIMIT_F32: f32 = 1024.0 * 1024.0;
pub const DECIMAL_KIBI_CEILING: u64 = 10 * KIBI_LIMIT;
pub const DECIMAL_MEBI_CEILING: u64 = 10 * MEBI_LIMIT;

// Config and flags
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "rxburst/rxburst.toml";

/// Default text for the config file.
pub const CONFIG_TEXT: &str = indoc! {r#"
    # This is a default config file for rxburst. All of the settings are commented
    # out by default; if you wish to change them uncomment and modify as you see
    # fit.

    # Settings for the received-traffic sampler.
    [traffic]
    # Whether sampling is enabled on startup.
    #enabled = true

    # Settings for how the traffic text is written to the terminal.
    [display]
    # Rewrite a single line in place. If false, prints one line per update.
    #inline = true
"#};
