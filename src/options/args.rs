// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "rxb [OPTIONS]";

/// The arguments for rxburst.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        help = "Starts with traffic sampling disabled.",
        long_help = "Starts with traffic sampling disabled, overriding the config file. Nothing \
                    will be shown."
    )]
    pub disable: bool,

    #[arg(
        long,
        help = "Prints one line per update instead of rewriting a single line.",
        long_help = "Prints one line per update instead of rewriting a single line in place. \
                    This is the default if the output is not a terminal."
    )]
    pub plain: bool,

    #[arg(
        long,
        value_name = "TIME",
        help = "Exits after running for the given time.",
        long_help = indoc! {
            "Exits after running for the given time. Takes a number in milliseconds or a human \
            duration (e.g. 30s). If not set, runs until interrupted."
        }
    )]
    pub run_for: Option<String>,
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}

/// Returns the parsed [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}
