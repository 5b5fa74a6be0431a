use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use rxburst::{
    collection::SysinfoConnectivity,
    create_connectivity_thread,
    options::{args, get_config_path, get_or_create_config, init_settings},
    spawn_system_sampler, stdout_is_terminal,
    utils::cancellation_token::CancellationToken,
};

fn main() -> Result<()> {
    let args = args::get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        rxburst::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let config_path = get_config_path(args.config_location.as_deref().map(std::path::Path::new));
    let config = get_or_create_config(config_path.as_deref())
        .context("Unable to properly parse or create the config file.")?;
    let settings = init_settings(&args, &config, stdout_is_terminal())
        .context("Found an issue while trying to build the settings.")?;

    // Set termination hook
    let cancellation_token = Arc::new(CancellationToken::default());
    {
        let cancellation_token = cancellation_token.clone();
        ctrlc::set_handler(move || {
            cancellation_token.cancel();
        })?;
    }

    let sampler = spawn_system_sampler(settings.inline);
    sampler.attach_and_configure(settings.enabled);

    let connectivity_thread = create_connectivity_thread(
        SysinfoConnectivity::new(),
        sampler.sender(),
        cancellation_token.clone(),
    );

    cancellation_token.wait(settings.run_for);
    cancellation_token.cancel();

    sampler
        .shutdown()
        .map_err(|_| anyhow!("The sampler thread panicked."))?;
    connectivity_thread
        .join()
        .map_err(|_| anyhow!("The connectivity thread panicked."))?;

    Ok(())
}
