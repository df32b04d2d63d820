use std::process::ExitCode;

use anyhow::{Context, Result};

use rcconf_check::config::Config;
use rcconf_check::report;
use rcconf_check::validation::check_file;
use rcconf_check::watch;

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if config.watch {
        watch::run(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let result = check_file(&config.file)
        .with_context(|| format!("File {} cannot be opened", config.file.display()))?;
    report::emit(&config.file, config.format, &result)?;

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
