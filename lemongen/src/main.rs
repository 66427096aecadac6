use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, CommandTrait};
use lemongen_config::LemongenToml;
use lemongen_diagnostics::Diagnostics;

pub mod cli;
pub mod generate;

fn main() -> Result<()> {
    let mut args = Cli::parse();

    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cwd = std::env::current_dir()?;
    let config = match LemongenToml::load(args.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(err) => {
            let diag = Diagnostics::new();
            diag.push_error(err);
            _ = diag.finish_stage();
            return Err(anyhow!("Could not load the configuration"));
        }
    };

    args.command.execute(config)?;
    Ok(())
}
