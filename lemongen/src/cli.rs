use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lemongen_config::LemongenToml;
use lemongen_driver::Outputs;

use crate::generate::{Generate, Template};

#[derive(Parser)]
#[command(
    name = "lemongen",
    version,
    about = "Runs lemon and moves its output where the build wants it"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Log every step
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Configuration file, `Lemongen.toml` in the current directory by default
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate with the generator's built-in template
    Generate(Generate),
    /// Generate with an explicit template file
    Template(Template),
}

pub trait CommandTrait {
    type In;
    type Out;

    fn execute(&mut self, input: Self::In) -> Result<Self::Out>;
}

impl CommandTrait for Commands {
    type In = LemongenToml;
    type Out = Outputs;

    fn execute(&mut self, config: LemongenToml) -> Result<Outputs> {
        match self {
            Commands::Generate(g) => g.execute(config),
            Commands::Template(t) => t.execute(config),
        }
    }
}
