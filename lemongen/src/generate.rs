use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use lemongen_config::LemongenToml;
use lemongen_diagnostics::Diagnostics;
use lemongen_driver::{Driver, Generator, Invocation, Outputs};
use lemongen_error::ErrorLevel;
use log::info;

use crate::cli::CommandTrait;

#[derive(Debug, Args)]
pub struct GrammarFiles {
    /// Grammar to feed the generator
    pub grammar: PathBuf,
    /// Where the generated C source goes
    pub output_source: PathBuf,
    /// Where the generated header goes
    pub output_header: PathBuf,
}

impl GrammarFiles {
    fn run(&self, generator: Generator) -> Result<Outputs> {
        let invocation = Invocation {
            generator,
            grammar: self.grammar.clone(),
            output_source: self.output_source.clone(),
            output_header: self.output_header.clone(),
        };

        let diag = Diagnostics::new();
        match Driver::run(&invocation, &diag) {
            Ok(outputs) => {
                let warnings = diag.count(ErrorLevel::Warning);
                diag.flush()?;
                info!(
                    "Generated {} and {} with {} warning{}",
                    outputs.source.display(),
                    outputs.header.display(),
                    warnings,
                    if warnings == 1 { "" } else { "s" }
                );
                Ok(outputs)
            }
            Err(err) => {
                diag.push_error(err);
                _ = diag.finish_stage();
                Err(anyhow!(
                    "Failed to generate a parser from {}",
                    self.grammar.display()
                ))
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct Generate {
    /// Generator executable
    pub generator: PathBuf,
    #[command(flatten)]
    pub files: GrammarFiles,
}

impl CommandTrait for Generate {
    type In = LemongenToml;
    type Out = Outputs;

    fn execute(&mut self, config: LemongenToml) -> Result<Outputs> {
        let generator = Generator::new(&self.generator).with_config(&config);
        self.files.run(generator)
    }
}

#[derive(Debug, Args)]
pub struct Template {
    /// Generator executable
    pub generator: PathBuf,
    /// Template the generator builds the parser from
    pub template: PathBuf,
    #[command(flatten)]
    pub files: GrammarFiles,
}

impl CommandTrait for Template {
    type In = LemongenToml;
    type Out = Outputs;

    fn execute(&mut self, config: LemongenToml) -> Result<Outputs> {
        let generator = Generator::new(&self.generator)
            .with_template(&self.template)
            .with_config(&config);
        self.files.run(generator)
    }
}
