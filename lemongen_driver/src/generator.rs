use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use lemongen_config::LemongenToml;
use lemongen_error::{ext::LemonErrorExt, ErrorKind, LemonError, LemonResult};
use log::{debug, info};

/// The external parser generator and the flags it is run with
#[derive(Debug, Clone)]
pub struct Generator {
    pub executable: PathBuf,
    pub template: Option<PathBuf>,
    pub args: Vec<String>,
}

impl Generator {
    /// Flag prefix the generator takes a template file with, e.g. `-Tlempar.c`
    pub const TEMPLATE_FLAG: &'static str = "-T";

    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Generator {
            executable: executable.into(),
            template: None,
            args: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_config(self, config: &LemongenToml) -> Self {
        self.with_args(config.generator.args.iter().cloned())
    }

    fn template_arg(&self) -> Option<OsString> {
        self.template.as_ref().map(|template| {
            let mut arg = OsString::from(Self::TEMPLATE_FLAG);
            arg.push(template);
            arg
        })
    }

    /// `<executable> [args...] [-T<template>] <grammar>`
    pub fn command(&self, grammar: &Path) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(&self.args);
        if let Some(template) = self.template_arg() {
            command.arg(template);
        }
        command.arg(grammar);
        command
    }

    /// Runs the generator to completion. Its output goes straight to ours
    pub fn run(&self, grammar: &Path) -> LemonResult<()> {
        let mut command = self.command(grammar);
        info!("Running {:?}", command);

        let status = command.status().map_err(|e| {
            LemonError::error(
                ErrorKind::Spawn,
                format!("Could not run {}: {}", self.executable.display(), e),
            )
            .with_path(|_| self.executable.clone())
        })?;

        debug!("{} exited with {}", self.executable.display(), status);
        if status.success() {
            Ok(())
        } else {
            Err(LemonError::error(
                ErrorKind::GeneratorFailed,
                format!("{} failed to process the grammar", self.executable.display()),
            )
            .with_path(|_| grammar.to_path_buf())
            .with_note(|_| describe_status(status)))
        }
    }
}

#[cfg(unix)]
fn describe_status(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => format!("exit status {code}"),
        (None, Some(signal)) => format!("terminated by signal {signal}"),
        (None, None) => status.to_string(),
    }
}

#[cfg(not(unix))]
fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
pub mod test {
    use std::{ffi::OsStr, path::Path};

    use lemongen_config::LemongenToml;

    use super::Generator;

    fn args(generator: &Generator, grammar: &str) -> Vec<String> {
        generator
            .command(Path::new(grammar))
            .get_args()
            .map(OsStr::to_string_lossy)
            .map(|s| s.into_owned())
            .collect()
    }

    #[test]
    pub fn plain_invocation() {
        let generator = Generator::new("lemon");

        assert_eq!(generator.command(Path::new("grammar.y")).get_program(), "lemon");
        assert_eq!(args(&generator, "grammar.y"), vec!["grammar.y"]);
    }

    #[test]
    pub fn template_is_passed_as_one_flag() {
        let generator = Generator::new("lemon").with_template("lempar.c");

        assert_eq!(args(&generator, "grammar.y"), vec!["-Tlempar.c", "grammar.y"]);
    }

    #[test]
    pub fn config_args_come_first() {
        let config = LemongenToml::parse("[generator]\nargs = [\"-s\"]\n").unwrap();
        let generator = Generator::new("lemon")
            .with_template("lempar.c")
            .with_config(&config);

        assert_eq!(
            args(&generator, "grammar.y"),
            vec!["-s", "-Tlempar.c", "grammar.y"]
        );
    }
}
