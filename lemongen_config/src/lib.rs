use std::{
    error::Error,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use lemongen_error::{ext::LemonErrorExt, ErrorKind, LemonError, LemonResult};
use log::{debug, info};
use serde::Deserialize;

/// Contents of a `Lemongen.toml` file. Every section is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LemongenToml {
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Extra flags handed to the generator ahead of the grammar file
    #[serde(default)]
    pub args: Vec<String>,
}

impl LemongenToml {
    pub const CONFIG_FILE: &'static str = "Lemongen.toml";

    /// Loads `path` if given, otherwise `Lemongen.toml` from `dir` when present
    pub fn load(path: Option<&Path>, dir: &Path) -> LemonResult<LemongenToml> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (dir.join(Self::CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!("No {} in {}, using defaults", Self::CONFIG_FILE, dir.display());
            return Ok(LemongenToml::default());
        }

        info!("Loading configuration from {}", path.display());
        Self::deserialize(&path)
            .map_err(|e| LemonError::error(ErrorKind::Config, e))
            .with_path(|_| path.clone())
    }

    pub fn deserialize(path: &PathBuf) -> Result<LemongenToml, ConfigError> {
        let mut file =
            File::open(path).map_err(|e| ConfigError::MissingConfig(path.clone(), e))?;

        let mut config_file = String::new();
        file.read_to_string(&mut config_file)
            .map_err(ConfigError::FileReadError)?;

        Self::parse(&config_file)
    }

    pub fn parse(s: &str) -> Result<LemongenToml, ConfigError> {
        toml::from_str(s).map_err(ConfigError::MalformedFormat)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    MissingConfig(PathBuf, std::io::Error),
    FileReadError(std::io::Error),
    MalformedFormat(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingConfig(p, e) => write!(f, "Could not open {:?}: {}", p, e),
            ConfigError::FileReadError(e) => write!(f, "{e}"),
            ConfigError::MalformedFormat(e) => write!(f, "{}", e.message()),
        }
    }
}

impl Error for ConfigError {}
