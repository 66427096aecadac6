use std::{fmt::Display, path::PathBuf};

use ansi_term::{
    Colour,
    Colour::{Blue, Red, White, Yellow},
};

pub mod ext;

pub type LemonResult<T> = Result<T, LemonError>;

#[derive(Debug, Clone)]
pub struct LemonError {
    // Required
    level: ErrorLevel,
    kind: ErrorKind,
    message: String,

    // Optional
    path: Option<PathBuf>,
    notes: Vec<String>,
}

impl LemonError {
    pub fn new(level: ErrorLevel, kind: ErrorKind, message: impl Display) -> Self {
        Self {
            level,
            kind,
            message: message.to_string(),
            path: None,
            notes: Vec::new(),
        }
    }

    /// Fatal error of the given kind
    pub fn error(kind: ErrorKind, message: impl Display) -> Self {
        Self::new(ErrorLevel::Error, kind, message)
    }

    /// Non fatal warning, the run continues
    pub fn warning(kind: ErrorKind, message: impl Display) -> Self {
        Self::new(ErrorLevel::Warning, kind, message)
    }

    /// Wraps an io error raised while touching `path`
    pub fn io(kind: ErrorKind, err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let message = match kind {
            ErrorKind::MissingIntermediate => {
                format!("Generator did not produce {}: {}", path.display(), err)
            }
            _ => format!("{}: {}", path.display(), err),
        };
        Self::error(kind, message).with_path_buf(path)
    }

    fn with_path_buf(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn level(&self) -> ErrorLevel {
        self.level
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn get_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn get_notes(&self) -> &Vec<String> {
        self.notes.as_ref()
    }

    pub fn is_fatal(&self) -> bool {
        self.level == ErrorLevel::Error
    }
}

impl std::fmt::Display for LemonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const HIGHLIGHT_COLOUR: Colour = Blue;

        // Write Message
        writeln!(f, "{}: {}", self.level(), self.message())?;

        if let Some(path) = self.get_path() {
            writeln!(f, " {} {}", HIGHLIGHT_COLOUR.paint("-->"), path.display())?;
        }

        for note in self.get_notes() {
            writeln!(f, "  {} {}", HIGHLIGHT_COLOUR.paint("= Note:"), note)?;
        }

        Ok(())
    }
}

impl std::error::Error for LemonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorLevel {
    Error,
    Warning,
    Note,
}

impl ErrorLevel {
    pub fn colour(&self) -> Colour {
        match self {
            ErrorLevel::Error => Red,
            ErrorLevel::Warning => Yellow,
            ErrorLevel::Note => White,
        }
    }
}

impl std::fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorLevel::Error => "Error",
            ErrorLevel::Warning => "Warning",
            ErrorLevel::Note => "Note",
        };
        write!(f, "{}", self.colour().paint(s))
    }
}

/// Which step of a run went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The generator executable could not be started
    Spawn,
    /// The generator ran but exited unsuccessfully
    GeneratorFailed,
    /// One of `<base>.c`, `<base>.h`, `<base>.out` was not produced
    MissingIntermediate,
    /// Reading or writing an output failed
    Io,
    /// The generated source did not look as expected while patching
    Patch,
    /// The configuration file could not be loaded
    Config,
}

#[cfg(test)]
pub mod test {
    use crate::{ext::LemonErrorExt, ErrorKind, ErrorLevel, LemonError};

    #[test]
    pub fn display_contains_message_path_and_notes() {
        let err = LemonError::error(ErrorKind::GeneratorFailed, "Generator failed")
            .with_path(|_| "grammar.y".into())
            .with_note(|_| "exit status 3".to_owned());

        let s = err.to_string();
        assert!(s.contains("Generator failed"));
        assert!(s.contains("grammar.y"));
        assert!(s.contains("exit status 3"));
    }

    #[test]
    pub fn missing_intermediate_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = LemonError::io(ErrorKind::MissingIntermediate, io, "grammar.out");

        assert!(err.is_fatal());
        assert_eq!(err.kind(), ErrorKind::MissingIntermediate);
        assert_eq!(err.get_path().unwrap().to_str(), Some("grammar.out"));
        assert!(err.message().starts_with("Generator did not produce grammar.out"));
    }

    #[test]
    pub fn warnings_are_not_fatal() {
        let warn = LemonError::warning(ErrorKind::Patch, "nothing replaced");
        assert_eq!(warn.level(), ErrorLevel::Warning);
        assert!(!warn.is_fatal());
    }
}
