use std::path::PathBuf;

use crate::LemonError;

/// Trait Extension of `Result<T, LemonError>` and `LemonError` to add info
pub trait LemonErrorExt<T> {
    fn with_path(self, path: impl Fn(&LemonError) -> PathBuf) -> T;
    fn with_note(self, note: impl Fn(&LemonError) -> String) -> T;
}

impl<T> LemonErrorExt<Result<T, LemonError>> for Result<T, LemonError> {
    fn with_path(self, path: impl Fn(&LemonError) -> PathBuf) -> Result<T, LemonError> {
        self.map_err(|e| e.with_path(path))
    }

    fn with_note(self, note: impl Fn(&LemonError) -> String) -> Result<T, LemonError> {
        self.map_err(|e| e.with_note(note))
    }
}

impl LemonErrorExt<LemonError> for LemonError {
    fn with_path(mut self, path: impl Fn(&LemonError) -> PathBuf) -> LemonError {
        self.path = Some(path(&self));
        self
    }

    fn with_note(mut self, note: impl Fn(&LemonError) -> String) -> LemonError {
        self.notes.push(note(&self));
        self
    }
}
