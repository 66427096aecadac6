use std::sync::RwLock;

use std::io::Write;

use ansi_term::Colour::Red;
use lemongen_error::{ErrorLevel, LemonError};
use log::debug;

/// Errors and warnings raised during a run, grouped by stage
pub struct Diagnostics {
    stages: RwLock<Vec<Vec<LemonError>>>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            stages: RwLock::new(vec![Vec::new()]),
        }
    }

    /// Closes the current stage. If it holds a fatal error everything
    /// collected so far is reported and `Err` is returned
    pub fn finish_stage(&self) -> Result<(), ()> {
        let fatal = self
            .stages
            .read()
            .map(|stages| {
                stages
                    .last()
                    .map(|stage| stage.iter().any(LemonError::is_fatal))
                    .unwrap_or(false)
            })
            .unwrap_or(true);

        if fatal {
            _ = self.report(&mut std::io::stderr().lock());
            Err(())
        } else {
            if let Ok(mut stages) = self.stages.write() {
                stages.push(Default::default());
            }
            Ok(())
        }
    }

    pub fn push_error(&self, error: LemonError) {
        debug!("{:?}: {}", error.kind(), error.message());
        if let Ok(mut stages) = self.stages.write() {
            match stages.last_mut() {
                Some(stage) => stage.push(error),
                None => stages.push(vec![error]),
            }
        }
    }

    /// Number of diagnostics collected at `level`, across all stages
    pub fn count(&self, level: ErrorLevel) -> usize {
        self.stages
            .read()
            .map(|stages| {
                stages
                    .iter()
                    .flatten()
                    .filter(|e| e.level() == level)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Prints and drains whatever is left, used once a run succeeded
    pub fn flush(&self) -> std::io::Result<()> {
        let stderr = std::io::stderr();
        let mut f = stderr.lock();
        let Ok(mut stages) = self.stages.write() else {
            return Ok(());
        };
        for stage in stages.iter_mut() {
            for err in stage.drain(..) {
                writeln!(f, "{}", err)?;
            }
        }
        Ok(())
    }

    fn report(&self, f: &mut impl Write) -> std::io::Result<()> {
        let mut total_fatal = 0;
        if let Ok(mut stages) = self.stages.write() {
            for stage in stages.iter_mut() {
                for err in stage.drain(..) {
                    if err.is_fatal() {
                        total_fatal += 1;
                    }
                    writeln!(f, "{}", err)?;
                }
            }
        }

        writeln!(
            f,
            "{}: Failed to generate parser due to {} error{}",
            Red.paint("Error"),
            total_fatal,
            if total_fatal > 1 { "s" } else { "" }
        )?;

        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use lemongen_error::{ErrorKind, ErrorLevel, LemonError};

    use super::Diagnostics;

    #[test]
    pub fn warnings_do_not_fail_a_stage() {
        let diag = Diagnostics::new();
        diag.push_error(LemonError::warning(ErrorKind::Patch, "nothing replaced"));

        assert_eq!(diag.finish_stage(), Ok(()));
        assert_eq!(diag.count(ErrorLevel::Warning), 1);
    }

    #[test]
    pub fn errors_fail_a_stage() {
        let diag = Diagnostics::new();
        diag.push_error(LemonError::error(ErrorKind::Spawn, "could not start"));

        assert_eq!(diag.count(ErrorLevel::Error), 1);
        assert_eq!(diag.finish_stage(), Err(()));
        // Reported diagnostics are drained
        assert_eq!(diag.count(ErrorLevel::Error), 0);
    }

    #[test]
    pub fn report_counts_fatal_errors() {
        let diag = Diagnostics::new();
        diag.push_error(LemonError::error(ErrorKind::Io, "first"));
        diag.push_error(LemonError::warning(ErrorKind::Patch, "second"));
        diag.push_error(LemonError::error(ErrorKind::Io, "third"));

        let mut out = Vec::new();
        diag.report(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("first"));
        assert!(out.contains("second"));
        assert!(out.contains("due to 2 errors"));
    }
}
