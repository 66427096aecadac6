use std::path::PathBuf;

use lemongen_diagnostics::Diagnostics;
use lemongen_error::{ext::LemonErrorExt, ErrorKind, LemonError, LemonResult};
use log::{debug, info};

pub mod generator;
pub mod patch;
pub mod paths;

pub use generator::Generator;
pub use paths::IntermediatePaths;

/// One run of the generator on one grammar
#[derive(Debug, Clone)]
pub struct Invocation {
    pub generator: Generator,
    pub grammar: PathBuf,
    pub output_source: PathBuf,
    pub output_header: PathBuf,
}

/// Where the generated files ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub source: PathBuf,
    pub header: PathBuf,
    /// Number of self references rewritten in the source
    pub substitutions: usize,
}

pub struct Driver;

impl Driver {
    /// Runs the generator, then moves its `<base>.c` and `<base>.h` to the
    /// requested outputs and deletes `<base>.out`.
    ///
    /// Any failure aborts the run on the spot. Intermediate files produced
    /// up to that point are left where they are.
    pub fn run(invocation: &Invocation, diag: &Diagnostics) -> LemonResult<Outputs> {
        let Invocation {
            generator,
            grammar,
            output_source,
            output_header,
        } = invocation;

        let paths = IntermediatePaths::from_grammar(grammar);
        debug!("Intermediate files {:?}", paths);

        // Both strings end up in the generated source
        let from = patch::path_text(&paths.source)?;
        let to = patch::path_text(output_source)?;

        generator.run(grammar)?;

        patch::remove_intermediate(&paths.trace)?;

        let text = patch::read_intermediate(&paths.source)?;
        let (text, substitutions) = patch::patch_source(&text, from.as_bytes(), to.as_bytes());
        if substitutions == 0 {
            diag.push_error(
                LemonError::warning(
                    ErrorKind::Patch,
                    format!("No reference to {} found in the generated source", from),
                )
                .with_path(|_| paths.source.clone()),
            );
        }
        info!(
            "Writing {} ({} reference{} to {} rewritten)",
            to,
            substitutions,
            if substitutions == 1 { "" } else { "s" },
            from
        );
        patch::write_output(output_source, &text)?;

        // The caller may have asked for the intermediate itself, spelled differently
        if !patch::same_file(&paths.source, output_source)? {
            patch::remove_intermediate(&paths.source)?;
        }

        info!("Moving {} to {}", paths.header.display(), output_header.display());
        patch::move_intermediate(&paths.header, output_header)?;

        Ok(Outputs {
            source: output_source.clone(),
            header: output_header.clone(),
            substitutions,
        })
    }
}
