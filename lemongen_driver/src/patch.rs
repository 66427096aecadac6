use std::{fs, path::Path};

use lemongen_error::{ext::LemonErrorExt, ErrorKind, LemonError, LemonResult};
use log::debug;
use memchr::memmem;

/// Replaces every literal occurrence of `from` in `text` by `to`.
/// Returns the new text along with the number of replacements.
///
/// Works on bytes, the generated source may carry user code in any encoding.
pub fn patch_source(text: &[u8], from: &[u8], to: &[u8]) -> (Vec<u8>, usize) {
    if from.is_empty() {
        return (text.to_vec(), 0);
    }

    let mut patched = Vec::with_capacity(text.len());
    let mut count = 0;
    let mut last = 0;
    for start in memmem::find_iter(text, from) {
        patched.extend_from_slice(&text[last..start]);
        patched.extend_from_slice(to);
        last = start + from.len();
        count += 1;
    }
    patched.extend_from_slice(&text[last..]);
    (patched, count)
}

/// Path as text, as it gets written into the generated source
pub fn path_text(path: &Path) -> LemonResult<&str> {
    path.to_str().ok_or_else(|| {
        LemonError::error(
            ErrorKind::Patch,
            format!("{} is not valid UTF-8", path.display()),
        )
        .with_path(|_| path.to_path_buf())
    })
}

/// Removes an intermediate file the generator must have produced
pub fn remove_intermediate(path: &Path) -> LemonResult<()> {
    fs::remove_file(path).map_err(|e| LemonError::io(ErrorKind::MissingIntermediate, e, path))
}

pub fn read_intermediate(path: &Path) -> LemonResult<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LemonError::io(ErrorKind::MissingIntermediate, e, path),
        _ => LemonError::io(ErrorKind::Io, e, path),
    })
}

pub fn write_output(path: &Path, contents: &[u8]) -> LemonResult<()> {
    fs::write(path, contents).map_err(|e| LemonError::io(ErrorKind::Io, e, path))
}

/// Whether both paths name the same file on disk. Both must exist
pub fn same_file(a: &Path, b: &Path) -> LemonResult<bool> {
    let a = fs::canonicalize(a).map_err(|e| LemonError::io(ErrorKind::Io, e, a))?;
    let b = fs::canonicalize(b).map_err(|e| LemonError::io(ErrorKind::Io, e, b))?;
    Ok(a == b)
}

/// Moves `from` to `to`, replacing `to`. Falls back to copying when a plain
/// rename is refused, e.g. when both sit on different filesystems.
pub fn move_intermediate(from: &Path, to: &Path) -> LemonResult<()> {
    let err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    if !from.exists() {
        return Err(LemonError::io(ErrorKind::MissingIntermediate, err, from));
    }

    debug!(
        "Renaming {} to {} failed ({}), copying instead",
        from.display(),
        to.display(),
        err
    );
    fs::copy(from, to).map_err(|e| LemonError::io(ErrorKind::Io, e, to))?;
    fs::remove_file(from).map_err(|e| LemonError::io(ErrorKind::Io, e, from))
}
