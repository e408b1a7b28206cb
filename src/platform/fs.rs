// linesieve - platform/fs.rs
//
// Whole-file input read and filtered-output write.

use crate::core::filter::split_lines;
use crate::util::error::{LineSieveError, Result};
use std::io::{self, Write};
use std::path::Path;

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read every line of `path` into memory, terminators included.
///
/// A missing file maps to [`LineSieveError::InputNotFound`].
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_file_lossy(path).map_err(|e| LineSieveError::from_read(path, e))?;
    let lines = split_lines(&content);
    tracing::debug!(
        path = %path.display(),
        bytes = content.len(),
        lines = lines.len(),
        "Input read"
    );
    Ok(lines)
}

/// Create or truncate `path` and write `lines` concatenated, byte for byte.
///
/// The buffer is flushed and the file closed before returning.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let io_err = |operation: &'static str| {
        move |source: io::Error| LineSieveError::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    };

    let file = std::fs::File::create(path).map_err(io_err("create"))?;
    let mut writer = io::BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(io_err("write"))?;
    }
    writer
        .into_inner()
        .map_err(|e| io_err("write")(e.into_error()))?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "Filtered output written");
    Ok(())
}
