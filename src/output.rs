use std::{
    io::{self, Write},
    path::Path,
};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replaces `path` with `contents`. The data is staged in a sibling temp file
/// and renamed into place, so a failed write leaves any previous file intact.
pub fn write_calendar(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    debug!("Staging calendar at {}", staged.path().display());

    staged.write_all(contents.as_bytes()).map_err(io_err)?;
    staged.as_file().sync_all().map_err(io_err)?;
    staged.persist(path).map_err(|err| io_err(err.error))?;

    Ok(())
}
