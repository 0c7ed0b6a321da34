//! Writing exported text to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::WriteError;

/// Write `content` to `path`, replacing any existing file.
///
/// The file handle is closed when this returns, on success and on failure.
pub fn write_to_file(content: &str, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(WriteError::InvalidPath);
    }

    let unwritable = |source| WriteError::Unwritable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(unwritable)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(unwritable)?;
    writer.flush().map_err(unwritable)?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
