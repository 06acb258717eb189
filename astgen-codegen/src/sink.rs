//! Atomic file output.
//!
//! Contents go to a temporary file next to the destination, which is then
//! renamed over it. A failed write never leaves a truncated target.
//! The target keeps its permissions; new files get the usual `0644`
//! (masked by the umask) rather than the private temp file mode.

use crate::error::CodegenError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Writes `contents` to `path`, replacing any existing file.
///
/// # Errors
/// Returns `CodegenError::SinkWrite` if the temporary file cannot be
/// created or written, or the rename fails. The target is unchanged.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CodegenError> {
    let sink_error = |source: std::io::Error| CodegenError::SinkWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().filter(fs::Metadata::is_file);
    let replacing = existing.is_some();

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(sink_error)?;
    if let Some(metadata) = existing {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(sink_error)?;
    }
    tmp.write_all(contents).map_err(sink_error)?;
    tmp.as_file().sync_all().map_err(sink_error)?;
    tmp.persist(path).map_err(|e| sink_error(e.error))?;

    if replacing {
        tracing::debug!("Replaced existing {}", path.display());
    }
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(())
}
