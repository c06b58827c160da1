//! The placeholder TensorFlow Lite model and the atomic file writer that
//! puts it on disk.
//!
//! The byte table is an opaque fixture. It is shaped like a FlatBuffer with
//! the `TFL3` identifier so that loaders accepting a `.tflite` path find a
//! plausible header, but its offsets are hard-coded and are not guaranteed to
//! describe a schema-valid model. Nothing here encodes or decodes the format.

use crate::utils::error::{FixtureError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const FIXTURE_LEN: usize = 240;

/// FlatBuffer file identifier found at byte offset 4.
pub const FILE_IDENTIFIER: [u8; 4] = *b"TFL3";

#[rustfmt::skip]
pub const TFLITE_FIXTURE: [u8; FIXTURE_LEN] = [
    // root offset, file identifier
    0x20, 0x00, 0x00, 0x00,
    0x54, 0x46, 0x4C, 0x33,

    // model: vtable, version 3, operator_codes, subgraphs, description, buffers
    0x18, 0x00, 0x00, 0x00,
    0x03, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x00, 0x00,
    0x10, 0x00, 0x00, 0x00,

    // model vtable
    0x18, 0x00, 0x20, 0x00,
    0x04, 0x00, 0x08, 0x00,
    0x0C, 0x00, 0x10, 0x00,
    0x14, 0x00, 0x00, 0x00,

    // operator_codes: len 1
    0x01, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,

    // operator code: builtin CUSTOM
    0x08, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x08, 0x00,
    0x04, 0x00, 0x00, 0x00,

    // subgraphs: len 1
    0x01, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,

    // subgraph: vtable, tensors, inputs, outputs, operators
    0x18, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x00, 0x00,
    0x10, 0x00, 0x00, 0x00,

    // subgraph vtable
    0x18, 0x00, 0x18, 0x00,
    0x04, 0x00, 0x08, 0x00,
    0x0C, 0x00, 0x10, 0x00,
    0x00, 0x00,

    // tensors: len 2
    0x02, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x00, 0x00,

    // tensor 0 (input, float32, buffer 0)
    0x20, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,

    // tensor 1 (output, float32, buffer 0)
    0x20, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,

    // tensor vtable, zero padded
    0x20, 0x00, 0x20, 0x00,
    0x04, 0x00, 0x08, 0x00,
    0x0C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,

    // shapes: [1], [1]
    0x01, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,

    // inputs: [0]
    0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,

    // outputs: [1]
    0x01, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00,

    // operators: empty
    0x00, 0x00, 0x00, 0x00,

    // description: ""
    0x00, 0x00, 0x00, 0x00,

    // buffers: len 1
    0x01, 0x00, 0x00, 0x00,
    0x04, 0x00, 0x00, 0x00,

    // empty buffer and its vtable
    0x08, 0x00, 0x00, 0x00,
    0x08, 0x00, 0x04, 0x00,
    0x00, 0x00,
];

/// Writes [`TFLITE_FIXTURE`] to `path`, creating missing parent directories.
///
/// Returns the number of bytes written. See [`write_atomic`] for the failure
/// guarantees.
pub fn write_fixture<P: AsRef<Path>>(path: P) -> Result<usize> {
    write_atomic(path.as_ref(), &TFLITE_FIXTURE)
}

/// Replaces `path` with `data` via a temporary file in the same directory.
///
/// The temporary file is synced and renamed over `path` only after the full
/// payload is on disk, so a failure never leaves a truncated file at `path`.
/// On error the temporary file is removed when it is dropped. An existing
/// file keeps its permissions; a new one gets `0o644` on unix.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<usize> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|source| FixtureError::DirectoryCreation {
        path: parent.to_path_buf(),
        source,
    })?;

    let write_error = |source: std::io::Error| FixtureError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(parent).map_err(write_error)?;
    #[cfg(unix)]
    {
        file.as_file()
            .set_permissions(target_permissions(path))
            .map_err(write_error)?;
    }
    file.write_all(data).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(data.len())
}

// NamedTempFile is created 0o600; the fixture must stay readable by other users.
#[cfg(unix)]
fn target_permissions(path: &Path) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .ok()
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.permissions())
        .unwrap_or_else(|| fs::Permissions::from_mode(0o644))
}
