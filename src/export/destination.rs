//! Destination file handling shared by the exporters.
//!
//! Every artifact is written through [`write_artifact`], which creates any
//! missing parent directories, truncates an existing file and flushes the
//! buffered output before returning. Writes are not atomic: a failure part
//! way through leaves a truncated file behind.

use std::io::{BufWriter, Write};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File};

use crate::error::ReportError;

/// Creates `path` (and its parents), hands a buffered writer to `render`,
/// then flushes.
///
/// `artifact` names the kind of file in error messages and logs.
pub(crate) fn write_artifact<F>(
    path: &Utf8Path,
    artifact: &str,
    render: F,
) -> Result<(), ReportError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ReportError>,
{
    let file = create_file_with_parents(path, artifact)?;
    let mut writer = BufWriter::new(file);
    render(&mut writer)?;
    writer.flush().map_err(|error| {
        ReportError::filesystem(format_args!("failed to flush {artifact} '{path}'"), &error)
    })?;
    tracing::debug!(path = %path, artifact, "artifact flushed");
    Ok(())
}

/// Creates a file at `path`, ensuring parent directories exist first.
fn create_file_with_parents(path: &Utf8Path, artifact: &str) -> Result<File, ReportError> {
    let file_name = path.file_name().ok_or_else(|| ReportError::Filesystem {
        message: format!("invalid {artifact} path '{path}': no file name"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|error| {
        ReportError::filesystem(
            format_args!("failed to create {artifact} directory '{parent}'"),
            &error,
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        ReportError::filesystem(
            format_args!("failed to open {artifact} directory '{parent}'"),
            &error,
        )
    })?;

    dir.create(file_name).map_err(|error| {
        ReportError::filesystem(format_args!("failed to create {artifact} file '{path}'"), &error)
    })
}
