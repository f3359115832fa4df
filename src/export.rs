//! Embedded-JSON mesh files.
//!
//! The file is a script assignment rather than a bare JSON document:
//!
//! ```text
//! radial_mesh = {
//!   "verts": [[x, y], ...],
//!   "tris": [[a, b, c], ...]
//! };
//! ```
//!
//! Renderers load it as a script and read the global `radial_mesh`, so the
//! identifier, key names and trailing semicolon must not change.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::mesh::RadialMesh;

/// Global name the mesh is assigned to in the exported file.
pub const MESH_IDENTIFIER: &str = "radial_mesh";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "radial_mesh.js";

/// Render `mesh` as `radial_mesh = <pretty json>;`.
///
/// Fails on non-finite coordinates, which JSON would silently turn into `null`.
pub fn to_embedded_json(mesh: &RadialMesh) -> MeshResult<String> {
    if let Some((index, v)) = mesh
        .verts
        .iter()
        .enumerate()
        .find(|(_, v)| !v.iter().all(|c| c.is_finite()))
    {
        return Err(MeshError::Format(format!(
            "vertex {} is not finite: [{}, {}]",
            index, v[0], v[1]
        )));
    }
    let json = serde_json::to_string_pretty(mesh)?;
    Ok(format!("{} = {};", MESH_IDENTIFIER, json))
}

/// Parse text produced by [`to_embedded_json`] back into a mesh.
pub fn parse_embedded_json(text: &str) -> MeshResult<RadialMesh> {
    let body = text
        .trim()
        .strip_prefix(MESH_IDENTIFIER)
        .ok_or_else(|| MeshError::Format(format!("expected `{}` assignment", MESH_IDENTIFIER)))?
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| MeshError::Format(format!("expected `=` after `{}`", MESH_IDENTIFIER)))?
        .trim_end()
        .strip_suffix(';')
        .ok_or_else(|| MeshError::Format("missing trailing `;`".to_string()))?;

    Ok(serde_json::from_str(body)?)
}

/// Write `mesh` to `path`, replacing any existing file atomically.
///
/// The text is staged in a temporary file next to `path` and renamed over it
/// once fully written, so a failed run never leaves a truncated file behind.
pub fn write_mesh(path: &Path, mesh: &RadialMesh) -> MeshResult<()> {
    let text = to_embedded_json(mesh)?;
    let write_err = |source| MeshError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = staging_dir(path);
    let mut staged = stage_in(&dir).map_err(write_err)?;
    debug!("Staging mesh in {}", staged.path().display());

    // A replaced file keeps its mode; a new one gets the umask default.
    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
    }

    staged.write_all(text.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Read and parse a mesh file written by [`write_mesh`].
pub fn read_mesh(path: &Path) -> MeshResult<RadialMesh> {
    let text = fs::read_to_string(path).map_err(|source| MeshError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_embedded_json(&text)
}

/// Temporary file in `dir`, created with `0o666` (minus umask) like a plain
/// `File::create` rather than tempfile's owner-only default.
fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".radial_mesh").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
