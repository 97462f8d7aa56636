//! Writing rendered templates to disk

use super::store::{FileSpec, REQUIRED_DIRS};
use crate::error::ScaffoldError;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Materialize `files` under `project_root`
///
/// Existing files are replaced without confirmation. The first filesystem
/// error aborts the write and leaves whatever was already written in place.
/// Returns the paths written, in order.
pub async fn write_tree(
    project_root: &Path,
    files: &[FileSpec],
) -> Result<Vec<PathBuf>, ScaffoldError> {
    create_dir(project_root).await?;
    for dir in REQUIRED_DIRS {
        create_dir(&project_root.join(dir)).await?;
    }

    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target_path = resolve_inside(project_root, &file.relative_path)?;

        if let Some(parent) = target_path.parent() {
            create_dir(parent).await?;
        }

        fs::write(&target_path, &file.content)
            .await
            .map_err(|e| ScaffoldError::filesystem(&target_path, e))?;

        written.push(target_path);
    }

    Ok(written)
}

async fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScaffoldError::filesystem(path, e))
}

/// Join a relative path onto the root, refusing anything that could escape it
fn resolve_inside(root: &Path, relative: &str) -> Result<PathBuf, ScaffoldError> {
    let rel = Path::new(relative);
    let stays_inside = !relative.is_empty()
        && rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if !stays_inside {
        return Err(ScaffoldError::filesystem(
            root.join(relative),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a path inside the project", relative),
            ),
        ));
    }

    Ok(root.join(rel))
}
