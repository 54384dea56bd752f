//! Ephemeral extraction workspace.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::error::RenameError;

/// Ephemeral directory one archive is extracted into.
///
/// Created fresh per operation and removed when dropped, on every exit
/// path. Two concurrent operations never share a workspace, so no locking
/// is needed between them.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh empty workspace directory.
    pub fn create() -> Result<Workspace, RenameError> {
        let dir = TempDir::new()
            .map_err(|e| RenameError::storage("failed to create workspace directory", e))?;
        Ok(Workspace { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// List file names directly under the workspace root, sorted.
    pub fn list_files(&self) -> Result<Vec<String>, RenameError> {
        list_files(self.dir.path())
    }
}

/// List all file names (not paths) directly under `dir`, sorted by name.
///
/// Only regular files are returned. Subdirectories extracted from nested
/// archive entries are not candidates for renaming or repacking.
pub(crate) fn list_files(dir: &Path) -> Result<Vec<String>, RenameError> {
    let mut files = Vec::new();

    let entries = fs::read_dir(dir)
        .map_err(|e| RenameError::storage("failed to enumerate workspace", e))?;
    for entry in entries {
        let entry = entry.map_err(|e| RenameError::storage("failed to enumerate workspace", e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| RenameError::storage("failed to enumerate workspace", e))?;

        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;

    #[test]
    fn list_files_returns_sorted_names() {
        let ws = Workspace::create().unwrap();

        File::create(ws.path().join("zebra.dxf")).unwrap();
        File::create(ws.path().join("alpha.dxf")).unwrap();
        File::create(ws.path().join("middle.txt")).unwrap();

        let files = ws.list_files().unwrap();

        assert_eq!(files, vec!["alpha.dxf", "middle.txt", "zebra.dxf"]);
    }

    #[test]
    fn list_files_skips_subdirectories() {
        let ws = Workspace::create().unwrap();

        File::create(ws.path().join("file.dxf")).unwrap();
        fs::create_dir(ws.path().join("nested")).unwrap();
        File::create(ws.path().join("nested").join("inner.dxf")).unwrap();

        let files = ws.list_files().unwrap();

        assert_eq!(files, vec!["file.dxf"]);
    }

    #[test]
    fn list_files_empty_workspace() {
        let ws = Workspace::create().unwrap();

        assert!(ws.list_files().unwrap().is_empty());
    }

    #[test]
    fn workspace_removed_on_drop() {
        let path: PathBuf;
        {
            let ws = Workspace::create().unwrap();
            path = ws.path().to_path_buf();
            File::create(path.join("file.dxf")).unwrap();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn list_files_nonexistent_directory_errors() {
        let result = list_files(Path::new("/nonexistent/workspace"));

        assert!(matches!(result, Err(RenameError::Storage { .. })));
    }
}
