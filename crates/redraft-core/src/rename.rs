//! The rename-and-repackage operation.
//!
//! A rename candidate is a top-level `.dxf` entry (suffix checked
//! case-insensitively) whose name contains the find text. Each candidate
//! produces exactly one outcome, renamed or failed; a failure never aborts
//! the batch. Entries that are not candidates are passed through untouched
//! and produce no outcome.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::archive;
use crate::error::RenameError;
use crate::workspace::{self, Workspace};

/// Result of one rename attempt on a `.dxf` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RenameOutcome {
    /// Entry was renamed in the workspace
    Renamed { original: String, new: String },
    /// Rename attempt failed; the entry keeps its original name
    Failed { original: String, reason: String },
}

impl RenameOutcome {
    pub fn original(&self) -> &str {
        match self {
            RenameOutcome::Renamed { original, .. } => original,
            RenameOutcome::Failed { original, .. } => original,
        }
    }
}

/// Output of [`rename_archive`]: the new container plus per-entry outcomes.
#[derive(Debug, Clone)]
pub struct RenameReport {
    /// Bytes of the output ZIP archive
    pub archive: Vec<u8>,
    /// One outcome per rename candidate, in name order
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn renamed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Failed { .. }))
            .count()
    }
}

/// Whether `name` is a rename candidate: a `.dxf` file (any case) whose
/// name contains `find`. An empty `find` matches nothing.
fn is_candidate(name: &str, find: &str) -> bool {
    !find.is_empty() && name.to_lowercase().ends_with(".dxf") && name.contains(find)
}

/// Literal replace-all of `find` with `replace` in a filename.
fn apply_rule(name: &str, find: &str, replace: &str) -> String {
    name.replace(find, replace)
}

/// Attempt every candidate rename under `dir`, collecting outcomes.
///
/// The file list is snapshotted and sorted before the loop, so outcomes are
/// deterministic and a rename never feeds back into the same pass. Each
/// candidate yields one outcome; collisions and invalid target names fail
/// that entry only.
pub fn rename_entries(
    dir: &Path,
    find: &str,
    replace: &str,
) -> Result<Vec<RenameOutcome>, RenameError> {
    let mut outcomes = Vec::new();

    for name in workspace::list_files(dir)? {
        if !is_candidate(&name, find) {
            continue;
        }
        let new_name = apply_rule(&name, find, replace);
        outcomes.push(rename_entry(dir, name, new_name));
    }

    Ok(outcomes)
}

fn rename_entry(dir: &Path, name: String, new_name: String) -> RenameOutcome {
    if new_name == name {
        // Rule applied but nothing moves (find == replace)
        return RenameOutcome::Renamed {
            original: name,
            new: new_name,
        };
    }

    if new_name.is_empty() || new_name.contains(['/', '\\', '\0']) {
        return RenameOutcome::Failed {
            original: name,
            reason: format!("invalid target name '{}'", new_name),
        };
    }

    // Covers collisions with pre-existing entries and with entries renamed
    // earlier in the same batch.
    let new_path = dir.join(&new_name);
    if new_path.exists() {
        return RenameOutcome::Failed {
            original: name,
            reason: format!("target name '{}' already exists", new_name),
        };
    }

    match fs::rename(dir.join(&name), &new_path) {
        Ok(()) => RenameOutcome::Renamed {
            original: name,
            new: new_name,
        },
        Err(e) => RenameOutcome::Failed {
            original: name,
            reason: e.to_string(),
        },
    }
}

/// Rename matching `.dxf` entries inside a ZIP archive.
///
/// Workflow:
/// 1. Unpack the archive into a fresh ephemeral workspace
/// 2. Apply the find/replace rule to every candidate entry
/// 3. Repack the post-rename `.dxf` entries into a new archive
///
/// The workspace is removed on every exit path, including errors. The
/// output archive reflects the workspace state after all rename attempts,
/// never a pre-rename snapshot.
pub fn rename_archive(
    archive_bytes: &[u8],
    find: &str,
    replace: &str,
) -> Result<RenameReport, RenameError> {
    let ws = Workspace::create()?;

    archive::unpack(archive_bytes, ws.path())?;
    let outcomes = rename_entries(ws.path(), find, replace)?;
    let archive = archive::pack_dxf(ws.path())?;

    Ok(RenameReport { archive, outcomes })
}
