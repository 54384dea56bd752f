use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use redraft_core::{RenameError, RenameReport, rename_archive};

/// Errors surfaced by the rename command.
#[derive(Debug)]
pub enum CliError {
    /// Find text was empty; the rule would rename nothing
    EmptyFind,
    /// Could not read the input archive file
    ReadInput { path: PathBuf, source: io::Error },
    /// Core rename operation failed
    Rename(RenameError),
    /// Could not write the output archive file
    WriteOutput { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::EmptyFind => {
                write!(f, "find text must not be empty")
            }
            CliError::ReadInput { path, source } => {
                write!(f, "failed to read input archive {}: {}", path.display(), source)
            }
            CliError::Rename(e) => write!(f, "{}", e),
            CliError::WriteOutput { path, source } => {
                write!(
                    f,
                    "failed to write output archive {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::EmptyFind => None,
            CliError::ReadInput { source, .. } => Some(source),
            CliError::Rename(e) => Some(e),
            CliError::WriteOutput { source, .. } => Some(source),
        }
    }
}

impl From<RenameError> for CliError {
    fn from(e: RenameError) -> Self {
        CliError::Rename(e)
    }
}

/// Rename matching `.dxf` entries inside a ZIP file on disk.
///
/// Reads `archive`, applies the find/replace rule, and writes the resulting
/// archive to `output`. The output file is written even when some entries
/// failed to rename; those failures are listed in the returned report. An
/// empty `find` is refused up front rather than producing a no-op pass.
pub fn run(
    archive: &Path,
    find: &str,
    replace: &str,
    output: &Path,
) -> Result<RenameReport, CliError> {
    if find.is_empty() {
        return Err(CliError::EmptyFind);
    }

    let bytes = fs::read(archive).map_err(|e| CliError::ReadInput {
        path: archive.to_path_buf(),
        source: e,
    })?;

    let report = rename_archive(&bytes, find, replace)?;

    fs::write(output, &report.archive).map_err(|e| CliError::WriteOutput {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraft_core::RenameOutcome;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;
    use zip::{ZipArchive, ZipWriter};

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
        let bytes = writer.finish().unwrap().into_inner();
        fs::write(path, bytes).unwrap();
    }

    fn output_names(path: &Path) -> Vec<String> {
        let bytes = fs::read(path).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn renames_and_writes_output_archive() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("drawings.zip");
        let output = dir.path().join("renamed_dxf_files.zip");
        write_zip(&input, &[("part_v1.dxf", b"data"), ("notes.txt", b"notes")]);

        let report = run(&input, "_v1", "_v2", &output).unwrap();

        assert_eq!(report.renamed_count(), 1);
        assert_eq!(report.failed_count(), 0);
        assert_eq!(output_names(&output), vec!["part_v2.dxf"]);
    }

    #[test]
    fn empty_find_is_refused() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("drawings.zip");
        let output = dir.path().join("out.zip");
        write_zip(&input, &[("part.dxf", b"data")]);

        let result = run(&input, "", "_v2", &output);

        assert!(matches!(result, Err(CliError::EmptyFind)));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_file_errors() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.zip");

        let result = run(&dir.path().join("missing.zip"), "_v1", "_v2", &output);

        assert!(matches!(result, Err(CliError::ReadInput { .. })));
    }

    #[test]
    fn invalid_archive_errors() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bogus.zip");
        let output = dir.path().join("out.zip");
        fs::write(&input, b"not a zip archive").unwrap();

        let result = run(&input, "_v1", "_v2", &output);

        assert!(matches!(
            result,
            Err(CliError::Rename(RenameError::ArchiveFormat { .. }))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_errors() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("drawings.zip");
        write_zip(&input, &[("part_v1.dxf", b"data")]);

        let result = run(
            &input,
            "_v1",
            "_v2",
            &dir.path().join("no_such_dir").join("out.zip"),
        );

        assert!(matches!(result, Err(CliError::WriteOutput { .. })));
    }

    #[test]
    fn output_written_even_with_per_entry_failures() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("drawings.zip");
        let output = dir.path().join("out.zip");
        write_zip(&input, &[("part_A.dxf", b"a"), ("part_B.dxf", b"b")]);

        let report = run(&input, "_A", "_B", &output).unwrap();

        assert_eq!(report.failed_count(), 1);
        assert!(matches!(
            &report.outcomes[0],
            RenameOutcome::Failed { original, .. } if original == "part_A.dxf"
        ));
        // Partial failure still produces a downloadable archive
        assert_eq!(output_names(&output), vec!["part_A.dxf", "part_B.dxf"]);
    }
}
