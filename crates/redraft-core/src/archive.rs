//! ZIP container I/O for the rename operation.
//!
//! The input archive is unpacked into a workspace directory, and the output
//! archive is built in memory from the post-rename workspace state. Entry
//! content bytes are copied unchanged in both directions; only filenames are
//! ever touched, and only by the rename pass in between.

use std::fs::{self, File};
use std::io::{self, Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::RenameError;
use crate::workspace;

/// Extract every entry of a ZIP archive into `dest`.
///
/// Entries with directory components are extracted under their subpaths;
/// only flat entries at the archive root are later rename candidates.
/// Entry names that would escape `dest` are skipped.
pub fn unpack(archive_bytes: &[u8], dest: &Path) -> Result<(), RenameError> {
    let mut archive = ZipArchive::new(Cursor::new(archive_bytes)).map_err(|e| {
        RenameError::ArchiveFormat {
            reason: e.to_string(),
        }
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| RenameError::ArchiveFormat {
            reason: e.to_string(),
        })?;

        let outpath = match entry.enclosed_name() {
            Some(p) => dest.join(p),
            None => continue,
        };

        if entry.is_dir() {
            fs::create_dir_all(&outpath)
                .map_err(|e| RenameError::storage("failed to extract directory entry", e))?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RenameError::storage("failed to extract directory entry", e))?;
        }
        let mut outfile = File::create(&outpath)
            .map_err(|e| RenameError::storage("failed to extract entry", e))?;
        io::copy(&mut entry, &mut outfile)
            .map_err(|e| RenameError::storage("failed to extract entry", e))?;
    }

    Ok(())
}

/// Build a ZIP archive in memory from the top-level `.dxf` files in `dir`.
///
/// Entries are written flat (no directory prefix), deflate-compressed, in
/// name order. The suffix check here is case-sensitive; rename candidacy
/// uses the looser case-insensitive check.
pub fn pack_dxf(dir: &Path) -> Result<Vec<u8>, RenameError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for name in workspace::list_files(dir)? {
        if !name.ends_with(".dxf") {
            continue;
        }

        let data = fs::read(dir.join(&name))
            .map_err(|e| RenameError::storage("failed to read workspace entry", e))?;
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| RenameError::storage("failed to write output archive", io::Error::other(e)))?;
        writer
            .write_all(&data)
            .map_err(|e| RenameError::storage("failed to write output archive", e))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| RenameError::storage("failed to write output archive", io::Error::other(e)))?;
    Ok(cursor.into_inner())
}
