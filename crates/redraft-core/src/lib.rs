//! Batch rename of DXF entries inside a ZIP archive.
//!
//! Given an input ZIP, a find text, and a replacement text,
//! [`rename_archive`] unpacks the entries into an ephemeral workspace,
//! applies a literal substring rename to every matching `.dxf` filename,
//! and repacks the post-rename `.dxf` entries into a new ZIP. Every rename
//! attempt is reported as a [`RenameOutcome`]; a failed attempt (collision,
//! invalid target name) never aborts the batch.
//!
//! Content bytes are never modified, only filenames change.

pub mod archive;
pub mod error;
pub mod rename;
pub mod workspace;

// Re-export public items
pub use error::RenameError;
pub use rename::{RenameOutcome, RenameReport, rename_archive, rename_entries};
pub use workspace::Workspace;
