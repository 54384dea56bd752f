use std::fmt;
use std::io;

/// Error type for the rename operation.
///
/// Both variants are fatal: the operation aborts and no output archive is
/// produced. A rename attempt that fails for a single entry is not an error
/// at this level; it is reported as a `Failed` outcome and processing
/// continues.
#[derive(Debug)]
pub enum RenameError {
    /// Input bytes are not a readable ZIP archive
    ArchiveFormat { reason: String },
    /// Workspace or output storage failed (create, extract, enumerate, write)
    Storage { context: &'static str, source: io::Error },
}

impl RenameError {
    pub(crate) fn storage(context: &'static str, source: io::Error) -> Self {
        RenameError::Storage { context, source }
    }
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameError::ArchiveFormat { reason } => {
                write!(f, "not a valid ZIP archive: {}", reason)
            }
            RenameError::Storage { context, source } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for RenameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenameError::ArchiveFormat { .. } => None,
            RenameError::Storage { source, .. } => Some(source),
        }
    }
}
