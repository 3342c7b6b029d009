//! # Error Module
//!
//! Error types for the photo grouper.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Separate fatal from per-file** - a corrupt photo is data, a failed
//!   move is an abort

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
///
/// Only the fatal error kinds appear here. Per-file hashing failures are
/// carried as data (`HashFailure` records) and never abort a run.
#[derive(Error, Debug)]
pub enum GrouperError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Relocation error: {0}")]
    Relocate(#[from] RelocateError),
}

/// Fatal errors while collecting candidate photos
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file errors while fingerprinting a photo
///
/// These are absorbed at the worker boundary and surfaced in the failure
/// report; they never cross the pool as `Err`.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to open image file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

impl HashError {
    /// The path of the file this error belongs to
    pub fn path(&self) -> &PathBuf {
        match self {
            HashError::Open { path, .. } => path,
            HashError::Decode { path, .. } => path,
        }
    }
}

/// Fatal errors while relocating grouped photos
#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, GrouperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_includes_path() {
        let error = ScanError::DirectoryNotFound {
            path: PathBuf::from("/photos/vacation"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/vacation"));
    }

    #[test]
    fn hash_error_includes_path_and_reason() {
        let error = HashError::Decode {
            path: PathBuf::from("/photos/broken.jpg"),
            reason: "invalid JPEG".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/broken.jpg"));
        assert!(message.contains("invalid JPEG"));
    }

    #[test]
    fn hash_error_exposes_path() {
        let error = HashError::Decode {
            path: PathBuf::from("/photos/broken.jpg"),
            reason: "truncated".to_string(),
        };
        assert_eq!(error.path(), &PathBuf::from("/photos/broken.jpg"));
    }

    #[test]
    fn move_error_names_both_ends() {
        let error = RelocateError::Move {
            from: PathBuf::from("/photos/a.jpg"),
            to: PathBuf::from("/photos/hashed/abc/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/photos/a.jpg"));
        assert!(message.contains("/photos/hashed/abc/a.jpg"));
    }
}
