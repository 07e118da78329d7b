//! Error types for icon generation.
//!
//! Preflight errors (missing platforms, missing source images, missing or
//! unreadable manifest) are fatal and abort the run before any icon is
//! rendered. Render errors are local to one icon task: they are reported and
//! counted, but never stop sibling tasks or later platforms.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for appicon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// All error conditions produced by the icon pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No `platforms/<name>` directory exists in the project.
    #[error("no platforms found in this project")]
    NoPlatformsFound,

    /// A required source image is missing. One instance per missing file.
    #[error("source image {path} does not exist")]
    MissingSourceImage {
        /// Path that was checked
        path: PathBuf,
    },

    /// The project manifest file does not exist.
    #[error("project manifest {path} does not exist")]
    MissingManifest {
        /// Path that was checked
        path: PathBuf,
    },

    /// The project manifest could not be read or is not well-formed XML.
    #[error("failed to parse {path}: {detail}")]
    ManifestParse {
        /// Manifest path
        path: PathBuf,
        /// Reader or parser failure detail
        detail: String,
    },

    /// The manifest has no `<name>` element under the `<widget>` root.
    #[error("no <name> element found in {path}")]
    ManifestFieldMissing {
        /// Manifest path
        path: PathBuf,
    },

    /// A resize or crop step failed for one icon.
    #[error("failed to render {dest} from {src}: {detail}")]
    Render {
        /// Source image that was being processed
        src: PathBuf,
        /// Destination file that was being produced
        dest: PathBuf,
        /// Backend failure detail
        detail: String,
    },

    /// A spawned icon task could not be joined (it panicked or was aborted).
    #[error("icon task failed: {0}")]
    TaskFailed(String),

    /// File system error with path context.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation being performed (e.g. "creating icon directory")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Generic I/O error without path context.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code class for this error.
    ///
    /// Preflight and manifest errors exit with 1 (nothing was generated);
    /// render-stage errors exit with 2 (the run completed with failed tasks).
    /// Scripts can rely on the distinction.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoPlatformsFound
            | Error::MissingSourceImage { .. }
            | Error::MissingManifest { .. }
            | Error::ManifestParse { .. }
            | Error::ManifestFieldMissing { .. } => 1,
            Error::Render { .. } | Error::TaskFailed(_) | Error::Fs { .. } | Error::Io(_) => 2,
        }
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the
    /// operation, e.g. "creating icon directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_errors_use_exit_code_one() {
        assert_eq!(Error::NoPlatformsFound.exit_code(), 1);
        assert_eq!(
            Error::MissingSourceImage {
                path: PathBuf::from("icon.png")
            }
            .exit_code(),
            1
        );
        assert_eq!(
            Error::ManifestFieldMissing {
                path: PathBuf::from("config.xml")
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn render_errors_use_exit_code_two() {
        let render = Error::Render {
            src: PathBuf::from("icon.png"),
            dest: PathBuf::from("out/icon-60.png"),
            detail: "decode failed".into(),
        };
        assert_eq!(render.exit_code(), 2);
        assert_eq!(Error::TaskFailed("panicked".into()).exit_code(), 2);
    }
}
