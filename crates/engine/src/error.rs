use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type used by the engine crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors produced by session commands and model operations.
///
/// User-input problems (blank fields, junk text, inverted ranges) are not
/// errors: they are reported as [`crate::validate::ValidationReport`] data so
/// the UI can mark every offending field at once. The variants here are
/// caller-contract failures and session file I/O.
#[derive(Debug)]
pub enum EngineError {
    MediaNotLoaded,
    InvalidDuration {
        seconds: f64,
    },
    ClipIndexOutOfRange {
        index: usize,
        len: usize,
    },
    PlanOnInvalidModel {
        violations: usize,
    },
    InvalidSessionFile {
        reason: String,
    },
    SessionIo {
        context: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    SessionSerialization {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MediaNotLoaded => write!(f, "no media is loaded"),
            Self::InvalidDuration { seconds } => {
                write!(f, "media duration must be a positive number: {seconds}")
            }
            Self::ClipIndexOutOfRange { index, len } => {
                write!(f, "clip index {index} out of range for {len} clips")
            }
            Self::PlanOnInvalidModel { violations } => {
                write!(
                    f,
                    "cannot build a cut plan while {violations} validation violations remain"
                )
            }
            Self::InvalidSessionFile { reason } => write!(f, "invalid session file: {reason}"),
            Self::SessionIo {
                context,
                path,
                source,
            } => write!(f, "{context}: {} ({source})", path.display()),
            Self::SessionSerialization { path, source } => {
                write!(
                    f,
                    "session serialization/deserialization failed at {} ({source})",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SessionIo { source, .. } => Some(source),
            Self::SessionSerialization { source, .. } => Some(source),
            _ => None,
        }
    }
}
