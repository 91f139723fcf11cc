use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, Result};
use crate::timeline::{ClipEntry, TimelineModel};

/// On-disk snapshot of an editing session.
///
/// Raw bound text round-trips verbatim, including half-typed values, so a
/// reloaded session looks exactly as the user left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub duration: f64,
    pub frame_rate: f64,
    pub trim_start: String,
    pub trim_end: String,
    pub clips: Vec<ClipEntry>,
}

impl SessionFile {
    /// Rebuilds the timeline model stored in this file.
    pub fn into_model(self) -> Result<TimelineModel> {
        let mut model = TimelineModel::new(self.duration)?;
        model.set_trim_start(self.trim_start);
        model.set_trim_end(self.trim_end);
        for entry in self.clips {
            let index = model.add_clip();
            model.set_clip_bound(index, crate::timeline::Bound::Start, entry.start)?;
            model.set_clip_bound(index, crate::timeline::Bound::End, entry.end)?;
        }
        Ok(model)
    }
}

/// Writes a session file as pretty-printed JSON.
pub fn save_session(path: &Path, session: &SessionFile) -> Result<()> {
    let json =
        serde_json::to_string_pretty(session).map_err(|source| EngineError::SessionSerialization {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, json).map_err(|source| EngineError::SessionIo {
        context: "failed to write session file",
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "session saved");
    Ok(())
}

/// Reads and checks a session file.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let json = fs::read_to_string(path).map_err(|source| EngineError::SessionIo {
        context: "failed to read session file",
        path: path.to_path_buf(),
        source,
    })?;
    let session: SessionFile =
        serde_json::from_str(&json).map_err(|source| EngineError::SessionSerialization {
            path: path.to_path_buf(),
            source,
        })?;

    if !session.duration.is_finite() || session.duration <= 0.0 {
        return Err(EngineError::InvalidSessionFile {
            reason: format!("duration must be positive, got {}", session.duration),
        });
    }
    if !session.frame_rate.is_finite() || session.frame_rate <= 0.0 {
        return Err(EngineError::InvalidSessionFile {
            reason: format!("frame rate must be positive, got {}", session.frame_rate),
        });
    }

    info!(path = %path.display(), "session loaded");
    Ok(session)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{SessionFile, load_session, save_session};
    use crate::error::EngineError;
    use crate::timeline::ClipEntry;

    fn sample_session() -> SessionFile {
        SessionFile {
            duration: 120.0,
            frame_rate: 24.0,
            trim_start: "3.000".to_string(),
            trim_end: String::new(),
            clips: vec![ClipEntry {
                start: "10".to_string(),
                end: "1x".to_string(),
            }],
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("session-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn save_and_load_round_trip_raw_text_verbatim() {
        let path = temp_path("round-trip");
        let session = sample_session();

        save_session(&path, &session).expect("save should succeed");
        let loaded = load_session(&path).expect("load should succeed");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, session);
        assert_eq!(loaded.clips[0].end, "1x");
    }

    #[test]
    fn into_model_restores_duration_trim_and_clips() {
        let model = sample_session()
            .into_model()
            .expect("model should rebuild");

        assert_eq!(model.duration(), 120.0);
        assert_eq!(model.trim_start_raw(), "3.000");
        assert_eq!(model.clips().len(), 1);
        assert_eq!(model.clips()[0].start, "10");
    }

    #[test]
    fn load_rejects_files_with_a_bad_duration() {
        let path = temp_path("bad-duration");
        let mut session = sample_session();
        session.duration = 0.0;
        std::fs::write(
            &path,
            serde_json::to_string(&session).expect("serialize should succeed"),
        )
        .expect("write should succeed");

        let result = load_session(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(EngineError::InvalidSessionFile { .. })
        ));
    }

    #[test]
    fn load_reports_missing_files_as_session_io() {
        let result = load_session(&temp_path("does-not-exist"));
        assert!(matches!(result, Err(EngineError::SessionIo { .. })));
    }
}
