use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, Result};
use crate::time::parse_seconds;

/// Which end of a time range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Start,
    End,
}

/// One removal clip entry.
///
/// Bounds hold the raw text the user typed and may be blank or mid-edit
/// nonsense. Identity is the positional index in [`TimelineModel::clips`];
/// insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipEntry {
    pub start: String,
    pub end: String,
}

impl ClipEntry {
    /// Returns true when both bounds are blank.
    ///
    /// Placeholder entries are skipped by validation and never produce a
    /// span, but they stay in the sequence for continued editing.
    pub fn is_placeholder(&self) -> bool {
        self.start.trim().is_empty() && self.end.trim().is_empty()
    }

    /// Parses both bounds, `None` per bound when blank or non-numeric.
    pub fn parsed(&self) -> (Option<f64>, Option<f64>) {
        (parse_seconds(&self.start), parse_seconds(&self.end))
    }
}

/// Editable trim/clip state for one loaded media file.
///
/// The trim range is the kept portion of the media; clips are sub-ranges
/// removed from within it. All bounds are stored as raw text and parsed only
/// at derivation and at submit, so the model tolerates half-typed input.
///
/// # Example
/// ```
/// use engine::TimelineModel;
///
/// let mut model = TimelineModel::new(120.0).expect("valid duration");
/// model.set_trim_start("10");
/// let index = model.add_clip();
/// assert_eq!(index, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineModel {
    duration: f64,
    trim_start: String,
    trim_end: String,
    clips: Vec<ClipEntry>,
}

impl TimelineModel {
    /// Creates a model for a media file of `duration` seconds.
    ///
    /// The trim defaults to the full range (blank bounds resolve to
    /// `0..duration`) and the clip list starts empty.
    pub fn new(duration: f64) -> Result<Self> {
        validate_duration(duration)?;
        Ok(Self {
            duration,
            trim_start: String::new(),
            trim_end: String::new(),
            clips: Vec::new(),
        })
    }

    /// Replaces the media duration when a new file is loaded.
    ///
    /// Resets the trim bounds to blank (the tolerant defaults then yield the
    /// full range again). Clip raw text is preserved; entries that no longer
    /// fit the new duration simply fail validation at the next submit.
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        validate_duration(duration)?;
        debug!(duration, clip_count = self.clips.len(), "duration replaced");
        self.duration = duration;
        self.trim_start.clear();
        self.trim_end.clear();
        Ok(())
    }

    /// Returns the media duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the raw trim start text.
    pub fn trim_start_raw(&self) -> &str {
        &self.trim_start
    }

    /// Returns the raw trim end text.
    pub fn trim_end_raw(&self) -> &str {
        &self.trim_end
    }

    /// Returns the ordered clip entries.
    pub fn clips(&self) -> &[ClipEntry] {
        &self.clips
    }

    /// Stores raw trim start text. Never fails; parsing happens later.
    pub fn set_trim_start(&mut self, raw: impl Into<String>) {
        self.trim_start = raw.into();
    }

    /// Stores raw trim end text. Never fails; parsing happens later.
    pub fn set_trim_end(&mut self, raw: impl Into<String>) {
        self.trim_end = raw.into();
    }

    /// Appends an empty clip entry and returns its index.
    ///
    /// There is no upper bound on the clip count. The new entry produces no
    /// span until both bounds are set.
    pub fn add_clip(&mut self) -> usize {
        self.clips.push(ClipEntry::default());
        self.clips.len() - 1
    }

    /// Removes the clip entry at `index` and returns it.
    ///
    /// Later entries shift down one position; identity is positional, so the
    /// reindex is expected. The sequence is untouched on failure.
    pub fn remove_clip(&mut self, index: usize) -> Result<ClipEntry> {
        if index >= self.clips.len() {
            warn!(index, len = self.clips.len(), "remove rejected: clip index out of range");
            return Err(EngineError::ClipIndexOutOfRange {
                index,
                len: self.clips.len(),
            });
        }
        Ok(self.clips.remove(index))
    }

    /// Stores raw text on one bound of the clip entry at `index`.
    pub fn set_clip_bound(&mut self, index: usize, bound: Bound, raw: impl Into<String>) -> Result<()> {
        let len = self.clips.len();
        let Some(entry) = self.clips.get_mut(index) else {
            warn!(index, len, "edit rejected: clip index out of range");
            return Err(EngineError::ClipIndexOutOfRange { index, len });
        };
        match bound {
            Bound::Start => entry.start = raw.into(),
            Bound::End => entry.end = raw.into(),
        }
        Ok(())
    }

    /// Resolves the trim start actually used in derivation.
    ///
    /// Blank, non-numeric or out-of-range input means "from the beginning".
    pub fn effective_trim_start(&self) -> f64 {
        parse_seconds(&self.trim_start)
            .filter(|value| (0.0..=self.duration).contains(value))
            .unwrap_or(0.0)
    }

    /// Resolves the trim end actually used in derivation.
    ///
    /// Blank, non-numeric or out-of-range input means "to the end".
    pub fn effective_trim_end(&self) -> f64 {
        parse_seconds(&self.trim_end)
            .filter(|value| (0.0..=self.duration).contains(value))
            .unwrap_or(self.duration)
    }
}

fn validate_duration(duration: f64) -> Result<()> {
    if !duration.is_finite() || duration <= 0.0 {
        warn!(duration, "rejected media duration");
        return Err(EngineError::InvalidDuration { seconds: duration });
    }
    Ok(())
}
