use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{EngineError, Result};
use crate::plan::{CutPlan, build_cut_plan};
use crate::playback::PlaybackRateController;
use crate::playhead::Playhead;
use crate::session_file::{SessionFile, load_session, save_session};
use crate::span::{Span, derive_spans};
use crate::time::{format_timestamp, parse_seconds};
use crate::timeline::{Bound, TimelineModel};
use crate::validate::{ValidationReport, validate_for_submit};

/// Commands accepted by the session.
///
/// Each command maps onto one user action in the editing UI: typing into a
/// bound field, pressing a set/jump button, stepping the transport, or
/// submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Loads a new media file.
    ///
    /// Replaces the duration and resets trim and playhead; clip raw text
    /// survives and is revalidated against the new duration at submit.
    LoadMedia {
        duration: f64,
        frame_rate: Option<f64>,
    },
    SetPlayhead {
        seconds: f64,
    },
    StepBack,
    StepForward,
    SetFrameRate {
        frame_rate: f64,
    },
    SetTrimStart {
        raw: String,
    },
    SetTrimEnd {
        raw: String,
    },
    /// Copies the playhead into the trim start field.
    MarkTrimStart,
    /// Copies the playhead into the trim end field.
    MarkTrimEnd,
    JumpToTrimStart,
    JumpToTrimEnd,
    AddClip,
    RemoveClip {
        index: usize,
    },
    SetClipBound {
        index: usize,
        bound: Bound,
        raw: String,
    },
    MarkClipBound {
        index: usize,
        bound: Bound,
    },
    JumpToClipBound {
        index: usize,
        bound: Bound,
    },
    StepSlower,
    StepFaster,
    ResetRate,
    /// Validates the form; emits either `Submitted` or `ValidationFailed`.
    Submit,
    SaveSession {
        path: PathBuf,
    },
    LoadSession {
        path: PathBuf,
    },
}

/// Events emitted by the session for the UI to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    MediaLoaded {
        duration: f64,
        frame_rate: f64,
    },
    /// Fresh indicator spans; emitted after every model mutation.
    SpansChanged(Vec<Span>),
    PlayheadChanged {
        seconds: f64,
        percent: f64,
        timestamp: String,
    },
    RateChanged {
        rate: i32,
    },
    ClipAdded {
        index: usize,
    },
    ClipRemoved {
        index: usize,
    },
    ValidationFailed(ValidationReport),
    Submitted(CutPlan),
    SessionSaved {
        path: PathBuf,
    },
}

/// Editing session: the timeline model plus playhead and rate state.
///
/// All operations are synchronous and run to completion on the calling
/// thread; the session performs no I/O apart from the explicit session
/// save/load commands. Every mutation re-derives the spans eagerly so the
/// UI always renders a consistent picture.
///
/// # Example
/// ```
/// use engine::{Command, Event, Session};
///
/// let mut session = Session::new();
/// let events = session
///     .handle_command(Command::LoadMedia {
///         duration: 60.0,
///         frame_rate: None,
///     })
///     .expect("load should succeed");
/// assert!(matches!(events[0], Event::MediaLoaded { .. }));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    model: Option<TimelineModel>,
    playhead: Playhead,
    rate: PlaybackRateController,
}

impl Session {
    /// Creates a session with no media loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command and returns emitted events.
    pub fn handle_command(&mut self, command: Command) -> Result<Vec<Event>> {
        match command {
            Command::LoadMedia {
                duration,
                frame_rate,
            } => self.load_media(duration, frame_rate),
            Command::SetPlayhead { seconds } => {
                let duration = self.model()?.duration();
                self.playhead.set(seconds, duration);
                Ok(vec![self.playhead_event()])
            }
            Command::StepBack => {
                let duration = self.model()?.duration();
                self.playhead.step_back(duration);
                Ok(vec![self.playhead_event()])
            }
            Command::StepForward => {
                let duration = self.model()?.duration();
                self.playhead.step_forward(duration);
                Ok(vec![self.playhead_event()])
            }
            Command::SetFrameRate { frame_rate } => {
                self.playhead.set_frame_rate(frame_rate);
                Ok(Vec::new())
            }
            Command::SetTrimStart { raw } => {
                self.model_mut()?.set_trim_start(raw);
                Ok(vec![self.spans_event()])
            }
            Command::SetTrimEnd { raw } => {
                self.model_mut()?.set_trim_end(raw);
                Ok(vec![self.spans_event()])
            }
            Command::MarkTrimStart => {
                let mark = self.playhead.mark();
                self.model_mut()?.set_trim_start(mark);
                Ok(vec![self.spans_event()])
            }
            Command::MarkTrimEnd => {
                let mark = self.playhead.mark();
                self.model_mut()?.set_trim_end(mark);
                Ok(vec![self.spans_event()])
            }
            Command::JumpToTrimStart => {
                let raw = self.model()?.trim_start_raw().to_string();
                Ok(self.jump_to(&raw))
            }
            Command::JumpToTrimEnd => {
                let raw = self.model()?.trim_end_raw().to_string();
                Ok(self.jump_to(&raw))
            }
            Command::AddClip => {
                let index = self.model_mut()?.add_clip();
                Ok(vec![Event::ClipAdded { index }, self.spans_event()])
            }
            Command::RemoveClip { index } => {
                self.model_mut()?.remove_clip(index)?;
                Ok(vec![Event::ClipRemoved { index }, self.spans_event()])
            }
            Command::SetClipBound { index, bound, raw } => {
                self.model_mut()?.set_clip_bound(index, bound, raw)?;
                Ok(vec![self.spans_event()])
            }
            Command::MarkClipBound { index, bound } => {
                let mark = self.playhead.mark();
                self.model_mut()?.set_clip_bound(index, bound, mark)?;
                Ok(vec![self.spans_event()])
            }
            Command::JumpToClipBound { index, bound } => {
                let model = self.model()?;
                let entry =
                    model
                        .clips()
                        .get(index)
                        .ok_or(EngineError::ClipIndexOutOfRange {
                            index,
                            len: model.clips().len(),
                        })?;
                let raw = match bound {
                    Bound::Start => entry.start.clone(),
                    Bound::End => entry.end.clone(),
                };
                Ok(self.jump_to(&raw))
            }
            Command::StepSlower => Ok(vec![Event::RateChanged {
                rate: self.rate.step_slower(),
            }]),
            Command::StepFaster => Ok(vec![Event::RateChanged {
                rate: self.rate.step_faster(),
            }]),
            Command::ResetRate => Ok(vec![Event::RateChanged {
                rate: self.rate.reset(),
            }]),
            Command::Submit => self.submit(),
            Command::SaveSession { path } => self.save(path),
            Command::LoadSession { path } => self.load(path),
        }
    }

    /// Returns the current indicator spans, empty before any media loads.
    pub fn spans(&self) -> Vec<Span> {
        self.model.as_ref().map(derive_spans).unwrap_or_default()
    }

    /// Returns the loaded model, if any.
    pub fn model(&self) -> Result<&TimelineModel> {
        self.model.as_ref().ok_or(EngineError::MediaNotLoaded)
    }

    /// Returns the playhead position in seconds.
    pub fn playhead_seconds(&self) -> f64 {
        self.playhead.seconds()
    }

    /// Returns the currently selected playback rate.
    pub fn current_rate(&self) -> i32 {
        self.rate.rate()
    }

    fn model_mut(&mut self) -> Result<&mut TimelineModel> {
        self.model.as_mut().ok_or(EngineError::MediaNotLoaded)
    }

    fn load_media(&mut self, duration: f64, frame_rate: Option<f64>) -> Result<Vec<Event>> {
        match &mut self.model {
            Some(model) => model.set_duration(duration)?,
            None => self.model = Some(TimelineModel::new(duration)?),
        }
        self.playhead = Playhead::new();
        if let Some(frame_rate) = frame_rate {
            self.playhead.set_frame_rate(frame_rate);
        }
        self.rate.reset();

        info!(duration, frame_rate = self.playhead.frame_rate(), "media loaded");
        Ok(vec![
            Event::MediaLoaded {
                duration,
                frame_rate: self.playhead.frame_rate(),
            },
            self.spans_event(),
            self.playhead_event(),
        ])
    }

    fn submit(&mut self) -> Result<Vec<Event>> {
        let model = self.model()?;
        let report = validate_for_submit(model);
        if !report.is_valid() {
            warn!(violations = report.violations.len(), "submit rejected");
            return Ok(vec![Event::ValidationFailed(report)]);
        }

        let plan = build_cut_plan(model)?;
        info!(
            segment_count = plan.segments.len(),
            kept_seconds = plan.kept_duration(),
            "submit accepted"
        );
        Ok(vec![Event::Submitted(plan)])
    }

    fn save(&self, path: PathBuf) -> Result<Vec<Event>> {
        let model = self.model()?;
        let session = SessionFile {
            duration: model.duration(),
            frame_rate: self.playhead.frame_rate(),
            trim_start: model.trim_start_raw().to_string(),
            trim_end: model.trim_end_raw().to_string(),
            clips: model.clips().to_vec(),
        };
        save_session(&path, &session)?;
        Ok(vec![Event::SessionSaved { path }])
    }

    fn load(&mut self, path: PathBuf) -> Result<Vec<Event>> {
        let session = load_session(&path)?;
        let duration = session.duration;
        let frame_rate = session.frame_rate;
        self.model = Some(session.into_model()?);
        self.playhead = Playhead::new();
        self.playhead.set_frame_rate(frame_rate);
        self.rate.reset();

        Ok(vec![
            Event::MediaLoaded {
                duration,
                frame_rate: self.playhead.frame_rate(),
            },
            self.spans_event(),
            self.playhead_event(),
        ])
    }

    fn jump_to(&mut self, raw: &str) -> Vec<Event> {
        // Mirrors the form behavior: a jump on unparsable text does nothing.
        let Some(seconds) = parse_seconds(raw) else {
            return Vec::new();
        };
        let duration = self
            .model
            .as_ref()
            .map(TimelineModel::duration)
            .unwrap_or_default();
        self.playhead.set(seconds, duration);
        vec![self.playhead_event()]
    }

    fn spans_event(&self) -> Event {
        Event::SpansChanged(self.spans())
    }

    fn playhead_event(&self) -> Event {
        let duration = self
            .model
            .as_ref()
            .map(TimelineModel::duration)
            .unwrap_or_default();
        Event::PlayheadChanged {
            seconds: self.playhead.seconds(),
            percent: self.playhead.percent(duration),
            timestamp: format_timestamp(self.playhead.seconds()),
        }
    }
}
