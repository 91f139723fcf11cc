use engine::{Bound, Command, CutPlan, Event, Span, ValidationReport};

use crate::widgets::timeline::{TimelineInteraction, TimelineRenderModel, build_render_model};

/// UI message consumed by update.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Engine(Event),
    TimelineScrubbed(f64),
    TrimStartEdited(String),
    TrimEndEdited(String),
    MarkTrimStartPressed,
    MarkTrimEndPressed,
    JumpToTrimStartPressed,
    JumpToTrimEndPressed,
    AddClipPressed,
    RemoveClipPressed(usize),
    ClipBoundEdited {
        index: usize,
        bound: Bound,
        text: String,
    },
    MarkClipBoundPressed {
        index: usize,
        bound: Bound,
    },
    StepBackPressed,
    StepForwardPressed,
    SlowerPressed,
    FasterPressed,
    ResetRatePressed,
    SubmitPressed,
}

impl Message {
    /// Converts a timeline widget interaction into an app message.
    pub fn from_timeline(interaction: TimelineInteraction) -> Self {
        match interaction {
            TimelineInteraction::Scrubbed(seconds) => Self::TimelineScrubbed(seconds),
        }
    }
}

/// UI state for the editor screen.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    duration: f64,
    spans: Vec<Span>,
    playhead_percent: f64,
    playhead_label: String,
    clip_count: usize,
    rate: i32,
    violations: Option<ValidationReport>,
    plan: Option<CutPlan>,
}

impl AppState {
    /// Creates an empty app state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one UI message and returns outgoing engine commands.
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Engine(event) => self.apply_engine_event(event),
            Message::TimelineScrubbed(seconds) => vec![Command::SetPlayhead { seconds }],
            Message::TrimStartEdited(raw) => vec![Command::SetTrimStart { raw }],
            Message::TrimEndEdited(raw) => vec![Command::SetTrimEnd { raw }],
            Message::MarkTrimStartPressed => vec![Command::MarkTrimStart],
            Message::MarkTrimEndPressed => vec![Command::MarkTrimEnd],
            Message::JumpToTrimStartPressed => vec![Command::JumpToTrimStart],
            Message::JumpToTrimEndPressed => vec![Command::JumpToTrimEnd],
            Message::AddClipPressed => vec![Command::AddClip],
            Message::RemoveClipPressed(index) => vec![Command::RemoveClip { index }],
            Message::ClipBoundEdited { index, bound, text } => {
                vec![Command::SetClipBound {
                    index,
                    bound,
                    raw: text,
                }]
            }
            Message::MarkClipBoundPressed { index, bound } => {
                vec![Command::MarkClipBound { index, bound }]
            }
            Message::StepBackPressed => vec![Command::StepBack],
            Message::StepForwardPressed => vec![Command::StepForward],
            Message::SlowerPressed => vec![Command::StepSlower],
            Message::FasterPressed => vec![Command::StepFaster],
            Message::ResetRatePressed => vec![Command::ResetRate],
            Message::SubmitPressed => vec![Command::Submit],
        }
    }

    /// Returns render data for the indicator bar at the given widget width.
    pub fn timeline_render_model(&self, width_px: f32) -> TimelineRenderModel {
        build_render_model(&self.spans, self.playhead_percent, width_px)
    }

    /// Returns the formatted playhead readout.
    pub fn playhead_label(&self) -> &str {
        &self.playhead_label
    }

    /// Returns the media duration known to the UI.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns how many clip rows the form shows.
    pub fn clip_count(&self) -> usize {
        self.clip_count
    }

    /// Returns the last reported playback rate.
    pub fn rate(&self) -> i32 {
        self.rate
    }

    /// Returns violations from the last rejected submit, if any.
    pub fn violations(&self) -> Option<&ValidationReport> {
        self.violations.as_ref()
    }

    /// Returns the accepted cut plan, once submit succeeds.
    pub fn plan(&self) -> Option<&CutPlan> {
        self.plan.as_ref()
    }

    fn apply_engine_event(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::MediaLoaded { duration, .. } => {
                self.duration = duration;
                self.plan = None;
                self.violations = None;
            }
            Event::SpansChanged(spans) => {
                self.spans = spans;
            }
            Event::PlayheadChanged {
                percent, timestamp, ..
            } => {
                self.playhead_percent = percent;
                self.playhead_label = timestamp;
            }
            Event::RateChanged { rate } => {
                self.rate = rate;
            }
            Event::ClipAdded { .. } => {
                self.clip_count += 1;
            }
            Event::ClipRemoved { .. } => {
                self.clip_count = self.clip_count.saturating_sub(1);
            }
            Event::ValidationFailed(report) => {
                self.violations = Some(report);
                self.plan = None;
            }
            Event::Submitted(plan) => {
                self.plan = Some(plan);
                self.violations = None;
            }
            Event::SessionSaved { .. } => {}
        }
        Vec::new()
    }
}
