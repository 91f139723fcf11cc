//! UI-agnostic core for a trim/clip video editor.
//!
//! Owns the editable timeline state for one loaded media file:
//! - a trim range (the kept portion) and removal clips, stored as raw text
//!   and tolerant of half-typed input,
//! - derived indicator spans for rendering,
//! - strict submit-time validation and the resulting cut plan,
//! - playhead and discrete playback-rate state.

pub mod api;
pub mod error;
pub mod plan;
pub mod playback;
pub mod playhead;
pub mod session_file;
pub mod span;
pub mod time;
pub mod timeline;
pub mod validate;

pub use api::{Command, Event, Session};
pub use error::{EngineError, Result};
pub use plan::{CutPlan, KeepSegment};
pub use playback::{PlaybackRateController, RATE_TABLE};
pub use playhead::{DEFAULT_FRAME_RATE, Playhead};
pub use session_file::SessionFile;
pub use span::{Span, SpanKind};
pub use timeline::{Bound, ClipEntry, TimelineModel};
pub use validate::{Field, ValidationReport, Violation, ViolationKind};
