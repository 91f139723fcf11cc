use std::fmt::{Display, Formatter};

use crate::time::parse_seconds;
use crate::timeline::TimelineModel;

/// Input field a violation points at, for UI highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TrimStart,
    TrimEnd,
    ClipStart(usize),
    ClipEnd(usize),
}

/// Category of a submit-time violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    MissingField,
    NotANumber,
    StartNotBeforeEnd,
    ClipMissingField,
    ClipNotANumber,
    ClipStartNotBeforeEnd,
}

/// One violation and the field(s) to mark for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub fields: Vec<Field>,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let clip_index = self.fields.iter().find_map(|field| match field {
            Field::ClipStart(index) | Field::ClipEnd(index) => Some(*index + 1),
            _ => None,
        });
        match self.kind {
            ViolationKind::MissingField => write!(f, "start and end times are required"),
            ViolationKind::NotANumber => write!(f, "start and end times must be numbers"),
            ViolationKind::StartNotBeforeEnd => {
                write!(f, "start time must be before end time")
            }
            ViolationKind::ClipMissingField => {
                write!(
                    f,
                    "clip {}: both times are required",
                    clip_index.unwrap_or(0)
                )
            }
            ViolationKind::ClipNotANumber => {
                write!(f, "clip {}: times must be numbers", clip_index.unwrap_or(0))
            }
            ViolationKind::ClipStartNotBeforeEnd => {
                write!(
                    f,
                    "clip {}: start time must be before end time",
                    clip_index.unwrap_or(0)
                )
            }
        }
    }
}

/// Complete set of violations found at submit time.
///
/// Empty means the model is ready to cut. The report always aggregates every
/// violation rather than stopping at the first, so the UI can mark all
/// offending fields in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns true when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Runs the strict submit-time checks on the model.
///
/// This is the hard counterpart of the tolerant defaulting used by span
/// derivation: a blank trim bound is fine while editing but is a
/// [`ViolationKind::MissingField`] here. Clip entries with both bounds blank
/// are placeholders and are skipped entirely.
pub fn validate_for_submit(model: &TimelineModel) -> ValidationReport {
    let mut violations = Vec::new();

    check_pair(
        &mut violations,
        model.trim_start_raw(),
        model.trim_end_raw(),
        TrimFields,
    );

    for (index, entry) in model.clips().iter().enumerate() {
        if entry.is_placeholder() {
            continue;
        }
        check_pair(&mut violations, &entry.start, &entry.end, ClipFields(index));
    }

    ValidationReport { violations }
}

/// Maps the shared start/end checks onto concrete fields and violation kinds.
trait PairFields {
    fn start(&self) -> Field;
    fn end(&self) -> Field;
    fn missing(&self) -> ViolationKind;
    fn not_a_number(&self) -> ViolationKind;
    fn inverted(&self) -> ViolationKind;
}

struct TrimFields;

impl PairFields for TrimFields {
    fn start(&self) -> Field {
        Field::TrimStart
    }
    fn end(&self) -> Field {
        Field::TrimEnd
    }
    fn missing(&self) -> ViolationKind {
        ViolationKind::MissingField
    }
    fn not_a_number(&self) -> ViolationKind {
        ViolationKind::NotANumber
    }
    fn inverted(&self) -> ViolationKind {
        ViolationKind::StartNotBeforeEnd
    }
}

struct ClipFields(usize);

impl PairFields for ClipFields {
    fn start(&self) -> Field {
        Field::ClipStart(self.0)
    }
    fn end(&self) -> Field {
        Field::ClipEnd(self.0)
    }
    fn missing(&self) -> ViolationKind {
        ViolationKind::ClipMissingField
    }
    fn not_a_number(&self) -> ViolationKind {
        ViolationKind::ClipNotANumber
    }
    fn inverted(&self) -> ViolationKind {
        ViolationKind::ClipStartNotBeforeEnd
    }
}

fn check_pair(
    violations: &mut Vec<Violation>,
    raw_start: &str,
    raw_end: &str,
    fields: impl PairFields,
) {
    let mut blank = Vec::new();
    let mut junk = Vec::new();
    let mut parsed = [None, None];

    for (slot, (raw, field)) in [(raw_start, fields.start()), (raw_end, fields.end())]
        .into_iter()
        .enumerate()
    {
        if raw.trim().is_empty() {
            blank.push(field);
        } else if let Some(value) = parse_seconds(raw) {
            parsed[slot] = Some(value);
        } else {
            junk.push(field);
        }
    }

    for field in blank {
        violations.push(Violation {
            kind: fields.missing(),
            fields: vec![field],
        });
    }
    if !junk.is_empty() {
        violations.push(Violation {
            kind: fields.not_a_number(),
            fields: junk,
        });
    }
    if let [Some(start), Some(end)] = parsed
        && start >= end
    {
        violations.push(Violation {
            kind: fields.inverted(),
            fields: vec![fields.start(), fields.end()],
        });
    }
}
