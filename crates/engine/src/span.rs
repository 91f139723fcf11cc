use crate::timeline::TimelineModel;

/// What a derived span represents on the indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Removed head of the media, `0..trim_start`.
    LeadingTrim,
    /// Removed tail of the media, `trim_end..duration`.
    TrailingTrim,
    /// One removal clip, carrying its positional index.
    Clip { index: usize },
}

/// Render-ready percentage interval, always recomputed and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub kind: SpanKind,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Derives the indicator spans for the current model state.
///
/// Pure and infallible: it runs on every keystroke, before the user has
/// finished typing, so bad trim bounds fall back to the full range and clip
/// entries with a blank or non-numeric bound are skipped. Clip spans use raw
/// subtraction, so an inverted entry yields a negative width; overlapping
/// spans are passed through without merging. Order is leading, trailing,
/// then clips in sequence order.
///
/// # Example
/// ```
/// use engine::span::derive_spans;
/// use engine::{SpanKind, TimelineModel};
///
/// let mut model = TimelineModel::new(200.0).expect("valid duration");
/// model.set_trim_start("50");
///
/// let spans = derive_spans(&model);
/// assert_eq!(spans[0].kind, SpanKind::LeadingTrim);
/// assert_eq!(spans[0].width_percent, 25.0);
/// ```
pub fn derive_spans(model: &TimelineModel) -> Vec<Span> {
    let duration = model.duration();
    let start = model.effective_trim_start();
    let end = model.effective_trim_end();

    let mut spans = vec![
        Span {
            kind: SpanKind::LeadingTrim,
            left_percent: 0.0,
            width_percent: start / duration * 100.0,
        },
        Span {
            kind: SpanKind::TrailingTrim,
            left_percent: end / duration * 100.0,
            width_percent: (duration - end) / duration * 100.0,
        },
    ];

    for (index, entry) in model.clips().iter().enumerate() {
        let (Some(clip_start), Some(clip_end)) = entry.parsed() else {
            continue;
        };
        spans.push(Span {
            kind: SpanKind::Clip { index },
            left_percent: clip_start / duration * 100.0,
            width_percent: (clip_end - clip_start) / duration * 100.0,
        });
    }

    spans
}
