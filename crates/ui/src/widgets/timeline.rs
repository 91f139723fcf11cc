use engine::{Span, SpanKind};

/// Rect-like representation of one removal indicator for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStrip {
    pub kind: SpanKind,
    pub x: f32,
    pub width: f32,
}

/// Values needed by the UI to draw the indicator bar and playhead.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRenderModel {
    pub strips: Vec<IndicatorStrip>,
    pub playhead_x: f32,
}

/// Interaction result emitted by the timeline widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineInteraction {
    Scrubbed(f64),
}

/// Builds draw data for the indicator bar.
///
/// Span percentages are scaled into pixel space for a widget of `width_px`.
/// Widths are passed through unclamped: an inverted clip keeps its negative
/// width so the renderer shows the same degenerate strip the model derived.
pub fn build_render_model(
    spans: &[Span],
    playhead_percent: f64,
    width_px: f32,
) -> TimelineRenderModel {
    let safe_width = width_px.max(0.0);
    let scale = safe_width / 100.0;

    let strips = spans
        .iter()
        .map(|span| IndicatorStrip {
            kind: span.kind,
            x: span.left_percent as f32 * scale,
            width: span.width_percent as f32 * scale,
        })
        .collect();

    let playhead_x = (playhead_percent as f32 * scale).clamp(0.0, safe_width);
    TimelineRenderModel { strips, playhead_x }
}

/// Maps a pointer X position into media seconds for scrubbing.
pub fn scrub_at_x(x_px: f32, width_px: f32, duration: f64) -> f64 {
    if duration <= 0.0 || width_px <= 0.0 {
        return 0.0;
    }

    let normalized = f64::from((x_px / width_px).clamp(0.0, 1.0));
    normalized * duration
}

/// Creates a scrub interaction from a click on the indicator bar.
pub fn click_at_x(x_px: f32, width_px: f32, duration: f64) -> TimelineInteraction {
    TimelineInteraction::Scrubbed(scrub_at_x(x_px, width_px, duration))
}

/// Creates a scrub interaction from a drag update on the indicator bar.
pub fn drag_to_x(x_px: f32, width_px: f32, duration: f64) -> TimelineInteraction {
    TimelineInteraction::Scrubbed(scrub_at_x(x_px, width_px, duration))
}

#[cfg(test)]
mod tests {
    use engine::{Span, SpanKind};

    use super::{TimelineInteraction, build_render_model, click_at_x, scrub_at_x};

    fn sample_spans() -> Vec<Span> {
        vec![
            Span {
                kind: SpanKind::LeadingTrim,
                left_percent: 0.0,
                width_percent: 10.0,
            },
            Span {
                kind: SpanKind::TrailingTrim,
                left_percent: 80.0,
                width_percent: 20.0,
            },
            Span {
                kind: SpanKind::Clip { index: 0 },
                left_percent: 40.0,
                width_percent: 5.0,
            },
        ]
    }

    #[test]
    fn build_render_model_scales_percentages_into_pixels() {
        let model = build_render_model(&sample_spans(), 25.0, 200.0);

        assert_eq!(model.strips.len(), 3);
        assert_eq!(model.strips[0].x, 0.0);
        assert_eq!(model.strips[0].width, 20.0);
        assert_eq!(model.strips[1].x, 160.0);
        assert_eq!(model.strips[1].width, 40.0);
        assert_eq!(model.strips[2].x, 80.0);
        assert_eq!(model.strips[2].width, 10.0);
        assert_eq!(model.playhead_x, 50.0);
    }

    #[test]
    fn negative_span_widths_are_not_clamped() {
        let spans = vec![Span {
            kind: SpanKind::Clip { index: 0 },
            left_percent: 40.0,
            width_percent: -10.0,
        }];

        let model = build_render_model(&spans, 0.0, 100.0);
        assert_eq!(model.strips[0].width, -10.0);
    }

    #[test]
    fn playhead_is_clamped_to_the_widget() {
        let model = build_render_model(&[], 130.0, 200.0);
        assert_eq!(model.playhead_x, 200.0);

        let model = build_render_model(&[], -5.0, 200.0);
        assert_eq!(model.playhead_x, 0.0);
    }

    #[test]
    fn scrub_position_is_clamped_and_scaled() {
        assert_eq!(scrub_at_x(-10.0, 200.0, 60.0), 0.0);
        assert_eq!(scrub_at_x(100.0, 200.0, 60.0), 30.0);
        assert_eq!(scrub_at_x(220.0, 200.0, 60.0), 60.0);
        assert_eq!(scrub_at_x(50.0, 0.0, 60.0), 0.0);
    }

    #[test]
    fn click_emits_a_scrub_interaction() {
        assert_eq!(
            click_at_x(50.0, 200.0, 60.0),
            TimelineInteraction::Scrubbed(15.0)
        );
    }
}
