use tracing::debug;

use crate::error::{EngineError, Result};
use crate::time::parse_seconds;
use crate::timeline::TimelineModel;
use crate::validate::validate_for_submit;

/// One kept portion of the source media, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeepSegment {
    pub start: f64,
    pub end: f64,
}

/// Concatenation plan handed to the processing backend after submit.
///
/// Segments are the portions of the media that survive the trim and the
/// removal clips, in the order they will be joined.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPlan {
    pub segments: Vec<KeepSegment>,
}

impl CutPlan {
    /// Total kept duration in seconds.
    pub fn kept_duration(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.end - segment.start)
            .sum()
    }
}

/// Builds the keep-segment plan from a validated model.
///
/// With clips `c0..cn` inside trim `[s, e]` the kept portions are
/// `[s, c0.start]`, `[c0.end, c1.start]`, …, `[cn.end, e]`; with no clips the
/// plan is the single segment `[s, e]`. Placeholder entries (both bounds
/// blank) are skipped, matching validation. Clips are taken in entry order
/// without sorting or overlap resolution, exactly as the user laid them out.
///
/// The session only calls this after [`validate_for_submit`] passes; calling
/// it on an invalid model is a caller bug and fails with
/// [`EngineError::PlanOnInvalidModel`].
pub fn build_cut_plan(model: &TimelineModel) -> Result<CutPlan> {
    let report = validate_for_submit(model);
    if !report.is_valid() {
        return Err(EngineError::PlanOnInvalidModel {
            violations: report.violations.len(),
        });
    }

    // Validation guarantees both trim bounds and all non-placeholder clip
    // bounds parse.
    let trim_start = parse_seconds(model.trim_start_raw()).unwrap_or_default();
    let trim_end = parse_seconds(model.trim_end_raw()).unwrap_or_default();
    let clips: Vec<(f64, f64)> = model
        .clips()
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .map(|entry| {
            let (start, end) = entry.parsed();
            (start.unwrap_or_default(), end.unwrap_or_default())
        })
        .collect();

    let mut segments = Vec::with_capacity(clips.len() + 1);
    let mut cursor = trim_start;
    for (clip_start, clip_end) in &clips {
        segments.push(KeepSegment {
            start: cursor,
            end: *clip_start,
        });
        cursor = *clip_end;
    }
    segments.push(KeepSegment {
        start: cursor,
        end: trim_end,
    });

    debug!(
        segment_count = segments.len(),
        clip_count = clips.len(),
        trim_start,
        trim_end,
        "cut plan built"
    );
    Ok(CutPlan { segments })
}

#[cfg(test)]
mod tests {
    use super::{KeepSegment, build_cut_plan};
    use crate::error::EngineError;
    use crate::timeline::{Bound, TimelineModel};

    fn model_with_trim(start: &str, end: &str) -> TimelineModel {
        let mut model = TimelineModel::new(100.0).expect("model should build");
        model.set_trim_start(start);
        model.set_trim_end(end);
        model
    }

    fn push_clip(model: &mut TimelineModel, start: &str, end: &str) {
        let index = model.add_clip();
        model
            .set_clip_bound(index, Bound::Start, start)
            .expect("clip edit should succeed");
        model
            .set_clip_bound(index, Bound::End, end)
            .expect("clip edit should succeed");
    }

    #[test]
    fn trim_without_clips_yields_one_segment() {
        let model = model_with_trim("5", "95");

        let plan = build_cut_plan(&model).expect("plan should build");

        assert_eq!(
            plan.segments,
            vec![KeepSegment {
                start: 5.0,
                end: 95.0
            }]
        );
        assert_eq!(plan.kept_duration(), 90.0);
    }

    #[test]
    fn clips_split_the_kept_range_into_concat_segments() {
        let mut model = model_with_trim("10", "90");
        push_clip(&mut model, "20", "30");
        push_clip(&mut model, "50", "60");

        let plan = build_cut_plan(&model).expect("plan should build");

        assert_eq!(
            plan.segments,
            vec![
                KeepSegment {
                    start: 10.0,
                    end: 20.0
                },
                KeepSegment {
                    start: 30.0,
                    end: 50.0
                },
                KeepSegment {
                    start: 60.0,
                    end: 90.0
                },
            ]
        );
        assert_eq!(plan.kept_duration(), 60.0);
    }

    #[test]
    fn placeholder_clip_entries_do_not_produce_segments() {
        let mut model = model_with_trim("0", "100");
        model.add_clip();
        push_clip(&mut model, "40", "50");
        model.add_clip();

        let plan = build_cut_plan(&model).expect("plan should build");
        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segments[0].end, 40.0);
        assert_eq!(plan.segments[1].start, 50.0);
    }

    #[test]
    fn invalid_model_is_a_contract_error() {
        let model = model_with_trim("", "50");

        let result = build_cut_plan(&model);
        assert!(matches!(
            result,
            Err(EngineError::PlanOnInvalidModel { violations: 1 })
        ));
    }

    #[test]
    fn clip_order_is_taken_as_entered_without_sorting() {
        let mut model = model_with_trim("0", "100");
        push_clip(&mut model, "50", "60");
        push_clip(&mut model, "10", "20");

        let plan = build_cut_plan(&model).expect("plan should build");

        // Out-of-order clips yield out-of-order segments, as in the source.
        assert_eq!(plan.segments[0].end, 50.0);
        assert_eq!(plan.segments[1].start, 60.0);
        assert_eq!(plan.segments[1].end, 10.0);
    }
}
