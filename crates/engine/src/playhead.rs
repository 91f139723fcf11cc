use tracing::warn;

/// Frame rate assumed until the probed rate arrives.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Current scrub position within the loaded media.
///
/// The playhead is fed by the player (`timeupdate` in a browser, a decoder
/// callback elsewhere) and clamped to `[0, duration]`. Frame stepping moves
/// by `1 / frame_rate` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playhead {
    seconds: f64,
    frame_rate: f64,
}

impl Playhead {
    /// Creates a playhead at zero with the default frame rate.
    pub fn new() -> Self {
        Self {
            seconds: 0.0,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }

    /// Returns the position in seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Returns the frame rate used for stepping.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Replaces the frame rate once the media has been probed.
    ///
    /// Non-finite or non-positive rates are ignored so a failed probe keeps
    /// the default stepping granularity.
    pub fn set_frame_rate(&mut self, frame_rate: f64) {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            warn!(frame_rate, "ignored unusable frame rate");
            return;
        }
        self.frame_rate = frame_rate;
    }

    /// Moves the playhead, clamped to the media bounds.
    pub fn set(&mut self, seconds: f64, duration: f64) {
        self.seconds = clamp_playhead(seconds, duration);
    }

    /// Steps back one frame.
    pub fn step_back(&mut self, duration: f64) {
        self.set(self.seconds - 1.0 / self.frame_rate, duration);
    }

    /// Steps forward one frame.
    pub fn step_forward(&mut self, duration: f64) {
        self.set(self.seconds + 1.0 / self.frame_rate, duration);
    }

    /// Returns the indicator position as a percentage of `duration`.
    pub fn percent(&self, duration: f64) -> f64 {
        if duration <= 0.0 {
            return 0.0;
        }
        self.seconds / duration * 100.0
    }

    /// Formats the position as raw bound text, three decimal places.
    ///
    /// This is the value written into a trim or clip field by the "set from
    /// playhead" buttons.
    pub fn mark(&self) -> String {
        format!("{:.3}", self.seconds)
    }
}

impl Default for Playhead {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn clamp_playhead(seconds: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    seconds.clamp(0.0, duration)
}

#[cfg(test)]
mod tests {
    use super::Playhead;

    #[test]
    fn set_clamps_to_the_media_bounds() {
        let mut playhead = Playhead::new();

        playhead.set(-2.0, 60.0);
        assert_eq!(playhead.seconds(), 0.0);

        playhead.set(75.0, 60.0);
        assert_eq!(playhead.seconds(), 60.0);
    }

    #[test]
    fn stepping_moves_one_frame_at_the_current_rate() {
        let mut playhead = Playhead::new();
        playhead.set(1.0, 60.0);

        playhead.step_forward(60.0);
        assert!((playhead.seconds() - (1.0 + 1.0 / 30.0)).abs() < 1e-9);

        playhead.set_frame_rate(25.0);
        playhead.step_back(60.0);
        let expected = 1.0 + 1.0 / 30.0 - 1.0 / 25.0;
        assert!((playhead.seconds() - expected).abs() < 1e-9);
    }

    #[test]
    fn step_back_stops_at_zero() {
        let mut playhead = Playhead::new();
        playhead.set(0.01, 60.0);

        playhead.step_back(60.0);
        assert_eq!(playhead.seconds(), 0.0);
    }

    #[test]
    fn unusable_frame_rates_are_ignored() {
        let mut playhead = Playhead::new();
        playhead.set_frame_rate(0.0);
        playhead.set_frame_rate(f64::NAN);
        assert_eq!(playhead.frame_rate(), 30.0);
    }

    #[test]
    fn mark_uses_three_decimal_places() {
        let mut playhead = Playhead::new();
        playhead.set(12.3456, 60.0);
        assert_eq!(playhead.mark(), "12.346");

        playhead.set(3.0, 60.0);
        assert_eq!(playhead.mark(), "3.000");
    }

    #[test]
    fn percent_maps_position_onto_the_indicator_bar() {
        let mut playhead = Playhead::new();
        playhead.set(15.0, 60.0);
        assert_eq!(playhead.percent(60.0), 25.0);
    }
}
