/// Signed playback rates selectable from the transport controls.
///
/// Sign encodes direction (negative plays in reverse), magnitude is the
/// speed multiplier. The media layer interprets negative rates with its own
/// seek loop; positive rates map straight onto a native playback rate.
pub const RATE_TABLE: [i32; 6] = [-4, -2, -1, 1, 2, 4];

const DEFAULT_INDEX: usize = 3;

/// Discrete speed selector over [`RATE_TABLE`].
///
/// Stepping clamps at the table ends, there is no wraparound. Six states,
/// no terminal state.
///
/// # Example
/// ```
/// use engine::PlaybackRateController;
///
/// let mut rate = PlaybackRateController::new();
/// assert_eq!(rate.rate(), 1);
/// assert_eq!(rate.step_faster(), 2);
/// assert_eq!(rate.step_slower(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackRateController {
    index: usize,
}

impl PlaybackRateController {
    /// Creates a controller at normal forward speed.
    pub fn new() -> Self {
        Self {
            index: DEFAULT_INDEX,
        }
    }

    /// Returns the currently selected rate.
    pub fn rate(&self) -> i32 {
        RATE_TABLE[self.index]
    }

    /// Returns true when the current rate plays in reverse.
    pub fn is_reverse(&self) -> bool {
        self.rate() < 0
    }

    /// Moves one step towards reverse and returns the new rate.
    pub fn step_slower(&mut self) -> i32 {
        self.index = self.index.saturating_sub(1);
        self.rate()
    }

    /// Moves one step towards fast-forward and returns the new rate.
    pub fn step_faster(&mut self) -> i32 {
        self.index = (self.index + 1).min(RATE_TABLE.len() - 1);
        self.rate()
    }

    /// Jumps back to normal forward speed and returns rate `1`.
    pub fn reset(&mut self) -> i32 {
        self.index = DEFAULT_INDEX;
        self.rate()
    }
}

impl Default for PlaybackRateController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PlaybackRateController;

    #[test]
    fn default_rate_is_normal_forward_speed() {
        assert_eq!(PlaybackRateController::new().rate(), 1);
    }

    #[test]
    fn five_faster_steps_clamp_at_the_top_of_the_table() {
        let mut rate = PlaybackRateController::new();

        let mut last = 0;
        for _ in 0..5 {
            last = rate.step_faster();
        }

        assert_eq!(last, 4);
        assert_eq!(rate.rate(), 4);
    }

    #[test]
    fn slower_steps_walk_through_reverse_and_clamp_at_the_bottom() {
        let mut rate = PlaybackRateController::new();

        assert_eq!(rate.step_slower(), -1);
        assert_eq!(rate.step_slower(), -2);
        assert_eq!(rate.step_slower(), -4);
        assert_eq!(rate.step_slower(), -4);
        assert!(rate.is_reverse());
    }

    #[test]
    fn reset_returns_to_normal_speed_from_either_end() {
        let mut rate = PlaybackRateController::new();
        rate.step_slower();
        rate.step_slower();

        assert_eq!(rate.reset(), 1);
        assert!(!rate.is_reverse());
    }
}
