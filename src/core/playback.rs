use log::debug;

/// Speeds offered by the playback panel
pub const SPEED_CHOICES: [f64; 5] = [0.5, 1.0, 2.0, 4.0, 8.0];
pub const DEFAULT_SPEED: f64 = 1.0;

/// Playback position over a sample sequence of known length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub index: usize,
    pub playing: bool,
    pub speed: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            index: 0,
            playing: false,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Frame-driven playback clock.
///
/// Advances by whole samples per rendered frame, so the effective rate is
/// tied to the display refresh rate rather than to sample timestamps.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    state: PlaybackState,
    len: usize,
}

impl PlaybackClock {
    pub fn new(len: usize) -> Self {
        Self {
            state: PlaybackState::default(),
            len,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Play control is only offered when there is something to play
    pub fn is_enabled(&self) -> bool {
        self.len > 0
    }

    /// Current sample position, `None` for an empty sequence
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.state.index)
    }

    /// Samples advanced per frame: speed rounded, never below one
    pub fn step(&self) -> usize {
        (self.state.speed.round() as usize).max(1)
    }

    /// Advance for one rendered frame.
    ///
    /// Returns the index to display while playing. At the last sample the
    /// index stays pinned and `playing` stays set. `_delta` is accepted so the
    /// clock can sit in the frame pipeline, but stepping ignores wall time.
    pub fn tick(&mut self, _delta: f32) -> Option<usize> {
        if !self.state.playing || self.len == 0 {
            return None;
        }
        self.state.index = self.state.index.saturating_add(self.step()).min(self.len - 1);
        Some(self.state.index)
    }

    /// Jump to `index`, clamped into the sequence
    pub fn set_index(&mut self, index: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.state.index = index.min(self.len - 1);
        Some(self.state.index)
    }

    /// Unusable speeds fall back to the default
    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            DEFAULT_SPEED
        };
        debug!("playback speed {} (step {})", self.state.speed, self.step());
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.state.playing = playing && self.is_enabled();
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.set_playing(!self.state.playing);
        self.state.playing
    }

    /// Point the clock at a freshly loaded sequence
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.state.index = 0;
        if len == 0 {
            self.state.playing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(len: usize, speed: f64) -> PlaybackClock {
        let mut clock = PlaybackClock::new(len);
        clock.set_speed(speed);
        clock.set_playing(true);
        clock
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut clock = PlaybackClock::new(10);
        assert_eq!(clock.tick(0.016), None);
        assert_eq!(clock.index(), Some(0));
    }

    #[test]
    fn step_rounds_then_floors_at_one() {
        assert_eq!(playing(10, 0.5).step(), 1);
        assert_eq!(playing(10, 1.0).step(), 1);
        assert_eq!(playing(10, 1.4).step(), 1);
        assert_eq!(playing(10, 2.5).step(), 3);
        assert_eq!(playing(10, 8.0).step(), 8);
    }

    #[test]
    fn clamps_at_last_sample_and_keeps_playing() {
        let mut clock = playing(5, 4.0);
        assert_eq!(clock.tick(0.016), Some(4));
        assert_eq!(clock.tick(0.016), Some(4));
        assert!(clock.state().playing);
    }

    #[test]
    fn huge_step_saturates_instead_of_overflowing() {
        let mut clock = playing(10, 1e20);
        assert_eq!(clock.step(), usize::MAX);
        assert_eq!(clock.tick(0.016), Some(9));
        assert_eq!(clock.tick(0.016), Some(9));
    }

    #[test]
    fn empty_sequence_disables_playback() {
        let mut clock = PlaybackClock::new(0);
        clock.set_playing(true);
        assert!(!clock.state().playing);
        assert_eq!(clock.tick(0.016), None);
        assert_eq!(clock.set_index(3), None);
        assert_eq!(clock.index(), None);
    }

    #[test]
    fn scrub_is_clamped() {
        let mut clock = PlaybackClock::new(4);
        assert_eq!(clock.set_index(2), Some(2));
        assert_eq!(clock.set_index(99), Some(3));
    }

    #[test]
    fn invalid_speed_falls_back_to_default() {
        let mut clock = PlaybackClock::new(4);
        clock.set_speed(f64::NAN);
        assert_eq!(clock.state().speed, DEFAULT_SPEED);
        clock.set_speed(-2.0);
        assert_eq!(clock.state().speed, DEFAULT_SPEED);
    }

    #[test]
    fn reset_rewinds_and_stops_on_empty() {
        let mut clock = playing(10, 1.0);
        clock.tick(0.016);
        clock.tick(0.016);
        clock.reset(20);
        assert_eq!(clock.index(), Some(0));
        assert!(clock.state().playing);

        clock.reset(0);
        assert!(!clock.state().playing);
        assert!(!clock.is_enabled());
    }
}
