use std::time::Instant;

/// Longest step handed to the frame pipeline; stalls beyond this are dropped
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Host-side timestep feed - measures wall time between frames.
/// The viewer core never reads the clock itself; it only sees the delta.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at `MAX_FRAME_DELTA`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_FRAME_DELTA)
    }

    /// Forget time spent while no frames were drawn
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
