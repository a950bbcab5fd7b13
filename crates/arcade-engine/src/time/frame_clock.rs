use std::time::{Duration, Instant};

/// Frame timing snapshot handed to `Scene::frame`.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Milliseconds since the clock started, accumulated from clamped deltas.
    pub elapsed_ms: f64,

    /// Milliseconds since the previous tick.
    pub delta_ms: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a host that stalls (debugger, hidden tab) does
/// not hand user code a huge step on resume.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed_ms: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed_ms: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the delta baseline without touching elapsed time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock from the wall clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(dt)
    }

    /// Advances the clock by an explicit step (clamped like a measured one).
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max);
        let delta_ms = dt.as_secs_f64() * 1000.0;
        self.elapsed_ms += delta_ms;

        let ft = FrameTime {
            elapsed_ms: self.elapsed_ms,
            delta_ms,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
