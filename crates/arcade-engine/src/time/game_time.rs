/// Time counters visible to user update code.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GameTime {
    /// Host-reported time since the scene started, in milliseconds.
    pub elapsed_ms: f64,
    /// Host-reported time since the previous frame, in milliseconds.
    pub delta_ms: f64,
    /// Number of frames run so far, including the current one.
    pub loop_count: u64,
}

impl GameTime {
    pub(crate) fn advance(&mut self, elapsed_ms: f64, delta_ms: f64) {
        self.elapsed_ms = elapsed_ms;
        self.delta_ms = delta_ms;
        self.loop_count += 1;
    }
}
