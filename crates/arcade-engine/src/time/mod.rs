//! Time subsystem.
//!
//! - `FrameClock` is host-side: it turns wall-clock ticks into the
//!   `(elapsed, delta)` pair a scene frame is driven with.
//! - `GameTime` is scene-side: the counters user update code reads.

mod frame_clock;
mod game_time;

pub use frame_clock::{FrameClock, FrameTime};
pub use game_time::GameTime;
