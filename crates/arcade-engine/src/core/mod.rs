//! Contracts between the frame loop and user code.
//!
//! User update code never sees backend handles. It receives an [`UpdateCtx`]
//! exposing the logical model, the sampled input, time counters, the debug
//! log and its own persistent state.

mod ctx;

pub use ctx::{UpdateCtx, UpdateFn};
