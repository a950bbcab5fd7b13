//! Input subsystem.
//!
//! Public API is host-agnostic. The host translates its own keyboard/pointer
//! events into `InputEvent`s (see `platform::dom` for browser key names) and
//! feeds them to the running scene between frames.

pub mod platform;

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, Key, MouseButton};
