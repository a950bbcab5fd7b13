//! Arcade engine crate.
//!
//! Drives a retained-mode 2D rendering backend from a declarative scene
//! model. User code mutates [`model::GameObject`]s and [`model::AudioClip`]s
//! inside a per-frame update callback; the [`sync::Scene`] diffs that model
//! against the backend and pushes only what changed.

pub mod backend;
pub mod config;
pub mod coords;
pub mod core;
pub mod debug;
pub mod description;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod paint;
pub mod preload;
pub mod scene;
pub mod sync;
pub mod time;

mod bindings;
mod build;
mod guard;

pub use config::SceneConfig;
pub use crate::core::UpdateCtx;
pub use error::SceneError;
pub use sync::{FrameStatus, Scene};
