//! Rendering/audio backend seam.
//!
//! The synchronizer never rasterizes anything itself. It drives a backend
//! through [`RenderBackend`], addressing live objects by opaque handles that
//! the scene stores in its handle tables.
//!
//! [`RetainedBackend`] is a headless implementation that keeps the full state
//! of every handle; hosts without a real engine (and the tests) use it.

mod hit;
mod retained;

pub use hit::HitArea;
pub use retained::{Node, RetainedBackend, SoundNode, DEFAULT_SPRITE_SIZE};

use crate::coords::Vec2;
use crate::error::BackendError;
use crate::model::{Flip, ObjectId, RenderKind};
use crate::paint::Rgba;

/// Live display object owned by the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RenderHandle(pub u32);

/// Live sound owned by the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SoundHandle(pub u32);

/// Everything a backend needs to create the display object for a game object.
///
/// `rotation` is the displayed rotation (see
/// [`RenderState::displayed_rotation`](crate::model::RenderState::displayed_rotation)).
#[derive(Debug, Clone, Copy)]
pub struct Spawn<'a> {
    pub object: ObjectId,
    pub kind: &'a RenderKind,
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub color: Rgba,
    pub flip: Flip,
    pub visible: bool,
}

/// Parameters bound into a backend sound at construction.
#[derive(Debug, Clone, Copy)]
pub struct SoundSpec<'a> {
    pub url: &'a str,
    pub looping: bool,
    pub volume: f32,
}

/// Operations the frame synchronizer needs from a rendering/audio engine.
///
/// Setters take the handle by value and must be cheap; the synchronizer only
/// calls them for aspects that actually changed.
pub trait RenderBackend {
    // ── assets ────────────────────────────────────────────────────────────

    /// Queues an image load. `key` is the URL as written in the scene.
    fn load_image(&mut self, key: &str, url: &str);

    /// Queues an audio load. `key` is the URL as written in the scene.
    fn load_audio(&mut self, key: &str, url: &str);

    // ── display objects ───────────────────────────────────────────────────

    fn spawn(&mut self, spawn: &Spawn<'_>) -> Result<RenderHandle, BackendError>;

    /// Creates the debug overlay text, stacked above every other handle for its lifetime.
    fn spawn_overlay(&mut self) -> Result<RenderHandle, BackendError>;

    /// Makes the handle pointer-interactive. The backend reports hover changes
    /// for `object` through the host as [`InputEvent::HoverEnter`](crate::input::InputEvent::HoverEnter)
    /// and `HoverExit`.
    fn set_hit_area(&mut self, handle: RenderHandle, object: ObjectId, area: HitArea);

    fn set_position(&mut self, handle: RenderHandle, position: Vec2);
    fn set_rotation(&mut self, handle: RenderHandle, radians: f32);
    fn set_scale(&mut self, handle: RenderHandle, scale: Vec2);

    /// Tint for sprites and text. `packed` is `0xRRGGBBAA`.
    fn set_tint(&mut self, handle: RenderHandle, packed: u32, alpha: f32);

    /// Fill for shapes. `packed` is `0xRRGGBBAA`.
    fn set_fill(&mut self, handle: RenderHandle, packed: u32, alpha: f32);

    fn set_flip(&mut self, handle: RenderHandle, flip: Flip);
    fn set_visible(&mut self, handle: RenderHandle, visible: bool);
    fn set_text(&mut self, handle: RenderHandle, text: &str);

    /// Restacks the handle in front of every other non-overlay handle.
    fn bring_to_top(&mut self, handle: RenderHandle);

    fn destroy(&mut self, handle: RenderHandle);

    // ── audio ─────────────────────────────────────────────────────────────

    /// Constructs every sound in one batch. Either all succeed or none are kept.
    fn create_sounds(&mut self, specs: &[SoundSpec<'_>]) -> Result<Vec<SoundHandle>, BackendError>;

    fn play_sound(&mut self, sound: SoundHandle);
    fn stop_sound(&mut self, sound: SoundHandle);
    fn stop_all_sounds(&mut self);
    fn destroy_sound(&mut self, sound: SoundHandle);
}
