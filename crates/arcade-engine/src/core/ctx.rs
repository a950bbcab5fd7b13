use crate::debug::DebugLog;
use crate::error::ModelError;
use crate::input::{InputState, Key};
use crate::model::{AudioClip, AudioId, GameObject, ObjectId, SceneModel};
use crate::time::GameTime;

/// User update callback: invoked once per frame while the scene is healthy.
///
/// Returning an error (or panicking) faults the scene for good.
pub type UpdateFn<S> = Box<dyn FnMut(&mut UpdateCtx<'_, S>) -> anyhow::Result<()>>;

/// Per-frame context passed to the user update callback.
///
/// `S` is the user's state container, created once at scene start and kept
/// across frames.
pub struct UpdateCtx<'a, S> {
    pub model: &'a mut SceneModel,
    pub state: &'a mut S,
    pub(crate) input: &'a InputState,
    pub(crate) time: GameTime,
    pub(crate) log: &'a mut DebugLog,
}

impl<'a, S> UpdateCtx<'a, S> {
    pub fn object(&self, id: ObjectId) -> Result<&GameObject, ModelError> {
        self.model.object(id).ok_or(ModelError::UnknownObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut GameObject, ModelError> {
        self.model.object_mut(id).ok_or(ModelError::UnknownObject(id))
    }

    pub fn clip_mut(&mut self, id: AudioId) -> Result<&mut AudioClip, ModelError> {
        self.model.clip_mut(id).ok_or(ModelError::UnknownClip(id))
    }

    pub fn play(&mut self, id: AudioId) -> Result<(), ModelError> {
        self.clip_mut(id)?.play();
        Ok(())
    }

    pub fn stop(&mut self, id: AudioId) -> Result<(), ModelError> {
        self.clip_mut(id)?.stop();
        Ok(())
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub fn key_down(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    /// Pointer position in whole canvas pixels, sampled at frame start.
    pub fn pointer_pos(&self) -> (i32, i32) {
        self.input.pointer_pos()
    }

    pub fn primary_down(&self) -> bool {
        self.input.primary_down()
    }

    pub fn secondary_down(&self) -> bool {
        self.input.secondary_down()
    }

    /// Whether the pointer is over the hitbox of `id`. Always false for
    /// objects built without an active hitbox.
    pub fn pointer_over(&self, id: ObjectId) -> bool {
        self.input.is_hovered(id)
    }

    // ── time / diagnostics ────────────────────────────────────────────────

    pub fn time(&self) -> GameTime {
        self.time
    }

    /// Milliseconds since scene start, as reported by the host.
    pub fn elapsed_ms(&self) -> f64 {
        self.time.elapsed_ms
    }

    pub fn loop_count(&self) -> u64 {
        self.time.loop_count
    }

    /// Appends a line to this frame's debug overlay.
    pub fn debug_log(&mut self, line: impl Into<String>) {
        self.log.push(line);
    }
}
