//! Frame synchronizer.
//!
//! [`Scene`] owns one running scene instance: the logical model, the backend
//! and its handle tables, input, the debug log and the fault flag. The host
//! calls [`Scene::frame`] once per rendered frame and forwards input events
//! in between.
//!
//! Per frame, in order:
//! 1. advance time counters
//! 2. sample pointer state
//! 3. run the user update under a guard
//! 4. diff/apply every object
//! 5. diff/apply audio intent
//! 6. flush deferred key releases
//! 7. refresh the debug overlay, freezing the scene if it has faulted
//!
//! Any fatal error raises the fault flag. From then on steps 3–5 are never
//! dispatched again, all audio is stopped and the overlay shows the
//! accumulated diagnostics in the attention color.

mod apply;
mod audio;

use crate::backend::{RenderBackend, RenderHandle};
use crate::bindings::Bindings;
use crate::build::SceneBuilder;
use crate::config::SceneConfig;
use crate::core::{UpdateCtx, UpdateFn};
use crate::debug::DebugLog;
use crate::error::SceneError;
use crate::guard::{guarded, FaultFlag};
use crate::input::{InputEvent, InputState};
use crate::model::{ObjectId, SceneModel};
use crate::paint::Rgba;
use crate::time::GameTime;

/// Outcome of a frame, for the host's scheduling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// The scene is healthy; keep driving frames.
    Running,
    /// The scene faulted and is frozen; further frames are no-ops.
    Frozen,
}

/// A built, running scene instance.
pub struct Scene<B: RenderBackend, S> {
    config: SceneConfig,
    backend: B,
    model: SceneModel,
    bindings: Bindings,

    input: InputState,
    log: DebugLog,
    time: GameTime,

    fault: FaultFlag,
    frozen: bool,
    force_resync: bool,
    overlay_shown: Option<(String, Rgba)>,

    state: S,
    update: UpdateFn<S>,
}

impl<B: RenderBackend, S> Scene<B, S> {
    /// Builds the scene on `backend`.
    ///
    /// Assets must already have been preloaded (see
    /// [`preload_assets`](crate::preload::preload_assets)) and the backend
    /// must have finished loading them.
    pub fn build<F>(config: SceneConfig, model: SceneModel, mut backend: B, state: S, update: F) -> Self
    where
        F: FnMut(&mut UpdateCtx<'_, S>) -> anyhow::Result<()> + 'static,
    {
        let built = SceneBuilder::build(&model, &mut backend);

        let mut log = DebugLog::default();
        for diag in &built.diagnostics {
            log.push_diagnostic(diag.to_string());
        }

        Self {
            config,
            backend,
            model,
            bindings: built.bindings,
            input: InputState::default(),
            log,
            time: GameTime::default(),
            fault: FaultFlag::default(),
            frozen: false,
            force_resync: true,
            overlay_shown: None,
            state,
            update: Box::new(update),
        }
    }

    /// Feeds a host input event. Key releases take effect after the next frame.
    pub fn handle_input(&mut self, ev: &InputEvent) {
        self.input.apply_event(ev);
    }

    /// Runs one frame. `elapsed_ms` and `delta_ms` come from the host clock.
    pub fn frame(&mut self, elapsed_ms: f64, delta_ms: f64) -> FrameStatus {
        if self.frozen {
            return FrameStatus::Frozen;
        }

        self.time.advance(elapsed_ms, delta_ms);
        self.input.sample_pointer();

        if !self.fault.is_raised() {
            self.run_user_update();
        }

        if !self.fault.is_raised() {
            let errors = apply::sync_objects(&mut self.model, &self.bindings, &mut self.backend, self.force_resync);
            self.force_resync = false;
            self.raise_all(errors);
        }

        if !self.fault.is_raised() && !self.bindings.audio_faulted {
            let errors = audio::sync_audio(&mut self.model, &self.bindings, &mut self.backend);
            self.raise_all(errors);
        }

        self.input.flush_deferred();
        self.refresh_overlay();

        if self.frozen { FrameStatus::Frozen } else { FrameStatus::Running }
    }

    /// Stops all audio and releases every backend handle, returning the backend.
    ///
    /// Consumes the scene: a torn-down instance cannot be resumed.
    pub fn teardown(mut self) -> B {
        self.backend.stop_all_sounds();
        for handle in self.bindings.objects.drain() {
            self.backend.destroy(handle);
        }
        for sound in self.bindings.sounds.drain() {
            self.backend.destroy_sound(sound);
        }
        if let Some(overlay) = self.bindings.overlay.take() {
            self.backend.destroy(overlay);
        }
        self.input.reset();
        self.log.clear();
        log::debug!("scene torn down after {} frame(s)", self.time.loop_count);
        self.backend
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn model(&self) -> &SceneModel {
        &self.model
    }

    /// Host-side model access between frames.
    ///
    /// Changes made here are synchronized like user-update changes, and are
    /// ignored once the scene has faulted.
    pub fn model_mut(&mut self) -> &mut SceneModel {
        &mut self.model
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable backend access for host-side concerns such as hover resolution.
    /// Game state must go through the model, never through handles.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn debug_log(&self) -> &DebugLog {
        &self.log
    }

    pub fn time(&self) -> GameTime {
        self.time
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn handle_of(&self, id: ObjectId) -> Option<RenderHandle> {
        self.bindings.object(id)
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_raised()
    }

    pub fn is_audio_faulted(&self) -> bool {
        self.bindings.audio_faulted
    }

    fn run_user_update(&mut self) {
        let mut ctx = UpdateCtx {
            model: &mut self.model,
            state: &mut self.state,
            input: &self.input,
            time: self.time,
            log: &mut self.log,
        };
        let update = &mut self.update;

        if let Err(fault) = guarded(|| update(&mut ctx)) {
            self.raise(SceneError::UserCallbackFault { message: fault.message, panicked: fault.panicked });
        }
    }

    fn raise_all(&mut self, errors: Vec<SceneError>) {
        for e in errors {
            self.raise(e);
        }
    }

    fn raise(&mut self, err: SceneError) {
        match &err {
            SceneError::UserCallbackFault { message, panicked: true } => log::error!("user update panicked: {message}"),
            SceneError::UserCallbackFault { message, .. } => log::error!("user update failed: {message}"),
            SceneError::BackendBindingMissing { id } => log::error!("object {id:?} has no render handle"),
            SceneError::AudioBindingMissing { id } => log::error!("clip {id:?} has no sound handle"),
            SceneError::AssetLoadFailure(reason) => log::warn!("asset failure: {reason}"),
        }
        self.log.push_diagnostic(err.to_string());
        if err.is_fatal() {
            self.fault.raise();
        }
    }

    fn refresh_overlay(&mut self) {
        if self.fault.is_raised() {
            self.frozen = true;
            self.backend.stop_all_sounds();
            let text = self.log.render(true);
            self.show_overlay(text, Rgba::RED);
            log::error!("scene frozen at frame {}", self.time.loop_count);
            return;
        }

        let text = self.log.render(self.config.debug);
        self.show_overlay(text, Rgba::WHITE);
        self.log.clear();
    }

    fn show_overlay(&mut self, text: String, color: Rgba) {
        let Some(overlay) = self.bindings.overlay else { return };
        if let Some((shown, shown_color)) = &self.overlay_shown {
            if *shown == text && *shown_color == color {
                return;
            }
        }
        self.backend.set_text(overlay, &text);
        self.backend.set_tint(overlay, color.packed(), color.alpha());
        self.backend.bring_to_top(overlay);
        self.overlay_shown = Some((text, color));
    }
}

#[cfg(test)]
mod tests;
