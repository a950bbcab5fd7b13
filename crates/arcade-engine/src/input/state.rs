use std::collections::HashSet;

use crate::coords::Vec2;
use crate::model::ObjectId;

use super::types::{InputEvent, Key, MouseButton};

/// Scene-scoped input state.
///
/// Key-down events apply immediately. Key-up events are queued and only take
/// effect at [`flush_deferred`](Self::flush_deferred), which the frame loop
/// calls after the user update and the diff/apply pass. A tap that starts and
/// ends between two sampled frames is therefore observed as held by exactly
/// one user update.
///
/// Pointer events update a live position that is copied (truncated to whole
/// pixels) into the user-visible snapshot by [`sample_pointer`](Self::sample_pointer).
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    pending_key_up: Vec<Key>,

    live_pointer: Vec2,
    live_primary: bool,
    live_secondary: bool,

    pointer_pos: (i32, i32),
    primary_down: bool,
    secondary_down: bool,

    hovered: HashSet<ObjectId>,
}

impl InputState {
    /// Applies a host input event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::KeyDown(key) => {
                // A re-press cancels a release still waiting for the frame boundary.
                self.pending_key_up.retain(|k| k != key);
                self.keys_down.insert(*key);
            }

            InputEvent::KeyUp(key) => {
                if self.keys_down.contains(key) && !self.pending_key_up.contains(key) {
                    self.pending_key_up.push(*key);
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.live_pointer = Vec2::new(*x, *y);
            }

            InputEvent::PointerButton { button, pressed } => match button {
                MouseButton::Primary => self.live_primary = *pressed,
                MouseButton::Secondary => self.live_secondary = *pressed,
                MouseButton::Middle | MouseButton::Other(_) => {}
            },

            InputEvent::HoverEnter(id) => {
                self.hovered.insert(*id);
            }

            InputEvent::HoverExit(id) => {
                self.hovered.remove(id);
            }

            InputEvent::Focused(focused) => {
                if !*focused {
                    // Nothing will report the matching key-ups; release every
                    // held key at the next frame boundary.
                    for key in &self.keys_down {
                        if !self.pending_key_up.contains(key) {
                            self.pending_key_up.push(*key);
                        }
                    }
                    self.live_primary = false;
                    self.live_secondary = false;
                }
            }
        }
    }

    /// Copies the live pointer into the frame-visible snapshot.
    pub fn sample_pointer(&mut self) {
        self.pointer_pos = (self.live_pointer.x as i32, self.live_pointer.y as i32);
        self.primary_down = self.live_primary;
        self.secondary_down = self.live_secondary;
    }

    /// Applies every queued key release, then empties the queue.
    pub fn flush_deferred(&mut self) {
        for key in self.pending_key_up.drain(..) {
            self.keys_down.remove(&key);
        }
    }

    /// Clears all state back to scene-creation defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &Key> {
        self.keys_down.iter()
    }

    /// Number of releases waiting for the next frame boundary.
    pub fn pending_releases(&self) -> usize {
        self.pending_key_up.len()
    }

    /// Pointer position sampled at the start of the current frame.
    pub fn pointer_pos(&self) -> (i32, i32) {
        self.pointer_pos
    }

    pub fn primary_down(&self) -> bool {
        self.primary_down
    }

    pub fn secondary_down(&self) -> bool {
        self.secondary_down
    }

    pub fn is_hovered(&self, id: ObjectId) -> bool {
        self.hovered.contains(&id)
    }

    pub fn hovered(&self) -> impl Iterator<Item = &ObjectId> {
        self.hovered.iter()
    }
}
