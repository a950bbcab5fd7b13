//! Handle tables binding logical ids to backend handles.
//!
//! The scene owns one table for render handles and one for sound handles,
//! indexed by `ObjectId` / `AudioId`. A slot is written once during build and
//! never rebound; teardown drains the tables to release everything at once.

use crate::backend::{RenderHandle, SoundHandle};
use crate::model::{AudioId, ObjectId};

/// Growable id-indexed table of backend handles.
#[derive(Debug, Clone)]
pub struct HandleTable<H> {
    slots: Vec<Option<H>>,
}

impl<H> Default for HandleTable<H> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<H: Copy> HandleTable<H> {
    pub fn with_len(len: usize) -> Self {
        Self { slots: (0..len).map(|_| None).collect() }
    }

    /// Binds `index` to `handle`. Returns `false` (and leaves the slot alone)
    /// if it is already bound.
    pub fn bind(&mut self, index: usize, handle: H) -> bool {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        match self.slots[index] {
            Some(_) => false,
            None => {
                self.slots[index] = Some(handle);
                true
            }
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<H> {
        self.slots.get(index).copied().flatten()
    }

    pub fn bound(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Removes and returns every bound handle.
    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.slots.drain(..).flatten()
    }
}

/// Everything the builder bound for one scene instance.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    pub objects: HandleTable<RenderHandle>,
    pub sounds: HandleTable<SoundHandle>,
    pub overlay: Option<RenderHandle>,
    /// Set when the sound batch failed; audio synchronization is skipped for the session.
    pub audio_faulted: bool,
}

impl Bindings {
    #[inline]
    pub fn object(&self, id: ObjectId) -> Option<RenderHandle> {
        self.objects.get(id.index())
    }

    #[inline]
    pub fn sound(&self, id: AudioId) -> Option<SoundHandle> {
        self.sounds.get(id.index())
    }
}
