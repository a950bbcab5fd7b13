//! Logical scene model.
//!
//! Game objects and audio clips are plain data owned by a [`SceneModel`].
//! Every mutator marks the affected aspect dirty; the frame synchronizer
//! consumes those flags and pushes only the changed aspects to the backend.
//!
//! Ids are dense indices assigned at creation. They double as keys into the
//! scene's handle tables and are never reused within a model.

mod audio;
mod object;
mod world;

pub use audio::{AudioClip, AudioId};
pub use object::{Flip, GameObject, ObjectId, RenderKind, RenderState, Transform};
pub use world::SceneModel;
