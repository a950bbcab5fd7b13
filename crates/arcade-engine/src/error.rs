//! Error types.
//!
//! [`SceneError`] classifies everything that can go wrong while a scene runs.
//! None of these propagate to the host: the frame synchronizer logs them into
//! the debug overlay and, for the fatal ones, raises the scene's fault flag.
//! Their `Display` output is the exact line written to the overlay.

use thiserror::Error;

use crate::model::{AudioId, ObjectId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Backend sounds could not be constructed. Non-fatal: rendering continues
    /// and audio synchronization is disabled for the session.
    #[error("Audio Error: {0}")]
    AssetLoadFailure(String),

    /// An object reached the frame loop without a bound render handle.
    #[error("Runtime Error: Cannot create GameObject in update_loop")]
    BackendBindingMissing { id: ObjectId },

    /// The user update callback returned an error or panicked.
    #[error("Runtime Error: Error in user update function")]
    UserCallbackFault { message: String, panicked: bool },

    /// A dirty clip had no bound sound handle.
    #[error("Runtime Error: Cannot create Audio in update_loop")]
    AudioBindingMissing { id: AudioId },
}

impl SceneError {
    /// Whether this error permanently halts the scene instance.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SceneError::AssetLoadFailure(_))
    }
}

/// Failure reported by a rendering/audio backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    #[error("failed to create {kind} for object {id:?}: {reason}")]
    Spawn { id: ObjectId, kind: &'static str, reason: String },

    #[error("failed to decode audio {url}: {reason}")]
    Sound { url: String, reason: String },
}

/// Misuse of the logical model by user code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("object {id:?} is a {kind}, not a text object")]
    NotText { id: ObjectId, kind: &'static str },

    #[error("no object with id {0:?}")]
    UnknownObject(ObjectId),

    #[error("no audio clip with id {0:?}")]
    UnknownClip(AudioId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_overlay_lines() {
        let e = SceneError::UserCallbackFault { message: "boom".into(), panicked: false };
        assert_eq!(e.to_string(), "Runtime Error: Error in user update function");
        let e = SceneError::BackendBindingMissing { id: ObjectId(2) };
        assert_eq!(e.to_string(), "Runtime Error: Cannot create GameObject in update_loop");
        let e = SceneError::AudioBindingMissing { id: AudioId(0) };
        assert_eq!(e.to_string(), "Runtime Error: Cannot create Audio in update_loop");
    }

    #[test]
    fn only_asset_failures_are_recoverable() {
        assert!(!SceneError::AssetLoadFailure("x".into()).is_fatal());
        assert!(SceneError::AudioBindingMissing { id: AudioId(0) }.is_fatal());
    }
}
