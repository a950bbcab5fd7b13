use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ObjectId;

/// Keyboard key identifier.
///
/// Hosts map their own key names into these variants (see
/// [`platform::dom::translate_key_name`](super::platform::dom::translate_key_name)).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
}

/// Pointer button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Host-agnostic input events delivered to a running scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),

    /// Pointer moved, in canvas pixels.
    PointerMoved { x: f32, y: f32 },
    PointerButton { button: MouseButton, pressed: bool },

    /// Pointer entered the hitbox of an interactive object.
    HoverEnter(ObjectId),
    /// Pointer left the hitbox of an interactive object.
    HoverExit(ObjectId),

    /// Host focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
