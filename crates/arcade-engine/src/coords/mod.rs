//! Coordinate and geometry types shared by the model, the backend seam and hit testing.
//!
//! Canonical space:
//! - Canvas pixels
//! - Origin top-left
//! - +X right, +Y down, positive rotation is clockwise

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
