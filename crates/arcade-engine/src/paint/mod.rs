//! Color model shared by game objects and backends.
//!
//! Game objects carry straight (non-premultiplied) 8-bit RGBA. Backends receive
//! a packed 32-bit value plus a separate alpha factor.

pub mod color;

pub use color::Rgba;
