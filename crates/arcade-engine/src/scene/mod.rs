//! Draw-list snapshot of a retained backend.
//!
//! Responsibilities:
//! - describe what a backend currently displays, independent of any rasterizer
//! - provide deterministic paint order (z-index + insertion order)

mod cmd;
mod key;
mod list;
mod z_index;

pub use cmd::{DrawCmd, DrawShape};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
