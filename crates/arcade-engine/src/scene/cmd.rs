use crate::backend::RenderHandle;
use crate::coords::Vec2;
use crate::model::Flip;

/// Geometry or content of a draw command, in local space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawShape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
    Triangle { vertices: [Vec2; 3] },
    Sprite { url: String, flip: Flip },
    Text { text: String, flip: Flip },
}

/// One displayed handle: shape plus its placement and color.
///
/// `color` is packed `0xRRGGBBAA`; for shapes it is the fill, for sprites and
/// text it is the tint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub handle: RenderHandle,
    pub shape: DrawShape,
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub color: u32,
    pub alpha: f32,
}
