use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::coords::{Rect, Vec2};
use crate::error::ModelError;
use crate::paint::Rgba;

/// Stable object id; a dense index into the scene's handle table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position, scale and rotation (radians, clockwise).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zero(),
            scale: Vec2::splat(1.0),
            rotation: 0.0,
        }
    }
}

/// Horizontal / vertical mirroring.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Flip {
    #[serde(default)]
    pub x: bool,
    #[serde(default)]
    pub y: bool,
}

/// What an object draws. Consumed by exhaustive matching in the builder and
/// the frame synchronizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderKind {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
    /// Vertices in local space, relative to the top-left of the bounding box.
    Triangle { vertices: [Vec2; 3] },
    /// `size` is the displayed image size in pixels, when the scene declares it.
    Sprite {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Vec2>,
    },
    Text { content: String },
}

impl RenderKind {
    /// Isosceles triangle with its apex at the top centre.
    pub fn isosceles(width: f32, height: f32) -> Self {
        RenderKind::Triangle {
            vertices: [
                Vec2::new(0.0, height),
                Vec2::new(width, height),
                Vec2::new(width / 2.0, 0.0),
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderKind::Rectangle { .. } => "rectangle",
            RenderKind::Circle { .. } => "circle",
            RenderKind::Triangle { .. } => "triangle",
            RenderKind::Sprite { .. } => "sprite",
            RenderKind::Text { .. } => "text",
        }
    }

    /// Local-space bounding box, when it is known without a backend.
    pub fn local_bounds(&self) -> Option<Rect> {
        match self {
            RenderKind::Rectangle { width, height } => Some(Rect::new(0.0, 0.0, *width, *height)),
            RenderKind::Circle { radius } => Some(Rect::new(0.0, 0.0, radius * 2.0, radius * 2.0)),
            RenderKind::Triangle { vertices } => Some(Rect::bounding(vertices)),
            RenderKind::Sprite { size, .. } => size.map(|s| Rect::from_origin_size(Vec2::zero(), s)),
            RenderKind::Text { .. } => None,
        }
    }
}

/// Visual state of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub color: Rgba,
    pub flip: Flip,
    pub visible: bool,
    pub kind: RenderKind,
}

impl RenderState {
    fn new(kind: RenderKind) -> Self {
        Self {
            color: Rgba::WHITE,
            flip: Flip::default(),
            visible: true,
            kind,
        }
    }

    /// Rotation the backend must display for a given logical rotation.
    ///
    /// Backends have no vertical-flip primitive for arbitrary polygons, so a
    /// vertically flipped triangle is drawn with an extra half turn. Every
    /// other kind is either symmetric or flips natively.
    pub fn displayed_rotation(&self, rotation: f32) -> f32 {
        match self.kind {
            RenderKind::Triangle { .. } if self.flip.y => rotation + PI,
            _ => rotation,
        }
    }
}

/// A logical game object.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: ObjectId,
    transform: Transform,
    render: RenderState,
    hitbox_active: bool,

    transform_dirty: bool,
    render_dirty: bool,
    bring_to_top: bool,
}

impl GameObject {
    pub(crate) fn new(id: ObjectId, kind: RenderKind) -> Self {
        Self {
            id,
            transform: Transform::default(),
            render: RenderState::new(kind),
            hitbox_active: false,
            transform_dirty: false,
            render_dirty: false,
            bring_to_top: false,
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn render(&self) -> &RenderState {
        &self.render
    }

    #[inline]
    pub fn kind(&self) -> &RenderKind {
        &self.render.kind
    }

    #[inline]
    pub fn hitbox_active(&self) -> bool {
        self.hitbox_active
    }

    #[inline]
    pub fn is_transform_dirty(&self) -> bool {
        self.transform_dirty
    }

    #[inline]
    pub fn is_render_dirty(&self) -> bool {
        self.render_dirty
    }

    #[inline]
    pub fn wants_bring_to_top(&self) -> bool {
        self.bring_to_top
    }

    // ── transform ─────────────────────────────────────────────────────────

    pub fn set_position(&mut self, position: Vec2) -> &mut Self {
        self.transform.position = position;
        self.transform_dirty = true;
        self
    }

    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        let p = self.transform.position + delta;
        self.set_position(p)
    }

    pub fn set_scale(&mut self, scale: Vec2) -> &mut Self {
        self.transform.scale = scale;
        self.transform_dirty = true;
        self
    }

    pub fn set_rotation(&mut self, radians: f32) -> &mut Self {
        self.transform.rotation = radians;
        self.transform_dirty = true;
        self
    }

    pub fn rotate_by(&mut self, radians: f32) -> &mut Self {
        let r = self.transform.rotation + radians;
        self.set_rotation(r)
    }

    // ── render ────────────────────────────────────────────────────────────

    pub fn set_color(&mut self, color: Rgba) -> &mut Self {
        self.render.color = color;
        self.render_dirty = true;
        self
    }

    pub fn set_flip(&mut self, flip: Flip) -> &mut Self {
        self.render.flip = flip;
        self.render_dirty = true;
        self
    }

    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.render.visible = visible;
        self.render_dirty = true;
        self
    }

    /// Replaces the content of a text object.
    pub fn set_text(&mut self, content: impl Into<String>) -> Result<&mut Self, ModelError> {
        match &mut self.render.kind {
            RenderKind::Text { content: c } => {
                *c = content.into();
                self.render_dirty = true;
                Ok(self)
            }
            other => Err(ModelError::NotText { id: self.id, kind: other.name() }),
        }
    }

    /// Requests the object be restacked in front of all others on the next render apply.
    pub fn bring_to_top(&mut self) -> &mut Self {
        self.bring_to_top = true;
        self.render_dirty = true;
        self
    }

    /// Hitbox activation only takes effect at build time.
    pub fn set_hitbox_active(&mut self, active: bool) -> &mut Self {
        self.hitbox_active = active;
        self
    }

    // ── consumption ───────────────────────────────────────────────────────

    pub fn mark_transform_consumed(&mut self) {
        self.transform_dirty = false;
    }

    pub fn mark_render_consumed(&mut self) {
        self.render_dirty = false;
        self.bring_to_top = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> GameObject {
        GameObject::new(ObjectId(0), RenderKind::Rectangle { width: 10.0, height: 10.0 })
    }

    #[test]
    fn fresh_object_is_clean() {
        let o = rect();
        assert!(!o.is_transform_dirty());
        assert!(!o.is_render_dirty());
        assert_eq!(o.transform().scale, Vec2::splat(1.0));
        assert!(o.render().visible);
    }

    #[test]
    fn transform_and_render_flags_are_independent() {
        let mut o = rect();
        o.set_position(Vec2::new(5.0, 5.0));
        assert!(o.is_transform_dirty());
        assert!(!o.is_render_dirty());

        o.mark_transform_consumed();
        o.set_color(Rgba::RED);
        assert!(!o.is_transform_dirty());
        assert!(o.is_render_dirty());
    }

    #[test]
    fn set_text_on_non_text_fails() {
        let mut o = rect();
        let err = o.set_text("hi").unwrap_err();
        assert!(matches!(err, ModelError::NotText { kind: "rectangle", .. }));
        assert!(!o.is_render_dirty());
    }

    #[test]
    fn set_text_marks_render_dirty() {
        let mut o = GameObject::new(ObjectId(1), RenderKind::Text { content: "a".into() });
        o.set_text("b").unwrap();
        assert!(o.is_render_dirty());
        assert_eq!(o.kind(), &RenderKind::Text { content: "b".into() });
    }

    #[test]
    fn render_consumption_clears_bring_to_top() {
        let mut o = rect();
        o.bring_to_top();
        assert!(o.wants_bring_to_top());
        o.mark_render_consumed();
        assert!(!o.wants_bring_to_top());
    }

    // ── flip correction ───────────────────────────────────────────────────

    #[test]
    fn only_vertically_flipped_triangles_get_half_turn() {
        let flipped = Flip { x: false, y: true };
        let mut tri = RenderState::new(RenderKind::isosceles(10.0, 10.0));
        tri.flip = flipped;
        assert_eq!(tri.displayed_rotation(0.5), 0.5 + PI);

        for kind in [
            RenderKind::Rectangle { width: 1.0, height: 1.0 },
            RenderKind::Circle { radius: 1.0 },
            RenderKind::Sprite { url: "a.png".into(), size: None },
            RenderKind::Text { content: "t".into() },
        ] {
            let mut r = RenderState::new(kind);
            r.flip = flipped;
            assert_eq!(r.displayed_rotation(0.5), 0.5);
        }
    }

    #[test]
    fn horizontal_flip_does_not_rotate_triangle() {
        let mut tri = RenderState::new(RenderKind::isosceles(10.0, 10.0));
        tri.flip = Flip { x: true, y: false };
        assert_eq!(tri.displayed_rotation(1.0), 1.0);
    }
}
