use crate::coords::{Rect, Vec2};
use crate::model::RenderKind;

/// Pointer-interactive region of a display object, in local space
/// (origin at the top-left of the object's bounding box).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HitArea {
    /// The backend's own bounding box for the handle.
    BoundingBox,
    Circle { center: Vec2, radius: f32 },
    Triangle { vertices: [Vec2; 3] },
}

impl HitArea {
    /// Hit area matching the true silhouette of a render kind.
    ///
    /// Circles and triangles get exact shapes; everything else uses the
    /// bounding box.
    pub fn for_kind(kind: &RenderKind) -> Self {
        match kind {
            RenderKind::Circle { radius } => HitArea::Circle {
                center: Vec2::new(*radius, *radius),
                radius: *radius,
            },
            RenderKind::Triangle { vertices } => HitArea::Triangle { vertices: *vertices },
            RenderKind::Rectangle { .. } | RenderKind::Sprite { .. } | RenderKind::Text { .. } => {
                HitArea::BoundingBox
            }
        }
    }

    /// Tests a local-space point. `bounds` is only consulted for `BoundingBox`.
    pub fn contains(&self, p: Vec2, bounds: Rect) -> bool {
        match *self {
            HitArea::BoundingBox => bounds.contains(p),
            HitArea::Circle { center, radius } => (p - center).length() <= radius,
            HitArea::Triangle { vertices: [a, b, c] } => {
                let d1 = cross(a, b, p);
                let d2 = cross(b, c, p);
                let d3 = cross(c, a, p);
                let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_neg && has_pos)
            }
        }
    }
}

#[inline]
fn cross(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
