//! Per-object diff/apply.
//!
//! Only aspects whose dirty flag is set (or everything, on a forced resync)
//! are pushed to the backend; a clean object costs zero backend calls.

use crate::backend::{RenderBackend, RenderHandle};
use crate::bindings::Bindings;
use crate::error::SceneError;
use crate::model::{GameObject, RenderKind, SceneModel};

/// Synchronizes every object in declaration order.
///
/// An object without a bound handle yields `BackendBindingMissing` and is
/// skipped; the remaining objects are still processed this frame.
pub(crate) fn sync_objects<B: RenderBackend>(
    model: &mut SceneModel,
    bindings: &Bindings,
    backend: &mut B,
    force: bool,
) -> Vec<SceneError> {
    let mut errors = Vec::new();
    for obj in model.objects_mut() {
        let Some(handle) = bindings.object(obj.id()) else {
            errors.push(SceneError::BackendBindingMissing { id: obj.id() });
            continue;
        };

        if force || obj.is_transform_dirty() {
            apply_transform(obj, handle, backend);
            obj.mark_transform_consumed();
        }

        if force || obj.is_render_dirty() {
            apply_render(obj, handle, backend);
            obj.mark_render_consumed();
        }
    }
    errors
}

fn apply_transform<B: RenderBackend>(obj: &GameObject, handle: RenderHandle, backend: &mut B) {
    let t = obj.transform();
    backend.set_position(handle, t.position);
    backend.set_rotation(handle, obj.render().displayed_rotation(t.rotation));
    backend.set_scale(handle, t.scale);
}

fn apply_render<B: RenderBackend>(obj: &GameObject, handle: RenderHandle, backend: &mut B) {
    let r = obj.render();
    let packed = r.color.packed();
    let alpha = r.color.alpha();

    match &r.kind {
        RenderKind::Text { content } => {
            backend.set_tint(handle, packed, alpha);
            backend.set_flip(handle, r.flip);
            // Content changes travel on the render flag.
            backend.set_text(handle, content);
        }
        RenderKind::Sprite { .. } => {
            backend.set_tint(handle, packed, alpha);
            backend.set_flip(handle, r.flip);
        }
        RenderKind::Triangle { .. } => {
            backend.set_fill(handle, packed, alpha);
            backend.set_rotation(handle, r.displayed_rotation(obj.transform().rotation));
        }
        RenderKind::Rectangle { .. } | RenderKind::Circle { .. } => {
            backend.set_fill(handle, packed, alpha);
        }
    }

    backend.set_visible(handle, r.visible);

    if obj.wants_bring_to_top() {
        backend.bring_to_top(handle);
    }
}
