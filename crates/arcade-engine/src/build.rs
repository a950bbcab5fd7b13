//! One-time scene construction.

use crate::backend::{HitArea, RenderBackend, SoundSpec, Spawn};
use crate::bindings::{Bindings, HandleTable};
use crate::error::{BackendError, SceneError};
use crate::model::SceneModel;

/// Result of a build pass.
#[derive(Debug, Default)]
pub struct Built {
    pub bindings: Bindings,
    /// Non-fatal problems to surface in the debug overlay.
    pub diagnostics: Vec<SceneError>,
}

/// Creates exactly one backend handle per object and one sound per clip.
///
/// Object spawn failures are only logged here: the slot stays unbound and
/// the frame loop reports the missing binding the first time it needs it.
pub struct SceneBuilder;

impl SceneBuilder {
    pub fn build<B: RenderBackend>(model: &SceneModel, backend: &mut B) -> Built {
        let mut built = Built {
            bindings: Bindings {
                objects: HandleTable::with_len(model.objects().len()),
                sounds: HandleTable::with_len(model.clips().len()),
                ..Default::default()
            },
            diagnostics: Vec::new(),
        };

        Self::build_objects(model, backend, &mut built);
        Self::build_sounds(model, backend, &mut built);

        match backend.spawn_overlay() {
            Ok(h) => built.bindings.overlay = Some(h),
            Err(e) => log::warn!("debug overlay unavailable: {e}"),
        }

        log::debug!(
            "built scene: {}/{} object(s), {}/{} sound(s)",
            built.bindings.objects.bound(),
            model.objects().len(),
            built.bindings.sounds.bound(),
            model.clips().len(),
        );

        built
    }

    fn build_objects<B: RenderBackend>(model: &SceneModel, backend: &mut B, built: &mut Built) {
        for obj in model.objects() {
            let t = obj.transform();
            let r = obj.render();
            let spawn = Spawn {
                object: obj.id(),
                kind: &r.kind,
                position: t.position,
                scale: t.scale,
                rotation: r.displayed_rotation(t.rotation),
                color: r.color,
                flip: r.flip,
                visible: r.visible,
            };

            let handle = match backend.spawn(&spawn) {
                Ok(h) => h,
                Err(e) => {
                    log::error!("{e}");
                    continue;
                }
            };

            if obj.hitbox_active() {
                backend.set_hit_area(handle, obj.id(), HitArea::for_kind(&r.kind));
            }

            built.bindings.objects.bind(obj.id().index(), handle);
        }
    }

    fn build_sounds<B: RenderBackend>(model: &SceneModel, backend: &mut B, built: &mut Built) {
        let clips = model.clips();
        if clips.is_empty() {
            return;
        }

        let specs: Vec<SoundSpec<'_>> = clips
            .iter()
            .map(|c| SoundSpec { url: c.url(), looping: c.looping(), volume: c.volume() })
            .collect();

        let result = backend.create_sounds(&specs).and_then(|handles| {
            if handles.len() == clips.len() {
                Ok(handles)
            } else {
                Err(BackendError::Sound {
                    url: String::new(),
                    reason: format!("backend returned {} sound(s) for {} clip(s)", handles.len(), clips.len()),
                })
            }
        });

        match result {
            Ok(handles) => {
                for (clip, handle) in clips.iter().zip(handles) {
                    built.bindings.sounds.bind(clip.id().index(), handle);
                }
            }
            Err(e) => {
                log::warn!("audio disabled for this scene: {e}");
                built.bindings.audio_faulted = true;
                built.diagnostics.push(SceneError::AssetLoadFailure(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RetainedBackend;
    use crate::coords::Vec2;
    use crate::model::{Flip, ObjectId, RenderKind};
    use crate::paint::Rgba;

    fn model() -> SceneModel {
        let mut m = SceneModel::new();
        m.add_object(RenderKind::Rectangle { width: 50.0, height: 50.0 })
            .set_position(Vec2::new(100.0, 80.0))
            .set_color(Rgba::new(1, 2, 3, 4));
        m.add_object(RenderKind::Circle { radius: 10.0 }).set_hitbox_active(true);
        m.add_object(RenderKind::isosceles(10.0, 10.0))
            .set_rotation(0.25)
            .set_flip(Flip { x: false, y: true })
            .set_hitbox_active(true);
        m.add_object(RenderKind::Text { content: "hello".into() }).set_hitbox_active(true);
        m.add_clip("a.mp3", true, 0.5);
        m
    }

    #[test]
    fn every_object_gets_exactly_one_handle() {
        let m = model();
        let mut b = RetainedBackend::new();
        let built = SceneBuilder::build(&m, &mut b);

        assert_eq!(built.bindings.objects.bound(), 4);
        // Four objects plus the overlay.
        assert_eq!(b.live_nodes(), 5);
        assert!(built.bindings.overlay.is_some());
        assert!(built.diagnostics.is_empty());
    }

    #[test]
    fn initial_state_matches_model() {
        let m = model();
        let mut b = RetainedBackend::new();
        let built = SceneBuilder::build(&m, &mut b);

        let rect = b.node(built.bindings.object(ObjectId(0)).unwrap()).unwrap();
        assert_eq!(rect.position, Vec2::new(100.0, 80.0));
        assert_eq!(rect.fill, Some(Rgba::new(1, 2, 3, 4).packed()));

        let tri = b.node(built.bindings.object(ObjectId(2)).unwrap()).unwrap();
        assert_eq!(tri.rotation, 0.25 + std::f32::consts::PI);
    }

    #[test]
    fn hit_areas_follow_kind() {
        let m = model();
        let mut b = RetainedBackend::new();
        let built = SceneBuilder::build(&m, &mut b);
        let area = |id| b.node(built.bindings.object(ObjectId(id)).unwrap()).unwrap().hit_area;

        assert_eq!(area(0), None);
        assert_eq!(area(1), Some(HitArea::Circle { center: Vec2::new(10.0, 10.0), radius: 10.0 }));
        assert!(matches!(area(2), Some(HitArea::Triangle { .. })));
        assert_eq!(area(3), Some(HitArea::BoundingBox));
    }

    #[test]
    fn sounds_bound_with_clip_parameters() {
        let m = model();
        let mut b = RetainedBackend::new();
        let built = SceneBuilder::build(&m, &mut b);
        let sound = b.sound(built.bindings.sound(m.clips()[0].id()).unwrap()).unwrap();
        assert_eq!(sound.url, "a.mp3");
        assert!(sound.looping);
        assert_eq!(sound.volume, 0.5);
    }

    #[test]
    fn sound_failure_is_non_fatal() {
        let m = model();
        let mut b = RetainedBackend::new();
        b.fail_sounds("unsupported codec");
        let built = SceneBuilder::build(&m, &mut b);

        assert!(built.bindings.audio_faulted);
        assert_eq!(built.bindings.sounds.bound(), 0);
        assert_eq!(built.bindings.objects.bound(), 4);
        assert_eq!(built.diagnostics.len(), 1);
        assert!(!built.diagnostics[0].is_fatal());
    }

    #[test]
    fn spawn_failure_leaves_slot_unbound() {
        let m = model();
        let mut b = RetainedBackend::new();
        b.fail_spawn_for(ObjectId(1));
        let built = SceneBuilder::build(&m, &mut b);
        assert_eq!(built.bindings.object(ObjectId(1)), None);
        assert_eq!(built.bindings.objects.bound(), 3);
    }
}
