use super::*;
use crate::backend::RetainedBackend;
use crate::coords::Vec2;
use crate::input::Key;
use crate::model::{AudioId, RenderKind};

fn rect_and_clip() -> SceneModel {
    let mut model = SceneModel::new();
    model
        .add_object(RenderKind::Rectangle { width: 50.0, height: 50.0 })
        .set_position(Vec2::new(60.0, 60.0));
    model.add_clip("beep.mp3", false, 1.0);
    model
}

fn fill_of(scene: &Scene<RetainedBackend, u32>, id: u32) -> Option<u32> {
    let handle = scene.handle_of(ObjectId(id))?;
    scene.backend().node(handle)?.fill
}

// ── scenario ──────────────────────────────────────────────────────────────

#[test]
fn fault_freezes_scene_and_silences_audio() {
    let mut scene = Scene::build(
        SceneConfig::default(),
        rect_and_clip(),
        RetainedBackend::new(),
        0u32,
        |ctx| {
            *ctx.state += 1;
            match ctx.loop_count() {
                1 => {
                    ctx.object_mut(ObjectId(0))?.set_color(Rgba::new(255, 0, 0, 255));
                    ctx.play(AudioId(0))?;
                }
                2 => anyhow::bail!("undefined variable"),
                _ => {}
            }
            Ok(())
        },
    );

    // Frame 1: render change applied, log empty afterwards.
    assert_eq!(scene.frame(16.0, 16.0), FrameStatus::Running);
    let node = scene.backend().node(scene.handle_of(ObjectId(0)).unwrap()).unwrap();
    assert_eq!(node.fill, Some(0xFF00_00FF));
    assert_eq!(node.alpha, 1.0);
    assert!(scene.debug_log().is_empty());
    assert!(scene.backend().any_playing());

    // Frame 2: user code fails.
    assert_eq!(scene.frame(32.0, 16.0), FrameStatus::Frozen);
    assert!(scene.is_faulted());
    assert!(scene.debug_log().contains("Runtime Error: Error in user update function"));
    assert!(!scene.backend().any_playing());
    let overlay = scene.backend().overlay().unwrap();
    assert_eq!(overlay.tint, Some(Rgba::RED.packed()));
    assert!(overlay.text().unwrap().contains("Error in user update function"));

    // Frames 3+: nothing is dispatched any more.
    let mutations = scene.backend().mutations();
    scene.model_mut().object_mut(ObjectId(0)).unwrap().set_color(Rgba::new(0, 0, 255, 255));
    scene.model_mut().clip_mut(AudioId(0)).unwrap().play();
    for i in 3..6 {
        assert_eq!(scene.frame(16.0 * i as f64, 16.0), FrameStatus::Frozen);
        assert!(scene.is_faulted());
    }
    assert_eq!(scene.backend().mutations(), mutations);
    assert_eq!(fill_of(&scene, 0), Some(0xFF00_00FF));
    assert_eq!(*scene.state(), 2);
}

#[test]
fn panicking_update_is_contained() {
    let mut scene = Scene::build(
        SceneConfig::default(),
        rect_and_clip(),
        RetainedBackend::new(),
        0u32,
        |_ctx| panic!("index out of bounds"),
    );
    assert_eq!(scene.frame(16.0, 16.0), FrameStatus::Frozen);
    assert!(scene.debug_log().contains("Runtime Error: Error in user update function"));
}

// ── resync / idempotence ──────────────────────────────────────────────────

#[test]
fn first_frame_paints_then_idle_frames_are_free() {
    let mut model = rect_and_clip();
    model.add_object(RenderKind::Text { content: "score".into() });
    let mut scene = Scene::build(SceneConfig::default(), model, RetainedBackend::new(), 0u32, |_| Ok(()));

    let built = scene.backend().mutations();
    scene.frame(16.0, 16.0);
    let first = scene.backend().mutations();
    assert!(first > built);

    scene.frame(32.0, 16.0);
    scene.frame(48.0, 16.0);
    assert_eq!(scene.backend().mutations(), first);
}

#[test]
fn forced_resync_matches_model_state() {
    let mut model = SceneModel::new();
    model
        .add_object(RenderKind::isosceles(10.0, 10.0))
        .set_rotation(1.0)
        .set_color(Rgba::new(0, 255, 0, 128))
        .set_flip(crate::model::Flip { x: false, y: true });
    let mut scene = Scene::build(SceneConfig::default(), model, RetainedBackend::new(), 0u32, |_| Ok(()));
    scene.frame(16.0, 16.0);

    let node = scene.backend().node(scene.handle_of(ObjectId(0)).unwrap()).unwrap();
    assert_eq!(node.rotation, 1.0 + std::f32::consts::PI);
    assert_eq!(node.fill, Some(0x00FF_0080));
    assert!(!scene.model().objects()[0].is_render_dirty());
}

// ── binding faults ────────────────────────────────────────────────────────

#[test]
fn missing_render_handle_faults_scene() {
    let mut backend = RetainedBackend::new();
    backend.fail_spawn_for(ObjectId(0));
    let mut scene = Scene::build(SceneConfig::default(), rect_and_clip(), backend, 0u32, |ctx| {
        *ctx.state += 1;
        Ok(())
    });

    assert_eq!(scene.frame(16.0, 16.0), FrameStatus::Frozen);
    assert!(scene.debug_log().contains("Runtime Error: Cannot create GameObject in update_loop"));

    scene.frame(32.0, 16.0);
    assert_eq!(*scene.state(), 1);
}

#[test]
fn failed_audio_batch_keeps_rendering() {
    let mut backend = RetainedBackend::new();
    backend.fail_sounds("unsupported codec");
    let mut scene = Scene::build(SceneConfig::default(), rect_and_clip(), backend, 0u32, |ctx| {
        ctx.play(AudioId(0))?;
        ctx.object_mut(ObjectId(0))?.set_color(Rgba::BLACK);
        Ok(())
    });

    assert!(scene.is_audio_faulted());
    assert_eq!(scene.frame(16.0, 16.0), FrameStatus::Running);
    assert!(!scene.is_faulted());
    assert_eq!(fill_of(&scene, 0), Some(Rgba::BLACK.packed()));

    // The diagnostic is shown even with debug output disabled.
    let overlay = scene.backend().overlay().unwrap();
    assert!(overlay.text().unwrap().starts_with("Audio Error:"));
    assert!(scene.debug_log().is_empty());
}

// ── input timing ──────────────────────────────────────────────────────────

#[test]
fn tap_between_frames_is_seen_by_exactly_one_update() {
    let mut scene = Scene::build(
        SceneConfig::default(),
        SceneModel::new(),
        RetainedBackend::new(),
        Vec::<bool>::new(),
        |ctx| {
            let down = ctx.key_down(Key::Space);
            ctx.state.push(down);
            Ok(())
        },
    );

    scene.frame(16.0, 16.0);
    scene.handle_input(&InputEvent::KeyDown(Key::Space));
    scene.handle_input(&InputEvent::KeyUp(Key::Space));
    scene.frame(32.0, 16.0);
    scene.frame(48.0, 16.0);

    assert_eq!(scene.state(), &vec![false, true, false]);
}

#[test]
fn tap_followed_by_focus_loss_is_still_seen() {
    let mut scene = Scene::build(
        SceneConfig::default(),
        SceneModel::new(),
        RetainedBackend::new(),
        Vec::<bool>::new(),
        |ctx| {
            let down = ctx.key_down(Key::Space);
            ctx.state.push(down);
            Ok(())
        },
    );

    scene.handle_input(&InputEvent::KeyDown(Key::Space));
    scene.handle_input(&InputEvent::KeyUp(Key::Space));
    scene.handle_input(&InputEvent::Focused(false));
    scene.frame(16.0, 16.0);
    scene.frame(32.0, 16.0);

    assert_eq!(scene.state(), &vec![true, false]);
}

#[test]
fn pointer_and_hover_reach_user_code() {
    let mut model = SceneModel::new();
    model
        .add_object(RenderKind::Circle { radius: 10.0 })
        .set_position(Vec2::new(100.0, 100.0))
        .set_hitbox_active(true);
    let mut scene = Scene::build(
        SceneConfig::default(),
        model,
        RetainedBackend::new(),
        Vec::<(bool, (i32, i32))>::new(),
        |ctx| {
            let seen = (ctx.pointer_over(ObjectId(0)), ctx.pointer_pos());
            ctx.state.push(seen);
            Ok(())
        },
    );

    for pos in [Vec2::new(103.7, 98.2), Vec2::new(91.0, 91.0)] {
        let events = scene.backend_mut().pointer_moved(pos);
        for ev in &events {
            scene.handle_input(ev);
        }
        scene.frame(0.0, 16.0);
    }

    assert_eq!(scene.state(), &vec![(true, (103, 98)), (false, (91, 91))]);
}

#[test]
fn described_sprite_with_hitbox_can_be_hovered() {
    let doc = r#"{
        "objects": [
            { "kind": "sprite", "url": "ship.png", "position": { "x": 100, "y": 100 }, "hitbox": true },
            { "kind": "sprite", "url": "rock.png", "size": { "x": 80, "y": 10 },
              "position": { "x": 300, "y": 300 }, "hitbox": true }
        ]
    }"#;
    let (config, model) = crate::description::SceneDescription::from_json(doc).unwrap().into_parts();
    let mut backend = RetainedBackend::new();
    crate::preload::preload_assets(&model, &config, &mut backend);
    let mut scene = Scene::build(config, model, backend, Vec::<(bool, bool)>::new(), |ctx| {
        let seen = (ctx.pointer_over(ObjectId(0)), ctx.pointer_over(ObjectId(1)));
        ctx.state.push(seen);
        Ok(())
    });

    for pos in [Vec2::new(100.0, 100.0), Vec2::new(335.0, 302.0)] {
        let events = scene.backend_mut().pointer_moved(pos);
        for ev in &events {
            scene.handle_input(ev);
        }
        scene.frame(0.0, 16.0);
    }

    assert_eq!(scene.state(), &vec![(true, false), (false, true)]);
}

// ── overlay ───────────────────────────────────────────────────────────────

#[test]
fn debug_lines_are_frame_scoped() {
    let config = SceneConfig { debug: true, ..Default::default() };
    let mut scene = Scene::build(config, SceneModel::new(), RetainedBackend::new(), 0u32, |ctx| {
        if ctx.loop_count() == 1 {
            ctx.debug_log("hello");
        }
        Ok(())
    });

    scene.frame(16.0, 16.0);
    assert_eq!(scene.backend().overlay().unwrap().text(), Some("hello"));
    assert!(scene.debug_log().is_empty());

    scene.frame(32.0, 16.0);
    assert_eq!(scene.backend().overlay().unwrap().text(), Some(""));
}

#[test]
fn user_lines_hidden_without_debug() {
    let mut scene = Scene::build(SceneConfig::default(), SceneModel::new(), RetainedBackend::new(), 0u32, |ctx| {
        ctx.debug_log("hidden");
        Ok(())
    });
    scene.frame(16.0, 16.0);
    assert_eq!(scene.backend().overlay().unwrap().text(), Some(""));
}

// ── time / teardown ───────────────────────────────────────────────────────

#[test]
fn time_counters_advance_per_frame() {
    let mut scene = Scene::build(SceneConfig::default(), SceneModel::new(), RetainedBackend::new(), 0u32, |ctx| {
        *ctx.state = ctx.loop_count() as u32;
        Ok(())
    });
    scene.frame(16.0, 16.0);
    scene.frame(40.0, 24.0);
    assert_eq!(*scene.state(), 2);
    assert_eq!(scene.time().elapsed_ms, 40.0);
    assert_eq!(scene.time().delta_ms, 24.0);
}

#[test]
fn teardown_releases_everything() {
    let mut scene = Scene::build(SceneConfig::default(), rect_and_clip(), RetainedBackend::new(), 0u32, |ctx| {
        ctx.play(AudioId(0))?;
        Ok(())
    });
    scene.handle_input(&InputEvent::KeyDown(Key::A));
    scene.frame(16.0, 16.0);

    let backend = scene.teardown();
    assert_eq!(backend.live_nodes(), 0);
    assert_eq!(backend.live_sounds(), 0);
    assert!(!backend.any_playing());
}
