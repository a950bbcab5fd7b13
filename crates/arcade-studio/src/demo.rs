//! Built-in update callback used when driving a scene from the command line.
//!
//! The first hit-testable object is the player: arrow keys move it, clicking
//! it scores a point. The first text object shows the score. Space plays the
//! first clip.

use anyhow::bail;
use arcade_engine::coords::Vec2;
use arcade_engine::input::Key;
use arcade_engine::model::{AudioId, ObjectId, RenderKind, SceneModel};
use arcade_engine::UpdateCtx;

/// Pixels per millisecond.
const PLAYER_SPEED: f32 = 0.25;

#[derive(Debug, Default)]
pub struct Demo {
    pub score: u32,
    player: Option<ObjectId>,
    label: Option<ObjectId>,
    has_audio: bool,
    shown: String,
    was_clicking: bool,
    fail_at: Option<u64>,
}

impl Demo {
    pub fn for_model(model: &SceneModel, fail_at: Option<u64>) -> Self {
        let player = model.objects().iter().find(|o| o.hitbox_active()).map(|o| o.id());
        let label = model
            .objects()
            .iter()
            .find(|o| matches!(o.kind(), RenderKind::Text { .. }))
            .map(|o| o.id());
        let shown = match label.and_then(|id| model.object(id)).map(|o| o.kind()) {
            Some(RenderKind::Text { content }) => content.clone(),
            _ => String::new(),
        };

        Self {
            player,
            label,
            has_audio: !model.clips().is_empty(),
            shown,
            fail_at,
            ..Self::default()
        }
    }
}

pub fn update(ctx: &mut UpdateCtx<'_, Demo>) -> anyhow::Result<()> {
    if ctx.state.fail_at == Some(ctx.loop_count()) {
        bail!("scripted failure at frame {}", ctx.loop_count());
    }

    let mut dir = Vec2::zero();
    if ctx.key_down(Key::ArrowLeft) {
        dir.x -= 1.0;
    }
    if ctx.key_down(Key::ArrowRight) {
        dir.x += 1.0;
    }
    if ctx.key_down(Key::ArrowUp) {
        dir.y -= 1.0;
    }
    if ctx.key_down(Key::ArrowDown) {
        dir.y += 1.0;
    }

    let clicking = ctx.primary_down();
    let clicked = clicking && !ctx.state.was_clicking;
    ctx.state.was_clicking = clicking;

    if let Some(player) = ctx.state.player {
        if dir != Vec2::zero() {
            let step = PLAYER_SPEED * ctx.time().delta_ms as f32;
            ctx.object_mut(player)?.translate(dir * step);
        }
        if clicked && ctx.pointer_over(player) {
            ctx.state.score += 1;
            ctx.object_mut(player)?.bring_to_top();
            if ctx.state.has_audio {
                ctx.play(AudioId(0))?;
            }
        }
        let pos = ctx.object(player)?.transform().position;
        ctx.debug_log(format!("player at ({:.0}, {:.0})", pos.x, pos.y));
    }

    if ctx.state.has_audio && ctx.key_down(Key::Space) {
        ctx.play(AudioId(0))?;
    }

    if let Some(label) = ctx.state.label {
        let text = format!("score {}", ctx.state.score);
        if text != ctx.state.shown {
            ctx.object_mut(label)?.set_text(text.clone())?;
            ctx.state.shown = text;
        }
    }

    Ok(())
}
