//! Declarative scene description.
//!
//! A [`SceneDescription`] is the JSON document a host hands to the engine:
//! scene configuration plus the initial objects and audio clips. Converting
//! it yields the config and a fresh [`SceneModel`].
//!
//! ```json
//! {
//!   "config": { "width": 400, "height": 300, "debug": true },
//!   "objects": [
//!     { "kind": "rectangle", "width": 50, "height": 50, "position": { "x": 100, "y": 100 } },
//!     { "kind": "text", "content": "score: 0", "color": { "r": 255, "g": 255, "b": 0, "a": 255 } }
//!   ],
//!   "audio": [ { "url": "sounds/beep.mp3", "volume": 0.5 } ]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::SceneConfig;
use crate::coords::Vec2;
use crate::model::{Flip, RenderKind, SceneModel};
use crate::paint::Rgba;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub config: SceneConfig,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub audio: Vec<AudioDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub kind: RenderKind,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default = "unit_scale")]
    pub scale: Vec2,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: Rgba,
    #[serde(default)]
    pub flip: Flip,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default)]
    pub hitbox: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDescription {
    pub url: String,
    #[serde(default, rename = "loop")]
    pub looping: bool,
    #[serde(default = "full_volume")]
    pub volume: f32,
}

fn unit_scale() -> Vec2 {
    Vec2::splat(1.0)
}

fn yes() -> bool {
    true
}

fn full_volume() -> f32 {
    1.0
}

/// Accepts fractional or out-of-range channels (e.g. from generated scenes),
/// clamping them into `0..=255`. Alpha defaults to opaque.
fn lenient_color<'de, D: Deserializer<'de>>(d: D) -> Result<Rgba, D::Error> {
    #[derive(Deserialize)]
    struct Channels {
        r: f32,
        g: f32,
        b: f32,
        #[serde(default = "opaque")]
        a: f32,
    }

    fn opaque() -> f32 {
        255.0
    }

    let c = Channels::deserialize(d)?;
    Ok(Rgba::from_f32(c.r, c.g, c.b, c.a))
}

impl SceneDescription {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Builds the logical model. Objects start clean; the first frame after
    /// build paints everything regardless of dirty flags.
    pub fn into_parts(self) -> (SceneConfig, SceneModel) {
        let mut model = SceneModel::new();
        for desc in self.objects {
            let obj = model.add_object(desc.kind);
            obj.set_position(desc.position)
                .set_scale(desc.scale)
                .set_rotation(desc.rotation)
                .set_color(desc.color)
                .set_flip(desc.flip)
                .set_visible(desc.visible)
                .set_hitbox_active(desc.hitbox);
            obj.mark_transform_consumed();
            obj.mark_render_consumed();
        }
        for clip in self.audio {
            model.add_clip(clip.url, clip.looping, clip.volume);
        }
        (self.config.sanitized(), model)
    }
}
