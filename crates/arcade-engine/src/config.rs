//! Scene configuration.

use serde::{Deserialize, Serialize};

/// Remote base every relative asset URL is resolved against.
pub const DEFAULT_ASSET_BASE: &str = "https://source-academy-assets.s3-ap-southeast-1.amazonaws.com/";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 120;
const MIN_SCALE: f32 = 0.1;
const MAX_SCALE: f32 = 10.0;

/// Scene-wide settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// Display scale applied by the host to the whole canvas.
    pub scale: f32,
    /// Target frame rate the host should drive `Scene::frame` at.
    pub fps: u32,
    /// Show user `debug_log` lines in the overlay. Diagnostics and fault
    /// output are shown regardless.
    pub debug: bool,
    pub asset_base: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            scale: 1.0,
            fps: 30,
            debug: false,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl SceneConfig {
    /// Returns a copy with fps and scale pinned to their supported ranges.
    pub fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        self.scale = if self.scale.is_finite() {
            self.scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        self
    }

    /// Resolves a scene URL against the asset base. Absolute URLs pass through.
    pub fn asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        let base = self.asset_base.trim_end_matches('/');
        let path = url.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Frame interval in milliseconds at the target fps.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps.max(MIN_FPS))
    }
}
