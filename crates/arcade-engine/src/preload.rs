//! Asset preloading.
//!
//! Issues one load request per unique sprite and audio URL before the scene
//! is built. Whether a load succeeded is not observed here; failures surface
//! when the builder constructs backend objects.

use std::collections::HashSet;

use crate::backend::RenderBackend;
use crate::config::SceneConfig;
use crate::model::{RenderKind, SceneModel};

/// Counts of load requests issued.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PreloadSummary {
    pub images: usize,
    pub audio: usize,
}

/// Unique sprite URLs in object declaration order.
pub fn sprite_urls(model: &SceneModel) -> Vec<&str> {
    let mut seen = HashSet::new();
    model
        .objects()
        .iter()
        .filter_map(|o| match o.kind() {
            RenderKind::Sprite { url, .. } => Some(url.as_str()),
            _ => None,
        })
        .filter(|url| seen.insert(*url))
        .collect()
}

/// Unique audio URLs in clip declaration order.
pub fn audio_urls(model: &SceneModel) -> Vec<&str> {
    let mut seen = HashSet::new();
    model
        .clips()
        .iter()
        .map(|c| c.url())
        .filter(|url| seen.insert(*url))
        .collect()
}

/// Queues every unique asset on `backend`. The scene URL is the asset key;
/// the request goes to the URL resolved against the configured asset base.
pub fn preload_assets<B: RenderBackend>(
    model: &SceneModel,
    config: &SceneConfig,
    backend: &mut B,
) -> PreloadSummary {
    let images = sprite_urls(model);
    for url in &images {
        backend.load_image(url, &config.asset_url(url));
    }

    let audio = audio_urls(model);
    for url in &audio {
        backend.load_audio(url, &config.asset_url(url));
    }

    log::debug!("preload: {} image(s), {} audio clip(s)", images.len(), audio.len());

    PreloadSummary { images: images.len(), audio: audio.len() }
}
