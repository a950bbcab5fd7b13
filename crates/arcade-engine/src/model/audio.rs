use serde::{Deserialize, Serialize};

/// Stable clip id; indexes the scene's sound-handle table 1:1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AudioId(pub u32);

impl AudioId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A logical audio clip.
///
/// `url`, `looping` and `volume` are fixed at creation and bound into the
/// backend sound at build time. Only the desired play state changes afterwards.
#[derive(Debug, Clone)]
pub struct AudioClip {
    id: AudioId,
    url: String,
    looping: bool,
    volume: f32,

    should_play: bool,
    dirty: bool,
}

impl AudioClip {
    pub(crate) fn new(id: AudioId, url: impl Into<String>, looping: bool, volume: f32) -> Self {
        let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        Self {
            id,
            url: url.into(),
            looping,
            volume,
            should_play: false,
            dirty: false,
        }
    }

    #[inline]
    pub fn id(&self) -> AudioId {
        self.id
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn looping(&self) -> bool {
        self.looping
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[inline]
    pub fn should_play(&self) -> bool {
        self.should_play
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn play(&mut self) {
        self.should_play = true;
        self.dirty = true;
    }

    pub fn stop(&mut self) {
        self.should_play = false;
        self.dirty = true;
    }

    pub fn mark_consumed(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_clamped() {
        assert_eq!(AudioClip::new(AudioId(0), "a.mp3", false, 1.5).volume(), 1.0);
        assert_eq!(AudioClip::new(AudioId(0), "a.mp3", false, -0.5).volume(), 0.0);
        assert_eq!(AudioClip::new(AudioId(0), "a.mp3", false, f32::NAN).volume(), 0.0);
    }

    #[test]
    fn play_then_stop_leaves_one_pending_intent() {
        let mut c = AudioClip::new(AudioId(0), "a.mp3", true, 0.5);
        c.play();
        c.stop();
        assert!(c.is_dirty());
        assert!(!c.should_play());
        c.mark_consumed();
        assert!(!c.is_dirty());
    }
}
