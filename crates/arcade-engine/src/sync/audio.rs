//! Audio synchronization: applies pending play/stop intent to bound sounds.

use crate::backend::RenderBackend;
use crate::bindings::Bindings;
use crate::error::SceneError;
use crate::model::SceneModel;

pub(crate) fn sync_audio<B: RenderBackend>(
    model: &mut SceneModel,
    bindings: &Bindings,
    backend: &mut B,
) -> Vec<SceneError> {
    let mut errors = Vec::new();
    for clip in model.clips_mut().iter_mut().filter(|c| c.is_dirty()) {
        match bindings.sound(clip.id()) {
            Some(sound) if clip.should_play() => backend.play_sound(sound),
            Some(sound) => backend.stop_sound(sound),
            None => errors.push(SceneError::AudioBindingMissing { id: clip.id() }),
        }
        clip.mark_consumed();
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RetainedBackend;
    use crate::build::SceneBuilder;
    use crate::model::AudioId;

    #[test]
    fn dirty_clips_follow_intent() {
        let mut model = SceneModel::new();
        let a = model.add_clip("a.mp3", false, 1.0);
        let c = model.add_clip("c.mp3", true, 1.0);
        let mut b = RetainedBackend::new();
        let bindings = SceneBuilder::build(&model, &mut b).bindings;

        model.clip_mut(a).unwrap().play();
        assert!(sync_audio(&mut model, &bindings, &mut b).is_empty());
        assert!(b.sound(bindings.sound(a).unwrap()).unwrap().playing);
        assert!(!b.sound(bindings.sound(c).unwrap()).unwrap().playing);

        model.clip_mut(a).unwrap().stop();
        sync_audio(&mut model, &bindings, &mut b);
        assert!(!b.any_playing());
        assert!(!model.clip(a).unwrap().is_dirty());
    }

    #[test]
    fn clean_clips_are_ignored() {
        let mut model = SceneModel::new();
        model.add_clip("a.mp3", false, 1.0);
        let mut b = RetainedBackend::new();
        let bindings = SceneBuilder::build(&model, &mut b).bindings;
        let before = b.mutations();
        sync_audio(&mut model, &bindings, &mut b);
        assert_eq!(b.mutations(), before);
    }

    #[test]
    fn missing_sound_is_reported_and_consumed() {
        let mut model = SceneModel::new();
        let a = model.add_clip("a.mp3", false, 1.0);
        model.clip_mut(a).unwrap().play();
        let bindings = Bindings::default();
        let mut b = RetainedBackend::new();

        let errors = sync_audio(&mut model, &bindings, &mut b);
        assert_eq!(errors, vec![SceneError::AudioBindingMissing { id: AudioId(0) }]);
        assert!(!model.clip(a).unwrap().is_dirty());
    }
}
