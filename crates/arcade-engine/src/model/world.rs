use super::{AudioClip, AudioId, GameObject, ObjectId, RenderKind};

/// Owner of every logical object and audio clip in a scene, in declaration order.
#[derive(Debug, Default, Clone)]
pub struct SceneModel {
    objects: Vec<GameObject>,
    clips: Vec<AudioClip>,
}

impl SceneModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object and returns it for further setup.
    pub fn add_object(&mut self, kind: RenderKind) -> &mut GameObject {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(GameObject::new(id, kind));
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    /// Creates an audio clip. `volume` is clamped to `[0, 1]`.
    pub fn add_clip(&mut self, url: impl Into<String>, looping: bool, volume: f32) -> AudioId {
        let id = AudioId(self.clips.len() as u32);
        self.clips.push(AudioClip::new(id, url, looping, volume));
        id
    }

    #[inline]
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    #[inline]
    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    #[inline]
    pub fn clips(&self) -> &[AudioClip] {
        &self.clips
    }

    #[inline]
    pub fn clips_mut(&mut self) -> &mut [AudioClip] {
        &mut self.clips
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id.index())
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id.index())
    }

    pub fn clip(&self, id: AudioId) -> Option<&AudioClip> {
        self.clips.get(id.index())
    }

    pub fn clip_mut(&mut self, id: AudioId) -> Option<&mut AudioClip> {
        self.clips.get_mut(id.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_in_declaration_order() {
        let mut m = SceneModel::new();
        let a = m.add_object(RenderKind::Circle { radius: 1.0 }).id();
        let b = m.add_object(RenderKind::Text { content: "x".into() }).id();
        assert_eq!((a, b), (ObjectId(0), ObjectId(1)));
        assert_eq!(m.object(b).map(|o| o.kind().name()), Some("text"));
    }

    #[test]
    fn clip_ids_are_independent_of_object_ids() {
        let mut m = SceneModel::new();
        m.add_object(RenderKind::Circle { radius: 1.0 });
        assert_eq!(m.add_clip("a.mp3", false, 1.0), AudioId(0));
        assert!(m.clip(AudioId(1)).is_none());
    }
}
