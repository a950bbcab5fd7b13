use std::collections::BTreeSet;

use crate::coords::{Rect, Vec2};
use crate::error::BackendError;
use crate::input::InputEvent;
use crate::model::{Flip, ObjectId, RenderKind};
use crate::paint::Rgba;
use crate::scene::{DrawCmd, DrawList, DrawShape, ZIndex};

use super::{HitArea, RenderBackend, RenderHandle, SoundHandle, SoundSpec, Spawn};

/// Fixed glyph metrics used to size text without a font system.
const TEXT_GLYPH_WIDTH: f32 = 8.0;
const TEXT_LINE_HEIGHT: f32 = 16.0;
/// Side of the square assumed for sprites without a declared size.
pub const DEFAULT_SPRITE_SIZE: f32 = 32.0;

/// Retained state of one display object.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// `None` for the debug overlay.
    pub object: Option<ObjectId>,
    pub kind: RenderKind,
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    /// Packed `0xRRGGBBAA` fill (shapes).
    pub fill: Option<u32>,
    /// Packed `0xRRGGBBAA` tint (sprites, text).
    pub tint: Option<u32>,
    pub alpha: f32,
    pub flip: Flip,
    pub visible: bool,
    pub depth: ZIndex,
    pub hit_area: Option<HitArea>,
    /// Setter calls received since creation.
    pub mutations: u32,
}

impl Node {
    /// Current string of a text node.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            RenderKind::Text { content } => Some(content),
            _ => None,
        }
    }
}

/// Retained state of one sound.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundNode {
    pub url: String,
    pub looping: bool,
    pub volume: f32,
    pub playing: bool,
}

/// Headless backend that keeps the complete state of every handle.
///
/// Besides serving as a reference implementation it offers what a host
/// without a real engine needs: pointer hover resolution against hit areas
/// and a [`DrawList`] snapshot of what would be on screen. Failures can be
/// injected per object or for the audio batch.
#[derive(Debug, Default)]
pub struct RetainedBackend {
    nodes: Vec<Option<Node>>,
    sounds: Vec<Option<SoundNode>>,
    top_depth: i32,

    image_requests: Vec<String>,
    audio_requests: Vec<String>,

    hovered: BTreeSet<ObjectId>,
    mutations: u64,

    failing_objects: BTreeSet<ObjectId>,
    sound_failure: Option<String>,
}

impl RetainedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `spawn` fail for the given object.
    pub fn fail_spawn_for(&mut self, object: ObjectId) {
        self.failing_objects.insert(object);
    }

    /// Makes the next `create_sounds` batch fail with `reason`.
    pub fn fail_sounds(&mut self, reason: impl Into<String>) {
        self.sound_failure = Some(reason.into());
    }

    pub fn node(&self, handle: RenderHandle) -> Option<&Node> {
        self.nodes.get(handle.0 as usize)?.as_ref()
    }

    /// Node bound to a game object, if any.
    pub fn node_for(&self, object: ObjectId) -> Option<&Node> {
        self.nodes.iter().flatten().find(|n| n.object == Some(object))
    }

    pub fn overlay(&self) -> Option<&Node> {
        self.nodes.iter().flatten().find(|n| n.object.is_none())
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    pub fn sound(&self, sound: SoundHandle) -> Option<&SoundNode> {
        self.sounds.get(sound.0 as usize)?.as_ref()
    }

    pub fn live_sounds(&self) -> usize {
        self.sounds.iter().flatten().count()
    }

    pub fn any_playing(&self) -> bool {
        self.sounds.iter().flatten().any(|s| s.playing)
    }

    /// Full URLs of every image load request, in issue order.
    pub fn image_requests(&self) -> &[String] {
        &self.image_requests
    }

    /// Full URLs of every audio load request, in issue order.
    pub fn audio_requests(&self) -> &[String] {
        &self.audio_requests
    }

    /// Total setter/playback calls received.
    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    /// Resolves hover changes for a new pointer position.
    ///
    /// Returns the pointer move followed by hover exits, then hover enters,
    /// each in ascending object order. Feed them to the scene unchanged.
    pub fn pointer_moved(&mut self, pos: Vec2) -> Vec<InputEvent> {
        let mut now = BTreeSet::new();
        for node in self.nodes.iter().flatten() {
            let (Some(object), Some(area)) = (node.object, node.hit_area) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            let bounds = self.local_bounds(node);
            if let Some(local) = to_local(node, pos, bounds) {
                if area.contains(local, bounds) {
                    now.insert(object);
                }
            }
        }

        let mut events = vec![InputEvent::PointerMoved { x: pos.x, y: pos.y }];
        events.extend(self.hovered.difference(&now).map(|id| InputEvent::HoverExit(*id)));
        events.extend(now.difference(&self.hovered).map(|id| InputEvent::HoverEnter(*id)));
        self.hovered = now;
        events
    }

    /// What would currently be on screen, back-to-front once sorted.
    pub fn snapshot(&self) -> DrawList {
        let mut list = DrawList::new();
        for (i, node) in self.nodes.iter().enumerate() {
            let Some(node) = node else { continue };
            if !node.visible {
                continue;
            }
            let shape = match &node.kind {
                RenderKind::Rectangle { width, height } => DrawShape::Rect { width: *width, height: *height },
                RenderKind::Circle { radius } => DrawShape::Circle { radius: *radius },
                RenderKind::Triangle { vertices } => DrawShape::Triangle { vertices: *vertices },
                RenderKind::Sprite { url, .. } => DrawShape::Sprite { url: url.clone(), flip: node.flip },
                RenderKind::Text { content } => DrawShape::Text { text: content.clone(), flip: node.flip },
            };
            list.push(node.depth, DrawCmd {
                handle: RenderHandle(i as u32),
                shape,
                position: node.position,
                scale: node.scale,
                rotation: node.rotation,
                color: node.fill.or(node.tint).unwrap_or(Rgba::WHITE.packed()),
                alpha: node.alpha,
            });
        }
        list
    }

    fn local_bounds(&self, node: &Node) -> Rect {
        if let Some(bounds) = node.kind.local_bounds() {
            return bounds;
        }
        match &node.kind {
            RenderKind::Sprite { .. } => Rect::new(0.0, 0.0, DEFAULT_SPRITE_SIZE, DEFAULT_SPRITE_SIZE),
            RenderKind::Text { content } => {
                let lines = content.lines().count().max(1);
                let widest = content.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                Rect::new(0.0, 0.0, widest as f32 * TEXT_GLYPH_WIDTH, lines as f32 * TEXT_LINE_HEIGHT)
            }
            _ => Rect::default(),
        }
    }

    /// Depth for the next spawned or restacked node. Stays below the overlay;
    /// once saturated, later restacks tie and fall back to insertion order.
    fn next_depth(&mut self) -> ZIndex {
        self.top_depth = self.top_depth.saturating_add(1).min(ZIndex::OVERLAY.0 - 1);
        ZIndex(self.top_depth)
    }

    fn touch(&mut self, handle: RenderHandle) -> Option<&mut Node> {
        self.mutations += 1;
        let node = self.nodes.get_mut(handle.0 as usize)?.as_mut();
        match node {
            Some(n) => {
                n.mutations += 1;
                Some(n)
            }
            None => {
                log::warn!("mutation on released render handle {:?}", handle);
                None
            }
        }
    }

    fn touch_sound(&mut self, sound: SoundHandle) -> Option<&mut SoundNode> {
        self.mutations += 1;
        self.sounds.get_mut(sound.0 as usize)?.as_mut()
    }

    fn push_node(&mut self, node: Node) -> RenderHandle {
        let handle = RenderHandle(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        handle
    }
}

/// Maps a canvas point into the node's local space (top-left of its bounds).
///
/// Display objects are positioned by their centre, matching the usual
/// origin-0.5 convention of 2D engines.
fn to_local(node: &Node, pos: Vec2, bounds: Rect) -> Option<Vec2> {
    if node.scale.x == 0.0 || node.scale.y == 0.0 {
        return None;
    }
    let d = (pos - node.position).rotated(-node.rotation);
    let mut d = Vec2::new(d.x / node.scale.x, d.y / node.scale.y);
    if node.flip.x {
        d.x = -d.x;
    }
    if node.flip.y {
        d.y = -d.y;
    }
    Some(d + bounds.origin + bounds.size / 2.0)
}

impl RenderBackend for RetainedBackend {
    fn load_image(&mut self, key: &str, url: &str) {
        log::trace!("load image {key} from {url}");
        self.image_requests.push(url.to_string());
    }

    fn load_audio(&mut self, key: &str, url: &str) {
        log::trace!("load audio {key} from {url}");
        self.audio_requests.push(url.to_string());
    }

    fn spawn(&mut self, spawn: &Spawn<'_>) -> Result<RenderHandle, BackendError> {
        if self.failing_objects.contains(&spawn.object) {
            return Err(BackendError::Spawn {
                id: spawn.object,
                kind: spawn.kind.name(),
                reason: "injected failure".to_string(),
            });
        }

        let (fill, tint, flip) = match spawn.kind {
            RenderKind::Rectangle { .. } | RenderKind::Circle { .. } | RenderKind::Triangle { .. } => {
                (Some(spawn.color.packed()), None, Flip::default())
            }
            RenderKind::Sprite { .. } | RenderKind::Text { .. } => {
                (None, Some(spawn.color.packed()), spawn.flip)
            }
        };

        let depth = self.next_depth();
        let node = Node {
            object: Some(spawn.object),
            kind: spawn.kind.clone(),
            position: spawn.position,
            scale: spawn.scale,
            rotation: spawn.rotation,
            fill,
            tint,
            alpha: spawn.color.alpha(),
            flip,
            visible: spawn.visible,
            depth,
            hit_area: None,
            mutations: 0,
        };
        Ok(self.push_node(node))
    }

    fn spawn_overlay(&mut self) -> Result<RenderHandle, BackendError> {
        let node = Node {
            object: None,
            kind: RenderKind::Text { content: String::new() },
            position: Vec2::zero(),
            scale: Vec2::splat(1.0),
            rotation: 0.0,
            fill: None,
            tint: Some(Rgba::WHITE.packed()),
            alpha: 1.0,
            flip: Flip::default(),
            visible: true,
            depth: ZIndex::OVERLAY,
            hit_area: None,
            mutations: 0,
        };
        Ok(self.push_node(node))
    }

    fn set_hit_area(&mut self, handle: RenderHandle, object: ObjectId, area: HitArea) {
        if let Some(n) = self.touch(handle) {
            if let RenderKind::Sprite { url, size: None } = &n.kind {
                log::warn!(
                    "sprite {url} has no declared size; hit-testing object {object:?} as {DEFAULT_SPRITE_SIZE}x{DEFAULT_SPRITE_SIZE}"
                );
            }
            n.object = Some(object);
            n.hit_area = Some(area);
        }
    }

    fn set_position(&mut self, handle: RenderHandle, position: Vec2) {
        if let Some(n) = self.touch(handle) {
            n.position = position;
        }
    }

    fn set_rotation(&mut self, handle: RenderHandle, radians: f32) {
        if let Some(n) = self.touch(handle) {
            n.rotation = radians;
        }
    }

    fn set_scale(&mut self, handle: RenderHandle, scale: Vec2) {
        if let Some(n) = self.touch(handle) {
            n.scale = scale;
        }
    }

    fn set_tint(&mut self, handle: RenderHandle, packed: u32, alpha: f32) {
        if let Some(n) = self.touch(handle) {
            n.tint = Some(packed);
            n.alpha = alpha;
        }
    }

    fn set_fill(&mut self, handle: RenderHandle, packed: u32, alpha: f32) {
        if let Some(n) = self.touch(handle) {
            n.fill = Some(packed);
            n.alpha = alpha;
        }
    }

    fn set_flip(&mut self, handle: RenderHandle, flip: Flip) {
        if let Some(n) = self.touch(handle) {
            n.flip = flip;
        }
    }

    fn set_visible(&mut self, handle: RenderHandle, visible: bool) {
        if let Some(n) = self.touch(handle) {
            n.visible = visible;
        }
    }

    fn set_text(&mut self, handle: RenderHandle, text: &str) {
        if let Some(n) = self.touch(handle) {
            if let RenderKind::Text { content } = &mut n.kind {
                content.clear();
                content.push_str(text);
            }
        }
    }

    fn bring_to_top(&mut self, handle: RenderHandle) {
        let depth = self.next_depth();
        if let Some(n) = self.touch(handle) {
            if n.depth != ZIndex::OVERLAY {
                n.depth = depth;
            }
        }
    }

    fn destroy(&mut self, handle: RenderHandle) {
        if let Some(slot) = self.nodes.get_mut(handle.0 as usize) {
            *slot = None;
        }
    }

    fn create_sounds(&mut self, specs: &[SoundSpec<'_>]) -> Result<Vec<SoundHandle>, BackendError> {
        if let Some(reason) = self.sound_failure.take() {
            return Err(BackendError::Sound {
                url: specs.first().map(|s| s.url.to_string()).unwrap_or_default(),
                reason,
            });
        }

        let handles = specs
            .iter()
            .map(|spec| {
                let handle = SoundHandle(self.sounds.len() as u32);
                self.sounds.push(Some(SoundNode {
                    url: spec.url.to_string(),
                    looping: spec.looping,
                    volume: spec.volume,
                    playing: false,
                }));
                handle
            })
            .collect();
        Ok(handles)
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        if let Some(s) = self.touch_sound(sound) {
            s.playing = true;
        }
    }

    fn stop_sound(&mut self, sound: SoundHandle) {
        if let Some(s) = self.touch_sound(sound) {
            s.playing = false;
        }
    }

    fn stop_all_sounds(&mut self) {
        self.mutations += 1;
        for s in self.sounds.iter_mut().flatten() {
            s.playing = false;
        }
    }

    fn destroy_sound(&mut self, sound: SoundHandle) {
        if let Some(slot) = self.sounds.get_mut(sound.0 as usize) {
            *slot = None;
        }
    }
}
