//! Scripted host input.
//!
//! Each `--input` argument is `<action>@<frame>` or `<action>@<first>..<last>`:
//!
//! - `key:<name>`: a key, by browser key name (`ArrowLeft`, `Space`, `a`)
//! - `click`: the primary pointer button
//! - `move:<x>,<y>`: a pointer move (ranges are not allowed)
//!
//! A single frame means a tap: press and release are both delivered before
//! that frame. A range holds the key from `first` and releases it before
//! `last + 1`.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use arcade_engine::coords::Vec2;
use arcade_engine::input::platform::dom::translate_key_name;
use arcade_engine::input::{InputEvent, Key, MouseButton};

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Key(Key),
    Click,
    Move(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    action: Action,
    first: u64,
    last: Option<u64>,
}

/// Something the host delivers before a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Input(InputEvent),
    /// Pointer moves go through the backend so it can resolve hover.
    Pointer(Vec2),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (action, frames) = s
            .rsplit_once('@')
            .ok_or_else(|| anyhow!("missing `@<frame>` in `{s}`"))?;

        let (first, last) = match frames.split_once("..") {
            Some((a, b)) => (parse_frame(a)?, Some(parse_frame(b)?)),
            None => (parse_frame(frames)?, None),
        };
        if let Some(last) = last {
            if last < first {
                bail!("frame range `{frames}` is reversed");
            }
        }

        let action = if action == "click" {
            Action::Click
        } else if let Some(name) = action.strip_prefix("key:") {
            Action::Key(translate_key_name(name).ok_or_else(|| anyhow!("unknown key `{name}`"))?)
        } else if let Some(pos) = action.strip_prefix("move:") {
            if last.is_some() {
                bail!("pointer moves take a single frame");
            }
            let (x, y) = pos
                .split_once(',')
                .ok_or_else(|| anyhow!("expected `move:<x>,<y>`, got `{action}`"))?;
            Action::Move(Vec2::new(
                x.trim().parse().with_context(|| format!("bad x in `{action}`"))?,
                y.trim().parse().with_context(|| format!("bad y in `{action}`"))?,
            ))
        } else {
            bail!("unknown input action `{action}`");
        };

        Ok(Self { action, first, last })
    }
}

fn parse_frame(s: &str) -> Result<u64> {
    let n: u64 = s.trim().parse().with_context(|| format!("bad frame number `{s}`"))?;
    if n == 0 {
        bail!("frames are numbered from 1");
    }
    Ok(n)
}

/// An ordered list of steps, queried frame by frame.
#[derive(Debug, Default)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Events to deliver before `frame` runs, in argument order.
    pub fn before(&self, frame: u64) -> Vec<HostEvent> {
        let mut out = Vec::new();
        for step in &self.steps {
            let press = step.first == frame;
            let release = match step.last {
                Some(last) => last + 1 == frame,
                None => press,
            };
            match &step.action {
                Action::Move(pos) if press => out.push(HostEvent::Pointer(*pos)),
                Action::Move(_) => {}
                Action::Key(key) => {
                    if press {
                        out.push(HostEvent::Input(InputEvent::KeyDown(*key)));
                    }
                    if release {
                        out.push(HostEvent::Input(InputEvent::KeyUp(*key)));
                    }
                }
                Action::Click => {
                    let button = MouseButton::Primary;
                    if press {
                        out.push(HostEvent::Input(InputEvent::PointerButton { button, pressed: true }));
                    }
                    if release {
                        out.push(HostEvent::Input(InputEvent::PointerButton { button, pressed: false }));
                    }
                }
            }
        }
        out
    }
}
