// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the button demos.
//!
//! Run:
//! - `cargo run -p understory_demos --example multitouch`
//! - `cargo run -p understory_demos --example toggle`

use kurbo::Size;
use understory_button::trace::ButtonTrace;
use understory_button::{ButtonEvents, ButtonHost, ButtonState, IgnoreReason, PointerEventKind};

/// A visual in the demo scene: a name and a size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    /// Name printed when the sprite is shown or hidden.
    pub name: &'static str,
    /// Size of the sprite.
    pub size: (u32, u32),
}

impl Sprite {
    /// Creates a sprite.
    pub const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            size: (width, height),
        }
    }
}

/// A scene node that prints what the button asks of it.
#[derive(Debug, Default)]
pub struct SceneNode {
    /// Pointers currently routed to this node regardless of hit testing.
    pub captured: Vec<u64>,
    /// The sprite currently shown.
    pub shown: Option<&'static str>,
    /// Current node size.
    pub size: Size,
}

impl ButtonHost for SceneNode {
    type PointerId = u64;
    type Visual = Sprite;

    fn add_child(&mut self, visual: Sprite) {
        println!("  scene: add {}", visual.name);
    }

    fn remove_child(&mut self, visual: Sprite) {
        println!("  scene: remove {}", visual.name);
    }

    fn set_active(&mut self, visual: Sprite, active: bool) {
        if active {
            self.shown = Some(visual.name);
        } else if self.shown == Some(visual.name) {
            self.shown = None;
        }
    }

    fn visual_size(&self, visual: Sprite) -> Size {
        Size::new(f64::from(visual.size.0), f64::from(visual.size.1))
    }

    fn set_size(&mut self, size: Size) {
        println!("  scene: resize to {}x{}", size.width, size.height);
        self.size = size;
    }

    fn set_pointer_capture(&mut self, pointer: u64) {
        println!("  scene: capture pointer {pointer}");
        self.captured.push(pointer);
    }

    fn release_pointer_capture(&mut self, pointer: u64) {
        println!("  scene: release pointer {pointer}");
        self.captured.retain(|&p| p != pointer);
    }

    fn set_event_interest(&mut self, events: ButtonEvents) {
        println!("  scene: deliver {events:?}");
    }
}

/// Trace sink that prints state changes and ignored events.
#[derive(Debug, Default)]
pub struct PrintTrace;

impl ButtonTrace<u64> for PrintTrace {
    fn state_changed(&mut self, from: ButtonState, to: ButtonState) {
        println!("  trace: {:?} -> {:?}", from.flags(), to.flags());
    }

    fn ignored(&mut self, kind: PointerEventKind, pointer: u64, reason: IgnoreReason) {
        println!("  trace: {kind:?} from {pointer} ignored ({reason:?})");
    }
}
