// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host node a [`Button`](crate::Button) is composed into.
//!
//! The button does not render, lay out, hit test, or route events. It asks
//! its host to do those things through [`ButtonHost`]: show one of three
//! externally owned visuals, size itself, capture pointers, and deliver the
//! four pointer event classes.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Size;

use crate::event::ButtonEvents;

/// Capabilities a button needs from the scene node that contains it.
pub trait ButtonHost {
    /// Identifier of a pointer. Must stay stable from press to release.
    type PointerId: Copy + Eq + Hash + Debug;
    /// Handle to a visual owned by the host's scene.
    type Visual: Copy + Eq + Debug;

    /// Attach `visual` as a child of the button node.
    fn add_child(&mut self, visual: Self::Visual);

    /// Detach `visual` from the button node.
    fn remove_child(&mut self, visual: Self::Visual);

    /// Show (`true`) or hide (`false`) `visual`.
    fn set_active(&mut self, visual: Self::Visual, active: bool);

    /// Size of `visual`.
    fn visual_size(&self, visual: Self::Visual) -> Size;

    /// Resize the button node.
    fn set_size(&mut self, size: Size);

    /// Route every future event of `pointer` to the button, regardless of hit testing.
    fn set_pointer_capture(&mut self, pointer: Self::PointerId);

    /// Undo [`set_pointer_capture`](Self::set_pointer_capture) for `pointer`.
    fn release_pointer_capture(&mut self, pointer: Self::PointerId);

    /// Deliver exactly the event classes in `events` to the button.
    ///
    /// An empty set detaches the button from event delivery.
    fn set_event_interest(&mut self, events: ButtonEvents);

    /// Draw (or stop drawing) a debug outline around the button node.
    fn set_debug_outline(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

impl<H: ButtonHost + ?Sized> ButtonHost for &mut H {
    type PointerId = H::PointerId;
    type Visual = H::Visual;

    fn add_child(&mut self, visual: Self::Visual) {
        (**self).add_child(visual);
    }

    fn remove_child(&mut self, visual: Self::Visual) {
        (**self).remove_child(visual);
    }

    fn set_active(&mut self, visual: Self::Visual, active: bool) {
        (**self).set_active(visual, active);
    }

    fn visual_size(&self, visual: Self::Visual) -> Size {
        (**self).visual_size(visual)
    }

    fn set_size(&mut self, size: Size) {
        (**self).set_size(size);
    }

    fn set_pointer_capture(&mut self, pointer: Self::PointerId) {
        (**self).set_pointer_capture(pointer);
    }

    fn release_pointer_capture(&mut self, pointer: Self::PointerId) {
        (**self).release_pointer_capture(pointer);
    }

    fn set_event_interest(&mut self, events: ButtonEvents) {
        (**self).set_event_interest(events);
    }

    fn set_debug_outline(&mut self, enabled: bool) {
        (**self).set_debug_outline(enabled);
    }
}

/// The three presentations of a button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonVisuals<V> {
    /// Shown while the base state is `Up`. The button takes its size.
    pub up: V,
    /// Shown while the base state is `Down`.
    pub down: V,
    /// Shown while the base state is `Disabled`. When absent, nothing is shown.
    pub disabled: Option<V>,
}

impl<V: Copy + Eq> ButtonVisuals<V> {
    /// All bound visuals, in child order.
    pub fn iter(&self) -> impl Iterator<Item = V> + use<V> {
        [Some(self.up), Some(self.down), self.disabled]
            .into_iter()
            .flatten()
    }
}
