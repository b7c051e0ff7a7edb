// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for button integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Size;
use understory_button::{ButtonEvents, ButtonHost, PointerRecord};

pub(crate) const UP: &str = "up";
pub(crate) const DOWN: &str = "down";
pub(crate) const DISABLED: &str = "disabled";

/// A host node that records everything the button asks of it.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub(crate) children: Vec<&'static str>,
    pub(crate) active: Vec<&'static str>,
    pub(crate) captured: Vec<u32>,
    pub(crate) capture_calls: usize,
    pub(crate) release_calls: usize,
    pub(crate) interest: ButtonEvents,
    pub(crate) size: Size,
    pub(crate) outline: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            active: Vec::new(),
            captured: Vec::new(),
            capture_calls: 0,
            release_calls: 0,
            interest: ButtonEvents::empty(),
            size: Size::ZERO,
            outline: false,
        }
    }
}

impl RecordingHost {
    /// The single active visual, if exactly one is active.
    pub(crate) fn shown(&self) -> Option<&'static str> {
        match self.active.as_slice() {
            [visual] => Some(*visual),
            _ => None,
        }
    }

    pub(crate) fn sorted_captures(&self) -> Vec<u32> {
        let mut captured = self.captured.clone();
        captured.sort_unstable();
        captured
    }
}

impl ButtonHost for RecordingHost {
    type PointerId = u32;
    type Visual = &'static str;

    fn add_child(&mut self, visual: &'static str) {
        assert!(
            !self.children.contains(&visual),
            "{visual} added twice without removal"
        );
        self.children.push(visual);
    }

    fn remove_child(&mut self, visual: &'static str) {
        self.children.retain(|&v| v != visual);
        self.active.retain(|&v| v != visual);
    }

    fn set_active(&mut self, visual: &'static str, active: bool) {
        assert!(
            self.children.contains(&visual),
            "{visual} activated without being a child"
        );
        self.active.retain(|&v| v != visual);
        if active {
            self.active.push(visual);
        }
    }

    fn visual_size(&self, visual: &'static str) -> Size {
        match visual {
            UP => Size::new(120.0, 40.0),
            DOWN => Size::new(118.0, 38.0),
            _ => Size::new(100.0, 30.0),
        }
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn set_pointer_capture(&mut self, pointer: u32) {
        assert!(
            !self.captured.contains(&pointer),
            "pointer {pointer} captured twice"
        );
        self.captured.push(pointer);
        self.capture_calls += 1;
    }

    fn release_pointer_capture(&mut self, pointer: u32) {
        assert!(
            self.captured.contains(&pointer),
            "pointer {pointer} released without capture"
        );
        self.captured.retain(|&p| p != pointer);
        self.release_calls += 1;
    }

    fn set_event_interest(&mut self, events: ButtonEvents) {
        self.interest = events;
    }

    fn set_debug_outline(&mut self, enabled: bool) {
        self.outline = enabled;
    }
}

/// A shared call counter and a handler that bumps it.
pub(crate) fn counter() -> (Rc<Cell<u32>>, impl FnMut(&PointerRecord<u32>) + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move |_: &PointerRecord<u32>| inner.set(inner.get() + 1))
}

/// Records the pointer ids a handler was called with.
pub(crate) fn id_log() -> (
    Rc<std::cell::RefCell<Vec<u32>>>,
    impl FnMut(&PointerRecord<u32>) + 'static,
) {
    let log = Rc::new(std::cell::RefCell::new(Vec::new()));
    let inner = Rc::clone(&log);
    (log, move |event: &PointerRecord<u32>| {
        inner.borrow_mut().push(event.pointer_id);
    })
}
