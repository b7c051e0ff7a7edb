// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for button transitions.
//!
//! A [`Button`](crate::Button) reports what it does to a [`ButtonTrace`]
//! sink injected at construction. The default sink is `()`, which discards
//! everything. [`TraceRecorder`] keeps every entry, which is handy in tests
//! and when debugging why a click did or did not fire.
//!
//! ```
//! use understory_button::trace::{ButtonTrace, IgnoreReason, TraceEntry, TraceRecorder};
//! use understory_button::PointerEventKind;
//!
//! let mut recorder = TraceRecorder::<u32>::new();
//! recorder.ignored(PointerEventKind::Release, 3, IgnoreReason::StrayRelease);
//! assert_eq!(
//!     recorder.entries(),
//!     &[TraceEntry::Ignored {
//!         kind: PointerEventKind::Release,
//!         pointer: 3,
//!         reason: IgnoreReason::StrayRelease,
//!     }]
//! );
//! ```

use alloc::vec::Vec;

use crate::event::PointerEventKind;
use crate::state::ButtonState;

/// Why an event left the button's visible state and callbacks untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The button is disabled.
    Disabled,
    /// Another pointer already holds the button.
    SecondaryPointer,
    /// Release without any captured pointer.
    StrayRelease,
    /// The holding pointer had moved out before releasing.
    ReleasedOutside,
}

/// A callback sink for button transitions.
///
/// All methods default to doing nothing, so implementors only override what
/// they care about.
pub trait ButtonTrace<P> {
    /// The state changed from `from` to `to`.
    fn state_changed(&mut self, from: ButtonState, to: ButtonState) {
        let _ = (from, to);
    }

    /// Capture was requested from the host for `pointer`.
    fn capture_requested(&mut self, pointer: P) {
        let _ = pointer;
    }

    /// Capture was released with the host for `pointer`.
    fn capture_released(&mut self, pointer: P) {
        let _ = pointer;
    }

    /// The press handler is about to run for `pointer`.
    fn pressed(&mut self, pointer: P) {
        let _ = pointer;
    }

    /// The click handler is about to run for `pointer`.
    fn clicked(&mut self, pointer: P) {
        let _ = pointer;
    }

    /// An event of `kind` from `pointer` produced no press or click.
    fn ignored(&mut self, kind: PointerEventKind, pointer: P, reason: IgnoreReason) {
        let _ = (kind, pointer, reason);
    }
}

impl<P> ButtonTrace<P> for () {}

impl<P, T: ButtonTrace<P> + ?Sized> ButtonTrace<P> for &mut T {
    fn state_changed(&mut self, from: ButtonState, to: ButtonState) {
        (**self).state_changed(from, to);
    }

    fn capture_requested(&mut self, pointer: P) {
        (**self).capture_requested(pointer);
    }

    fn capture_released(&mut self, pointer: P) {
        (**self).capture_released(pointer);
    }

    fn pressed(&mut self, pointer: P) {
        (**self).pressed(pointer);
    }

    fn clicked(&mut self, pointer: P) {
        (**self).clicked(pointer);
    }

    fn ignored(&mut self, kind: PointerEventKind, pointer: P, reason: IgnoreReason) {
        (**self).ignored(kind, pointer, reason);
    }
}

/// One recorded transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceEntry<P> {
    /// See [`ButtonTrace::state_changed`].
    StateChanged {
        /// State before the change.
        from: ButtonState,
        /// State after the change.
        to: ButtonState,
    },
    /// See [`ButtonTrace::capture_requested`].
    CaptureRequested(P),
    /// See [`ButtonTrace::capture_released`].
    CaptureReleased(P),
    /// See [`ButtonTrace::pressed`].
    Pressed(P),
    /// See [`ButtonTrace::clicked`].
    Clicked(P),
    /// See [`ButtonTrace::ignored`].
    Ignored {
        /// Event kind that was ignored.
        kind: PointerEventKind,
        /// Pointer that sent it.
        pointer: P,
        /// Why nothing happened.
        reason: IgnoreReason,
    },
}

/// Records every trace entry in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceRecorder<P> {
    entries: Vec<TraceEntry<P>>,
}

impl<P> TraceRecorder<P> {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All entries recorded so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry<P>] {
        &self.entries
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the recorded entries and leaves the recorder empty.
    pub fn take(&mut self) -> Vec<TraceEntry<P>> {
        core::mem::take(&mut self.entries)
    }
}

impl<P> ButtonTrace<P> for TraceRecorder<P> {
    fn state_changed(&mut self, from: ButtonState, to: ButtonState) {
        self.entries.push(TraceEntry::StateChanged { from, to });
    }

    fn capture_requested(&mut self, pointer: P) {
        self.entries.push(TraceEntry::CaptureRequested(pointer));
    }

    fn capture_released(&mut self, pointer: P) {
        self.entries.push(TraceEntry::CaptureReleased(pointer));
    }

    fn pressed(&mut self, pointer: P) {
        self.entries.push(TraceEntry::Pressed(pointer));
    }

    fn clicked(&mut self, pointer: P) {
        self.entries.push(TraceEntry::Clicked(pointer));
    }

    fn ignored(&mut self, kind: PointerEventKind, pointer: P, reason: IgnoreReason) {
        self.entries.push(TraceEntry::Ignored {
            kind,
            pointer,
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BaseState;

    #[test]
    fn recorder_keeps_order_and_take_empties() {
        let mut recorder = TraceRecorder::new();
        recorder.capture_requested(1_u32);
        recorder.pressed(1);
        recorder.state_changed(
            ButtonState::default(),
            ButtonState::new(BaseState::Down, false),
        );

        assert_eq!(recorder.entries().len(), 3);
        assert_eq!(recorder.entries()[0], TraceEntry::CaptureRequested(1));

        let taken = recorder.take();
        assert_eq!(taken[1], TraceEntry::Pressed(1));
        assert!(recorder.entries().is_empty());
    }

    #[test]
    fn borrowed_recorder_forwards() {
        fn record_click<T: ButtonTrace<u32>>(mut sink: T) {
            sink.clicked(4);
        }

        let mut recorder = TraceRecorder::new();
        record_click(&mut recorder);
        assert_eq!(recorder.entries(), &[TraceEntry::Clicked(4)]);
    }

    #[test]
    fn unit_sink_accepts_everything() {
        ButtonTrace::<u32>::pressed(&mut (), 1);
        ButtonTrace::<u32>::ignored(&mut (), PointerEventKind::Out, 1, IgnoreReason::Disabled);
    }
}
