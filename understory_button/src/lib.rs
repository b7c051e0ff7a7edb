// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_button --heading-base-level=0

//! Understory Button: a multi-pointer press/release/hover state machine.
//!
//! This crate turns abstract pointer events into button semantics: which of
//! the up/down/disabled presentations to show, when to run the press and
//! click handlers, and, for checkable buttons, the toggle value. It stays
//! correct under multi-touch, where several pointers may touch the same
//! button at once:
//!
//! - Only the first pointer to go down owns the press. Later pointers are
//!   captured and tracked, but they do not press the button again.
//! - A click fires once, when the last captured pointer is released while a
//!   pointer was over the button.
//! - Pointer capture is kept in sync with the host: every captured pointer is
//!   released on release, on disable, and when the button is dropped.
//!
//! The crate does not render, lay out, hit test, or route events. A
//! [`Button`] is composed into a host scene node implementing
//! [`ButtonHost`], which owns the visuals, implements pointer capture, and
//! delivers [`PointerRecord`]s to the button's entry points.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_button::{Button, ButtonEvents, ButtonHost, PointerRecord};
//!
//! #[derive(Default)]
//! struct Node {
//!     shown: Option<&'static str>,
//!     captured: Vec<u32>,
//! }
//!
//! impl ButtonHost for Node {
//!     type PointerId = u32;
//!     type Visual = &'static str;
//!
//!     fn add_child(&mut self, _: &'static str) {}
//!     fn remove_child(&mut self, _: &'static str) {}
//!     fn set_active(&mut self, visual: &'static str, active: bool) {
//!         if active {
//!             self.shown = Some(visual);
//!         }
//!     }
//!     fn visual_size(&self, _: &'static str) -> Size {
//!         Size::new(80.0, 24.0)
//!     }
//!     fn set_size(&mut self, _: Size) {}
//!     fn set_pointer_capture(&mut self, pointer: u32) {
//!         self.captured.push(pointer);
//!     }
//!     fn release_pointer_capture(&mut self, pointer: u32) {
//!         self.captured.retain(|&p| p != pointer);
//!     }
//!     fn set_event_interest(&mut self, _: ButtonEvents) {}
//! }
//!
//! let mut button = Button::new(Node::default())
//!     .with_nodes(Some("up"), Some("down"), None)
//!     .unwrap();
//!
//! // Two fingers land on the button; only the first one presses it.
//! assert!(button.on_press(&PointerRecord::touch(1)));
//! assert!(!button.on_press(&PointerRecord::touch(2)));
//! assert_eq!(button.host().shown, Some("down"));
//!
//! // The first finger lifts: still held by the second, no click.
//! assert!(!button.on_release(&PointerRecord::touch(1)));
//! // The second finger lifts: click.
//! assert!(button.on_release(&PointerRecord::touch(2)));
//! assert_eq!(button.host().shown, Some("up"));
//! assert!(button.host().captured.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`button`]: the [`Button`] state machine.
//! - [`host`]: the [`ButtonHost`] capabilities and [`ButtonVisuals`].
//! - [`state`]: [`ButtonState`], its base states and bitmask view.
//! - [`event`]: [`PointerRecord`] and the event kinds.
//! - [`config`]: behavior policies.
//! - [`trace`]: transition hooks and a recorder.
//! - [`error`]: configuration errors.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: forward `libm` to Kurbo for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod button;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod state;
pub mod trace;

pub use button::Button;
pub use config::{ButtonConfig, CheckPolicy, DisablePolicy, HoverPolicy};
pub use error::{ButtonError, ConfigurationError};
pub use event::{ButtonEvents, PointerEventKind, PointerRecord};
pub use host::{ButtonHost, ButtonVisuals};
pub use state::{BaseState, ButtonState, StateFlags};
pub use trace::{ButtonTrace, IgnoreReason, TraceEntry, TraceRecorder};
