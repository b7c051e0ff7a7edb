// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-pointer button state machine.
//!
//! ## Ownership of a press
//!
//! Every pointer that goes down on the button is captured and recorded. Only
//! the first captor drives the visible state and fires the press handler;
//! later captors are tracked so their capture can be released, but they do
//! not re-press the button. A click fires when the last remaining captor is
//! released while at least one pointer was hovering.
//!
//! All decisions are taken from set membership and set sizes, so events of
//! different pointers may interleave in any order.

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashSet;

use crate::config::{ButtonConfig, CheckPolicy, DisablePolicy, HoverPolicy};
use crate::error::{ButtonError, ConfigurationError};
use crate::event::{ButtonEvents, PointerEventKind, PointerRecord};
use crate::host::{ButtonHost, ButtonVisuals};
use crate::state::{BaseState, ButtonState};
use crate::trace::{ButtonTrace, IgnoreReason};

type Handler<P> = Box<dyn FnMut(&PointerRecord<P>)>;

/// A push button or toggle driven by abstract pointer events.
///
/// The button is composed into a host node `H` which renders the visuals,
/// performs hit testing and pointer capture, and delivers events to
/// [`on_press`](Self::on_press), [`on_release`](Self::on_release),
/// [`on_over`](Self::on_over) and [`on_out`](Self::on_out) (or
/// [`handle`](Self::handle)). Transitions are reported to the trace sink `T`.
///
/// Dropping the button releases every pointer it still holds captured.
pub struct Button<H, T = ()>
where
    H: ButtonHost,
    T: ButtonTrace<H::PointerId>,
{
    host: H,
    trace: T,
    config: ButtonConfig,
    state: ButtonState,
    captured: HashSet<H::PointerId>,
    hovering: HashSet<H::PointerId>,
    checkable: bool,
    toggled: bool,
    visuals: Option<ButtonVisuals<H::Visual>>,
    debug: bool,
    on_press: Option<Handler<H::PointerId>>,
    on_click: Option<Handler<H::PointerId>>,
}

impl<H: ButtonHost> Button<H> {
    /// Creates a button with the default configuration and no visuals.
    pub fn new(host: H) -> Self {
        Self::with_config(host, ButtonConfig::default())
    }

    /// Creates a button with the given configuration and no visuals.
    pub fn with_config(host: H, config: ButtonConfig) -> Self {
        Self::with_trace(host, config, ())
    }
}

impl<H, T> Button<H, T>
where
    H: ButtonHost,
    T: ButtonTrace<H::PointerId>,
{
    /// Creates a button that reports its transitions to `trace`.
    ///
    /// The button starts `Up`, with nothing captured or hovering, and asks
    /// the host to deliver all four pointer event classes.
    pub fn with_trace(mut host: H, config: ButtonConfig, trace: T) -> Self {
        host.set_event_interest(handled_events());
        Self {
            host,
            trace,
            config,
            state: ButtonState::default(),
            captured: HashSet::new(),
            hovering: HashSet::new(),
            checkable: config.checkable,
            toggled: false,
            visuals: None,
            debug: false,
            on_press: None,
            on_click: None,
        }
    }

    /// Builder form of [`set_nodes`](Self::set_nodes).
    pub fn with_nodes(
        mut self,
        up: Option<H::Visual>,
        down: Option<H::Visual>,
        disabled: Option<H::Visual>,
    ) -> Result<Self, ButtonError> {
        self.set_nodes(up, down, disabled)?;
        Ok(self)
    }

    /// Builder form of [`set_on_press`](Self::set_on_press).
    #[must_use]
    pub fn with_on_press(
        mut self,
        handler: impl FnMut(&PointerRecord<H::PointerId>) + 'static,
    ) -> Self {
        self.set_on_press(handler);
        self
    }

    /// Builder form of [`set_on_click`](Self::set_on_click).
    #[must_use]
    pub fn with_on_click(
        mut self,
        handler: impl FnMut(&PointerRecord<H::PointerId>) + 'static,
    ) -> Self {
        self.set_on_click(handler);
        self
    }

    /// Installs the presentation visuals, replacing any previous ones.
    ///
    /// `up` and `down` must be given together; `disabled` is optional but
    /// requires them. Passing nothing removes the current visuals. The host
    /// is resized to the size of `up`, and the visual matching the current
    /// state is activated.
    pub fn set_nodes(
        &mut self,
        up: Option<H::Visual>,
        down: Option<H::Visual>,
        disabled: Option<H::Visual>,
    ) -> Result<(), ButtonError> {
        let visuals = match (up, down) {
            (Some(up), Some(down)) => Some(ButtonVisuals { up, down, disabled }),
            (Some(_), None) => return Err(ConfigurationError::MissingDown.into()),
            (None, Some(_)) => return Err(ConfigurationError::MissingUp.into()),
            (None, None) if disabled.is_some() => {
                return Err(ConfigurationError::DisabledWithoutUpDown.into());
            }
            (None, None) => None,
        };

        if let Some(old) = self.visuals.take() {
            for visual in old.iter() {
                self.host.remove_child(visual);
            }
        }
        if let Some(new) = visuals {
            for visual in new.iter() {
                self.host.add_child(visual);
            }
            let size = self.host.visual_size(new.up);
            self.host.set_size(size);
        }
        self.visuals = visuals;
        self.update_visuals();
        Ok(())
    }

    /// The installed visuals, if any.
    pub fn visuals(&self) -> Option<&ButtonVisuals<H::Visual>> {
        self.visuals.as_ref()
    }

    /// The `up` visual, if installed.
    pub fn up_node(&self) -> Option<H::Visual> {
        self.visuals.map(|v| v.up)
    }

    /// The `down` visual, if installed.
    pub fn down_node(&self) -> Option<H::Visual> {
        self.visuals.map(|v| v.down)
    }

    /// The `disabled` visual, if installed.
    pub fn disabled_node(&self) -> Option<H::Visual> {
        self.visuals.and_then(|v| v.disabled)
    }

    /// Sets the handler run when the button is pressed.
    pub fn set_on_press(
        &mut self,
        handler: impl FnMut(&PointerRecord<H::PointerId>) + 'static,
    ) {
        self.on_press = Some(Box::new(handler));
    }

    /// Removes the press handler.
    pub fn clear_on_press(&mut self) {
        self.on_press = None;
    }

    /// Sets the handler run when the button is clicked.
    pub fn set_on_click(
        &mut self,
        handler: impl FnMut(&PointerRecord<H::PointerId>) + 'static,
    ) {
        self.on_click = Some(Box::new(handler));
    }

    /// Removes the click handler.
    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    /// Always fails: the button owns its pointer-event wiring.
    ///
    /// Use [`set_on_press`](Self::set_on_press) and
    /// [`set_on_click`](Self::set_on_click) instead.
    pub fn set_event_handler<F>(
        &mut self,
        kind: PointerEventKind,
        _handler: F,
    ) -> Result<(), ButtonError>
    where
        F: FnMut(&PointerRecord<H::PointerId>),
    {
        Err(ButtonError::UnsupportedOperation(kind))
    }

    /// Makes the button a toggle (`true`) or a plain push button.
    pub fn set_checkable(&mut self, checkable: bool) {
        self.checkable = checkable;
    }

    /// Returns `true` if the button is a toggle.
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Forces the toggle value and shows the matching state, keeping `Over`.
    ///
    /// Under [`CheckPolicy::KeepDisabled`] a disabled button only records the
    /// value and stays disabled.
    pub fn set_checked(&mut self, checked: bool) {
        self.toggled = checked;
        if self.config.check == CheckPolicy::KeepDisabled && !self.is_enabled() {
            return;
        }
        self.set_base(if checked { BaseState::Down } else { BaseState::Up });
    }

    /// Returns `true` while the base state is `Down`.
    pub fn is_checked(&self) -> bool {
        self.state.base() == BaseState::Down
    }

    /// Enables or disables the button.
    ///
    /// Disabling releases every captured pointer and detaches event delivery;
    /// enabling resets the base state to `Up` and attaches it again. The
    /// `Over` overlay is kept either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.set_base(BaseState::Up);
            self.host.set_event_interest(handled_events());
        } else {
            self.set_base(BaseState::Disabled);
            self.release_all_captures();
            if self.config.disable == DisablePolicy::ClearHover {
                self.hovering.clear();
                let from = self.state;
                self.state.set_over(false);
                self.note_change(from);
            }
            self.host.set_event_interest(ButtonEvents::empty());
        }
    }

    /// Returns `false` while the base state is `Disabled`.
    pub fn is_enabled(&self) -> bool {
        self.state.base() != BaseState::Disabled
    }

    /// Turns the host's debug outline on or off.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        self.host.set_debug_outline(debug);
    }

    /// Returns `true` if the debug outline is on.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Current state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Configuration the button was created with.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Pointers currently captured by the button, in no particular order.
    pub fn captured_pointers(&self) -> impl Iterator<Item = H::PointerId> + '_ {
        self.captured.iter().copied()
    }

    /// Pointers currently considered over the button, in no particular order.
    pub fn hovering_pointers(&self) -> impl Iterator<Item = H::PointerId> + '_ {
        self.hovering.iter().copied()
    }

    /// Returns `true` if `pointer` is captured by the button.
    pub fn is_captured(&self, pointer: H::PointerId) -> bool {
        self.captured.contains(&pointer)
    }

    /// Returns `true` if `pointer` is considered over the button.
    pub fn is_hovering(&self, pointer: H::PointerId) -> bool {
        self.hovering.contains(&pointer)
    }

    /// The host node.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host node, mutably.
    ///
    /// Capturing or releasing pointers through this reference desynchronizes
    /// the host from the button.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The trace sink.
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Routes `event` to the entry point for `kind`.
    ///
    /// Returns `true` if the button handled the event.
    pub fn handle(
        &mut self,
        kind: PointerEventKind,
        event: &PointerRecord<H::PointerId>,
    ) -> bool {
        match kind {
            PointerEventKind::Press => self.on_press(event),
            PointerEventKind::Release => self.on_release(event),
            PointerEventKind::Over => self.on_over(event),
            PointerEventKind::Out => self.on_out(event),
        }
    }

    /// A pointer went down on the button.
    ///
    /// Only the first captor presses the button; returns `false` for a
    /// pointer joining a press that is already held.
    pub fn on_press(&mut self, event: &PointerRecord<H::PointerId>) -> bool {
        let id = event.pointer_id;
        if !self.accepts(PointerEventKind::Press, id) {
            return false;
        }

        if self.captured.insert(id) {
            self.host.set_pointer_capture(id);
            self.trace.capture_requested(id);
        }
        self.hovering.insert(id);

        if self.captured.len() > 1 {
            self.trace
                .ignored(PointerEventKind::Press, id, IgnoreReason::SecondaryPointer);
            return false;
        }

        self.set_base(BaseState::Down);
        self.trace.pressed(id);
        if let Some(handler) = self.on_press.as_mut() {
            handler(event);
        }
        true
    }

    /// A pointer went up.
    ///
    /// Returns `true` if this release clicked the button.
    pub fn on_release(&mut self, event: &PointerRecord<H::PointerId>) -> bool {
        let id = event.pointer_id;
        if !self.accepts(PointerEventKind::Release, id) {
            return false;
        }

        let prior_captured = self.captured.len();
        let prior_hovering = self.hovering.len();

        if self.captured.remove(&id) {
            self.host.release_pointer_capture(id);
            self.trace.capture_released(id);
        }
        self.hovering.remove(&id);

        let reason = match (prior_captured, prior_hovering) {
            (2.., _) => Some(IgnoreReason::SecondaryPointer),
            (0, _) => Some(IgnoreReason::StrayRelease),
            (_, 0) => Some(IgnoreReason::ReleasedOutside),
            _ => None,
        };
        if let Some(reason) = reason {
            self.trace.ignored(PointerEventKind::Release, id, reason);
            return false;
        }

        let mut next = BaseState::Up;
        if self.checkable {
            self.toggled = !self.toggled;
            if self.toggled {
                next = BaseState::Down;
            }
        }
        self.set_base(next);
        self.trace.clicked(id);
        if let Some(handler) = self.on_click.as_mut() {
            handler(event);
        }
        true
    }

    /// A pointer entered the button's bounds.
    pub fn on_over(&mut self, event: &PointerRecord<H::PointerId>) -> bool {
        let id = event.pointer_id;
        if !self.accepts(PointerEventKind::Over, id) {
            return false;
        }

        self.hovering.insert(id);
        if !self.captured.is_empty() && !self.hovering.is_empty() {
            self.set_base(BaseState::Down);
        }
        self.update_over();
        true
    }

    /// A pointer left the button's bounds.
    pub fn on_out(&mut self, event: &PointerRecord<H::PointerId>) -> bool {
        let id = event.pointer_id;
        if !self.accepts(PointerEventKind::Out, id) {
            return false;
        }

        self.hovering.remove(&id);
        if !self.captured.is_empty() && self.hovering.is_empty() {
            let base = if self.checkable && self.toggled {
                BaseState::Down
            } else {
                BaseState::Up
            };
            self.set_base(base);
        }
        self.update_over();
        true
    }

    fn accepts(&mut self, kind: PointerEventKind, id: H::PointerId) -> bool {
        if self.is_enabled() {
            true
        } else {
            self.trace.ignored(kind, id, IgnoreReason::Disabled);
            false
        }
    }

    fn set_base(&mut self, base: BaseState) {
        let from = self.state;
        self.state.set_base(base);
        self.note_change(from);
        self.update_visuals();
    }

    fn update_over(&mut self) {
        let from = self.state;
        match self.config.hover {
            HoverPolicy::Toggle => self.state.toggle_over(),
            HoverPolicy::FromPointers => self.state.set_over(!self.hovering.is_empty()),
        }
        self.note_change(from);
    }

    fn note_change(&mut self, from: ButtonState) {
        if from != self.state {
            self.trace.state_changed(from, self.state);
        }
    }

    fn update_visuals(&mut self) {
        let Some(visuals) = self.visuals else {
            return;
        };
        // Checked in order Up, Down, Disabled; `Over` never picks a visual.
        let shown = match self.state.base() {
            BaseState::Up => Some(visuals.up),
            BaseState::Down => Some(visuals.down),
            BaseState::Disabled => visuals.disabled,
        };
        for visual in visuals.iter() {
            self.host.set_active(visual, Some(visual) == shown);
        }
    }

    fn release_all_captures(&mut self) {
        for id in self.captured.drain() {
            self.host.release_pointer_capture(id);
            self.trace.capture_released(id);
        }
    }
}

fn handled_events() -> ButtonEvents {
    PointerEventKind::ALL
        .into_iter()
        .fold(ButtonEvents::empty(), |events, kind| events | kind.interest())
}

impl<H, T> Drop for Button<H, T>
where
    H: ButtonHost,
    T: ButtonTrace<H::PointerId>,
{
    fn drop(&mut self) {
        self.release_all_captures();
    }
}

impl<H, T> fmt::Debug for Button<H, T>
where
    H: ButtonHost,
    T: ButtonTrace<H::PointerId>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("state", &self.state)
            .field("captured", &self.captured)
            .field("hovering", &self.hovering)
            .field("checkable", &self.checkable)
            .field("toggled", &self.toggled)
            .field("visuals", &self.visuals)
            .field("debug", &self.debug)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
