// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior policies for a [`Button`](crate::Button).
//!
//! The defaults reproduce the classic behavior of the button this crate
//! models. The alternatives fix three known quirks of that behavior and are
//! opt-in.
//!
//! ```
//! use understory_button::config::{ButtonConfig, CheckPolicy, DisablePolicy, HoverPolicy};
//!
//! let config = ButtonConfig::new()
//!     .hover(HoverPolicy::FromPointers)
//!     .disable(DisablePolicy::ClearHover)
//!     .check(CheckPolicy::KeepDisabled)
//!     .checkable(true);
//! assert!(config.checkable);
//! ```

/// How the `Over` overlay reacts to over/out events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverPolicy {
    /// Flip the overlay on every over and every out event.
    ///
    /// A redelivered over (two overs for one pointer without an out in
    /// between) leaves the overlay out of sync with the hovering set.
    #[default]
    Toggle,
    /// Set the overlay to whether any pointer is hovering.
    FromPointers,
}

/// What happens to hover bookkeeping when the button is disabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisablePolicy {
    /// Keep the hovering set across a disable/enable cycle.
    ///
    /// Pointers that left while disabled stay recorded as hovering.
    #[default]
    KeepHover,
    /// Forget all hovering pointers on disable.
    ClearHover,
}

/// What [`set_checked`](crate::Button::set_checked) does to a disabled button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckPolicy {
    /// Always move the base state to `Down` or `Up`.
    ///
    /// A disabled button leaves `Disabled` this way while its event
    /// interest stays detached.
    #[default]
    Always,
    /// Record the toggle value on a disabled button but keep it `Disabled`.
    KeepDisabled,
}

/// Construction-time configuration of a [`Button`](crate::Button).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonConfig {
    /// Overlay policy.
    pub hover: HoverPolicy,
    /// Disable policy.
    pub disable: DisablePolicy,
    /// Forced-check policy.
    pub check: CheckPolicy,
    /// Whether the button starts out as a toggle.
    pub checkable: bool,
}

impl ButtonConfig {
    /// The default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hover: HoverPolicy::Toggle,
            disable: DisablePolicy::KeepHover,
            check: CheckPolicy::Always,
            checkable: false,
        }
    }

    /// Sets the overlay policy.
    #[must_use]
    pub const fn hover(mut self, hover: HoverPolicy) -> Self {
        self.hover = hover;
        self
    }

    /// Sets the disable policy.
    #[must_use]
    pub const fn disable(mut self, disable: DisablePolicy) -> Self {
        self.disable = disable;
        self
    }

    /// Sets the forced-check policy.
    #[must_use]
    pub const fn check(mut self, check: CheckPolicy) -> Self {
        self.check = check;
        self
    }

    /// Sets whether the button starts out checkable.
    #[must_use]
    pub const fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_default() {
        assert_eq!(ButtonConfig::new(), ButtonConfig::default());
    }
}
