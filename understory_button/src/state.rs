// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button state: a mutually exclusive base state plus the `Over` overlay.
//!
//! The base state is a tagged enum, so a button can never be both `Up` and
//! `Down` (or neither). The overlay is a plain flag that can be combined with
//! any base state.
//!
//! ```
//! use understory_button::state::{BaseState, ButtonState, StateFlags};
//!
//! let mut state = ButtonState::default();
//! assert_eq!(state.base(), BaseState::Up);
//!
//! state.toggle_over();
//! state.set_base(BaseState::Down);
//! assert!(state.is_over());
//! assert_eq!(state.flags(), StateFlags::DOWN | StateFlags::OVER);
//! ```

/// The mutually exclusive part of a button's state.
///
/// Exactly one base state is active at any time. It decides which of the
/// three presentations is shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseState {
    /// The button does not react to pointers.
    Disabled,
    /// Released, or checkable and unchecked.
    #[default]
    Up,
    /// Held by a pointer, or checkable and checked.
    Down,
}

impl BaseState {
    /// The flag corresponding to this base state.
    #[must_use]
    pub const fn flag(self) -> StateFlags {
        match self {
            Self::Disabled => StateFlags::DISABLED,
            Self::Up => StateFlags::UP,
            Self::Down => StateFlags::DOWN,
        }
    }
}

bitflags::bitflags! {
    /// Bitmask view of a [`ButtonState`], for inspection and debugging.
    ///
    /// A value produced by [`ButtonState::flags`] always contains exactly one
    /// of `DISABLED`, `UP` and `DOWN`, optionally combined with `OVER`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StateFlags: u8 {
        /// Base state [`BaseState::Disabled`].
        const DISABLED = 0b0000_0010;
        /// Base state [`BaseState::Up`].
        const UP       = 0b0000_0100;
        /// Base state [`BaseState::Down`].
        const DOWN     = 0b0000_1000;
        /// At least one pointer is (believed to be) hovering.
        const OVER     = 0b0001_0000;
    }
}

impl StateFlags {
    /// All base-state bits.
    pub const BASE: Self = Self::DISABLED.union(Self::UP).union(Self::DOWN);
}

/// Current state of a button: base state plus the `Over` overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonState {
    base: BaseState,
    over: bool,
}

impl ButtonState {
    /// Creates a state with the given base and overlay.
    #[must_use]
    pub const fn new(base: BaseState, over: bool) -> Self {
        Self { base, over }
    }

    /// Returns the base state.
    #[must_use]
    pub const fn base(self) -> BaseState {
        self.base
    }

    /// Returns `true` if the `Over` overlay is set.
    #[must_use]
    pub const fn is_over(self) -> bool {
        self.over
    }

    /// Replaces the base state, keeping the overlay untouched.
    pub fn set_base(&mut self, base: BaseState) {
        self.base = base;
    }

    /// Sets or clears the overlay.
    pub fn set_over(&mut self, over: bool) {
        self.over = over;
    }

    /// Flips the overlay.
    pub fn toggle_over(&mut self) {
        self.over = !self.over;
    }

    /// Returns the bitmask view of this state.
    #[must_use]
    pub const fn flags(self) -> StateFlags {
        let base = self.base.flag();
        if self.over {
            base.union(StateFlags::OVER)
        } else {
            base
        }
    }

    /// Rebuilds a state from its bitmask view.
    ///
    /// Returns `None` unless `flags` holds exactly one base bit.
    #[must_use]
    pub fn from_flags(flags: StateFlags) -> Option<Self> {
        let bits = flags.intersection(StateFlags::BASE);
        let base = [BaseState::Disabled, BaseState::Up, BaseState::Down]
            .into_iter()
            .find(|base| base.flag() == bits)?;
        Some(Self::new(base, flags.contains(StateFlags::OVER)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_up_without_overlay() {
        let state = ButtonState::default();
        assert_eq!(state.base(), BaseState::Up);
        assert!(!state.is_over());
        assert_eq!(state.flags(), StateFlags::UP);
    }

    #[test]
    fn set_base_preserves_overlay() {
        let mut state = ButtonState::new(BaseState::Up, true);
        state.set_base(BaseState::Disabled);
        assert!(state.is_over());
        assert_eq!(state.flags(), StateFlags::DISABLED | StateFlags::OVER);
    }

    #[test]
    fn toggle_over_flips() {
        let mut state = ButtonState::default();
        state.toggle_over();
        assert!(state.is_over());
        state.toggle_over();
        assert!(!state.is_over());
    }

    #[test]
    fn flags_match_reference_bit_values() {
        assert_eq!(StateFlags::DISABLED.bits(), 2);
        assert_eq!(StateFlags::UP.bits(), 4);
        assert_eq!(StateFlags::DOWN.bits(), 8);
        assert_eq!(StateFlags::OVER.bits(), 16);
    }

    #[test]
    fn every_state_has_exactly_one_base_bit() {
        for base in [BaseState::Disabled, BaseState::Up, BaseState::Down] {
            for over in [false, true] {
                let flags = ButtonState::new(base, over).flags();
                assert_eq!(
                    flags.intersection(StateFlags::BASE).bits().count_ones(),
                    1,
                    "{flags:?} should carry a single base bit"
                );
            }
        }
    }

    #[test]
    fn from_flags_round_trips_and_rejects_ambiguous_masks() {
        let state = ButtonState::new(BaseState::Down, true);
        assert_eq!(ButtonState::from_flags(state.flags()), Some(state));

        assert_eq!(ButtonState::from_flags(StateFlags::OVER), None);
        assert_eq!(
            ButtonState::from_flags(StateFlags::UP | StateFlags::DOWN),
            None
        );
    }
}
