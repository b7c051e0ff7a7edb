// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Button`](crate::Button) configuration calls.

use core::fmt;

use crate::event::PointerEventKind;

/// An invalid combination of presentation visuals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigurationError {
    /// A `down` visual was given without an `up` visual.
    MissingUp,
    /// An `up` visual was given without a `down` visual.
    MissingDown,
    /// A `disabled` visual was given without `up` and `down` visuals.
    DisabledWithoutUpDown,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUp => f.write_str("a down visual requires an up visual"),
            Self::MissingDown => f.write_str("an up visual requires a down visual"),
            Self::DisabledWithoutUpDown => {
                f.write_str("a disabled visual requires both up and down visuals")
            }
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// Error returned by fallible [`Button`](crate::Button) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonError {
    /// The visuals passed to [`Button::set_nodes`](crate::Button::set_nodes) do not fit together.
    Configuration(ConfigurationError),
    /// A raw event handler was attached for the given event kind.
    ///
    /// The button owns its pointer-event wiring; use the press and click
    /// handlers instead.
    UnsupportedOperation(PointerEventKind),
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid button configuration: {err}"),
            Self::UnsupportedOperation(kind) => write!(
                f,
                "setting an event handler for {kind:?} on a button is not supported"
            ),
        }
    }
}

impl core::error::Error for ButtonError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            Self::UnsupportedOperation(_) => None,
        }
    }
}

impl From<ConfigurationError> for ButtonError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error;

    #[test]
    fn configuration_error_is_the_source() {
        let err = ButtonError::from(ConfigurationError::MissingDown);
        assert_eq!(
            err.to_string(),
            "invalid button configuration: an up visual requires a down visual"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unsupported_operation_names_the_kind() {
        let err = ButtonError::UnsupportedOperation(PointerEventKind::Over);
        assert_eq!(
            err.to_string(),
            "setting an event handler for Over on a button is not supported"
        );
        assert!(err.source().is_none());
    }
}
