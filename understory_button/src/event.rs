// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract pointer-event records consumed by a [`Button`](crate::Button).

use ui_events::pointer::PointerType;

/// The four pointer event classes a button reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A pointer went down on the button.
    Press,
    /// A pointer went up, either on the button or while captured by it.
    Release,
    /// A pointer entered the button's bounds.
    Over,
    /// A pointer left the button's bounds.
    Out,
}

impl PointerEventKind {
    /// Every kind, in dispatch order.
    pub const ALL: [Self; 4] = [Self::Press, Self::Release, Self::Over, Self::Out];

    /// The interest flag a host must register to deliver this kind.
    #[must_use]
    pub const fn interest(self) -> ButtonEvents {
        match self {
            Self::Press => ButtonEvents::PRESS,
            Self::Release => ButtonEvents::RELEASE,
            Self::Over => ButtonEvents::OVER,
            Self::Out => ButtonEvents::OUT,
        }
    }
}

bitflags::bitflags! {
    /// Event classes a button asks its host to deliver.
    ///
    /// An empty set means the button's handlers are detached.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonEvents: u8 {
        /// Pointer down.
        const PRESS   = 0b0001;
        /// Pointer up.
        const RELEASE = 0b0010;
        /// Pointer enters bounds.
        const OVER    = 0b0100;
        /// Pointer leaves bounds.
        const OUT     = 0b1000;
    }
}

/// One pointer event, as delivered by the dispatch layer.
///
/// `P` is the host's pointer identifier (for example
/// `ui_events::pointer::PointerId`, or a plain integer). It must stay stable
/// from press to release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerRecord<P> {
    /// Identifier of the pointer that produced the event.
    pub pointer_id: P,
    /// Kind of device behind the pointer.
    pub pointer_type: PointerType,
}

impl<P> PointerRecord<P> {
    /// Creates a record for the given pointer and device kind.
    pub const fn new(pointer_id: P, pointer_type: PointerType) -> Self {
        Self {
            pointer_id,
            pointer_type,
        }
    }

    /// A mouse pointer record.
    pub const fn mouse(pointer_id: P) -> Self {
        Self::new(pointer_id, PointerType::Mouse)
    }

    /// A touch contact record.
    pub const fn touch(pointer_id: P) -> Self {
        Self::new(pointer_id, PointerType::Touch)
    }
}
