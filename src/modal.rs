//! Contact modal state machine and focus trap.
//!
//! The controller is generic over the element handle `E` so the decisions
//! (what to focus, whether to cancel a key, when to close) can be tested
//! without a browser. The `dom` layer supplies real `HtmlElement` handles and
//! carries out the returned instructions.
//!
//! DESIGN
//! ======
//! `Closed` and `Open` are the only states. An `Open` modal owns a
//! [`ModalSession`] that remembers where focus was before opening and the
//! ordered, rendered focusable descendants captured at open time. The list is
//! not refreshed while open.
//!
//! Escape closing is driven by the `Open` state itself rather than by
//! inspecting inline styles, so it works regardless of how the modal is
//! shown.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Selector for elements that can take keyboard focus inside the modal.
pub const FOCUSABLE_SELECTOR: &str = concat!(
    "a[href], area[href], ",
    "input:not([disabled]):not([type=\"hidden\"]), ",
    "select:not([disabled]), textarea:not([disabled]), button:not([disabled]), ",
    "iframe, object, embed, ",
    "[tabindex]:not([tabindex=\"-1\"]), [contenteditable]",
);

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    /// Anything else; always passed through.
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Where keyboard focus currently sits, relative to the modal.
#[derive(Debug, Clone, Copy)]
pub enum Focused<'a, E> {
    /// The modal container itself.
    Container,
    /// Some element; may or may not be inside the modal.
    Element(&'a E),
    /// Nothing focused (document body).
    Nothing,
}

/// Where focus goes when the modal opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget<E> {
    Element(E),
    /// No focusable descendants; focus the container.
    Container,
}

/// What the keydown interceptor should do with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome<E> {
    /// Let the browser handle it.
    PassThrough,
    /// Cancel the default action and do nothing else.
    Suppress,
    /// Cancel the default action and focus this element.
    MoveFocus(E),
    /// Close the modal.
    Close,
}

/// State held while the modal is open.
#[derive(Debug, Clone)]
pub struct ModalSession<E> {
    /// Element focused right before opening; refocused on close.
    pub previous_focus: Option<E>,
    /// Rendered focusable descendants in document order.
    pub focusables: Vec<E>,
}

impl<E> ModalSession<E> {
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.focusables.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.focusables.last()
    }
}

#[derive(Debug, Clone)]
pub enum ModalState<E> {
    Closed,
    Open(ModalSession<E>),
}

/// Open/close transitions and focus-trap decisions for one modal.
#[derive(Debug, Clone)]
pub struct ModalController<E> {
    state: ModalState<E>,
}

impl<E> Default for ModalController<E> {
    fn default() -> Self {
        Self { state: ModalState::Closed }
    }
}

impl<E: Clone + PartialEq> ModalController<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&ModalSession<E>> {
        match &self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    /// Closed → Open.
    ///
    /// `focusables` must already be filtered to rendered elements. Returns
    /// where to move focus, or `None` if the modal was already open (at most
    /// one session exists, and the original one is kept).
    pub fn open(&mut self, previous_focus: Option<E>, focusables: Vec<E>) -> Option<FocusTarget<E>> {
        if self.is_open() {
            return None;
        }
        let target = focusables
            .first()
            .cloned()
            .map_or(FocusTarget::Container, FocusTarget::Element);
        self.state = ModalState::Open(ModalSession { previous_focus, focusables });
        Some(target)
    }

    /// Open → Closed.
    ///
    /// Returns the finished session so the caller can restore focus, or
    /// `None` if the modal was not open.
    pub fn close(&mut self) -> Option<ModalSession<E>> {
        match std::mem::replace(&mut self.state, ModalState::Closed) {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    /// Whether a click should close the modal. Only a click whose target is
    /// the overlay itself counts; clicks bubbling up from content do not.
    #[must_use]
    pub fn closes_on_click(&self, target_is_overlay: bool) -> bool {
        target_is_overlay && self.is_open()
    }

    /// Decide what a keydown does while the interceptor is installed.
    #[must_use]
    pub fn on_key(&self, key: Key, shift: bool, focused: Focused<'_, E>) -> KeyOutcome<E> {
        let ModalState::Open(session) = &self.state else {
            return KeyOutcome::PassThrough;
        };
        match key {
            Key::Escape => KeyOutcome::Close,
            Key::Other => KeyOutcome::PassThrough,
            Key::Tab => {
                let (Some(first), Some(last)) = (session.first(), session.last()) else {
                    return KeyOutcome::Suppress;
                };
                if shift {
                    let wrap = match focused {
                        Focused::Container => true,
                        Focused::Element(el) => el == first,
                        Focused::Nothing => false,
                    };
                    if wrap {
                        return KeyOutcome::MoveFocus(last.clone());
                    }
                } else if matches!(focused, Focused::Element(el) if el == last) {
                    return KeyOutcome::MoveFocus(first.clone());
                }
                KeyOutcome::PassThrough
            }
        }
    }
}
