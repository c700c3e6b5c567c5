//! Contact modal wiring.
//!
//! DESIGN
//! ======
//! [`ModalDom`] pairs the browser elements with the testable
//! [`ModalController`]. The keydown interceptor closure is created once and
//! kept for the page lifetime; open adds it to `document`, close removes it.
//! Keeping it alive avoids dropping a closure from inside its own call when
//! Escape closes the modal.
//!
//! Controller borrows are released before any call back into the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent, Window};

use super::{element_by_id, focus, listen, same_node};
use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::modal::{FOCUSABLE_SELECTOR, FocusTarget, Focused, Key, KeyOutcome, ModalController};

const FEATURE: &str = "modal";

type Interceptor = Closure<dyn FnMut(KeyboardEvent)>;

struct ModalDom {
    document: Document,
    body: HtmlElement,
    modal: HtmlElement,
    controller: RefCell<ModalController<HtmlElement>>,
    interceptor: RefCell<Option<Interceptor>>,
}

pub(super) fn attach(window: &Window, document: &Document, config: &PageConfig) -> Result<()> {
    let modal: HtmlElement = element_by_id(document, FEATURE, &config.modal_id)?;
    let body = document.body().ok_or_else(|| PageError::missing(FEATURE, "body"))?;

    let dom = Rc::new(ModalDom {
        document: document.clone(),
        body,
        modal,
        controller: RefCell::new(ModalController::new()),
        interceptor: RefCell::new(None),
    });
    let weak: Weak<ModalDom> = Rc::downgrade(&dom);
    let interceptor = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        if let Some(dom) = weak.upgrade() {
            dom.on_keydown(&ev);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    *dom.interceptor.borrow_mut() = Some(interceptor);

    let selector = config.open_selector();
    let triggers = document.query_selector_all(&selector)?;
    if triggers.length() == 0 {
        log::warn!("{}", PageError::missing(FEATURE, selector));
    }
    for node in (0..triggers.length()).filter_map(|i| triggers.item(i)) {
        let dom = Rc::clone(&dom);
        listen(&node, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            dom.open();
        })?;
    }

    match element_by_id::<HtmlElement>(document, FEATURE, &config.close_id) {
        Ok(close) => {
            let dom = Rc::clone(&dom);
            listen(&close, "click", move |ev: MouseEvent| {
                ev.prevent_default();
                dom.close();
            })?;
        }
        Err(e) => log::warn!("{e}"),
    }

    {
        let dom = Rc::clone(&dom);
        listen(window, "click", move |ev: MouseEvent| {
            let on_overlay = ev.target().is_some_and(|target| same_node(&target, &dom.modal));
            if dom.controller.borrow().closes_on_click(on_overlay) {
                dom.close();
            }
        })?;
    }

    expose_hook(window, &config.open_hook, {
        let dom = Rc::clone(&dom);
        move || dom.open()
    })?;
    expose_hook(window, &config.close_hook, move || dom.close())?;

    Ok(())
}

/// Publish `action` as `window[name]` for inline handlers and console use.
fn expose_hook(window: &Window, name: &str, action: impl FnMut() + 'static) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(action) as Box<dyn FnMut()>);
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

impl ModalDom {
    fn open(&self) {
        if self.controller.borrow().is_open() {
            return;
        }
        let previous = self
            .document
            .active_element()
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned());

        if let Err(e) = self.show() {
            log::warn!("modal: {e}");
        }
        // Visibility filtering needs the modal laid out, so collect after showing.
        let focusables = self.rendered_focusables();
        let target = self.controller.borrow_mut().open(previous, focusables);

        match target {
            Some(FocusTarget::Element(el)) => focus(&el),
            Some(FocusTarget::Container) => focus(&self.modal),
            None => return,
        }
        self.set_interceptor(true);
        log::debug!("contact modal opened");
    }

    fn close(&self) {
        let Some(session) = self.controller.borrow_mut().close() else {
            return;
        };
        if let Err(e) = self.hide() {
            log::warn!("modal: {e}");
        }
        self.set_interceptor(false);
        if let Some(previous) = session.previous_focus {
            focus(&previous);
        }
        log::debug!("contact modal closed");
    }

    fn on_keydown(&self, ev: &KeyboardEvent) {
        let key = Key::from_name(&ev.key());
        let active = self.document.active_element();
        let outcome = {
            let focused = match &active {
                Some(el) if same_node(el, &self.modal) => Focused::Container,
                Some(el) => el.dyn_ref::<HtmlElement>().map_or(Focused::Nothing, Focused::Element),
                None => Focused::Nothing,
            };
            self.controller.borrow().on_key(key, ev.shift_key(), focused)
        };
        match outcome {
            KeyOutcome::PassThrough => {}
            KeyOutcome::Suppress => ev.prevent_default(),
            KeyOutcome::MoveFocus(el) => {
                ev.prevent_default();
                focus(&el);
            }
            KeyOutcome::Close => self.close(),
        }
    }

    fn show(&self) -> Result<()> {
        self.modal.style().set_property("display", "flex")?;
        self.modal.set_attribute("aria-hidden", "false")?;
        self.body.style().set_property("overflow", "hidden")?;
        Ok(())
    }

    fn hide(&self) -> Result<()> {
        self.modal.style().set_property("display", "none")?;
        self.modal.set_attribute("aria-hidden", "true")?;
        self.body.style().remove_property("overflow")?;
        Ok(())
    }

    /// Focusable descendants with a rendered box, in document order.
    fn rendered_focusables(&self) -> Vec<HtmlElement> {
        let nodes = match self.modal.query_selector_all(FOCUSABLE_SELECTOR) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("modal: focusable query failed: {e:?}");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
            .filter(|el| el.offset_parent().is_some())
            .collect()
    }

    fn set_interceptor(&self, installed: bool) {
        let interceptor = self.interceptor.borrow();
        let Some(callback) = interceptor.as_ref() else {
            return;
        };
        let callback: &js_sys::Function = callback.as_ref().unchecked_ref();
        let result = if installed {
            self.document.add_event_listener_with_callback("keydown", callback)
        } else {
            self.document.remove_event_listener_with_callback("keydown", callback)
        };
        if let Err(e) = result {
            log::warn!("modal: keydown interceptor: {e:?}");
        }
    }
}
