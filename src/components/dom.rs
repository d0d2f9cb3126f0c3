//! Browser bindings for the copy-page handler
//!
//! - One `click` listener on the document, attached once at load, filters by
//!   `closest()` so buttons added to the page later still work
//! - No Closure::forget() - the closure is owned by `DelegatedListener` and
//!   parked in a thread_local, dropping it removes the listener
//!
//! The icon snapshot is taken inside the click callback. The fetch itself
//! starts from `spawn_local`, one microtask later, which is not observable
//! from the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, Node};

use crate::components::copy_page::{ClickTarget, CopyButton, CopyPageHandler, IconSlot};
use crate::errors::CopyPageError;
use crate::services::page_source::HttpPageSource;
use crate::stores::settings_store::HandlerSettings;
use crate::utils::clipboard::BrowserClipboard;
use crate::utils::timer::BrowserTimer;

pub type BrowserHandler = CopyPageHandler<HttpPageSource, BrowserClipboard, BrowserTimer>;

pub struct BrowserIcon(Element);

impl IconSlot for BrowserIcon {
    fn markup(&self) -> String {
        self.0.inner_html()
    }

    fn set_markup(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

pub struct BrowserButton(Element);

impl CopyButton for BrowserButton {
    type Icon = BrowserIcon;

    fn icon(&self) -> Option<BrowserIcon> {
        match self.0.query_selector("svg") {
            Ok(svg) => svg.map(BrowserIcon),
            Err(e) => {
                log::warn!("Failed to query copy button icon: {:?}", e);
                None
            }
        }
    }

    fn source_url(&self) -> Option<String> {
        self.0.get_attribute("data-url")
    }
}

impl ClickTarget for Element {
    type Button = BrowserButton;

    fn closest_button(&self, selector: &str) -> Option<BrowserButton> {
        match self.closest(selector) {
            Ok(button) => button.map(BrowserButton),
            Err(e) => {
                log::warn!("Invalid copy button selector {}: {:?}", selector, e);
                None
            }
        }
    }
}

/// Element a click event landed on, lifting text nodes to their parent
fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(target) => target.dyn_into::<Node>().ok()?.parent_element(),
    }
}

/// A document-level listener that is removed when dropped
pub struct DelegatedListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DelegatedListener {
    pub fn attach(
        target: &EventTarget,
        event_type: &'static str,
        handler: Rc<BrowserHandler>,
    ) -> Result<Self, CopyPageError> {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            let Some(element) = event_element(&event) else {
                return;
            };
            let Some(cycle) = handler.begin_cycle(&element) else {
                return;
            };

            let handler = Rc::clone(&handler);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = handler.run_cycle(cycle).await;
                if outcome.is_copied() {
                    log::debug!("Copy page cycle finished: {:?}", outcome);
                }
            });
        }) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(
                event_type,
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| CopyPageError::Dom(format!("Failed to add {} listener: {:?}", event_type, e)))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for DelegatedListener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
        ) {
            log::warn!("Failed to remove {} listener: {:?}", self.event_type, e);
        }
    }
}

thread_local! {
    /// Listener installed for the page's lifetime
    static INSTALLED: RefCell<Option<DelegatedListener>> = RefCell::new(None);
}

/// Attach the copy-page click listener to the document
///
/// Installing again replaces (and detaches) the previous listener, so the
/// handler never runs twice for one click.
pub fn install(settings: HandlerSettings) -> Result<(), CopyPageError> {
    let window = web_sys::window().ok_or_else(|| CopyPageError::Dom("No window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| CopyPageError::Dom("No document".to_string()))?;

    let handler = Rc::new(CopyPageHandler::new(
        settings,
        HttpPageSource,
        BrowserClipboard,
        BrowserTimer,
    ));
    let selector = handler.settings().selector.clone();
    let listener = DelegatedListener::attach(document.as_ref(), "click", handler)?;

    INSTALLED.with(|slot| {
        slot.borrow_mut().replace(listener);
    });

    log::info!("Copy page handler listening for clicks on {}", selector);
    Ok(())
}
