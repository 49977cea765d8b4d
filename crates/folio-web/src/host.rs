//! DOM-backed host

use std::collections::HashMap;
use std::time::Duration;

use chrono::Datelike;
use folio_core::{Binding, Display, Host, Target, TimerId, UiEvent};
use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Clipboard, Document, Element, Event, HtmlInputElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dispatcher::Dispatcher;
use crate::dom;

pub struct WebHost {
    window: Window,
    document: Document,
    dispatcher: Dispatcher<WebHost>,
    /// Attached listeners; dropping one detaches its callback
    pub(crate) listeners: Vec<Closure<dyn FnMut(Event)>>,
    timers: HashMap<TimerId, Timeout>,
    next_timer: u64,
}

impl WebHost {
    pub fn new(window: Window, document: Document, dispatcher: Dispatcher<WebHost>) -> Self {
        Self {
            window,
            document,
            dispatcher,
            listeners: Vec::new(),
            timers: HashMap::new(),
            next_timer: 0,
        }
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn dispatcher(&self) -> &Dispatcher<WebHost> {
        &self.dispatcher
    }

    /// Every element a target refers to
    fn elements(&self, target: Target<'_>) -> Vec<Element> {
        let doc = &self.document;
        match target {
            Target::Slot(slot) => dom::by_id(doc, slot.id()).into_iter().collect(),
            Target::Element(id) => dom::by_id(doc, id).into_iter().collect(),
            Target::Page(page) => dom::by_id(doc, &format!("page-{page}"))
                .into_iter()
                .collect(),
            Target::NavButton(page) => dom::query_by_data(doc, ".navBtn", "page", page),
            Target::Chevron(body) => dom::query_by_data(doc, "[data-toggle]", "toggle", body)
                .into_iter()
                .filter_map(|toggle| toggle.query_selector(".chev").ok().flatten())
                .collect(),
            Target::Body => doc
                .body()
                .map(Element::from)
                .into_iter()
                .collect(),
        }
    }

    fn first(&self, target: Target<'_>) -> Option<Element> {
        self.elements(target).into_iter().next()
    }

    /// `navigator.clipboard`, which is undefined outside secure contexts
    fn clipboard(&self) -> Option<Clipboard> {
        let navigator = self.window.navigator();
        let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        value.dyn_into::<Clipboard>().ok()
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        self.window.local_storage().ok().flatten()
    }
}

impl Host for WebHost {
    fn exists(&self, target: Target<'_>) -> bool {
        self.first(target).is_some()
    }

    fn page_keys(&self) -> Vec<String> {
        dom::query_all(&self.document, ".page")
            .iter()
            .filter_map(|page| page.id().strip_prefix("page-").map(String::from))
            .collect()
    }

    fn toggle_targets(&self) -> Vec<String> {
        dom::query_all(&self.document, "[data-toggle]")
            .iter()
            .filter_map(|toggle| dom::data(toggle, "toggle"))
            .collect()
    }

    fn set_text(&mut self, target: Target<'_>, text: &str) {
        for el in self.elements(target) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&mut self, target: Target<'_>, html: &str) {
        for el in self.elements(target) {
            el.set_inner_html(html);
        }
    }

    fn set_attribute(&mut self, target: Target<'_>, name: &str, value: &str) {
        for el in self.elements(target) {
            if let Err(e) = el.set_attribute(name, value) {
                warn!("Could not set {}: {:?}", name, e);
            }
        }
    }

    fn set_display(&mut self, target: Target<'_>, display: Display) {
        for el in self.elements(target).into_iter().filter_map(dom::as_html) {
            if let Err(e) = el.style().set_property("display", display.as_css()) {
                warn!("Could not set display: {:?}", e);
            }
        }
    }

    fn display(&self, target: Target<'_>) -> Option<Display> {
        let el = dom::as_html(self.first(target)?)?;
        let inline = el.style().get_property_value("display").unwrap_or_default();
        Some(match inline.as_str() {
            "none" => Display::None,
            "flex" => Display::Flex,
            _ => Display::Block,
        })
    }

    fn set_class(&mut self, target: Target<'_>, class: &str, enabled: bool) {
        for el in self.elements(target) {
            if let Err(e) = el.class_list().toggle_with_force(class, enabled) {
                warn!("Could not toggle class {}: {:?}", class, e);
            }
        }
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.first(target)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_input_value(&mut self, target: Target<'_>, value: &str) {
        for input in self
            .elements(target)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(value);
        }
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = self.window.open_with_url_and_target(url, "_blank") {
            warn!("Could not open {}: {:?}", url, e);
        }
    }

    fn write_clipboard(&mut self, text: &str) {
        let Some(clipboard) = self.clipboard() else {
            warn!("Clipboard API unavailable on this origin");
            self.dispatcher.dispatch(UiEvent::ClipboardDone { ok: false });
            return;
        };
        let promise = clipboard.write_text(text);
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            let ok = JsFuture::from(promise).await.is_ok();
            dispatcher.dispatch(UiEvent::ClipboardDone { ok });
        });
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            warn!("localStorage unavailable, {} not persisted", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            warn!("Could not persist {}: {:?}", key, e);
        }
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.next_timer += 1;
        let id = TimerId(self.next_timer);
        let dispatcher = self.dispatcher.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            dispatcher.dispatch(UiEvent::TimerFired(id));
        });
        self.timers.insert(id, timeout);
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        // Dropping a gloo Timeout cancels it
        self.timers.remove(&id);
    }

    fn bind(&mut self, binding: Binding) {
        self.attach(binding);
    }

    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}
