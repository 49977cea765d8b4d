//! DOM listeners for each binding group
//!
//! Every listener turns a raw DOM event into a `UiEvent` and hands it to the
//! dispatcher. Closures are kept on the host so they stay alive.

use folio_core::{ActionTrigger, Binding, Slot, UiEvent};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlInputElement, KeyboardEvent};

use crate::dom;
use crate::host::WebHost;

impl WebHost {
    pub(crate) fn attach(&mut self, binding: Binding) {
        debug!("Binding {:?}", binding);
        match binding {
            Binding::ModalDismiss => {
                self.on_click(Slot::ModalClose, |_| Some(UiEvent::CloseModal));
                self.on_slot(Slot::ModalOverlay, "click", |event| {
                    let on_background = dom::event_element(event)
                        .is_some_and(|el| el.id() == Slot::ModalOverlay.id());
                    Some(UiEvent::OverlayClick { on_background })
                });
            }
            Binding::Navigation => {
                for button in dom::query_all(self.document(), ".navBtn") {
                    let Some(page) = dom::data(&button, "page") else {
                        continue;
                    };
                    self.listen(&button, "click", move |_| {
                        Some(UiEvent::Navigate(page.clone()))
                    });
                }
                self.on_click(Slot::BrandHome, |_| Some(UiEvent::BrandHome));
                self.on_slot(Slot::BrandHome, "keydown", |event| {
                    let key = event.dyn_ref::<KeyboardEvent>()?.key();
                    (key == "Enter").then_some(UiEvent::BrandHome)
                });
                self.on_click(Slot::ExploreProjects, |_| Some(UiEvent::ExploreProjects));
            }
            Binding::Collapsibles => {
                for header in dom::query_all(self.document(), "[data-toggle]") {
                    let Some(body) = dom::data(&header, "toggle") else {
                        continue;
                    };
                    self.listen(&header, "click", move |_| {
                        Some(UiEvent::ToggleSection(body.clone()))
                    });
                }
            }
            Binding::Actions => {
                let document: EventTarget = self.document().clone().into();
                self.listen(&document, "click", |event| {
                    let el = dom::closest(event, "[data-action]")?;
                    let kind = dom::data(&el, "action")?;
                    Some(UiEvent::Action(ActionTrigger {
                        img: dom::data(&el, "img"),
                        url: dom::data(&el, "url"),
                        title: dom::data(&el, "title"),
                        text: dom::data(&el, "text"),
                        ..ActionTrigger::new(kind)
                    }))
                });
            }
            Binding::ThemeToggle => {
                self.on_click(Slot::ThemeButton, |_| Some(UiEvent::ToggleTheme));
            }
            Binding::Help => {
                self.on_click(Slot::HelpButton, |_| Some(UiEvent::OpenHelp));
            }
            Binding::TopButtons => {
                self.on_click(Slot::ContactButton, |_| Some(UiEvent::OpenContact));
                self.on_click(Slot::ContactButtonAlt, |_| Some(UiEvent::OpenContact));
                self.on_click(Slot::OpenLinkedIn, |_| Some(UiEvent::OpenLinkedIn));
                self.on_click(Slot::OpenGitHub, |_| Some(UiEvent::OpenGitHub));
                self.on_click(Slot::DownloadResume, |_| Some(UiEvent::DownloadResume));
                self.on_click(Slot::ScrollTop, |_| Some(UiEvent::ScrollTop));
                self.on_click(Slot::CopyAbout, |_| Some(UiEvent::CopyAbout));
            }
            Binding::Search => {
                self.on_slot(Slot::SearchInput, "input", |event| {
                    let input = dom::event_element(event)?
                        .dyn_into::<HtmlInputElement>()
                        .ok()?;
                    Some(UiEvent::SearchInput(input.value()))
                });
                self.on_click(Slot::ClearSearch, |_| Some(UiEvent::ClearSearch));
            }
            Binding::SkillChips => {
                self.on_click(Slot::SkillChips, |event| {
                    let chip = dom::closest(event, "[data-skill]")?;
                    let index = dom::data(&chip, "skill")?.parse().ok()?;
                    Some(UiEvent::SelectSkill(index))
                });
            }
            Binding::Featured => {
                self.on_click(Slot::FeaturedPreview, |_| Some(UiEvent::FeaturedPreview));
                self.on_click(Slot::FeaturedGitHub, |_| Some(UiEvent::FeaturedGitHub));
                self.on_click(Slot::FeaturedOpen, |_| Some(UiEvent::FeaturedOpen));
                self.on_click(Slot::FeaturedImage, |_| Some(UiEvent::FeaturedImage));
            }
        }
    }

    fn on_click(&mut self, slot: Slot, handler: impl Fn(&Event) -> Option<UiEvent> + 'static) {
        self.on_slot(slot, "click", handler);
    }

    fn on_slot(
        &mut self,
        slot: Slot,
        event_type: &str,
        handler: impl Fn(&Event) -> Option<UiEvent> + 'static,
    ) {
        let Some(el) = dom::by_id(self.document(), slot.id()) else {
            debug!("#{} missing, no {} listener", slot.id(), event_type);
            return;
        };
        self.listen(&el, event_type, handler);
    }

    /// Attach a listener that forwards whatever `handler` produces
    fn listen(
        &mut self,
        target: &EventTarget,
        event_type: &str,
        handler: impl Fn(&Event) -> Option<UiEvent> + 'static,
    ) {
        let dispatcher = self.dispatcher().clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(ui_event) = handler(&event) {
                dispatcher.dispatch(ui_event);
            }
        });
        match target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        {
            Ok(()) => self.listeners.push(closure),
            Err(e) => debug!("Could not add {} listener: {:?}", event_type, e),
        }
    }
}
