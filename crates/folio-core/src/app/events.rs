//! UI events and dispatch
//!
//! Hosts translate DOM events into [`UiEvent`]s. Events belonging to a
//! listener group that has not been bound yet are dropped, mirroring a
//! control that simply has no listener attached.

use tracing::debug;

use super::App;
use crate::constants::ui::{HOME_PAGE, PROJECTS_PAGE};
use crate::host::{Binding, Host, TimerId};

/// Dataset of a clicked `[data-action]` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTrigger {
    /// `data-action`
    pub kind: String,
    /// `data-img`
    pub img: Option<String>,
    /// `data-url`
    pub url: Option<String>,
    /// `data-title`
    pub title: Option<String>,
    /// `data-text`
    pub text: Option<String>,
}

impl ActionTrigger {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Sidebar button with its `data-page`
    Navigate(String),
    /// Brand/logo click or Enter
    BrandHome,
    ExploreProjects,
    ToggleTheme,
    OpenHelp,
    OpenContact,
    OpenLinkedIn,
    OpenGitHub,
    DownloadResume,
    ScrollTop,
    CopyAbout,
    SearchInput(String),
    ClearSearch,
    SelectSkill(usize),
    /// Collapsible header with its `data-toggle` body id
    ToggleSection(String),
    CloseModal,
    /// Click on the overlay; `on_background` is false for clicks inside the box
    OverlayClick { on_background: bool },
    Action(ActionTrigger),
    FeaturedPreview,
    FeaturedGitHub,
    FeaturedOpen,
    FeaturedImage,
    TimerFired(TimerId),
    ClipboardDone { ok: bool },
}

impl UiEvent {
    /// Listener group that produces this event; host callbacks have none
    pub fn binding(&self) -> Option<Binding> {
        let binding = match self {
            UiEvent::Navigate(_) | UiEvent::BrandHome | UiEvent::ExploreProjects => {
                Binding::Navigation
            }
            UiEvent::ToggleTheme => Binding::ThemeToggle,
            UiEvent::OpenHelp => Binding::Help,
            UiEvent::OpenContact
            | UiEvent::OpenLinkedIn
            | UiEvent::OpenGitHub
            | UiEvent::DownloadResume
            | UiEvent::ScrollTop
            | UiEvent::CopyAbout => Binding::TopButtons,
            UiEvent::SearchInput(_) | UiEvent::ClearSearch => Binding::Search,
            UiEvent::SelectSkill(_) => Binding::SkillChips,
            UiEvent::ToggleSection(_) => Binding::Collapsibles,
            UiEvent::CloseModal | UiEvent::OverlayClick { .. } => Binding::ModalDismiss,
            UiEvent::Action(_) => Binding::Actions,
            UiEvent::FeaturedPreview
            | UiEvent::FeaturedGitHub
            | UiEvent::FeaturedOpen
            | UiEvent::FeaturedImage => Binding::Featured,
            UiEvent::TimerFired(_) | UiEvent::ClipboardDone { .. } => return None,
        };
        Some(binding)
    }
}

impl<H: Host> App<H> {
    /// Route one event to its handler
    pub fn dispatch(&mut self, event: UiEvent) {
        if let Some(binding) = event.binding() {
            if !self.is_bound(binding) {
                debug!("Ignoring {:?}: {:?} not bound", event, binding);
                return;
            }
        }

        match event {
            UiEvent::Navigate(page) => self.activate_page(&page),
            UiEvent::BrandHome => {
                self.activate_page(HOME_PAGE);
                if self.data.is_some() {
                    self.show_toast("Home");
                }
            }
            UiEvent::ExploreProjects => self.activate_page(PROJECTS_PAGE),
            UiEvent::ToggleTheme => self.toggle_theme(),
            UiEvent::OpenHelp => self.open_help(),
            UiEvent::OpenContact => self.open_contact(),
            UiEvent::OpenLinkedIn => self.open_profile_link(|links| &links.linkedin),
            UiEvent::OpenGitHub => self.open_profile_link(|links| &links.github),
            UiEvent::DownloadResume => self.download_resume(),
            UiEvent::ScrollTop => self.host.scroll_to_top(),
            UiEvent::CopyAbout => self.copy_about(),
            UiEvent::SearchInput(query) => self.apply_search(&query),
            UiEvent::ClearSearch => self.clear_search(),
            UiEvent::SelectSkill(index) => self.select_skill(index),
            UiEvent::ToggleSection(body) => self.toggle_section(&body),
            UiEvent::CloseModal => self.close_modal(),
            UiEvent::OverlayClick { on_background } => {
                if on_background {
                    self.close_modal();
                }
            }
            UiEvent::Action(trigger) => self.handle_action(&trigger),
            UiEvent::FeaturedPreview => self.featured_preview(),
            UiEvent::FeaturedGitHub => self.featured_github(),
            UiEvent::FeaturedOpen => self.featured_open(),
            UiEvent::FeaturedImage => self.featured_image(),
            UiEvent::TimerFired(id) => self.on_timer(id),
            UiEvent::ClipboardDone { ok } => self.on_clipboard_done(ok),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{app, loaded_app};
    use crate::host::{Slot, Target};

    #[test]
    fn test_unbound_events_are_ignored() {
        let mut app = app();
        app.dispatch(UiEvent::Navigate("projects".into()));
        assert_eq!(app.state().active_page, None);
        assert_eq!(app.host().scroll_count(), 0);
    }

    #[test]
    fn test_data_dependent_events_ignored_before_load() {
        let mut app = app();
        app.boot().unwrap();
        app.dispatch(UiEvent::OpenContact);
        assert_eq!(app.state().modal, None);

        app.dispatch(UiEvent::Navigate("projects".into()));
        assert_eq!(app.state().active_page.as_deref(), Some("projects"));
    }

    #[test]
    fn test_brand_toasts_only_after_load() {
        let mut app = app();
        app.boot().unwrap();
        app.dispatch(UiEvent::BrandHome);
        assert_eq!(app.state().active_page.as_deref(), Some("home"));
        assert_eq!(app.state().toast, None);

        let mut app = loaded_app();
        app.dispatch(UiEvent::BrandHome);
        assert_eq!(app.state().toast.as_deref(), Some("Home"));
    }

    #[test]
    fn test_overlay_click_inside_box_keeps_modal() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::OpenHelp);
        app.dispatch(UiEvent::OverlayClick {
            on_background: false,
        });
        assert_eq!(app.state().modal.as_deref(), Some("Help"));

        app.dispatch(UiEvent::OverlayClick {
            on_background: true,
        });
        assert_eq!(app.state().modal, None);
        assert_eq!(
            app.host().display(Target::Slot(Slot::ModalOverlay)),
            Some(crate::host::Display::None)
        );
    }

    #[test]
    fn test_scroll_top_button() {
        let mut app = loaded_app();
        let before = app.host().scroll_count();
        app.dispatch(UiEvent::ScrollTop);
        assert_eq!(app.host().scroll_count(), before + 1);
    }
}
