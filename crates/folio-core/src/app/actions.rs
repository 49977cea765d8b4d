//! Button actions
//!
//! Delegated `[data-action]` clicks, the featured card buttons, and the
//! data-dependent top buttons. Acting on missing data shows a toast and
//! changes nothing else.

use tracing::{debug, warn};

use super::{ActionTrigger, App};
use crate::host::Host;
use crate::markup;
use crate::model::{non_blank, Links};

/// Recognized `data-action` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Preview,
    GitHub,
    Open,
    Copy,
}

impl ActionKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "preview" => Some(ActionKind::Preview),
            "github" => Some(ActionKind::GitHub),
            "open" => Some(ActionKind::Open),
            "copy" => Some(ActionKind::Copy),
            _ => None,
        }
    }
}

impl<H: Host> App<H> {
    pub(super) fn handle_action(&mut self, trigger: &ActionTrigger) {
        let Some(kind) = ActionKind::parse(&trigger.kind) else {
            debug!("Ignoring unknown action {:?}", trigger.kind);
            return;
        };

        match kind {
            ActionKind::Preview => {
                let Some(img) = non_blank(trigger.img.as_deref()) else {
                    self.show_toast("No preview set.");
                    return;
                };
                let title = non_blank(trigger.title.as_deref()).unwrap_or("Preview");
                self.open_modal(title, &markup::preview_body(img));
            }
            ActionKind::GitHub | ActionKind::Open => {
                self.open_link(trigger.url.as_deref(), "Link not set yet.");
            }
            ActionKind::Copy => match non_blank(trigger.text.as_deref()) {
                Some(text) => self.host.write_clipboard(text),
                None => self.show_toast("Nothing to copy."),
            },
        }
    }

    /// Open a link in a new tab, or explain why not
    fn open_link(&mut self, url: Option<&str>, missing: &str) {
        match non_blank(url) {
            Some(url) => self.host.open_url(url),
            None => self.show_toast(missing),
        }
    }

    pub(super) fn on_clipboard_done(&mut self, ok: bool) {
        if ok {
            self.show_toast("Copied ✅");
        } else {
            warn!("Clipboard write was refused by the browser");
            self.show_toast("Copy failed (browser blocked).");
        }
    }

    pub(super) fn featured_preview(&mut self) {
        let Some(img) = self.featured.as_ref().and_then(|p| p.preview()) else {
            self.show_toast("No preview image set.");
            return;
        };
        let body = markup::preview_body(img);
        self.open_modal("Preview", &body);
    }

    pub(super) fn featured_image(&mut self) {
        if let Some(img) = self.featured.as_ref().and_then(|p| p.preview()) {
            let body = markup::preview_body(img);
            self.open_modal("Preview", &body);
        }
    }

    pub(super) fn featured_github(&mut self) {
        let url = self.featured.as_ref().and_then(|p| p.github()).map(String::from);
        self.open_link(url.as_deref(), "No GitHub link set.");
    }

    pub(super) fn featured_open(&mut self) {
        let url = self.featured.as_ref().and_then(|p| p.open()).map(String::from);
        self.open_link(url.as_deref(), "No project link set.");
    }

    pub(super) fn open_help(&mut self) {
        let body = markup::help_body(&self.config.data_url);
        self.open_modal("Help", &body);
    }

    pub(super) fn open_contact(&mut self) {
        let Some(data) = &self.data else {
            return;
        };
        let body = markup::contact_body(&data.profile.links);
        self.open_modal("Contact", &body);
    }

    pub(super) fn open_profile_link(&mut self, pick: impl Fn(&Links) -> &String) {
        let url = self.data.as_ref().map(|d| pick(&d.profile.links).clone());
        self.open_link(url.as_deref(), "Link not set yet.");
    }

    pub(super) fn download_resume(&mut self) {
        let url = self
            .data
            .as_ref()
            .and_then(|d| d.profile.resume_url.clone());
        self.open_link(url.as_deref(), "Add resume.pdf later and link it.");
    }

    pub(super) fn copy_about(&mut self) {
        let summary = self
            .data
            .as_ref()
            .map(|d| d.profile.summary.clone())
            .unwrap_or_default();
        if summary.trim().is_empty() {
            self.show_toast("Nothing to copy.");
            return;
        }
        self.host.write_clipboard(&summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::loaded_app;
    use crate::host::{Slot, Target};
    use crate::UiEvent;

    fn action(kind: &str) -> ActionTrigger {
        ActionTrigger::new(kind)
    }

    #[test]
    fn test_preview_opens_modal_with_title() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::Action(ActionTrigger {
            img: Some("img/sales.png".into()),
            title: Some("Sales Dashboard".into()),
            ..action("preview")
        }));
        assert_eq!(app.state().modal.as_deref(), Some("Sales Dashboard"));
        assert!(app
            .host()
            .html(Target::Slot(Slot::ModalBody))
            .unwrap()
            .contains(r#"src="img/sales.png""#));
    }

    #[test]
    fn test_preview_without_image_toasts() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::Action(action("preview")));
        assert_eq!(app.state().modal, None);
        assert_eq!(app.state().toast.as_deref(), Some("No preview set."));
    }

    #[test]
    fn test_link_actions_open_new_tab() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::Action(ActionTrigger {
            url: Some("https://github.com/ada/sales".into()),
            ..action("github")
        }));
        app.dispatch(UiEvent::Action(ActionTrigger {
            url: Some("https://ada.dev/churn".into()),
            ..action("open")
        }));
        assert_eq!(
            app.host().opened_urls(),
            ["https://github.com/ada/sales", "https://ada.dev/churn"]
        );

        app.dispatch(UiEvent::Action(action("open")));
        assert_eq!(app.host().opened_urls().len(), 2);
        assert_eq!(app.state().toast.as_deref(), Some("Link not set yet."));
    }

    #[test]
    fn test_unknown_action_ignored() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::Action(ActionTrigger {
            url: Some("https://example.com".into()),
            ..action("launch")
        }));
        assert!(app.host().opened_urls().is_empty());
        assert_eq!(app.state().toast, None);
    }

    #[test]
    fn test_contact_modal_routes_through_actions() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::OpenContact);
        assert_eq!(app.state().modal.as_deref(), Some("Contact"));
        let body = app.host().html(Target::Slot(Slot::ModalBody)).unwrap();
        assert!(!body.contains("onclick"));
        assert!(body.contains(r#"data-action="copy" data-text="https://linkedin.com/in/ada""#));

        app.dispatch(UiEvent::Action(ActionTrigger {
            text: Some("https://linkedin.com/in/ada".into()),
            ..action("copy")
        }));
        assert_eq!(app.host().clipboard_writes(), ["https://linkedin.com/in/ada"]);
    }

    #[test]
    fn test_clipboard_feedback() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::CopyAbout);
        assert_eq!(
            app.host().clipboard_writes(),
            ["I turn spreadsheets into decisions."]
        );

        app.dispatch(UiEvent::ClipboardDone { ok: true });
        assert_eq!(app.state().toast.as_deref(), Some("Copied ✅"));
        app.dispatch(UiEvent::ClipboardDone { ok: false });
        assert_eq!(
            app.state().toast.as_deref(),
            Some("Copy failed (browser blocked).")
        );
    }

    #[test]
    fn test_profile_links_and_resume() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::OpenLinkedIn);
        app.dispatch(UiEvent::OpenGitHub);
        assert_eq!(
            app.host().opened_urls(),
            ["https://linkedin.com/in/ada", "https://github.com/ada"]
        );

        app.dispatch(UiEvent::DownloadResume);
        assert_eq!(
            app.state().toast.as_deref(),
            Some("Add resume.pdf later and link it.")
        );
    }

    #[test]
    fn test_featured_buttons() {
        let mut app = loaded_app();

        app.dispatch(UiEvent::FeaturedOpen);
        assert_eq!(app.state().toast.as_deref(), Some("No project link set."));
        assert!(app.host().opened_urls().is_empty());

        app.dispatch(UiEvent::FeaturedGitHub);
        assert_eq!(app.host().opened_urls(), ["https://github.com/ada/sales"]);

        app.dispatch(UiEvent::FeaturedImage);
        assert_eq!(app.state().modal.as_deref(), Some("Preview"));
    }

    #[test]
    fn test_featured_image_without_preview_is_noop() {
        let mut app = loaded_app();
        app.render_featured(Some(&crate::Project {
            title: "Plain".into(),
            ..Default::default()
        }));

        app.dispatch(UiEvent::FeaturedImage);
        assert_eq!(app.state().modal, None);
        assert_eq!(app.state().toast, None);

        app.dispatch(UiEvent::FeaturedPreview);
        assert_eq!(app.state().modal, None);
        assert_eq!(app.state().toast.as_deref(), Some("No preview image set."));
    }

    #[test]
    fn test_help_mentions_data_url() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::OpenHelp);
        assert!(app
            .host()
            .html(Target::Slot(Slot::ModalBody))
            .unwrap()
            .contains("<code>data/projects.json</code>"));
    }
}
