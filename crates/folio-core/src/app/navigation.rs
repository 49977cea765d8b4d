//! Page navigation
//!
//! Exactly one page is visible at a time.

use tracing::debug;

use super::App;
use crate::constants::ui::ACTIVE_CLASS;
use crate::host::{Host, Target};

impl<H: Host> App<H> {
    /// Show `page_key` and highlight its nav button; unknown keys are a no-op
    pub fn activate_page(&mut self, page_key: &str) {
        if !self.view.has_page(page_key) {
            debug!("No page named {:?}", page_key);
            return;
        }

        for page in self.view.pages() {
            let active = page == page_key;
            self.host
                .set_class(Target::Page(page), ACTIVE_CLASS, active);
            self.host
                .set_class(Target::NavButton(page), ACTIVE_CLASS, active);
        }

        self.host.scroll_to_top();
        self.state.active_page = Some(page_key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::UiEvent;

    #[test]
    fn test_activate_shows_one_page() {
        let mut app = app();
        app.boot().unwrap();
        app.dispatch(UiEvent::Navigate("about".into()));
        app.dispatch(UiEvent::ExploreProjects);

        let host = app.host();
        assert!(host.has_class(Target::Page("projects"), ACTIVE_CLASS));
        assert!(host.has_class(Target::NavButton("projects"), ACTIVE_CLASS));
        for other in ["home", "about"] {
            assert!(!host.has_class(Target::Page(other), ACTIVE_CLASS));
            assert!(!host.has_class(Target::NavButton(other), ACTIVE_CLASS));
        }
        assert_eq!(host.scroll_count(), 2);
        assert_eq!(app.state().active_page.as_deref(), Some("projects"));
    }

    #[test]
    fn test_unknown_page_is_noop() {
        let mut app = app();
        app.boot().unwrap();
        app.dispatch(UiEvent::Navigate("home".into()));
        app.dispatch(UiEvent::Navigate("blog".into()));

        assert!(app.host().has_class(Target::Page("home"), ACTIVE_CLASS));
        assert_eq!(app.host().scroll_count(), 1);
        assert_eq!(app.state().active_page.as_deref(), Some("home"));
    }
}
