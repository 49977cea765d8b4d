//! Theme switching and persistence

use tracing::{debug, warn};

use super::App;
use crate::constants::ui::LIGHT_CLASS;
use crate::host::{Host, Target};
use crate::model::Theme;

impl<H: Host> App<H> {
    /// Apply a theme and persist it
    pub fn set_theme(&mut self, theme: Theme) {
        self.host
            .set_class(Target::Body, LIGHT_CLASS, theme == Theme::Light);
        let key = self.config.theme_storage_key.clone();
        self.host.storage_set(&key, theme.as_str());
        self.state.theme = theme;
    }

    /// Flip whatever mode is currently on screen
    pub fn toggle_theme(&mut self) {
        let was_light = self.host.has_class(Target::Body, LIGHT_CLASS);
        let next = if was_light { Theme::Dark } else { Theme::Light };
        self.set_theme(next);
        self.show_toast(match next {
            Theme::Dark => "Dark mode 🌙",
            Theme::Light => "Light mode ☀️",
        });
    }

    /// Theme from storage, falling back to the configured default
    pub(super) fn persisted_theme(&self) -> Theme {
        match self.host.storage_get(&self.config.theme_storage_key) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring invalid theme preference {:?}", value);
                self.config.default_theme
            }),
            None => {
                debug!("No theme preference stored");
                self.config.default_theme
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::config::FolioConfig;
    use crate::host::MemoryHost;
    use crate::UiEvent;

    #[test]
    fn test_default_theme_is_dark() {
        let mut app = app();
        app.boot().unwrap();
        assert_eq!(app.state().theme, Theme::Dark);
        assert!(!app.host().has_class(Target::Body, LIGHT_CLASS));
        assert_eq!(app.host().storage_get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_invalid_preference_falls_back() {
        let mut host = MemoryHost::shell();
        host.storage_set("theme", "sepia");
        let mut app = crate::App::new(host, FolioConfig::default());
        app.boot().unwrap();
        assert_eq!(app.state().theme, Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_and_survives_reload() {
        let mut app = app();
        app.boot().unwrap();

        app.dispatch(UiEvent::ToggleTheme);
        assert!(app.host().has_class(Target::Body, LIGHT_CLASS));
        assert_eq!(app.host().storage_get("theme").as_deref(), Some("light"));
        assert_eq!(app.state().toast.as_deref(), Some("Light mode ☀️"));

        app.dispatch(UiEvent::ToggleTheme);
        assert_eq!(app.host().storage_get("theme").as_deref(), Some("dark"));
        assert_eq!(app.state().toast.as_deref(), Some("Dark mode 🌙"));

        app.dispatch(UiEvent::ToggleTheme);

        // Simulated reload: fresh shell, same storage
        let mut reloaded = MemoryHost::shell();
        for (k, v) in app.host().storage() {
            reloaded.storage_set(k, v);
        }
        let mut app = crate::App::new(reloaded, FolioConfig::default());
        app.boot().unwrap();
        assert_eq!(app.state().theme, Theme::Light);
        assert!(app.host().has_class(Target::Body, LIGHT_CLASS));
    }

    #[test]
    fn test_custom_storage_key() {
        let config = FolioConfig {
            theme_storage_key: "folio-theme".into(),
            ..Default::default()
        };
        let mut app = crate::App::new(MemoryHost::shell(), config);
        app.set_theme(Theme::Light);
        assert_eq!(app.host().storage_get("folio-theme").as_deref(), Some("light"));
        assert_eq!(app.host().storage_get("theme"), None);
    }
}
