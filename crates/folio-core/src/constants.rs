//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Data document configuration
pub mod data {
    /// Relative path of the portfolio document, resolved against the page location
    pub const DATA_URL: &str = "data/projects.json";
}

/// UI configuration
pub mod ui {
    use super::*;

    /// How long a toast stays visible before auto-hiding
    pub const TOAST_DURATION: Duration = Duration::from_millis(2200);

    /// localStorage key holding the theme preference
    pub const THEME_STORAGE_KEY: &str = "theme";

    /// Body class applied in light mode
    pub const LIGHT_CLASS: &str = "light";

    /// Class marking the visible page and the highlighted nav button
    pub const ACTIVE_CLASS: &str = "active";

    /// Number of highlights shown on a card or the featured project
    pub const MAX_HIGHLIGHTS: usize = 3;

    /// Page shown by the brand/logo
    pub const HOME_PAGE: &str = "home";

    /// Page shown by the hero call-to-action
    pub const PROJECTS_PAGE: &str = "projects";

    /// Chevron glyph for a closed collapsible section
    pub const CHEVRON_CLOSED: &str = "▸";

    /// Chevron glyph for an open collapsible section
    pub const CHEVRON_OPEN: &str = "▾";
}

/// Profile fallbacks used when the document leaves a field empty
pub mod labels {
    pub const DEFAULT_NAME: &str = "Your Name";
    pub const DEFAULT_HEADLINE: &str = "Portfolio";
    pub const DEFAULT_FOCUS: &str = "Projects";
    pub const CORE_SKILL_SEPARATOR: &str = " • ";
}
