//! UI state record
//!
//! The only mutable presentation state in the app. Owned by `App` and
//! changed exclusively from event handlers.

use crate::host::TimerId;
use crate::model::Theme;

/// Progress of the one data fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Page currently shown, `None` until the first navigation
    pub active_page: Option<String>,
    pub theme: Theme,
    /// Message of the visible toast
    pub toast: Option<String>,
    /// Timer that will hide the visible toast
    pub toast_timer: Option<TimerId>,
    /// Title of the open modal
    pub modal: Option<String>,
    /// Normalized query last applied to the project cards
    pub search_query: String,
    /// Skill whose detail text is shown
    pub selected_skill: Option<usize>,
    pub load: LoadState,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_page: None,
            theme,
            toast: None,
            toast_timer: None,
            modal: None,
            search_query: String::new(),
            selected_skill: None,
            load: LoadState::Pending,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
