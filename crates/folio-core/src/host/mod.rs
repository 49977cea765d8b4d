//! Host abstraction
//!
//! The app never touches a document directly. It renders through [`Host`],
//! which a browser front-end implements over the DOM and [`MemoryHost`]
//! implements in memory. Host callbacks come back as [`crate::UiEvent`]s.

mod memory;
mod view;

pub use memory::MemoryHost;
pub use view::{Slot, ViewBindings};

use std::time::Duration;

/// Something the app can mutate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A fixed element of the shell
    Slot(Slot),
    /// Any element by id (rendered cards, collapsible bodies)
    Element(&'a str),
    /// Page section `#page-<key>`
    Page(&'a str),
    /// Sidebar buttons carrying `data-page="<key>"`
    NavButton(&'a str),
    /// `.chev` glyph inside the `[data-toggle="<id>"]` control
    Chevron(&'a str),
    /// The document body
    Body,
}

/// CSS display values the app switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(&self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != Display::None
    }
}

/// Handle of a pending host timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Listener groups, attached together by the initializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Binding {
    /// Modal close button and overlay background
    ModalDismiss,
    /// Sidebar buttons, brand/logo, hero call-to-action
    Navigation,
    /// `[data-toggle]` section headers
    Collapsibles,
    /// Delegated `[data-action]` clicks anywhere in the document
    Actions,
    ThemeToggle,
    Help,
    /// Contact, profile links, resume, scroll-top, copy-about
    TopButtons,
    /// Search input and clear button
    Search,
    /// Delegated `[data-skill]` clicks in the chip container
    SkillChips,
    /// Featured card buttons and image
    Featured,
}

impl Binding {
    /// Groups that do not depend on loaded data
    pub const STATIC: [Binding; 6] = [
        Binding::ModalDismiss,
        Binding::Navigation,
        Binding::Collapsibles,
        Binding::Actions,
        Binding::ThemeToggle,
        Binding::Help,
    ];
}

/// Everything the app needs from its environment
///
/// Writes against a missing target are silently dropped; required elements
/// are checked once up front by [`ViewBindings::resolve`].
pub trait Host {
    /// Whether the target exists in the document
    fn exists(&self, target: Target<'_>) -> bool;

    /// Keys of every `.page#page-<key>` section
    fn page_keys(&self) -> Vec<String>;

    /// Body ids referenced by `[data-toggle]` controls
    fn toggle_targets(&self) -> Vec<String>;

    fn set_text(&mut self, target: Target<'_>, text: &str);

    /// Replace the element's children with parsed markup
    fn set_html(&mut self, target: Target<'_>, html: &str);

    fn set_attribute(&mut self, target: Target<'_>, name: &str, value: &str);

    fn set_display(&mut self, target: Target<'_>, display: Display);

    /// Current display; `None` if the target does not exist
    fn display(&self, target: Target<'_>) -> Option<Display>;

    fn set_class(&mut self, target: Target<'_>, class: &str, enabled: bool);

    fn has_class(&self, target: Target<'_>, class: &str) -> bool;

    fn set_input_value(&mut self, target: Target<'_>, value: &str);

    fn scroll_to_top(&mut self);

    /// Open a URL in a new tab/window
    fn open_url(&mut self, url: &str);

    /// Start an asynchronous clipboard write; completion arrives as
    /// [`crate::UiEvent::ClipboardDone`]
    fn write_clipboard(&mut self, text: &str);

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&mut self, key: &str, value: &str);

    /// Arm a one-shot timer; expiry arrives as [`crate::UiEvent::TimerFired`]
    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    fn clear_timeout(&mut self, id: TimerId);

    /// Attach the DOM listeners for a group
    fn bind(&mut self, binding: Binding);

    fn current_year(&self) -> i32;
}
