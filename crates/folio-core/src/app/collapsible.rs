//! Collapsible sections
//!
//! Each `[data-toggle]` control flips its own body. Sections are independent.

use tracing::debug;

use super::App;
use crate::constants::ui::{CHEVRON_CLOSED, CHEVRON_OPEN};
use crate::host::{Display, Host, Target};

impl<H: Host> App<H> {
    pub fn toggle_section(&mut self, body_id: &str) {
        if !self.view.has_toggle(body_id) {
            debug!("No collapsible section {:?}", body_id);
            return;
        }

        let body = Target::Element(body_id);
        let is_open = self.host.display(body).is_some_and(|d| d.is_visible());
        let (display, chevron) = if is_open {
            (Display::None, CHEVRON_CLOSED)
        } else {
            (Display::Block, CHEVRON_OPEN)
        };
        self.host.set_display(body, display);
        self.host.set_text(Target::Chevron(body_id), chevron);
    }
}
