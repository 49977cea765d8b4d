//! Modal dialog
//!
//! Body markup is inserted as given; callers escape whatever they interpolate.

use super::App;
use crate::host::{Display, Host, Slot, Target};

impl<H: Host> App<H> {
    pub fn open_modal(&mut self, title: &str, body_html: &str) {
        self.host.set_text(Target::Slot(Slot::ModalTitle), title);
        self.host.set_html(Target::Slot(Slot::ModalBody), body_html);

        let overlay = Target::Slot(Slot::ModalOverlay);
        self.host.set_display(overlay, Display::Flex);
        self.host.set_attribute(overlay, "aria-hidden", "false");
        self.state.modal = Some(title.to_string());
    }

    pub fn close_modal(&mut self) {
        let overlay = Target::Slot(Slot::ModalOverlay);
        self.host.set_display(overlay, Display::None);
        self.host.set_attribute(overlay, "aria-hidden", "true");
        self.state.modal = None;
    }
}
