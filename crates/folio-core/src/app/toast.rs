//! Toast notifications
//!
//! One toast at a time. Every call restarts the hide timer; an expired timer
//! only hides the toast if it is still the current one, so the last call wins.

use tracing::debug;

use super::App;
use crate::host::{Display, Host, Slot, Target, TimerId};

impl<H: Host> App<H> {
    /// Show a transient message
    pub fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        let target = Target::Slot(Slot::Toast);
        self.host.set_text(target, &message);
        self.host.set_display(target, Display::Block);

        if let Some(previous) = self.state.toast_timer.take() {
            self.host.clear_timeout(previous);
        }
        let timer = self.host.set_timeout(self.config.toast_duration());
        self.state.toast_timer = Some(timer);
        self.state.toast = Some(message);
    }

    pub(super) fn on_timer(&mut self, id: TimerId) {
        if self.state.toast_timer != Some(id) {
            debug!("Stale timer {:?}", id);
            return;
        }
        self.host.clear_timeout(id);
        self.host
            .set_display(Target::Slot(Slot::Toast), Display::None);
        self.state.toast_timer = None;
        self.state.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;
    use crate::UiEvent;

    #[test]
    fn test_toast_shows_and_hides() {
        let mut app = app();
        app.show_toast("Saved");
        let target = Target::Slot(Slot::Toast);
        assert_eq!(app.host().text(target), Some("Saved"));
        assert_eq!(app.host().display(target), Some(Display::Block));

        let timer = app.state().toast_timer.unwrap();
        app.dispatch(UiEvent::TimerFired(timer));
        assert_eq!(app.host().display(target), Some(Display::None));
        assert_eq!(app.state().toast, None);
    }

    #[test]
    fn test_last_toast_wins() {
        let mut app = app();
        app.show_toast("first");
        let first = app.state().toast_timer.unwrap();
        app.show_toast("second");
        let second = app.state().toast_timer.unwrap();

        // Only the newest timer is still armed
        assert_eq!(app.host().pending_timers(), vec![second]);

        app.dispatch(UiEvent::TimerFired(first));
        let target = Target::Slot(Slot::Toast);
        assert_eq!(app.host().display(target), Some(Display::Block));
        assert_eq!(app.host().text(target), Some("second"));

        app.dispatch(UiEvent::TimerFired(second));
        assert_eq!(app.host().display(target), Some(Display::None));
    }
}
