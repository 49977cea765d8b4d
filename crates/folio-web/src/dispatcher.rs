//! Event dispatcher
//!
//! DOM listeners, timers, and clipboard completions all funnel through here.
//! Events are queued and drained whenever the app is free, so a callback
//! that fires while the app is mid-dispatch never double-borrows it.

use std::cell::{OnceCell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use folio_core::{App, Host, UiEvent};
use tracing::warn;

type SharedApp<H> = Rc<RefCell<App<H>>>;

pub struct Dispatcher<H: Host> {
    app: Rc<OnceCell<SharedApp<H>>>,
    queue: Rc<RefCell<VecDeque<UiEvent>>>,
}

impl<H: Host> Clone for Dispatcher<H> {
    fn clone(&self) -> Self {
        Self {
            app: Rc::clone(&self.app),
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<H: Host> Default for Dispatcher<H> {
    fn default() -> Self {
        Self {
            app: Rc::new(OnceCell::new()),
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<H: Host> Dispatcher<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect the app; only the first call has an effect
    pub fn attach(&self, app: SharedApp<H>) {
        if self.app.set(app).is_err() {
            warn!("Dispatcher already attached");
        }
    }

    pub fn dispatch(&self, event: UiEvent) {
        self.queue.borrow_mut().push_back(event);
        self.drain();
    }

    /// Events waiting for the app to become free
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run `f` against the app, then deliver anything queued meanwhile
    pub fn with_app(&self, f: impl FnOnce(&mut App<H>)) {
        let Some(app) = self.app.get() else {
            warn!("Dispatcher used before attach");
            return;
        };
        match app.try_borrow_mut() {
            Ok(mut app) => f(&mut app),
            Err(_) => {
                warn!("App busy, dropping direct call");
                return;
            }
        }
        self.drain();
    }

    fn drain(&self) {
        let Some(app) = self.app.get() else {
            return;
        };
        loop {
            // Whoever holds the borrow drains once it is done
            let Ok(mut app) = app.try_borrow_mut() else {
                return;
            };
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                return;
            };
            app.dispatch(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FolioConfig, MemoryHost};

    fn attached() -> (Dispatcher<MemoryHost>, SharedApp<MemoryHost>) {
        let mut app = App::new(MemoryHost::shell(), FolioConfig::default());
        app.boot().unwrap();
        let app = Rc::new(RefCell::new(app));
        let dispatcher = Dispatcher::new();
        dispatcher.attach(app.clone());
        (dispatcher, app)
    }

    #[test]
    fn test_dispatch_reaches_app() {
        let (dispatcher, app) = attached();
        dispatcher.dispatch(UiEvent::Navigate("about".into()));
        assert_eq!(app.borrow().state().active_page.as_deref(), Some("about"));
        assert_eq!(dispatcher.pending(), 0);
    }

    #[test]
    fn test_event_while_busy_is_delivered_later() {
        let (dispatcher, app) = attached();
        {
            let _busy = app.borrow_mut();
            dispatcher.dispatch(UiEvent::Navigate("projects".into()));
            assert_eq!(dispatcher.pending(), 1);
        }
        assert_eq!(app.borrow().state().active_page, None);

        // The next delivery flushes the backlog in order
        dispatcher.dispatch(UiEvent::Navigate("about".into()));
        assert_eq!(dispatcher.pending(), 0);
        assert_eq!(app.borrow().state().active_page.as_deref(), Some("about"));
        assert_eq!(app.borrow().host().scroll_count(), 2);
    }

    #[test]
    fn test_callback_during_with_app_is_drained_after() {
        let (dispatcher, app) = attached();
        let inner = dispatcher.clone();
        dispatcher.with_app(|app| {
            // A host callback firing synchronously mid-update
            inner.dispatch(UiEvent::ClipboardDone { ok: false });
            assert_eq!(inner.pending(), 1);
            assert_eq!(app.state().toast, None);
        });

        assert_eq!(dispatcher.pending(), 0);
        assert_eq!(
            app.borrow().state().toast.as_deref(),
            Some("Copy failed (browser blocked).")
        );
    }

    #[test]
    fn test_with_app_while_busy_is_dropped() {
        let (dispatcher, app) = attached();
        let _busy = app.borrow_mut();
        let mut ran = false;
        dispatcher.with_app(|_| ran = true);
        assert!(!ran);
    }

    #[test]
    fn test_dispatch_before_attach_stays_queued() {
        let dispatcher = Dispatcher::<MemoryHost>::new();
        dispatcher.dispatch(UiEvent::ToggleTheme);
        assert_eq!(dispatcher.pending(), 1);
    }
}
