//! Folio Web - browser front-end for the portfolio app
//!
//! Implements the core `Host` trait over the live DOM and wires DOM events
//! into `App::dispatch`. The app lives for the lifetime of the page.

mod bindings;
mod config;
mod dispatcher;
mod dom;
mod host;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{load_data, App, HttpSource};
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use dispatcher::Dispatcher;
pub use host::WebHost;

/// Entry point, run once the module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = config::from_document(&document);
    let dispatcher = Dispatcher::new();
    let host = WebHost::new(window.clone(), document, dispatcher.clone());
    let app = Rc::new(RefCell::new(App::new(host, config.clone())));
    dispatcher.attach(app.clone());

    if let Err(err) = app.borrow_mut().boot() {
        error!("Cannot start: {}", err);
        return Err(JsValue::from_str(&err.to_string()));
    }

    let base = window.location().href()?;
    spawn_local(async move {
        let result = match HttpSource::new(&base, &config.data_url) {
            Ok(source) => load_data(&source).await,
            Err(err) => Err(err),
        };
        dispatcher.with_app(|app| app.finish_load(result));
    });

    Ok(())
}
