//! Console logging
//!
//! `tracing` output goes to the browser console through tracing-wasm; panics
//! are reported there too.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Install the console subscriber and the panic hook
pub fn init() {
    console_error_panic_hook::set_once();

    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .set_report_logs_in_timings(false)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
