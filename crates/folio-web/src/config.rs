//! Inline configuration
//!
//! An optional `<script id="folioConfig" type="application/toml">` element
//! overrides the defaults. A malformed block is logged and ignored.

use folio_core::FolioConfig;
use tracing::{info, warn};
use web_sys::Document;

const CONFIG_ELEMENT_ID: &str = "folioConfig";

pub fn from_document(document: &Document) -> FolioConfig {
    let Some(source) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return FolioConfig::default();
    };

    match FolioConfig::from_toml_str(&source) {
        Ok(config) => {
            info!("Loaded inline config, data url {}", config.data_url);
            config
        }
        Err(e) => {
            warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            FolioConfig::default()
        }
    }
}
