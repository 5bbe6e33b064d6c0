//! Inventory page behavior
//!
//! Client-side wiring for the server-rendered inventory check-in form,
//! compiled to WebAssembly:
//! - Accordion headers toggle the section body that follows them
//! - Item blocks reveal their follow-up inputs (location, reason) while a
//!   trigger status such as `Missing` or `Red Tag` is selected
//!
//! ## Example
//! ```no_run
//! use inventory_page::prelude::*;
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let report = bind(&document, &BinderConfig::default()).unwrap();
//! log::info!("{} item block(s) bound", report.item_blocks);
//! ```

pub mod accordion;
pub mod conditional;
pub mod config;
pub mod dom;
pub mod error;
pub mod visibility;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::conditional::SkippedBlock;
use crate::config::{BinderConfig, CONFIG_ELEMENT_ID};
use crate::dom::QueryRoot;
use crate::error::{BindError, BindResult};

// Re-export common types
pub mod prelude {
    pub use crate::accordion::{bind_accordions, toggle_section};
    pub use crate::conditional::{apply_status, bind_item_blocks, SkipReason, SkippedBlock};
    pub use crate::config::BinderConfig;
    pub use crate::dom::QueryRoot;
    pub use crate::error::{BindError, BindResult};
    pub use crate::visibility::{conditional_visibility, DisplayState, TriggerSet, Visibility};
    pub use crate::{bind, BindReport};
}

/// What a binding pass attached to the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindReport {
    pub accordion_headers: usize,
    pub item_blocks: usize,
    pub status_radios: usize,
    pub skipped_blocks: Vec<SkippedBlock>,
}

/// Attach accordion and conditional-input behavior to everything under `root`.
///
/// The two behaviors are independent; per-block markup defects are reported
/// in [`BindReport::skipped_blocks`] rather than failing the pass.
pub fn bind(root: &impl QueryRoot, config: &BinderConfig) -> BindResult<BindReport> {
    let accordion_headers = accordion::bind_accordions(root, config)?;
    let blocks = conditional::bind_item_blocks(root, config)?;

    Ok(BindReport {
        accordion_headers,
        item_blocks: blocks.bound_blocks,
        status_radios: blocks.status_radios,
        skipped_blocks: blocks.skipped,
    })
}

/// Initialize logging and bind the page once the document is parsed.
#[cfg_attr(feature = "autostart", wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Ignore if a host page already installed a logger
    let _ = console_log::init_with_level(log::Level::Info);

    let document = dom::document().ok_or_else(|| JsError::from(BindError::NoDocument))?;

    if document.ready_state() == "loading" {
        let ready = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_event| bind_document(&ready))?;
    } else {
        bind_document(&document);
    }
    Ok(())
}

fn bind_document(document: &Document) {
    let config = embedded_config(document);
    match bind(document, &config) {
        Ok(report) => log::info!(
            "Inventory page bound: {} accordion header(s), {} item block(s), {} skipped",
            report.accordion_headers,
            report.item_blocks,
            report.skipped_blocks.len()
        ),
        Err(e) => log::error!("Failed to bind inventory page: {}", e),
    }
}

/// Overrides from `#inventory-page-config`, or the defaults when absent or invalid.
fn embedded_config(document: &Document) -> BinderConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return BinderConfig::default();
    };

    match BinderConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            BinderConfig::default()
        }
    }
}

/// Bind one container explicitly from JS.
///
/// `config` may be `undefined`/`null` for the defaults or an object with any
/// subset of the camelCase config fields. Returns the bind report.
#[wasm_bindgen(js_name = "bindInventoryPage")]
pub fn bind_inventory_page(root: Element, config: JsValue) -> Result<JsValue, JsError> {
    let config = BinderConfig::from_js(config)?;
    let report = bind(&root, &config)?;
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
