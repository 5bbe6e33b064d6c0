//! Markup conventions the binder looks for.
//!
//! Defaults match the markup rendered by the inventory server. A page may
//! override any subset of them through an embedded JSON element
//! (`#inventory-page-config`) or an explicit `bind_inventory_page` call.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{BindError, BindResult};
use crate::visibility::TriggerSet;

/// Id of the optional `<script type="application/json">` element carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "inventory-page-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinderConfig {
    pub accordion_header_selector: String,
    pub item_block_selector: String,
    pub item_id_attribute: String,
    pub status_suffix: String,
    pub conditional_selector: String,
    pub hidden_class: String,
    pub trigger_statuses: TriggerSet,
    /// Apply the current checked radio's decision at bind time.
    pub sync_on_bind: bool,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            accordion_header_selector: ".accordion h3".to_string(),
            item_block_selector: ".item-block".to_string(),
            item_id_attribute: "data-item".to_string(),
            status_suffix: "_status".to_string(),
            conditional_selector: ".conditional-inputs".to_string(),
            hidden_class: "hidden".to_string(),
            trigger_statuses: TriggerSet::default(),
            sync_on_bind: false,
        }
    }
}

impl BinderConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> BindResult<Self> {
        let config: BinderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from a JS value. `undefined` and `null` yield the defaults.
    pub fn from_js(value: JsValue) -> BindResult<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: BinderConfig = serde_wasm_bindgen::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BindResult<()> {
        let required = [
            ("accordionHeaderSelector", &self.accordion_header_selector),
            ("itemBlockSelector", &self.item_block_selector),
            ("itemIdAttribute", &self.item_id_attribute),
            ("conditionalSelector", &self.conditional_selector),
            ("hiddenClass", &self.hidden_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(BindError::InvalidConfig(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        // classList.add rejects tokens containing whitespace
        if self.hidden_class.chars().any(char::is_whitespace) {
            return Err(BindError::InvalidConfig(format!(
                "hiddenClass '{}' must be a single class token",
                self.hidden_class
            )));
        }
        if self.trigger_statuses.is_empty() {
            return Err(BindError::InvalidConfig(
                "triggerStatuses must name at least one status".to_string(),
            ));
        }
        Ok(())
    }

    /// Name shared by an item's status radios, e.g. `helmet_status`.
    pub fn radio_group_name(&self, item_id: &str) -> String {
        format!("{}{}", item_id, self.status_suffix)
    }
}
