//! Conditional follow-up fields inside each item block.
//!
//! Each block carries an item id, a radio group named `<id>_status`, and one
//! container of follow-up inputs (location, reason). The container is shown
//! while a trigger status is selected and hidden otherwise. Blocks are bound
//! independently; a malformed block is skipped and reported, never fatal.

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::config::BinderConfig;
use crate::dom::{self, QueryRoot};
use crate::error::BindResult;
use crate::visibility::{conditional_visibility, TriggerSet, Visibility};

const BEHAVIOR: &str = "status";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    MissingItemId,
    MissingConditionalContainer,
    NoStatusRadios,
    /// Every status radio already has a listener from an earlier pass.
    AlreadyBound,
    /// A DOM call failed while attaching listeners.
    BindFailed,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedBlock {
    /// Position of the block among the matched item blocks.
    pub index: u32,
    pub item_id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub bound_blocks: usize,
    pub status_radios: usize,
    pub skipped: Vec<SkippedBlock>,
}

/// Wire the status radios of every item block under `root`.
///
/// A selector the browser rejects fails the whole pass; problems in a single
/// block are recorded in [`BlockSummary::skipped`].
pub fn bind_item_blocks(root: &impl QueryRoot, config: &BinderConfig) -> BindResult<BlockSummary> {
    let blocks = root.select_all(&config.item_block_selector)?;
    // Surface a malformed container selector here instead of once per block.
    root.select_all(&config.conditional_selector)?;
    let mut summary = BlockSummary::default();

    for (index, block) in dom::elements(&blocks).enumerate() {
        let index = index as u32;
        match bind_block(&block, config) {
            Ok(BlockOutcome::Bound(radios)) => {
                summary.bound_blocks += 1;
                summary.status_radios += radios;
            }
            Ok(BlockOutcome::Skipped(item_id, reason)) => {
                log::debug!("Skipping item block {} ({:?}): {:?}", index, item_id, reason);
                summary.skipped.push(SkippedBlock { index, item_id, reason });
            }
            Err(e) => {
                log::warn!("Failed to bind item block {}: {}", index, e);
                summary.skipped.push(SkippedBlock {
                    index,
                    item_id: block.get_attribute(&config.item_id_attribute),
                    reason: SkipReason::BindFailed,
                });
            }
        }
    }

    log::debug!(
        "Bound {} item block(s), {} status radio(s), skipped {}",
        summary.bound_blocks,
        summary.status_radios,
        summary.skipped.len()
    );
    Ok(summary)
}

enum BlockOutcome {
    Bound(usize),
    /// Markup defect; nothing was attached to the block.
    Skipped(Option<String>, SkipReason),
}

fn bind_block(block: &Element, config: &BinderConfig) -> BindResult<BlockOutcome> {
    let item_id = match block.get_attribute(&config.item_id_attribute) {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(BlockOutcome::Skipped(None, SkipReason::MissingItemId)),
    };

    let Some(container) = block.query_selector(&config.conditional_selector)? else {
        return Ok(BlockOutcome::Skipped(Some(item_id), SkipReason::MissingConditionalContainer));
    };

    let radios = status_radios(block, &config.radio_group_name(&item_id))?;
    if radios.is_empty() {
        return Ok(BlockOutcome::Skipped(Some(item_id), SkipReason::NoStatusRadios));
    }

    let radios: Vec<HtmlInputElement> = radios
        .into_iter()
        .filter(|radio| !dom::is_bound(radio, BEHAVIOR))
        .collect();
    if radios.is_empty() {
        return Ok(BlockOutcome::Skipped(Some(item_id), SkipReason::AlreadyBound));
    }

    for radio in &radios {
        let selected = radio.clone();
        let target = container.clone();
        let hidden_class = config.hidden_class.clone();
        let triggers = config.trigger_statuses.clone();
        dom::listen(radio, "change", move |_event| {
            apply_status(&target, &selected.value(), &triggers, &hidden_class);
        })?;
        dom::mark_bound(radio, BEHAVIOR)?;

        if config.sync_on_bind && radio.checked() {
            apply_status(&container, &radio.value(), &config.trigger_statuses, &config.hidden_class);
        }
    }

    Ok(BlockOutcome::Bound(radios.len()))
}

/// Radio inputs inside `block` whose name is exactly `group`.
fn status_radios(block: &Element, group: &str) -> BindResult<Vec<HtmlInputElement>> {
    let inputs = block.query_selector_all("input[type=\"radio\"]")?;
    let radios = dom::elements(&inputs)
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .filter(|input| input.name() == group)
        .collect();
    Ok(radios)
}

/// Show or hide `container` for the selected status `value`.
pub fn apply_status(container: &Element, value: &str, triggers: &TriggerSet, hidden_class: &str) {
    let class_list = container.class_list();
    let result = match conditional_visibility(value, triggers) {
        Visibility::Visible => class_list.remove_1(hidden_class),
        Visibility::Hidden => class_list.add_1(hidden_class),
    };
    if let Err(e) = result {
        log::warn!("Failed to update conditional inputs for '{}': {:?}", value, e);
    }
}
