//! Accordion sections: a header toggles the body that immediately follows it.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::BinderConfig;
use crate::dom::{self, QueryRoot};
use crate::error::BindResult;
use crate::visibility::toggled_display;

const BEHAVIOR: &str = "accordion";

/// Register a click toggle on every accordion header under `root`.
///
/// Headers bound by an earlier pass are left as they are, so a section never
/// gets two toggles. Returns the number of headers newly bound.
pub fn bind_accordions(root: &impl QueryRoot, config: &BinderConfig) -> BindResult<usize> {
    let headers = root.select_all(&config.accordion_header_selector)?;
    let mut bound = 0;

    for header in dom::elements(&headers) {
        if dom::is_bound(&header, BEHAVIOR) {
            continue;
        }
        let target = header.clone();
        dom::listen(&header, "click", move |_event| toggle_section(&target))?;
        dom::mark_bound(&header, BEHAVIOR)?;
        bound += 1;
    }

    log::debug!("Bound {} accordion header(s)", bound);
    Ok(bound)
}

/// Flip the inline display of the header's next sibling between `block` and `none`.
///
/// A header without a sibling body is left alone.
pub fn toggle_section(header: &Element) {
    let Some(body) = header
        .next_element_sibling()
        .and_then(|sibling| sibling.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("Accordion header has no body sibling; ignoring click");
        return;
    };

    let style = body.style();
    let current = style.get_property_value("display").unwrap_or_default();
    if let Err(e) = style.set_property("display", toggled_display(&current)) {
        log::warn!("Failed to toggle accordion body: {:?}", e);
    }
}
