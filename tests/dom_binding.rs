//! Binding behavior against a real DOM.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use inventory_page::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(markup: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(markup);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn display_of(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

/// Check a radio and fire `change` the way a user selection would.
fn select(root: &Element, name: &str, value: &str) {
    let radio: HtmlInputElement = find(root, &format!("input[name='{}'][value='{}']", name, value))
        .dyn_into()
        .unwrap();
    radio.set_checked(true);
    radio.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

fn is_hidden(container: &Element) -> bool {
    container.class_list().contains("hidden")
}

const HELMET_BLOCK: &str = r#"
    <div class="item-block" data-item="helmet">
        <input type="radio" name="helmet_status" value="OK">
        <input type="radio" name="helmet_status" value="Missing">
        <input type="radio" name="helmet_status" value="Red Tag">
        <div class="conditional-inputs hidden" id="helmet-cond"></div>
    </div>
"#;

#[wasm_bindgen_test]
fn accordion_click_toggles_body() {
    let root = fixture(
        r#"<div class="accordion">
            <h3 id="s1">Section 1</h3>
            <div id="b1" style="display:none">contents</div>
        </div>"#,
    );
    let report = bind(&root, &BinderConfig::default()).unwrap();
    assert_eq!(report.accordion_headers, 1);

    let header = find(&root, "#s1");
    let body = find(&root, "#b1");
    click(&header);
    assert_eq!(display_of(&body), "block");
    click(&header);
    assert_eq!(display_of(&body), "none");
}

#[wasm_bindgen_test]
fn accordion_headers_are_independent() {
    let root = fixture(
        r#"<div class="accordion">
            <h3 id="h1">One</h3><div id="b1"></div>
            <h3 id="h2">Two</h3><div id="b2" style="display:block"></div>
        </div>"#,
    );
    bind(&root, &BinderConfig::default()).unwrap();

    click(&find(&root, "#h1"));
    assert_eq!(display_of(&find(&root, "#b1")), "block");
    assert_eq!(display_of(&find(&root, "#b2")), "block");

    click(&find(&root, "#h2"));
    assert_eq!(display_of(&find(&root, "#b1")), "block");
    assert_eq!(display_of(&find(&root, "#b2")), "none");
}

#[wasm_bindgen_test]
fn accordion_header_without_body_is_noop() {
    let root = fixture(r#"<div class="accordion"><h3 id="lonely">Last</h3></div>"#);
    let report = bind(&root, &BinderConfig::default()).unwrap();
    assert_eq!(report.accordion_headers, 1);

    let header = find(&root, "#lonely");
    click(&header);
    toggle_section(&header);

    assert!(header.next_element_sibling().is_none());
    assert_eq!(find(&root, ".accordion").child_element_count(), 1);
    assert_eq!(display_of(&header), "");
}

#[wasm_bindgen_test]
fn binding_twice_keeps_a_single_toggle() {
    let root = fixture(
        r#"<div class="accordion">
            <h3 id="s1">Section 1</h3>
            <div id="b1" style="display:none">contents</div>
        </div>"#,
    );
    let first = bind(&root, &BinderConfig::default()).unwrap();
    let second = bind(&root, &BinderConfig::default()).unwrap();
    assert_eq!(first.accordion_headers, 1);
    assert_eq!(second.accordion_headers, 0);

    let header = find(&root, "#s1");
    let body = find(&root, "#b1");
    click(&header);
    assert_eq!(display_of(&body), "block");
    click(&header);
    assert_eq!(display_of(&body), "none");
}

#[wasm_bindgen_test]
fn helmet_status_drives_conditional_inputs() {
    let root = fixture(HELMET_BLOCK);
    let report = bind(&root, &BinderConfig::default()).unwrap();
    assert_eq!(report.item_blocks, 1);
    assert_eq!(report.status_radios, 3);

    let cond = find(&root, "#helmet-cond");
    select(&root, "helmet_status", "OK");
    assert!(is_hidden(&cond));
    select(&root, "helmet_status", "Missing");
    assert!(!is_hidden(&cond));
    select(&root, "helmet_status", "Red Tag");
    assert!(!is_hidden(&cond));
    select(&root, "helmet_status", "OK");
    assert!(is_hidden(&cond));
}

#[wasm_bindgen_test]
fn blocks_do_not_affect_each_other() {
    let root = fixture(
        r#"
        <div class="item-block" data-item="a">
            <input type="radio" name="a_status" value="OK">
            <input type="radio" name="a_status" value="Missing">
            <div class="conditional-inputs hidden" id="a-cond"></div>
        </div>
        <div class="item-block" data-item="b">
            <input type="radio" name="b_status" value="OK">
            <input type="radio" name="b_status" value="Not Returned">
            <div class="conditional-inputs hidden" id="b-cond"></div>
        </div>"#,
    );
    bind(&root, &BinderConfig::default()).unwrap();

    select(&root, "a_status", "Missing");
    assert!(!is_hidden(&find(&root, "#a-cond")));
    assert!(is_hidden(&find(&root, "#b-cond")));

    select(&root, "b_status", "Not Returned");
    select(&root, "a_status", "OK");
    assert!(is_hidden(&find(&root, "#a-cond")));
    assert!(!is_hidden(&find(&root, "#b-cond")));
}

#[wasm_bindgen_test]
fn malformed_blocks_are_skipped_without_blocking_others() {
    let markup = format!(
        r#"
        <div class="item-block">
            <input type="radio" name="_status" value="Missing">
            <div class="conditional-inputs hidden"></div>
        </div>
        <div class="item-block" data-item="gloves">
            <input type="radio" name="gloves_status" value="Missing">
        </div>
        <div class="item-block" data-item="vest">
            <input type="radio" name="other_status" value="Missing">
            <div class="conditional-inputs hidden"></div>
        </div>
        {}"#,
        HELMET_BLOCK
    );
    let root = fixture(&markup);
    let report = bind(&root, &BinderConfig::default()).unwrap();

    assert_eq!(report.item_blocks, 1);
    let reasons: Vec<SkipReason> = report.skipped_blocks.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::MissingItemId,
            SkipReason::MissingConditionalContainer,
            SkipReason::NoStatusRadios,
        ]
    );
    assert_eq!(report.skipped_blocks[1].item_id.as_deref(), Some("gloves"));

    // Selecting in the defective block must not throw.
    select(&root, "gloves_status", "Missing");

    select(&root, "helmet_status", "Missing");
    assert!(!is_hidden(&find(&root, "#helmet-cond")));
}

#[wasm_bindgen_test]
fn item_id_with_quotes_is_matched_by_name() {
    let root = fixture(
        r#"<div class="item-block" data-item='16" saw'>
            <input type="radio" name='16" saw_status' value="Red Tag" id="saw-red">
            <div class="conditional-inputs hidden" id="saw-cond"></div>
        </div>"#,
    );
    let report = bind(&root, &BinderConfig::default()).unwrap();
    assert_eq!(report.status_radios, 1);

    let radio: HtmlInputElement = find(&root, "#saw-red").dyn_into().unwrap();
    radio.set_checked(true);
    radio.dispatch_event(&Event::new("change").unwrap()).unwrap();
    assert!(!is_hidden(&find(&root, "#saw-cond")));
}

#[wasm_bindgen_test]
fn config_overrides_markup_names_and_triggers() {
    let root = fixture(
        r#"<section class="tool" data-tool="drill">
            <input type="radio" name="drill-state" value="Good">
            <input type="radio" name="drill-state" value="Lost">
            <div class="follow-up is-hidden" id="drill-cond"></div>
        </section>"#,
    );
    let config = BinderConfig::from_json(
        r#"{
            "itemBlockSelector": ".tool",
            "itemIdAttribute": "data-tool",
            "statusSuffix": "-state",
            "conditionalSelector": ".follow-up",
            "hiddenClass": "is-hidden",
            "triggerStatuses": ["Lost"]
        }"#,
    )
    .unwrap();
    let report = bind(&root, &config).unwrap();
    assert_eq!(report.item_blocks, 1);

    let cond = find(&root, "#drill-cond");
    select(&root, "drill-state", "Lost");
    assert!(!cond.class_list().contains("is-hidden"));
    select(&root, "drill-state", "Good");
    assert!(cond.class_list().contains("is-hidden"));
}

#[wasm_bindgen_test]
fn sync_on_bind_applies_restored_selection() {
    let root = fixture(
        r#"<div class="item-block" data-item="helmet">
            <input type="radio" name="helmet_status" value="OK">
            <input type="radio" name="helmet_status" value="Missing" checked>
            <div class="conditional-inputs hidden" id="helmet-cond"></div>
        </div>"#,
    );
    let config = BinderConfig {
        sync_on_bind: true,
        ..BinderConfig::default()
    };
    bind(&root, &config).unwrap();
    assert!(!is_hidden(&find(&root, "#helmet-cond")));
}

#[wasm_bindgen_test]
fn default_binding_leaves_restored_selection_alone() {
    let root = fixture(
        r#"<div class="item-block" data-item="helmet">
            <input type="radio" name="helmet_status" value="Missing" checked>
            <div class="conditional-inputs hidden" id="helmet-cond"></div>
        </div>"#,
    );
    bind(&root, &BinderConfig::default()).unwrap();
    assert!(is_hidden(&find(&root, "#helmet-cond")));
}

#[wasm_bindgen_test]
fn rebinding_item_blocks_reports_already_bound() {
    let root = fixture(HELMET_BLOCK);
    bind(&root, &BinderConfig::default()).unwrap();
    let again = bind(&root, &BinderConfig::default()).unwrap();

    assert_eq!(again.item_blocks, 0);
    assert_eq!(again.status_radios, 0);
    assert_eq!(again.skipped_blocks.len(), 1);
    assert_eq!(again.skipped_blocks[0].reason, SkipReason::AlreadyBound);

    let cond = find(&root, "#helmet-cond");
    select(&root, "helmet_status", "Missing");
    assert!(!is_hidden(&cond));
    select(&root, "helmet_status", "OK");
    assert!(is_hidden(&cond));
}

#[wasm_bindgen_test]
fn invalid_conditional_selector_is_a_dom_error() {
    let root = fixture(HELMET_BLOCK);
    let config = BinderConfig::from_json(r#"{"conditionalSelector": "div["}"#).unwrap();
    let err = bind(&root, &config).unwrap_err();
    assert!(matches!(err, BindError::Dom(_)));

    // Nothing was attached to the block.
    let radio = find(&root, "input[name='helmet_status'][value='Missing']");
    assert!(radio.get_attribute("data-inventory-bound").is_none());
}

#[wasm_bindgen_test]
fn invalid_selector_is_a_dom_error() {
    let root = fixture("<div></div>");
    let config = BinderConfig {
        accordion_header_selector: "h3[".to_string(),
        ..BinderConfig::default()
    };
    let err = bind(&root, &config).unwrap_err();
    assert!(matches!(err, BindError::Dom(_)));
}
