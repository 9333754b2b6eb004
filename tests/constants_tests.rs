// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(PANEL_SHOW_DELAY_MS > 0);
    assert!(PANEL_HIDE_DELAY_MS >= PANEL_SHOW_DELAY_MS);
    assert!(BUTTON_PULSE_MS > 0);
    assert!(LOADER_FADE_MS > 0 && LOADER_DELAY_MS > 0);
    assert!(TOUCH_HINT_MS > PANEL_HIDE_DELAY_MS);
    assert!(MAX_FRAME_DT_MS > 1000.0 / 60.0);
}

#[test]
fn element_ids_are_plain_ids() {
    for id in [
        MODEL_ELEMENT_ID,
        INFO_PANEL_ID,
        FLOATING_INFO_ID,
        TOUCH_HINT_ID,
        SCAN_HINT_ID,
        PANEL_TITLE_ID,
        PANEL_ENGLISH_ID,
        PANEL_CATEGORY_ID,
        PANEL_DESCRIPTION_ID,
        PANEL_FAMILY_ID,
        PANEL_ORIGIN_ID,
        PANEL_FEATURE_ID,
        PANEL_FUN_FACT_ID,
        FLOAT_TITLE_ID,
        FLOAT_ENGLISH_ID,
        FLOAT_FAMILY_ID,
        FLOAT_ORIGIN_ID,
        FLOAT_CATEGORY_ID,
        FLOAT_FEATURE_ID,
        FLOAT_FUN_FACT_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
    }
}

#[test]
fn button_selectors_are_class_selectors() {
    for sel in [
        INFO_BUTTON_SELECTOR,
        ROTATE_BUTTON_SELECTOR,
        SCALE_BUTTON_SELECTOR,
        CLOSE_BUTTON_SELECTOR,
        LOADER_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert_ne!(ICON_EXPAND, ICON_COMPRESS);
}

#[test]
fn catalogue_markers_do_not_collide_with_page_ids() {
    let page_ids = [MODEL_ELEMENT_ID, INFO_PANEL_ID, FLOATING_INFO_ID, SCAN_HINT_ID];
    for marker in ar_core::marker_ids() {
        assert!(!page_ids.contains(&marker), "{marker}");
    }
}

#[test]
fn floating_card_and_panel_use_distinct_targets() {
    let panel = [
        PANEL_TITLE_ID,
        PANEL_ENGLISH_ID,
        PANEL_CATEGORY_ID,
        PANEL_FAMILY_ID,
        PANEL_ORIGIN_ID,
        PANEL_FEATURE_ID,
        PANEL_FUN_FACT_ID,
    ];
    for id in [
        FLOAT_TITLE_ID,
        FLOAT_ENGLISH_ID,
        FLOAT_CATEGORY_ID,
        FLOAT_FAMILY_ID,
        FLOAT_ORIGIN_ID,
        FLOAT_FEATURE_ID,
        FLOAT_FUN_FACT_ID,
    ] {
        assert!(!panel.contains(&id), "{id}");
    }
}
