use crate::constants::*;
use crate::dom;
use ar_core::PlantRecord;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().add_1("visible");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().remove_1("visible");
}

#[inline]
pub fn is_visible(el: &web::Element) -> bool {
    el.class_list().contains("visible")
}

/// Open or close the details panel with the CSS fade.
pub fn set_panel_open(document: &web::Document, open: bool) {
    let Some(panel) = document.get_element_by_id(INFO_PANEL_ID) else {
        return;
    };
    if open {
        dom::set_display(&panel, "block");
        dom::after_ms(PANEL_SHOW_DELAY_MS, move || show(&panel));
    } else {
        hide(&panel);
        dom::after_ms(PANEL_HIDE_DELAY_MS, move || {
            // reopened while fading
            if !is_visible(&panel) {
                dom::set_display(&panel, "none");
            }
        });
    }
}

pub fn fill_panel(document: &web::Document, plant: &PlantRecord) {
    dom::set_text(document, PANEL_TITLE_ID, plant.title);
    dom::set_text(document, PANEL_ENGLISH_ID, plant.english_name);
    dom::set_text(document, PANEL_CATEGORY_ID, plant.category);
    dom::set_text(document, PANEL_DESCRIPTION_ID, plant.description);
    dom::set_text(document, PANEL_FAMILY_ID, plant.specs.family);
    dom::set_text(document, PANEL_ORIGIN_ID, plant.specs.origin);
    dom::set_text(document, PANEL_FEATURE_ID, plant.specs.feature);
    dom::set_text(
        document,
        PANEL_FUN_FACT_ID,
        &format!("{FUN_FACT_PREFIX}{}", plant.fun_fact),
    );
}

/// Compact card shown while a plant is tracked.
pub fn fill_floating_info(document: &web::Document, plant: &PlantRecord) {
    dom::set_text(document, FLOAT_TITLE_ID, plant.title);
    dom::set_text(document, FLOAT_ENGLISH_ID, plant.english_name);
    dom::set_text(document, FLOAT_FAMILY_ID, plant.specs.family);
    dom::set_text(document, FLOAT_ORIGIN_ID, plant.specs.origin);
    dom::set_text(document, FLOAT_CATEGORY_ID, plant.category);
    dom::set_text(document, FLOAT_FEATURE_ID, plant.specs.feature);
    dom::set_text(document, FLOAT_FUN_FACT_ID, plant.fun_fact);
}

pub fn clear_panel(document: &web::Document) {
    for id in [
        PANEL_TITLE_ID,
        PANEL_ENGLISH_ID,
        PANEL_CATEGORY_ID,
        PANEL_DESCRIPTION_ID,
        PANEL_FUN_FACT_ID,
    ] {
        dom::set_text(document, id, "");
    }
    for id in [PANEL_FAMILY_ID, PANEL_ORIGIN_ID, PANEL_FEATURE_ID] {
        dom::set_text(document, id, PANEL_EMPTY_SPEC);
    }
}

/// Scan prompt and floating card are mutually exclusive.
pub fn set_tracking(document: &web::Document, plant_visible: bool) {
    if let Some(el) = document.get_element_by_id(SCAN_HINT_ID) {
        dom::set_display(&el, if plant_visible { "none" } else { "block" });
    }
    if let Some(el) = document.get_element_by_id(FLOATING_INFO_ID) {
        dom::set_display(&el, if plant_visible { "flex" } else { "none" });
    }
}

pub fn show_touch_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOUCH_HINT_ID) {
        _ = el.set_attribute("style", "display:flex;opacity:1");
        dom::after_ms(TOUCH_HINT_MS, move || {
            _ = el.set_attribute("style", "display:flex;opacity:0");
        });
    }
}

pub fn fade_touch_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOUCH_HINT_ID) {
        _ = el.set_attribute("style", "display:flex;opacity:0");
    }
}

pub fn hide_touch_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOUCH_HINT_ID) {
        dom::set_display(&el, "none");
    }
}

pub fn dismiss_loader(document: &web::Document) {
    let Some(loader) = dom::query(document, LOADER_SELECTOR) else {
        return;
    };
    dom::after_ms(LOADER_DELAY_MS, move || {
        _ = loader.set_attribute("style", "opacity:0");
        dom::after_ms(LOADER_FADE_MS, move || dom::set_display(&loader, "none"));
    });
}

/// Flip the scale button between expand and compress.
pub fn update_scale_icon(document: &web::Document, enlarged: bool) {
    let icon = dom::query(document, SCALE_BUTTON_SELECTOR)
        .and_then(|btn| btn.query_selector("i").ok().flatten());
    if let Some(icon) = icon {
        icon.set_class_name(if enlarged { ICON_COMPRESS } else { ICON_EXPAND });
    }
}

pub fn pulse(el: web::Element) {
    _ = el.class_list().add_1("pulse");
    dom::after_ms(BUTTON_PULSE_MS, move || {
        _ = el.class_list().remove_1("pulse");
    });
}
