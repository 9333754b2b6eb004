use super::{refresh_scale_icon, SharedDriver};
use crate::constants::*;
use crate::dom;
use crate::overlay;
use ar_core::ControllerEvent;
use web_sys as web;

/// Info, scale, rotate and close buttons.
pub fn wire_controls(document: &web::Document, driver: &SharedDriver) {
    wire_info(document, driver.clone());
    wire_close(document, driver.clone());
    wire_scale(document, driver.clone());
    wire_rotate(document, driver.clone());
}

fn wire_info(document: &web::Document, driver: SharedDriver) {
    let doc = document.clone();
    dom::on_click(document, INFO_BUTTON_SELECTOR, move |_| {
        let mut d = driver.borrow_mut();
        let open = d.toggle_panel();
        if let (true, Some(plant)) = (open, d.plant()) {
            overlay::fill_panel(&doc, plant);
        }
        overlay::set_panel_open(&doc, open);
    });
}

fn wire_close(document: &web::Document, driver: SharedDriver) {
    let doc = document.clone();
    dom::on_click(document, CLOSE_BUTTON_SELECTOR, move |_| {
        driver.borrow_mut().close_panel();
        overlay::set_panel_open(&doc, false);
    });
}

fn wire_scale(document: &web::Document, driver: SharedDriver) {
    let doc = document.clone();
    dom::on_click(document, SCALE_BUTTON_SELECTOR, move |_| {
        let mut d = driver.borrow_mut();
        if d.dispatch(ControllerEvent::CycleScale).is_changed() {
            refresh_scale_icon(&doc, &d);
        }
    });
}

fn wire_rotate(document: &web::Document, driver: SharedDriver) {
    let Some(button) = dom::query(document, ROTATE_BUTTON_SELECTOR) else {
        log::warn!("[dom] no element for {ROTATE_BUTTON_SELECTOR}");
        return;
    };
    let pulsed = button.clone();
    dom::add_click_listener(&button, move |_| {
        driver.borrow_mut().dispatch(ControllerEvent::ResetRotation);
        overlay::pulse(pulsed.clone());
    });
}
