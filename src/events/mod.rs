use crate::input::ContactSet;
use crate::overlay;
use crate::render::AttributeSink;
use ar_core::ControllerDriver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod controls;
mod markers;
mod pointer;

pub use controls::wire_controls;
pub use markers::wire_markers;
pub use pointer::{wire_pointer_handlers, wire_wheel, PointerWiring};

pub type SharedDriver = Rc<RefCell<ControllerDriver<AttributeSink>>>;

/// Bring overlays in line with the driver after a presence change.
pub fn sync_overlays(document: &web::Document, driver: &ControllerDriver<AttributeSink>) {
    let visible = driver.controller().presence().is_visible();
    overlay::set_tracking(document, visible);
    match driver.plant() {
        Some(plant) if visible => {
            overlay::fill_floating_info(document, plant);
            if driver.panel_open() {
                overlay::fill_panel(document, plant);
            }
        }
        Some(_) => overlay::set_panel_open(document, false),
        None => {
            overlay::set_panel_open(document, false);
            overlay::clear_panel(document);
        }
    }
    if !visible {
        overlay::hide_touch_hint(document);
    }
    refresh_scale_icon(document, driver);
}

/// Forget contacts still down when the model hides.
pub fn drop_contacts(contacts: &mut ContactSet) {
    let dropped = contacts.release_all();
    if dropped > 0 {
        log::debug!("[input] dropped {dropped} contact(s) on hide");
    }
}

pub(crate) fn refresh_scale_icon(document: &web::Document, driver: &ControllerDriver<AttributeSink>) {
    let c = driver.controller();
    let enlarged = c.transform().scale > c.config().default_transform.scale;
    overlay::update_scale_icon(document, enlarged);
}
