use super::{drop_contacts, sync_overlays, SharedDriver};
use crate::dom;
use crate::input::ContactSet;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook `markerFound`/`markerLost` on every catalogued marker element.
/// Returns how many markers were wired.
pub fn wire_markers(
    document: &web::Document,
    driver: &SharedDriver,
    contacts: &Rc<RefCell<ContactSet>>,
) -> usize {
    let mut wired = 0;
    for marker_id in ar_core::marker_ids() {
        let Some(el) = document.get_element_by_id(marker_id) else {
            log::warn!("[marker] no element #{marker_id} on this page");
            continue;
        };
        wire_found(&el, marker_id, driver.clone());
        wire_lost(&el, marker_id, driver.clone(), contacts.clone());
        wired += 1;
    }
    wired
}

fn listen(el: &web::Element, name: &str, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_: web::Event| f()) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_found(el: &web::Element, marker_id: &'static str, driver: SharedDriver) {
    listen(el, "markerFound", move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let mut d = driver.borrow_mut();
        if d.marker_found(marker_id) {
            sync_overlays(&document, &d);
            overlay::show_touch_hint(&document);
        }
    });
}

fn wire_lost(
    el: &web::Element,
    marker_id: &'static str,
    driver: SharedDriver,
    contacts: Rc<RefCell<ContactSet>>,
) {
    listen(el, "markerLost", move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        let mut d = driver.borrow_mut();
        d.marker_lost(marker_id);
        if !d.controller().presence().is_visible() {
            drop_contacts(&mut contacts.borrow_mut());
        }
        sync_overlays(&document, &d);
    });
}
