use super::{refresh_scale_icon, SharedDriver};
use crate::input::{self, ContactSet};
use crate::overlay;
use ar_core::ControllerEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub target: web::EventTarget,
    pub document: web::Document,
    pub driver: SharedDriver,
    pub contacts: Rc<RefCell<ContactSet>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn listen(target: &web::EventTarget, name: &str, f: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::PointerEvent)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let target = w.target.clone();
    listen(&target, "pointerdown", move |ev| {
        let snapshot = {
            let mut contacts = w.contacts.borrow_mut();
            contacts.press(ev.pointer_id(), input::pointer_client_px(&ev));
            contacts.snapshot()
        };
        let outcome = w
            .driver
            .borrow_mut()
            .dispatch(ControllerEvent::PointerDown(snapshot));
        if outcome != ar_core::Outcome::Ignored {
            overlay::fade_touch_hint(&w.document);
        }
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.target.clone();
    listen(&target, "pointermove", move |ev| {
        let snapshot = {
            let mut contacts = w.contacts.borrow_mut();
            if !contacts.update(ev.pointer_id(), input::pointer_client_px(&ev)) {
                return;
            }
            contacts.snapshot()
        };
        let mut driver = w.driver.borrow_mut();
        if driver
            .dispatch(ControllerEvent::PointerMove(snapshot))
            .is_changed()
        {
            ev.prevent_default();
            refresh_scale_icon(&w.document, &driver);
        }
    });
}

fn wire_pointerup(w: &PointerWiring, name: &str) {
    let w = w.clone();
    let target = w.target.clone();
    listen(&target, name, move |ev| {
        let snapshot = {
            let mut contacts = w.contacts.borrow_mut();
            if !contacts.release(ev.pointer_id()) {
                return;
            }
            contacts.snapshot()
        };
        w.driver
            .borrow_mut()
            .dispatch(ControllerEvent::PointerUp(snapshot));
    });
}

/// Mouse-wheel zoom. Non-passive; page scroll is blocked only while zooming.
pub fn wire_wheel(target: &web::EventTarget, document: web::Document, driver: SharedDriver) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let direction = input::wheel_direction(ev.delta_y());
        if direction == 0.0 {
            return;
        }
        let mut driver = driver.borrow_mut();
        let outcome = driver.dispatch(ControllerEvent::Wheel(direction));
        if input::consumes_wheel(&outcome) {
            ev.prevent_default();
        }
        if outcome.is_changed() {
            refresh_scale_icon(&document, &driver);
        }
    }) as Box<dyn FnMut(web::WheelEvent)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
