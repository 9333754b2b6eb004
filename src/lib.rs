#![cfg(target_arch = "wasm32")]
use ar_core::{default_plant, find_plant, ControllerConfig, ControllerDriver, ControllerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{MODEL_ELEMENT_ID, PROFILE_ATTRIBUTE};
use events::SharedDriver;
use render::AttributeSink;

thread_local! {
    // Handle for the console debug exports below.
    static DRIVER: RefCell<Option<SharedDriver>> = const { RefCell::new(None) };
    static CONTACTS: RefCell<Option<Rc<RefCell<input::ContactSet>>>> = const { RefCell::new(None) };
}

fn with_driver<R>(f: impl FnOnce(&SharedDriver) -> R) -> Option<R> {
    let driver = DRIVER.with(|d| d.borrow().clone());
    match driver {
        Some(d) => Some(f(&d)),
        None => {
            log::warn!("[debug] controller not initialised yet");
            None
        }
    }
}

fn profile_for(document: &web::Document) -> ControllerConfig {
    let name = document
        .body()
        .and_then(|b| b.get_attribute(PROFILE_ATTRIBUTE))
        .unwrap_or_default();
    match ControllerConfig::from_name(&name) {
        Ok(config) => {
            let shown = if name.is_empty() { "simple" } else { name.as_str() };
            log::info!("[init] profile {shown}");
            config
        }
        Err(e) => {
            log::warn!("[init] {e}; using the simple profile");
            ControllerConfig::simple()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plant-ar starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = profile_for(&document);
    let auto_show = config == ControllerConfig::simple();
    let mut driver = ControllerDriver::new(config, None).map_err(|e| anyhow::anyhow!("{e}"))?;
    match AttributeSink::find(&document, MODEL_ELEMENT_ID) {
        Some(sink) => driver.attach_sink(sink),
        None => log::warn!("[sink] missing #{MODEL_ELEMENT_ID}; gestures will not be shown"),
    }
    let driver: SharedDriver = Rc::new(RefCell::new(driver));
    let contacts = Rc::new(RefCell::new(input::ContactSet::default()));
    DRIVER.with(|d| *d.borrow_mut() = Some(driver.clone()));
    CONTACTS.with(|c| *c.borrow_mut() = Some(contacts.clone()));

    let target: web::EventTarget = document.clone().into();
    events::wire_pointer_handlers(events::PointerWiring {
        target: target.clone(),
        document: document.clone(),
        driver: driver.clone(),
        contacts: contacts.clone(),
    });
    events::wire_wheel(&target, document.clone(), driver.clone());
    events::wire_controls(&document, &driver);
    let markers = events::wire_markers(&document, &driver, &contacts);
    log::info!("[init] {markers} marker(s) wired");

    // Pages without marker tracking show the model straight away.
    if auto_show || markers == 0 {
        let mut d = driver.borrow_mut();
        d.show_plant(default_plant());
        events::sync_overlays(&document, &d);
        overlay::show_touch_hint(&document);
    } else {
        events::sync_overlays(&document, &driver.borrow());
    }
    overlay::dismiss_loader(&document);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(driver))));
    Ok(())
}

// ---------------- Console debug hooks ----------------

/// Show a catalogued plant as if its marker had been found.
#[wasm_bindgen]
pub fn test_plant(id: &str) -> bool {
    let Some(plant) = find_plant(id) else {
        log::warn!("[debug] unknown plant {id}");
        return false;
    };
    with_driver(|driver| {
        let mut d = driver.borrow_mut();
        d.show_plant(plant);
        log::info!("[debug] {} at {:?}", plant.id, d.render_transform());
        if let Some(document) = dom::window_document() {
            events::sync_overlays(&document, &d);
        }
    })
    .is_some()
}

#[wasm_bindgen]
pub fn hide_all() {
    with_driver(|driver| {
        let mut d = driver.borrow_mut();
        d.hide_plant();
        CONTACTS.with(|c| {
            if let Some(contacts) = c.borrow().as_ref() {
                events::drop_contacts(&mut contacts.borrow_mut());
            }
        });
        if let Some(document) = dom::window_document() {
            events::sync_overlays(&document, &d);
        }
    });
}

/// Returns whether idle spin is now on.
#[wasm_bindgen]
pub fn toggle_auto_rotate() -> bool {
    with_driver(|driver| {
        let mut d = driver.borrow_mut();
        d.dispatch(ControllerEvent::ToggleAutoRotate);
        d.controller().auto_rotate_enabled()
    })
    .unwrap_or(false)
}

/// Ids accepted by `test_plant`.
#[wasm_bindgen]
pub fn plant_ids() -> js_sys::Array {
    ar_core::PLANTS
        .iter()
        .map(|p| JsValue::from_str(p.id))
        .collect()
}
