use crate::constants::MAX_FRAME_DT_MS;
use crate::events::SharedDriver;
use ar_core::ControllerEvent;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: SharedDriver,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(driver: SharedDriver) -> Self {
        Self {
            driver,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = (dt.as_secs_f64() * 1000.0).min(MAX_FRAME_DT_MS);

        // A handler may still hold the driver if a callback re-entered.
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.dispatch(ControllerEvent::Tick(dt_ms));
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// requestAnimationFrame loop; runs for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
