use crate::core::OrbitControls;
use crate::dom;
use crate::input::{action_for_key, KeyAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    canvas: &web::HtmlCanvasElement,
    orbit: &Rc<RefCell<OrbitControls>>,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    match action_for_key(ev.key().as_str()) {
        Some(KeyAction::Fullscreen) => {
            dom::request_fullscreen(canvas);
            ev.prevent_default();
        }
        Some(KeyAction::ResetCamera) => {
            orbit.borrow_mut().reset();
            log::info!("[keys] camera reset");
            ev.prevent_default();
        }
        None => {}
    }
}

pub fn wire_global_keydown(canvas: web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &canvas, &orbit);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
