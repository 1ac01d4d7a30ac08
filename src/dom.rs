use crate::constants::{FULLSCREEN_HOVER_OPACITY, FULLSCREEN_IDLE_OPACITY, FULLSCREEN_LABEL};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `location.search` of the current page, or an empty string.
pub fn query_string() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Best-effort human readable text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Ask the browser to make `el` fullscreen, trying vendor-prefixed methods
/// where the standard one is missing.
pub fn request_fullscreen(el: &web::Element) {
    let has = |name: &str| {
        js_sys::Reflect::get(el.as_ref(), &JsValue::from_str(name))
            .map(|v| v.is_function())
            .unwrap_or(false)
    };
    if has("requestFullscreen") {
        if let Err(e) = el.request_fullscreen() {
            log::warn!("fullscreen request failed: {}", describe_js(&e));
        }
        return;
    }
    for name in ["webkitRequestFullscreen", "mozRequestFullScreen"] {
        if has(name) {
            let call = js_sys::Reflect::get(el.as_ref(), &JsValue::from_str(name))
                .ok()
                .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
            if let Some(f) = call {
                if let Err(e) = f.call0(el.as_ref()) {
                    log::warn!("{} failed: {}", name, describe_js(&e));
                }
            }
            return;
        }
    }
    log::warn!("fullscreen not supported");
}

fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (prop, value) in styles {
        _ = style.set_property(prop, value);
    }
}

fn on(el: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Append a bottom-right "FULL SCREEN" button that fullscreens `canvas`.
pub fn append_fullscreen_button(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<()> {
    let button: web::HtmlElement = document
        .create_element("button")
        .map_err(|e| anyhow::anyhow!("create button: {}", describe_js(&e)))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("button is not an HtmlElement"))?;
    set_styles(
        &button,
        &[
            ("position", "absolute"),
            ("cursor", "pointer"),
            ("right", "20px"),
            ("bottom", "20px"),
            ("width", "110px"),
            ("padding", "12px 6px"),
            ("border", "1px solid #fff"),
            ("border-radius", "4px"),
            ("background", "rgba(0,0,0,0.1)"),
            ("color", "#fff"),
            ("font", "normal 13px sans-serif"),
            ("text-align", "center"),
            ("opacity", FULLSCREEN_IDLE_OPACITY),
            ("outline", "none"),
            ("z-index", "999"),
        ],
    );
    button.set_text_content(Some(FULLSCREEN_LABEL));

    let hover = button.clone();
    on(&button, "mouseenter", move || {
        _ = hover.style().set_property("opacity", FULLSCREEN_HOVER_OPACITY);
    });
    let unhover = button.clone();
    on(&button, "mouseleave", move || {
        _ = unhover.style().set_property("opacity", FULLSCREEN_IDLE_OPACITY);
    });
    let target = canvas.clone();
    on(&button, "click", move || request_fullscreen(&target));

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    body.append_child(&button)
        .map_err(|e| anyhow::anyhow!("append button: {}", describe_js(&e)))?;
    Ok(())
}
