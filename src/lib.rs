#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_TARGET, CANVAS_ID,
    ORBIT_MAX_RADIUS, ORBIT_MIN_RADIUS,
};
use crate::core::{Camera, FieldState, Grid, OrbitControls, Settings};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Audio context plus analyser; microphone acquisition is kicked off but not awaited.
fn build_audio(settings: &Settings) -> anyhow::Result<audio::MicAnalyser> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!(dom::describe_js(&e)))?;
    let analyser =
        audio::MicAnalyser::new(&audio_ctx, settings.smoothing, settings.amplitude_metric)?;
    audio::wire_gesture_unlock(&audio_ctx);
    audio::spawn_acquire(audio_ctx, analyser.node().clone());
    Ok(analyser)
}

fn initial_camera(aspect: f32) -> Camera {
    Camera {
        eye: Vec3::from_array(CAMERA_EYE),
        target: Vec3::from_array(CAMERA_TARGET),
        up: Vec3::Y,
        aspect,
        fovy_radians: CAMERA_FOV_DEG.to_radians(),
        znear: CAMERA_NEAR,
        zfar: CAMERA_FAR,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundfield starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let settings = Settings::from_query(&dom::query_string());
    log::info!(
        "[config] grid={}x{} sep={} hue={:?} phase={:?} amp={:?} smoothing={}",
        settings.layout.amount_x,
        settings.layout.amount_z,
        settings.layout.separation,
        settings.field.hue_source,
        settings.field.phase_advance,
        settings.amplitude_metric,
        settings.smoothing
    );

    // The field keeps running on the zero snapshot when audio is unavailable.
    let analyser = match build_audio(&settings) {
        Ok(a) => Some(a),
        Err(e) => {
            log::error!("audio init error: {:?}", e);
            None
        }
    };

    let grid = Grid::new(settings.layout);
    let layout = grid.layout();
    log::info!(
        "[field] {} points ({}x{}, sep={})",
        grid.len(),
        layout.amount_x,
        layout.amount_z,
        layout.separation
    );
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let camera = initial_camera(aspect);
    let orbit = Rc::new(RefCell::new(OrbitControls::from_eye(
        camera.eye,
        camera.target,
        ORBIT_MIN_RADIUS,
        ORBIT_MAX_RADIUS,
    )));

    events::wire_orbit_controls(&canvas, orbit.clone());
    events::wire_global_keydown(canvas.clone(), orbit.clone());
    if let Err(e) = dom::append_fullscreen_button(&document, &canvas) {
        log::warn!("fullscreen button unavailable: {:?}", e);
    }

    let gpu = frame::init_gpu(&canvas, grid.len()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        analyser,
        grid,
        field_state: FieldState::default(),
        params: settings.field,
        canvas,
        camera,
        orbit,
        gpu,
        stats: frame::FrameStats::default(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
