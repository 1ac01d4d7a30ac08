use crate::audio::MicAnalyser;
use crate::constants::STATS_INTERVAL_SEC;
use crate::core::{field, Camera, FieldParams, FieldState, FrequencySnapshot, Grid, OrbitControls};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub analyser: Option<MicAnalyser>,
    pub grid: Grid,
    pub field_state: FieldState,
    pub params: FieldParams,

    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub gpu: Option<render::GpuState<'a>>,

    pub stats: FrameStats,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();

        // No analyser means no audio context at all: keep the zero snapshot.
        let snapshot = self
            .analyser
            .as_mut()
            .map(|a| a.snapshot())
            .unwrap_or_default();
        self.field_state = field::update(&mut self.grid, &snapshot, self.field_state, &self.params);

        let w = self.canvas.width();
        let h = self.canvas.height();
        if h > 0 {
            self.camera.aspect = w as f32 / h as f32;
        }
        self.orbit.borrow().apply(&mut self.camera);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            g.set_hue(self.field_state.last_hue);
            g.upload_grid(&mut self.grid);
            if let Err(e) = g.render(&self.camera) {
                log::error!("render error: {:?}", e);
            }
        }

        self.stats.record(now, &snapshot, &self.field_state);
    }
}

/// Periodic debug summary of frame rate and signal level.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    peak_amplitude: f64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            peak_amplitude: 0.0,
        }
    }
}

impl FrameStats {
    fn record(&mut self, now: Instant, snapshot: &FrequencySnapshot, state: &FieldState) {
        self.frames += 1;
        self.peak_amplitude = self.peak_amplitude.max(snapshot.average_amplitude);
        let elapsed = (now - self.window_start).as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1} peak_amp={:.3} hue={:.0} phase={:.4}",
                self.frames as f32 / elapsed,
                self.peak_amplitude,
                state.last_hue,
                state.count
            );
            self.window_start = now;
            self.frames = 0;
            self.peak_amplitude = 0.0;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    point_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, point_count).await {
        Ok(g) => {
            let (w, h) = g.size();
            log::info!("[gpu] ready {}x{}", w, h);
            Some(g)
        }
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
