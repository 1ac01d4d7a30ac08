use crate::core::{scan_spectrum, AmplitudeMetric, FrequencySnapshot};
use crate::dom::describe_js;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Analyser over the live microphone plus its reusable byte buffer.
///
/// Until a stream is connected the analyser reports silence, so
/// [`MicAnalyser::snapshot`] returns the zero snapshot.
pub struct MicAnalyser {
    audio_ctx: web::AudioContext,
    node: web::AnalyserNode,
    buf: Vec<u8>,
    metric: AmplitudeMetric,
}

impl MicAnalyser {
    pub fn new(
        audio_ctx: &web::AudioContext,
        smoothing: f64,
        metric: AmplitudeMetric,
    ) -> anyhow::Result<Self> {
        let node = audio_ctx
            .create_analyser()
            .map_err(|e| anyhow!("create analyser: {}", describe_js(&e)))?;
        node.set_smoothing_time_constant(smoothing);
        let buf = vec![0u8; node.fft_size() as usize];
        Ok(Self {
            audio_ctx: audio_ctx.clone(),
            node,
            buf,
            metric,
        })
    }

    pub fn node(&self) -> &web::AnalyserNode {
        &self.node
    }

    /// Read the current byte spectrum and reduce it to a snapshot.
    pub fn snapshot(&mut self) -> FrequencySnapshot {
        let len = self.node.fft_size() as usize;
        if self.buf.len() != len {
            self.buf.resize(len, 0);
        }
        self.node.get_byte_frequency_data(&mut self.buf);
        scan_spectrum(&self.buf, self.audio_ctx.sample_rate(), self.metric)
    }
}

/// Request the microphone and connect it to `analyser`.
pub async fn acquire_microphone(
    audio_ctx: &web::AudioContext,
    analyser: &web::AnalyserNode,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("microphone unavailable: no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow!("microphone unavailable: {}", describe_js(&e)))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow!("microphone unavailable: {}", describe_js(&e)))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("microphone access denied: {}", describe_js(&e)))?
        .dyn_into()
        .map_err(|_| anyhow!("getUserMedia did not yield a MediaStream"))?;
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| anyhow!("create stream source: {}", describe_js(&e)))?;
    source
        .connect_with_audio_node(analyser)
        .map_err(|e| anyhow!("connect stream source: {}", describe_js(&e)))?;
    Ok(())
}

/// Fire-and-forget microphone acquisition; failures are only logged.
pub fn spawn_acquire(audio_ctx: web::AudioContext, analyser: web::AnalyserNode) {
    spawn_local(async move {
        match acquire_microphone(&audio_ctx, &analyser).await {
            Ok(()) => log::info!("Microphone access allowed"),
            Err(e) => log::error!("{:?}", e),
        }
    });
}

async fn resume(audio_ctx: &web::AudioContext) -> anyhow::Result<()> {
    let promise = audio_ctx
        .resume()
        .map_err(|e| anyhow!("audio unlock failed: {}", describe_js(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("audio unlock failed: {}", describe_js(&e)))?;
    Ok(())
}

const UNLOCK_EVENTS: [&str; 3] = ["pointerdown", "touchend", "keydown"];

/// Resume a suspended `AudioContext` on the first user gesture.
///
/// Browsers that start contexts suspended (iOS Safari, Chrome autoplay
/// policy) need this before the analyser sees any input. Listeners are removed
/// once the context reports `running`.
pub fn wire_gesture_unlock(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() == web::AudioContextState::Running {
        log::info!("[audio] context already running");
        return;
    }
    let Some(window) = web::window() else {
        return;
    };

    let handler: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handler_inner = handler.clone();
    let ctx = audio_ctx.clone();
    let target: web::EventTarget = window.clone().into();
    let pending = Rc::new(RefCell::new(false));
    *handler.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if *pending.borrow() {
            return;
        }
        *pending.borrow_mut() = true;
        let ctx = ctx.clone();
        let target = target.clone();
        let handler = handler_inner.clone();
        let pending = pending.clone();
        spawn_local(async move {
            match resume(&ctx).await {
                Ok(()) => {
                    log::info!("[audio] context unlocked by user gesture");
                    if let Some(cb) = handler.borrow_mut().take() {
                        for ev in UNLOCK_EVENTS {
                            _ = target.remove_event_listener_with_callback(
                                ev,
                                cb.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
                Err(e) => log::error!("{:?}", e),
            }
            *pending.borrow_mut() = false;
        });
    }) as Box<dyn FnMut()>));

    if let Some(cb) = handler.borrow().as_ref() {
        for ev in UNLOCK_EVENTS {
            _ = window.add_event_listener_with_callback(ev, cb.as_ref().unchecked_ref());
        }
    }
}
