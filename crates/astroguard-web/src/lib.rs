//! Browser entry point: mounts the orbit tracker on `#orbitCanvas`, drives it
//! from `requestAnimationFrame`, and starts the feed, upload and probe
//! collaborators.

pub mod canvas;
pub mod dom;
pub mod error;
pub mod net;
pub mod runner;
pub mod upload;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use astroguard::{BackendConfig, ControlEvent, OrbitTracker, Renderer, SimConfig};

pub use canvas::Canvas2dRenderer;
pub use error::WebError;
pub use runner::TrackerRunner;

thread_local! {
    static RUNNER: RefCell<Option<TrackerRunner<Canvas2dRenderer>>> = RefCell::new(None);
}

/// Run `f` against the mounted runner. `None` before mount (or on pages
/// without an orbit canvas).
fn with_runner<R>(f: impl FnOnce(&mut TrackerRunner<Canvas2dRenderer>) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn push_control(event: ControlEvent) {
    with_runner(|r| r.push_control(event));
}

/// Optional JSON overrides from `data-sim-config` on the canvas.
fn sim_config(canvas: &HtmlCanvasElement) -> SimConfig {
    match canvas.get_attribute("data-sim-config") {
        Some(json) => SimConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring data-sim-config: {err}");
            SimConfig::default()
        }),
        None => SimConfig::default(),
    }
}

/// Backend base URL from `data-backend-url` on the canvas, if set.
fn backend_config(canvas: &HtmlCanvasElement) -> BackendConfig {
    canvas
        .get_attribute("data-backend-url")
        .map(BackendConfig::new)
        .unwrap_or_default()
}

fn mount() -> Result<(), WebError> {
    let document = dom::document()?;
    let Some(canvas) = dom::element_by_id::<HtmlCanvasElement>(&document, "orbitCanvas") else {
        log::info!("astroguard: no #orbitCanvas on this page, tracker not started");
        return Ok(());
    };

    let config = sim_config(&canvas);
    let backend = backend_config(&canvas);

    let mut renderer = Canvas2dRenderer::new(canvas)?;
    let viewport = renderer.measure();
    renderer.resize(viewport.width as u32, viewport.height as u32);

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let tracker = OrbitTracker::new(config, viewport, seed);
    let runner = TrackerRunner::new(tracker, renderer, dom::DomHandles::find(&document));
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
    log::info!(
        "astroguard: tracking orbits on a {}x{} canvas",
        viewport.width,
        viewport.height
    );

    dom::wire_controls(&document)?;
    let window = dom::window()?;
    dom::listen(&window, "resize", |_| {
        with_runner(|r| {
            let viewport = r.renderer().measure();
            r.push_control(ControlEvent::Resize {
                width: viewport.width,
                height: viewport.height,
            });
        });
    })?;

    runner::start_animation_loop(|| {
        with_runner(|r| r.tick());
    })?;

    wasm_bindgen_futures::spawn_local(net::init_feed(backend.clone()));
    if let Err(err) = upload::init(&document, backend.clone()) {
        log::error!("astroguard: upload wiring failed: {err}");
    }
    wasm_bindgen_futures::spawn_local(net::check_backend_connection(backend));

    Ok(())
}

#[wasm_bindgen(start)]
pub fn tracker_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = mount() {
        log::error!("astroguard: startup failed: {err}");
    }
}

// ---- Scripted controls ----

#[wasm_bindgen]
pub fn tracker_toggle_trails() {
    push_control(ControlEvent::ToggleTrails);
}

#[wasm_bindgen]
pub fn tracker_toggle_pause() {
    push_control(ControlEvent::TogglePause);
}

#[wasm_bindgen]
pub fn tracker_set_speed(raw: f64) {
    push_control(ControlEvent::SetSpeedSlider(raw));
}

#[wasm_bindgen]
pub fn tracker_resize(width: f64, height: f64) {
    push_control(ControlEvent::Resize { width, height });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_snapshot_ptr() -> *const f32 {
    with_runner(|r| r.snapshot().as_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_snapshot_len() -> u32 {
    with_runner(|r| r.snapshot().float_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_tracked_count() -> u32 {
    with_runner(|r| r.stats().tracked).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_hazardous_count() -> u32 {
    with_runner(|r| r.stats().hazardous).unwrap_or(0)
}
