use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use astroguard::{ControlEvent, FrameStats, OrbitTracker, Renderer, SimControls, SnapshotBuffer};

use crate::dom::{self, DomHandles};
use crate::error::WebError;

/// Couples the headless tracker with a concrete renderer and the page's
/// counters and button labels.
///
/// Lives in a `thread_local!` in lib.rs because wasm-bindgen cannot export
/// generic structs directly.
pub struct TrackerRunner<R: Renderer> {
    tracker: OrbitTracker,
    renderer: R,
    dom: DomHandles,
    shown_controls: SimControls,
}

impl<R: Renderer> TrackerRunner<R> {
    pub fn new(tracker: OrbitTracker, renderer: R, dom: DomHandles) -> Self {
        let shown_controls = *tracker.controls();
        dom.show_labels(&shown_controls);
        Self {
            tracker,
            renderer,
            dom,
            shown_controls,
        }
    }

    /// Queue a control event (called from DOM callbacks or JS exports).
    pub fn push_control(&mut self, event: ControlEvent) {
        self.tracker.push_control(event);
    }

    /// Run one display frame: apply controls, update, draw, refresh the page.
    pub fn tick(&mut self) {
        let stats = self.tracker.tick(&mut self.renderer);

        let controls = *self.tracker.controls();
        if controls != self.shown_controls {
            self.dom.show_labels(&controls);
            self.shown_controls = controls;
        }

        if let Some(stats) = stats {
            self.dom.show_stats(stats);
        }
    }

    pub fn stats(&self) -> FrameStats {
        self.tracker.stats()
    }

    pub fn snapshot(&self) -> &SnapshotBuffer {
        self.tracker.snapshot()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, WebError> {
    Ok(dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Call `on_frame` once per display refresh for the lifetime of the page.
/// The callback always reschedules itself, paused or not.
pub fn start_animation_loop(mut on_frame: impl FnMut() + 'static) -> Result<(), WebError> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
        on_frame();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log::error!("animation loop stopped: {err}");
            }
        }
    }));

    let scheduled = match slot.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Ok(()),
    };
    scheduled
}
