//! Small DOM helpers shared by the bridge modules.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

use astroguard::{ControlEvent, FrameStats, SimControls};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::MissingElement("window"))
}

pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::MissingElement("document"))
}

/// Look up an element by id and cast it. Missing or mistyped elements
/// yield `None` so the caller can skip the feature.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => {
            log::warn!("#{id} has an unexpected element type");
            None
        }
    }
}

/// Attach an event listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Optional elements the animation loop writes to.
pub struct DomHandles {
    pub tracked_count: Option<HtmlElement>,
    pub hazardous_count: Option<HtmlElement>,
    pub trail_button: Option<HtmlElement>,
    pub pause_button: Option<HtmlElement>,
}

impl DomHandles {
    pub fn find(document: &Document) -> Self {
        Self {
            tracked_count: element_by_id(document, "trackedCount"),
            hazardous_count: element_by_id(document, "hazardousCount"),
            trail_button: element_by_id(document, "trailToggle"),
            pause_button: element_by_id(document, "playPause"),
        }
    }

    pub fn show_stats(&self, stats: FrameStats) {
        if let Some(el) = &self.tracked_count {
            el.set_inner_text(&stats.tracked.to_string());
        }
        if let Some(el) = &self.hazardous_count {
            el.set_inner_text(&stats.hazardous.to_string());
        }
    }

    pub fn show_labels(&self, controls: &SimControls) {
        if let Some(el) = &self.trail_button {
            el.set_inner_text(controls.trail_label());
        }
        if let Some(el) = &self.pause_button {
            el.set_inner_text(controls.pause_label());
        }
    }
}

/// Hook the trail toggle, play/pause button and speed slider to the
/// control queue. Each control is optional.
pub fn wire_controls(document: &Document) -> Result<(), WebError> {
    match element_by_id::<HtmlElement>(document, "trailToggle") {
        Some(button) => listen(&button, "click", |_| crate::push_control(ControlEvent::ToggleTrails))?,
        None => log::debug!("#trailToggle not found; trails stay on"),
    }

    match element_by_id::<HtmlElement>(document, "playPause") {
        Some(button) => listen(&button, "click", |_| crate::push_control(ControlEvent::TogglePause))?,
        None => log::debug!("#playPause not found; animation cannot be paused"),
    }

    match element_by_id::<HtmlInputElement>(document, "speedSlider") {
        Some(slider) => {
            let input = slider.clone();
            listen(&slider, "input", move |_| match input.value().parse::<f64>() {
                Ok(raw) => crate::push_control(ControlEvent::SetSpeedSlider(raw)),
                Err(_) => log::warn!("speed slider value {:?} is not a number", input.value()),
            })?;
        }
        None => log::debug!("#speedSlider not found; speed fixed at 1.0"),
    }

    Ok(())
}
