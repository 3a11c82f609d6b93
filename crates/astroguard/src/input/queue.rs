/// Control events the tracker understands.
/// UI callbacks push these; the runner applies them at the start of the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The trail toggle button was clicked.
    ToggleTrails,
    /// The play/pause button was clicked.
    TogglePause,
    /// The speed slider moved to a raw value in [1, 100].
    SetSpeedSlider(f64),
    /// The canvas element was resized to (width, height) pixels.
    Resize { width: f64, height: f64 },
}

/// A queue of control events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new control event (called from DOM callbacks).
    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}
