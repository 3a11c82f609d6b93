//! Live simulation controls: trails, pause and speed.

/// Slider range exposed by the page.
pub const SLIDER_MIN: f64 = 1.0;
pub const SLIDER_MAX: f64 = 100.0;
/// Raw slider value that maps to a multiplier of 1.0.
pub const SLIDER_NEUTRAL: f64 = 40.0;

/// Map a raw slider value to a speed multiplier (raw / 40).
/// Out-of-range and non-finite input is clamped into the slider range first.
pub fn slider_to_multiplier(raw: f64) -> f64 {
    let raw = if raw.is_finite() { raw } else { SLIDER_NEUTRAL };
    raw.clamp(SLIDER_MIN, SLIDER_MAX) / SLIDER_NEUTRAL
}

/// Mutable UI state read by every frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimControls {
    pub show_trails: bool,
    pub paused: bool,
    pub speed_multiplier: f64,
}

impl Default for SimControls {
    fn default() -> Self {
        Self {
            show_trails: true,
            paused: false,
            speed_multiplier: 1.0,
        }
    }
}

impl SimControls {
    pub fn toggle_trails(&mut self) -> bool {
        self.show_trails = !self.show_trails;
        self.show_trails
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn set_speed_from_slider(&mut self, raw: f64) {
        self.speed_multiplier = slider_to_multiplier(raw);
    }

    /// Set the multiplier directly. Negative or non-finite values become 0.
    pub fn set_speed_multiplier(&mut self, value: f64) {
        self.speed_multiplier = if value.is_finite() { value.max(0.0) } else { 0.0 };
    }

    /// Label for the trail toggle button.
    pub fn trail_label(&self) -> &'static str {
        if self.show_trails { "Hide Trails" } else { "Show Trails" }
    }

    /// Label for the play/pause button.
    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Play" } else { "Pause" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_mapping_scenarios() {
        assert_eq!(slider_to_multiplier(40.0), 1.0);
        assert_eq!(slider_to_multiplier(100.0), 2.5);
        assert!((slider_to_multiplier(1.0) - 0.025).abs() < 1e-12);
    }

    #[test]
    fn slider_clamps_out_of_range() {
        assert_eq!(slider_to_multiplier(500.0), 2.5);
        assert!((slider_to_multiplier(-3.0) - 0.025).abs() < 1e-12);
        assert_eq!(slider_to_multiplier(f64::NAN), 1.0);
    }

    #[test]
    fn toggles_flip_labels() {
        let mut c = SimControls::default();
        assert_eq!(c.trail_label(), "Hide Trails");
        assert_eq!(c.pause_label(), "Pause");
        assert!(!c.toggle_trails());
        assert!(c.toggle_pause());
        assert_eq!(c.trail_label(), "Show Trails");
        assert_eq!(c.pause_label(), "Play");
    }

    #[test]
    fn direct_multiplier_rejects_negative() {
        let mut c = SimControls::default();
        c.set_speed_multiplier(-2.0);
        assert_eq!(c.speed_multiplier, 0.0);
        c.set_speed_multiplier(f64::INFINITY);
        assert_eq!(c.speed_multiplier, 0.0);
        c.set_speed_multiplier(0.5);
        assert_eq!(c.speed_multiplier, 0.5);
    }
}
