use glam::DVec2;

use super::trail::Trail;

/// Proximity classification, recomputed from distance every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HazardState {
    #[default]
    Normal,
    /// Inside the danger radius.
    Near,
    /// Touching Earth (within earth radius + size + margin).
    Hit,
}

impl HazardState {
    pub fn is_hazard(self) -> bool {
        self != HazardState::Normal
    }

    /// Wire code used by the snapshot buffer.
    pub fn code(self) -> f32 {
        match self {
            HazardState::Normal => 0.0,
            HazardState::Near => 1.0,
            HazardState::Hit => 2.0,
        }
    }
}

/// One simulated body on a parametric ellipse centered on Earth.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    /// Orbital phase in radians. Never wrapped; only sin/cos read it.
    pub angle: f64,
    /// Render radius in pixels.
    pub size: f64,
    pub trail: Trail,
    /// Canvas-space position. `OrbitField` refreshes it on construction, resize and each step.
    pub pos: DVec2,
    /// Distance from Earth at `pos`.
    pub distance: f64,
    /// Tangential velocity estimate. Not integrated.
    pub velocity: DVec2,
    pub hazard: HazardState,
    /// Copy of the shared speed multiplier from the last step.
    pub speed_multiplier: f64,
}

impl Asteroid {
    pub fn new(semi_major_axis: f64, semi_minor_axis: f64, angle: f64, size: f64, max_trail_len: usize) -> Self {
        Self {
            semi_major_axis,
            semi_minor_axis,
            angle,
            size,
            trail: Trail::new(max_trail_len),
            pos: DVec2::ZERO,
            distance: 0.0,
            velocity: DVec2::ZERO,
            hazard: HazardState::Normal,
            speed_multiplier: 1.0,
        }
    }
}
