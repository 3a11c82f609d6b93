use crate::api::types::Viewport;
use crate::core::rng::Rng;

/// Decorative background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

pub const STAR_MAX_RADIUS: f64 = 1.5;
pub const STAR_MIN_ALPHA: f64 = 0.2;
pub const STAR_ALPHA_SPREAD: f64 = 0.5;

/// Scatter `count` stars uniformly over the viewport.
pub fn generate_starfield(rng: &mut Rng, viewport: Viewport, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.next_f64() * viewport.width,
            y: rng.next_f64() * viewport.height,
            radius: rng.next_f64() * STAR_MAX_RADIUS,
            alpha: STAR_MIN_ALPHA + rng.next_f64() * STAR_ALPHA_SPREAD,
        })
        .collect()
}
