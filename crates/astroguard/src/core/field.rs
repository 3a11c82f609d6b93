use glam::DVec2;

use crate::api::config::SimConfig;
use crate::api::types::{FrameStats, Viewport};
use crate::components::asteroid::Asteroid;
use crate::components::star::{generate_starfield, Star};
use crate::core::orbit;
use crate::core::rng::Rng;
use crate::input::controls::SimControls;

/// The animated scene: Earth at the viewport center, a fixed asteroid
/// population and a starfield.
pub struct OrbitField {
    config: SimConfig,
    viewport: Viewport,
    asteroids: Vec<Asteroid>,
    stars: Vec<Star>,
    rng: Rng,
}

impl OrbitField {
    /// Populate the field. The first `close_count` asteroids use the close
    /// distribution, the rest the far one.
    pub fn new(config: SimConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Rng::new(seed);

        let mut asteroids = Vec::with_capacity(config.asteroid_count);
        for i in 0..config.asteroid_count {
            let (axis, ratio) = if i < config.close_count {
                (config.close_axis, config.close_ratio)
            } else {
                (config.far_axis, config.far_ratio)
            };
            let a = rng.range(axis.min, axis.max);
            let b = a * rng.range(ratio.min, ratio.max);
            let angle = rng.range(0.0, std::f64::consts::TAU);
            let size = rng.range(config.size.min, config.size.max);
            asteroids.push(Asteroid::new(a, b, angle, size, config.max_trail_len));
        }

        let stars = generate_starfield(&mut rng, viewport, config.star_count);

        let mut field = Self {
            config,
            viewport,
            asteroids,
            stars,
            rng,
        };
        field.locate_all();
        field
    }

    /// Adopt a new canvas size, regenerate the starfield and re-place every
    /// asteroid around the new center.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.stars = generate_starfield(&mut self.rng, viewport, self.config.star_count);
        self.locate_all();
    }

    fn locate_all(&mut self) {
        let center = self.viewport.center();
        for a in &mut self.asteroids {
            locate(a, center, &self.config);
        }
    }

    /// Advance every asteroid by one frame. A paused field is left untouched.
    pub fn step(&mut self, controls: &SimControls) -> FrameStats {
        if controls.paused {
            return self.stats();
        }

        let center = self.viewport.center();
        for a in &mut self.asteroids {
            a.speed_multiplier = controls.speed_multiplier;

            locate(a, center, &self.config);
            let speed = orbit::angular_speed(self.config.gravity_scale, a.distance, a.speed_multiplier);

            a.velocity = orbit::tangential_velocity(a.angle, speed, a.semi_major_axis, a.semi_minor_axis);
            a.angle += speed;

            if controls.show_trails {
                a.trail.push(a.pos);
            } else {
                a.trail.clear();
            }
        }

        self.stats()
    }

    /// Tracked and hazardous counts for the current state.
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            tracked: self.asteroids.len() as u32,
            hazardous: self.asteroids.iter().filter(|a| a.hazard.is_hazard()).count() as u32,
        }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

/// Refresh `pos`, `distance` and `hazard` from the asteroid's current angle.
fn locate(a: &mut Asteroid, center: DVec2, config: &SimConfig) {
    a.pos = orbit::ellipse_position(center, a.semi_major_axis, a.semi_minor_axis, a.angle);
    a.distance = a.pos.distance(center);
    a.hazard = orbit::classify_hazard(a.distance, a.size, config);
}
