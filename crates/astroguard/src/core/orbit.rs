//! Parametric ellipse motion and hazard classification. Pure math, no state.
//!
//! This is a visual heuristic, not orbital mechanics: bodies ride ellipses
//! centered on Earth and only their angular speed depends on distance.

use glam::DVec2;

use crate::api::config::SimConfig;
use crate::components::asteroid::HazardState;

/// Smallest distance used when dividing by `sqrt(r)`.
const MIN_DISTANCE: f64 = 1e-6;

/// Point on an axis-aligned ellipse centered at `center`.
pub fn ellipse_position(center: DVec2, semi_major: f64, semi_minor: f64, angle: f64) -> DVec2 {
    DVec2::new(
        center.x + semi_major * angle.cos(),
        center.y + semi_minor * angle.sin(),
    )
}

/// Per-frame angle increment: faster when closer.
/// `speed = (gravity_scale / sqrt(r)) * multiplier`
pub fn angular_speed(gravity_scale: f64, distance: f64, multiplier: f64) -> f64 {
    (gravity_scale / distance.max(MIN_DISTANCE).sqrt()) * multiplier
}

/// Tangent of the ellipse at `angle`, scaled by the angular speed.
pub fn tangential_velocity(angle: f64, speed: f64, semi_major: f64, semi_minor: f64) -> DVec2 {
    DVec2::new(
        -angle.sin() * speed * semi_major,
        angle.cos() * speed * semi_minor,
    )
}

/// Classify proximity to Earth. Monotonic in `distance`:
/// hit ⊂ near, everything else normal.
pub fn classify_hazard(distance: f64, size: f64, config: &SimConfig) -> HazardState {
    if distance < config.danger_radius {
        if distance <= config.hit_radius(size) {
            HazardState::Hit
        } else {
            HazardState::Near
        }
    } else {
        HazardState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_at_zero_angle_is_on_major_axis() {
        let p = ellipse_position(DVec2::new(400.0, 300.0), 200.0, 100.0, 0.0);
        assert!((p - DVec2::new(600.0, 300.0)).length() < 1e-9);
    }

    #[test]
    fn ellipse_at_quarter_turn_is_on_minor_axis() {
        let p = ellipse_position(DVec2::ZERO, 200.0, 100.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn speed_is_faster_when_closer() {
        assert!(angular_speed(0.15, 60.0, 1.0) > angular_speed(0.15, 300.0, 1.0));
    }

    #[test]
    fn speed_is_linear_in_multiplier() {
        let base = angular_speed(0.15, 100.0, 1.0);
        assert!((base - 0.015).abs() < 1e-12);
        assert!((angular_speed(0.15, 100.0, 2.5) - 2.5 * base).abs() < 1e-12);
        assert_eq!(angular_speed(0.15, 100.0, 0.0), 0.0);
    }

    #[test]
    fn speed_at_zero_distance_is_finite() {
        assert!(angular_speed(0.15, 0.0, 1.0).is_finite());
    }

    #[test]
    fn velocity_is_tangent() {
        let v = tangential_velocity(0.0, 0.01, 200.0, 100.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hazard_boundaries() {
        let config = SimConfig::default();
        // 50 <= 15 + 3 + 5 is false
        assert_eq!(classify_hazard(50.0, 3.0, &config), HazardState::Near);
        // 22 <= 23
        assert_eq!(classify_hazard(22.0, 3.0, &config), HazardState::Hit);
        assert_eq!(classify_hazard(23.0, 3.0, &config), HazardState::Hit);
        assert_eq!(classify_hazard(99.999, 3.0, &config), HazardState::Near);
        assert_eq!(classify_hazard(100.0, 3.0, &config), HazardState::Normal);
        assert_eq!(classify_hazard(250.0, 3.0, &config), HazardState::Normal);
    }

    #[test]
    fn hazard_is_monotonic_in_distance() {
        let config = SimConfig::default();
        let rank = |h: HazardState| match h {
            HazardState::Hit => 2,
            HazardState::Near => 1,
            HazardState::Normal => 0,
        };
        let mut prev = rank(classify_hazard(0.0, 2.5, &config));
        for i in 1..400 {
            let r = i as f64 * 0.5;
            let cur = rank(classify_hazard(r, 2.5, &config));
            assert!(cur <= prev, "hazard rose at r={r}");
            prev = cur;
        }
    }
}
