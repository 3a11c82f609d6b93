use crate::components::asteroid::{Asteroid, HazardState};
use crate::core::field::OrbitField;
use crate::systems::draw::{DrawColor, DrawList, Glow};

const EARTH_GLOW_BLUR: f64 = 25.0;
const DANGER_RING_WIDTH: f64 = 2.0;
const DANGER_RING_ALPHA: f64 = 0.3;
/// Alpha of the newest trail segment approaches this value.
const TRAIL_MAX_ALPHA: f64 = 0.5;
/// Line width grows by this much per segment toward the head.
const TRAIL_WIDTH_STEP: f64 = 0.15;
const NEAR_GLOW_BLUR: f64 = 5.0;
const HIT_GLOW_BLUR: f64 = 10.0;

/// Emit the whole frame in fixed order: clear, stars, Earth and its danger
/// ring, then each asteroid's trail followed by its body.
pub fn render_frame(field: &OrbitField, out: &mut DrawList) {
    out.clear();

    let viewport = field.viewport();
    let config = field.config();
    let center = viewport.center();

    out.clear_surface(viewport.width, viewport.height);

    for star in field.stars() {
        out.fill_circle(
            glam::DVec2::new(star.x, star.y),
            star.radius,
            DrawColor::WHITE.with_alpha(star.alpha),
        );
    }

    out.fill_circle_glow(
        center,
        config.earth_radius,
        DrawColor::EARTH_BLUE,
        Glow { blur: EARTH_GLOW_BLUR, color: DrawColor::EARTH_BLUE },
    );
    out.stroke_circle(
        center,
        config.danger_radius,
        DANGER_RING_WIDTH,
        DrawColor::EARTH_BLUE.with_alpha(DANGER_RING_ALPHA),
    );

    for asteroid in field.asteroids() {
        draw_trail(asteroid, out);
        draw_body(asteroid, out);
    }
}

/// Base color of trail segments for a hazard state.
pub fn trail_color(hazard: HazardState) -> DrawColor {
    if hazard.is_hazard() {
        DrawColor::ORANGE
    } else {
        DrawColor::WHITE
    }
}

/// Body fill color and glow for a hazard state.
pub fn body_style(hazard: HazardState) -> (DrawColor, Option<Glow>) {
    match hazard {
        HazardState::Normal => (DrawColor::SLATE, None),
        HazardState::Near => (
            DrawColor::ORANGE,
            Some(Glow { blur: NEAR_GLOW_BLUR, color: DrawColor::ORANGE }),
        ),
        HazardState::Hit => (
            DrawColor::RED,
            Some(Glow { blur: HIT_GLOW_BLUR, color: DrawColor::RED }),
        ),
    }
}

fn draw_trail(asteroid: &Asteroid, out: &mut DrawList) {
    let len = asteroid.trail.len();
    if len < 2 {
        return;
    }
    let base = trail_color(asteroid.hazard);
    for (i, from, to) in asteroid.trail.segments() {
        let alpha = (i as f64 / len as f64) * TRAIL_MAX_ALPHA;
        let width = i as f64 * TRAIL_WIDTH_STEP;
        out.line(from, to, width, base.with_alpha(alpha));
    }
}

fn draw_body(asteroid: &Asteroid, out: &mut DrawList) {
    let (color, glow) = body_style(asteroid.hazard);
    match glow {
        Some(glow) => out.fill_circle_glow(asteroid.pos, asteroid.size, color, glow),
        None => out.fill_circle(asteroid.pos, asteroid.size, color),
    }
}
