use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// JSON did not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed, but a value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Upper bound on any population or buffer length read from config.
pub const MAX_COUNT: usize = 10_000;

/// Half-open numeric range `[min, max)` used for random distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Tunable constants for the orbit field, provided by the host page.
///
/// Every field has a default, so a partial JSON object only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Total number of asteroids (default: 35).
    pub asteroid_count: usize,
    /// How many of the first asteroids use the close-orbit distribution (default: 5).
    pub close_count: usize,
    /// Semi-major axis range for close orbits, in pixels.
    pub close_axis: Span,
    /// Semi-minor / semi-major ratio range for close orbits.
    pub close_ratio: Span,
    /// Semi-major axis range for far orbits, in pixels.
    pub far_axis: Span,
    /// Semi-minor / semi-major ratio range for far orbits.
    pub far_ratio: Span,
    /// Render radius range for asteroid bodies.
    pub size: Span,
    /// Angular speed scale: `speed = gravity_scale / sqrt(r)`.
    pub gravity_scale: f64,
    /// Distance below which an asteroid counts as near.
    pub danger_radius: f64,
    /// Earth body radius in pixels.
    pub earth_radius: f64,
    /// Extra clearance added to `earth_radius + size` for a hit.
    pub hit_margin: f64,
    /// Maximum trail points kept per asteroid.
    pub max_trail_len: usize,
    /// Stars generated per viewport.
    pub star_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 35,
            close_count: 5,
            close_axis: Span::new(60.0, 100.0),
            close_ratio: Span::new(0.8, 1.0),
            far_axis: Span::new(150.0, 350.0),
            far_ratio: Span::new(0.6, 1.0),
            size: Span::new(2.0, 4.0),
            gravity_scale: 0.15,
            danger_radius: 100.0,
            earth_radius: 15.0,
            hit_margin: 5.0,
            max_trail_len: 20,
            star_count: 200,
        }
    }
}

impl SimConfig {
    /// Parse overrides from a JSON string and validate them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the orbit field cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("asteroid_count", self.asteroid_count),
            ("star_count", self.star_count),
            ("max_trail_len", self.max_trail_len),
        ];
        for (name, count) in counts {
            if count > MAX_COUNT {
                return Err(ConfigError::Invalid(format!(
                    "{name} {count} exceeds the limit of {MAX_COUNT}"
                )));
            }
        }
        if self.close_count > self.asteroid_count {
            return Err(ConfigError::Invalid(format!(
                "close_count {} exceeds asteroid_count {}",
                self.close_count, self.asteroid_count
            )));
        }
        let spans = [
            ("close_axis", self.close_axis),
            ("close_ratio", self.close_ratio),
            ("far_axis", self.far_axis),
            ("far_ratio", self.far_ratio),
            ("size", self.size),
        ];
        for (name, span) in spans {
            if !(span.min > 0.0 && span.min <= span.max) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must satisfy 0 < min <= max, got [{}, {})",
                    span.min, span.max
                )));
            }
        }
        if self.gravity_scale < 0.0 || self.danger_radius <= 0.0 || self.earth_radius <= 0.0 {
            return Err(ConfigError::Invalid(
                "gravity_scale, danger_radius and earth_radius must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Distance at or below which an asteroid of `size` counts as a hit.
    pub fn hit_radius(&self, size: f64) -> f64 {
        self.earth_radius + size + self.hit_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimConfig::from_json(r#"{ "asteroid_count": 50, "danger_radius": 120.0 }"#)
            .unwrap();
        assert_eq!(config.asteroid_count, 50);
        assert_eq!(config.danger_radius, 120.0);
        assert_eq!(config.close_count, 5);
        assert_eq!(config.max_trail_len, 20);
    }

    #[test]
    fn rejects_close_count_above_total() {
        let err = SimConfig::from_json(r#"{ "asteroid_count": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_inverted_span() {
        let err = SimConfig::from_json(r#"{ "far_axis": { "min": 300.0, "max": 100.0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("far_axis"));
    }

    #[test]
    fn rejects_oversized_counts() {
        for json in [
            r#"{ "max_trail_len": 18446744073709551615 }"#,
            r#"{ "asteroid_count": 18446744073709551615 }"#,
            r#"{ "star_count": 10001 }"#,
        ] {
            let err = SimConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{json}: {err}");
        }
        assert!(SimConfig::from_json(r#"{ "star_count": 10000 }"#).is_ok());
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(SimConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn hit_radius_adds_margin() {
        let config = SimConfig::default();
        assert_eq!(config.hit_radius(3.0), 23.0);
    }
}
