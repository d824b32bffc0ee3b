use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FireError};
use crate::params::Params;

/// Game configuration
///
/// Every field defaults from [`Params`], so a partial JSON document only
/// overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub building_min_width: f32,
    pub building_max_width: f32,
    pub building_gap: f32,
    pub building_min_height: f32,
    pub building_max_height: f32,
    pub height_jitter: f32,
    pub window_lit_chance: f64,
    pub wind_max: f32,
    pub gravity: f32,
    pub gravity_scale: f32,
    pub velocity_scale: f32,
    pub throw_dt: f32,
    pub grace_steps: u32,
    pub offscreen_margin: f32,
    pub blast_radius: f32,
    pub win_score: u8,
    pub building_hit_delay: f32,
    pub miss_delay: f32,
    pub gorilla_hit_delay: f32,
    pub match_over_reset_delay: f32,
    pub frame_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            building_min_width: Params::BUILDING_MIN_WIDTH,
            building_max_width: Params::BUILDING_MAX_WIDTH,
            building_gap: Params::BUILDING_GAP,
            building_min_height: Params::BUILDING_MIN_HEIGHT,
            building_max_height: Params::BUILDING_MAX_HEIGHT,
            height_jitter: Params::HEIGHT_JITTER,
            window_lit_chance: Params::WINDOW_LIT_CHANCE,
            wind_max: Params::WIND_MAX,
            gravity: Params::GRAVITY,
            gravity_scale: Params::GRAVITY_SCALE,
            velocity_scale: Params::VELOCITY_SCALE,
            throw_dt: Params::THROW_DT,
            grace_steps: Params::GRACE_STEPS,
            offscreen_margin: Params::OFFSCREEN_MARGIN,
            blast_radius: Params::BLAST_RADIUS,
            win_score: Params::WIN_SCORE,
            building_hit_delay: Params::BUILDING_HIT_DELAY,
            miss_delay: Params::MISS_DELAY,
            gorilla_hit_delay: Params::GORILLA_HIT_DELAY,
            match_over_reset_delay: Params::MATCH_OVER_RESET_DELAY,
            frame_dt: Params::FRAME_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Downward acceleration applied to the banana, in pixels/s²
    pub fn effective_gravity(&self) -> f32 {
        self.gravity * self.gravity_scale
    }

    /// Reject configurations the generators and the clock cannot work with
    ///
    /// A config that passes guarantees every throw ends: gravity pulls the
    /// banana down, so it eventually drops out through the bottom.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            self.playfield_width,
            self.playfield_height,
            self.building_min_width,
            self.building_max_width,
            self.building_gap,
            self.building_min_height,
            self.building_max_height,
            self.height_jitter,
            self.wind_max,
            self.gravity,
            self.gravity_scale,
            self.velocity_scale,
            self.throw_dt,
            self.offscreen_margin,
            self.blast_radius,
            self.building_hit_delay,
            self.miss_delay,
            self.gorilla_hit_delay,
            self.match_over_reset_delay,
            self.frame_dt,
            self.max_dt,
        ];
        if !self.window_lit_chance.is_finite() || reals.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NotFinite);
        }
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(ConfigError::EmptyPlayfield);
        }
        if self.building_min_width <= 0.0 || self.building_min_width > self.building_max_width {
            return Err(ConfigError::InvalidRange("building width"));
        }
        if self.building_min_height < 0.0
            || self.building_min_height > self.building_max_height
        {
            return Err(ConfigError::InvalidRange("building height"));
        }
        if self.building_gap < 0.0 {
            return Err(ConfigError::InvalidRange("building gap"));
        }
        if !(0.0..=1.0).contains(&self.window_lit_chance) {
            return Err(ConfigError::InvalidRange("window lit chance"));
        }
        if self.height_jitter < 0.0 {
            return Err(ConfigError::InvalidRange("height jitter"));
        }
        if self.wind_max < 0.0 {
            return Err(ConfigError::InvalidRange("wind"));
        }
        if self.effective_gravity() <= 0.0 {
            return Err(ConfigError::InvalidRange("gravity"));
        }
        if self.velocity_scale <= 0.0 {
            return Err(ConfigError::InvalidRange("velocity scale"));
        }
        if self.blast_radius < 0.0 {
            return Err(ConfigError::InvalidRange("blast radius"));
        }
        if self.offscreen_margin < 0.0 {
            return Err(ConfigError::InvalidRange("offscreen margin"));
        }
        let delays = [
            self.building_hit_delay,
            self.miss_delay,
            self.gorilla_hit_delay,
            self.match_over_reset_delay,
        ];
        if delays.iter().any(|d| *d < 0.0) {
            return Err(ConfigError::InvalidRange("delay"));
        }
        if self.throw_dt <= 0.0 || self.frame_dt <= 0.0 || self.max_dt < self.frame_dt {
            return Err(ConfigError::InvalidRange("clock"));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Validate a throw's angle (degrees) and power
    pub fn check_shot(&self, angle: f32, power: f32) -> Result<(), FireError> {
        if !(Params::ANGLE_MIN..=Params::ANGLE_MAX).contains(&angle) {
            return Err(FireError::InvalidAngle(angle));
        }
        if !(Params::POWER_MIN..=Params::POWER_MAX).contains(&power) {
            return Err(FireError::InvalidPower(power));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_effective_gravity() {
        let config = Config::new();
        assert!((config.effective_gravity() - 245.0).abs() < 1e-3);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config: Config = serde_json::from_str(r#"{"win_score": 5, "wind_max": 0.0}"#).unwrap();
        assert_eq!(config.win_score, 5);
        assert_eq!(config.wind_max, 0.0);
        assert_eq!(config.playfield_width, Params::PLAYFIELD_WIDTH);
        assert_eq!(config.blast_radius, Params::BLAST_RADIUS);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = Config::new();
        config.building_min_width = 120.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("building width"))
        );

        let mut config = Config::new();
        config.win_score = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));

        let mut config = Config::new();
        config.playfield_height = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyPlayfield));
    }

    #[test]
    fn test_validate_rejects_weightless_throws() {
        for (gravity, scale) in [(0.0, 25.0), (-9.8, 25.0), (9.8, 0.0), (9.8, -1.0)] {
            let mut config = Config::new();
            config.gravity = gravity;
            config.gravity_scale = scale;
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidRange("gravity")),
                "gravity {gravity} x {scale} should be rejected"
            );
        }

        let config: Config =
            serde_json::from_str(r#"{"gravity": 0.0, "wind_max": 0.0}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_velocity_scale() {
        for scale in [0.0, -4.0] {
            let mut config = Config::new();
            config.velocity_scale = scale;
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidRange("velocity scale"))
            );
        }
    }

    #[test]
    fn test_validate_rejects_negative_blast_and_margin() {
        let mut config = Config::new();
        config.blast_radius = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("blast radius"))
        );

        let mut config = Config::new();
        config.offscreen_margin = -10.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("offscreen margin"))
        );

        let mut config = Config::new();
        config.blast_radius = 0.0;
        config.offscreen_margin = 0.0;
        assert_eq!(config.validate(), Ok(()), "Zero is allowed for both");
    }

    #[test]
    fn test_validate_rejects_non_finite_fields() {
        let mut config = Config::new();
        config.gravity = f32::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::NotFinite));

        let mut config = Config::new();
        config.wind_max = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::NotFinite));

        let mut config = Config::new();
        config.window_lit_chance = f64::NAN;
        assert_eq!(config.validate(), Err(ConfigError::NotFinite));
    }

    #[test]
    fn test_validate_rejects_lit_chance_above_one() {
        let mut config = Config::new();
        config.window_lit_chance = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange("window lit chance"))
        );
    }

    #[test]
    fn test_check_shot_bounds() {
        let config = Config::new();
        assert!(config.check_shot(0.0, 1.0).is_ok());
        assert!(config.check_shot(360.0, 200.0).is_ok());
        assert_eq!(
            config.check_shot(-1.0, 50.0),
            Err(FireError::InvalidAngle(-1.0))
        );
        assert_eq!(
            config.check_shot(45.0, 200.5),
            Err(FireError::InvalidPower(200.5))
        );
        assert!(matches!(
            config.check_shot(f32::NAN, 50.0),
            Err(FireError::InvalidAngle(_))
        ));
        assert!(matches!(
            config.check_shot(45.0, f32::NAN),
            Err(FireError::InvalidPower(_))
        ));
    }
}
