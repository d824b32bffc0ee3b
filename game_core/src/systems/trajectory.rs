use glam::Vec2;

use crate::{Config, Params};

/// Closed-form flight of one banana
///
/// Position is recomputed from elapsed time on every frame instead of
/// integrating velocity, so `position(t)` is a pure function of the throw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    pub start: Vec2,
    pub velocity: Vec2, // px/s, y down
    pub wind: f32,      // px/s², horizontal
    pub gravity: f32,   // px/s², downwards
}

impl Throw {
    /// Launch from `hand` at `angle_deg` (as the shooter sees it) with `power`.
    ///
    /// Player 2 faces left, so their angle is mirrored about the vertical.
    pub fn launch(
        shooter: u8,
        hand: Vec2,
        angle_deg: f32,
        power: f32,
        wind: f32,
        config: &Config,
    ) -> Self {
        let angle = world_angle(shooter, angle_deg).to_radians();
        // Screen y grows downwards, hence the negated sine
        let dir = Vec2::new(angle.cos(), -angle.sin());
        Self {
            start: hand + dir * Params::LAUNCH_OFFSET,
            velocity: dir * power * config.velocity_scale,
            wind,
            gravity: config.effective_gravity(),
        }
    }

    pub fn position(&self, t: f32) -> Vec2 {
        let accel = Vec2::new(self.wind, self.gravity);
        self.start + self.velocity * t + 0.5 * accel * t * t
    }
}

/// Angle in degrees measured counter-clockwise from +x in world space
pub fn world_angle(shooter: u8, angle_deg: f32) -> f32 {
    if shooter == 1 {
        180.0 - angle_deg
    } else {
        angle_deg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm(shooter: u8, angle: f32, power: f32) -> Throw {
        Throw::launch(shooter, Vec2::new(100.0, 300.0), angle, power, 0.0, &Config::new())
    }

    #[test]
    fn test_position_is_pure() {
        let throw = Throw::launch(0, Vec2::new(50.0, 400.0), 60.0, 80.0, 3.5, &Config::new());
        for i in 0..50 {
            let t = i as f32 * Params::THROW_DT;
            assert_eq!(throw.position(t), throw.position(t));
        }
        let again = Throw::launch(0, Vec2::new(50.0, 400.0), 60.0, 80.0, 3.5, &Config::new());
        assert_eq!(throw, again);
    }

    #[test]
    fn test_launch_offset_clears_the_hand() {
        let throw = calm(0, 0.0, 50.0);
        assert!((throw.start - Vec2::new(120.0, 300.0)).length() < 1e-4);
        assert_eq!(throw.position(0.0), throw.start);
    }

    #[test]
    fn test_player_two_throws_left() {
        let left = calm(0, 45.0, 100.0);
        let right = calm(1, 45.0, 100.0);
        assert!(left.velocity.x > 0.0);
        assert!(right.velocity.x < 0.0);
        assert!((left.velocity.x + right.velocity.x).abs() < 1e-3);
        assert!((left.velocity.y - right.velocity.y).abs() < 1e-3);
    }

    #[test]
    fn test_forty_five_degree_parabola() {
        let throw = calm(0, 45.0, 100.0);
        let speed = 100.0 * Params::VELOCITY_SCALE;
        assert!((throw.velocity.length() - speed).abs() < 1e-2);
        assert!(throw.velocity.y < 0.0, "Thrown upwards");

        // Apex where vertical velocity hits zero, symmetric around it
        let apex_t = -throw.velocity.y / throw.gravity;
        let before = throw.position(apex_t - 0.2);
        let after = throw.position(apex_t + 0.2);
        assert!((before.y - after.y).abs() < 1e-2);
        assert!(throw.position(apex_t).y < before.y);
    }

    #[test]
    fn test_wind_pushes_horizontally() {
        let config = Config::new();
        let hand = Vec2::new(100.0, 300.0);
        let calm = Throw::launch(0, hand, 45.0, 100.0, 0.0, &config);
        let windy = Throw::launch(0, hand, 45.0, 100.0, 10.0, &config);
        let t = 1.0;
        let drift = windy.position(t) - calm.position(t);
        assert!((drift.x - 5.0).abs() < 1e-3, "Half wind times t squared");
        assert!(drift.y.abs() < 1e-3);
    }

    #[test]
    fn test_world_angle_mirror() {
        assert_eq!(world_angle(0, 30.0), 30.0);
        assert_eq!(world_angle(1, 30.0), 150.0);
    }
}
