use rand::Rng;

use crate::{Config, GameRng};

/// Sample the round's wind: a constant horizontal acceleration, negative blows left
pub fn sample_wind(config: &Config, rng: &mut GameRng) -> f32 {
    if config.wind_max <= 0.0 {
        return 0.0;
    }
    rng.0.gen_range(-config.wind_max..=config.wind_max)
}
