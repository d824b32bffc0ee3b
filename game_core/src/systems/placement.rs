use glam::Vec2;
use rand::Rng;

use crate::{Building, Config, GameRng, Gorilla, Params};

/// Put each gorilla on the 2nd or 3rd building from its edge
///
/// `buildings` must be ordered left to right. Short skylines clamp the
/// indices; an empty one leaves the gorillas standing on the ground.
pub fn place_gorillas(buildings: &[Building], config: &Config, rng: &mut GameRng) -> [Gorilla; 2] {
    let n = buildings.len();
    if n == 0 {
        let ground = config.playfield_height - Params::GORILLA_SIZE;
        return [
            Gorilla::new(0, Vec2::new(0.0, ground)),
            Gorilla::new(1, Vec2::new(config.playfield_width - Params::GORILLA_SIZE, ground)),
        ];
    }

    let last = n - 1;
    let left = (1 + rng.0.gen_range(0..2)).min(last);
    let right = n.saturating_sub(2 + rng.0.gen_range(0..2)).min(last);

    [
        Gorilla::new(0, stand_on(&buildings[left])),
        Gorilla::new(1, stand_on(&buildings[right])),
    ]
}

fn stand_on(building: &Building) -> Vec2 {
    Vec2::new(
        building.center_x() - Params::GORILLA_SIZE / 2.0,
        building.top() - Params::GORILLA_HEAD_ROOM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_skyline, Rgb};

    fn row(count: usize) -> Vec<Building> {
        (0..count)
            .map(|i| Building::new(i as f32 * 52.0, 500.0, 50.0, 100.0 + i as f32, Rgb(0, 0, 0)))
            .collect()
    }

    #[test]
    fn test_gorillas_stand_near_their_edges() {
        let config = Config::new();
        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let buildings = generate_skyline(&config, &mut rng);
            let n = buildings.len();
            let [left, right] = place_gorillas(&buildings, &config, &mut rng);

            let on = |g: &Gorilla| {
                buildings
                    .iter()
                    .position(|b| (b.center_x() - Params::GORILLA_SIZE / 2.0 - g.pos.x).abs() < 1e-3)
                    .unwrap()
            };
            assert!([1, 2].contains(&on(&left)), "seed {seed}");
            assert!([n - 2, n - 3].contains(&on(&right)), "seed {seed}");
            assert!(left.alive && right.alive);
            assert_eq!((left.player_id, right.player_id), (0, 1));
        }
    }

    #[test]
    fn test_gorilla_stands_on_roof() {
        let config = Config::new();
        let buildings = row(6);
        let [left, _] = place_gorillas(&buildings, &config, &mut GameRng::new(1));
        let roof = buildings
            .iter()
            .find(|b| b.center_x() - Params::GORILLA_SIZE / 2.0 == left.pos.x)
            .unwrap()
            .top();
        assert_eq!(left.pos.y, roof - Params::GORILLA_HEAD_ROOM);
    }

    #[test]
    fn test_short_skylines_do_not_panic() {
        let config = Config::new();
        for count in 0..4 {
            let buildings = row(count);
            for seed in 0..20 {
                let [left, right] = place_gorillas(&buildings, &config, &mut GameRng::new(seed));
                assert_eq!(left.player_id, 0);
                assert_eq!(right.player_id, 1);
            }
        }
    }
}
