pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod notice;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use notice::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use systems::*;

use glam::Vec2;
use hecs::World;

/// Lay out a fresh round: new skyline, gorillas on their roofs, new wind.
/// Anything left in the world (including a banana in flight) is dropped.
pub fn setup_round(world: &mut World, config: &Config, rng: &mut GameRng) -> f32 {
    world.clear();

    let buildings = generate_skyline(config, rng);
    let gorillas = place_gorillas(&buildings, config, rng);
    for building in buildings {
        create_building(world, building);
    }
    for gorilla in gorillas {
        create_gorilla(world, gorilla);
    }

    sample_wind(config, rng)
}

/// Helper to create a building entity
pub fn create_building(world: &mut World, building: Building) -> hecs::Entity {
    world.spawn((building,))
}

/// Helper to create a gorilla entity
pub fn create_gorilla(world: &mut World, gorilla: Gorilla) -> hecs::Entity {
    world.spawn((gorilla,))
}

/// Helper to create the banana entity for a throw
pub fn spawn_banana(world: &mut World, shooter: u8, throw: Throw) -> hecs::Entity {
    world.spawn((Banana::new(shooter, throw),))
}

/// Buildings ordered left to right
pub fn buildings_by_x(world: &World) -> Vec<Building> {
    let mut buildings: Vec<Building> = world
        .query::<&Building>()
        .iter()
        .map(|(_e, b)| b.clone())
        .collect();
    buildings.sort_by(|a, b| a.left().total_cmp(&b.left()));
    buildings
}

/// Gorillas ordered by player id
pub fn gorillas_by_id(world: &World) -> Vec<Gorilla> {
    let mut gorillas: Vec<Gorilla> = world
        .query::<&Gorilla>()
        .iter()
        .map(|(_e, g)| *g)
        .collect();
    gorillas.sort_by_key(|g| g.player_id);
    gorillas
}

/// Where the banana is, if one is in flight
pub fn banana_position(world: &World) -> Option<Vec2> {
    world.query::<&Banana>().iter().next().map(|(_e, b)| b.pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_round_populates_world() {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(11);

        let wind = setup_round(&mut world, &config, &mut rng);

        assert!(wind.abs() <= config.wind_max);
        assert!(buildings_by_x(&world).len() >= 4);
        let gorillas = gorillas_by_id(&world);
        assert_eq!(gorillas.len(), 2);
        assert!(gorillas.iter().all(|g| g.alive));
        assert!(gorillas[0].pos.x < gorillas[1].pos.x);
        assert!(banana_position(&world).is_none());
    }

    #[test]
    fn test_setup_round_drops_banana_in_flight() {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(11);
        setup_round(&mut world, &config, &mut rng);
        let throw = Throw::launch(0, Vec2::new(100.0, 100.0), 45.0, 50.0, 0.0, &config);
        spawn_banana(&mut world, 0, throw);
        assert!(banana_position(&world).is_some());

        setup_round(&mut world, &config, &mut rng);

        assert!(banana_position(&world).is_none());
        assert_eq!(gorillas_by_id(&world).len(), 2);
    }

    #[test]
    fn test_buildings_sorted_left_to_right() {
        let config = Config::new();
        let mut world = World::new();
        setup_round(&mut world, &config, &mut GameRng::new(2));
        let buildings = buildings_by_x(&world);
        assert!(buildings.windows(2).all(|p| p[0].left() < p[1].left()));
    }
}
