use glam::Vec2;
use hecs::World;

use crate::{Building, Gorilla};

/// What a point in flight has run into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    Gorilla(u8),
    Building,
}

/// Test a point against the living gorillas, then the buildings
///
/// Gorillas win ties: they stand with their feet inside the roof line and a
/// hit on them must not be swallowed by the building box behind them. The
/// shooter's own gorilla is included.
pub fn resolve_collision(world: &World, point: Vec2) -> Collision {
    let mut gorillas: Vec<Gorilla> = world
        .query::<&Gorilla>()
        .iter()
        .map(|(_e, g)| *g)
        .collect();
    gorillas.sort_by_key(|g| g.player_id);

    if let Some(hit) = gorillas
        .iter()
        .find(|g| g.alive && g.bounds().contains(point))
    {
        return Collision::Gorilla(hit.player_id);
    }

    let mut buildings = world.query::<&Building>();
    if buildings.iter().any(|(_e, b)| b.bounds().contains(point)) {
        return Collision::Building;
    }

    Collision::None
}
