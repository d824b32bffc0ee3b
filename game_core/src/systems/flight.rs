use glam::Vec2;
use hecs::World;

use crate::map::Playfield;
use crate::systems::{carve_crater, resolve_collision, Collision};
use crate::{Banana, Config, Events, Gorilla};

/// How a throw ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrowOutcome {
    GorillaHit { shooter: u8, target: u8, at: Vec2 },
    BuildingHit { shooter: u8, at: Vec2 },
    Missed { shooter: u8 },
}

impl ThrowOutcome {
    pub fn shooter(&self) -> u8 {
        match *self {
            ThrowOutcome::GorillaHit { shooter, .. }
            | ThrowOutcome::BuildingHit { shooter, .. }
            | ThrowOutcome::Missed { shooter } => shooter,
        }
    }
}

/// Advance the banana by one animation frame
///
/// Recomputes the position from elapsed flight time, then checks for hits
/// (after the grace frames) and for leaving the playfield. On a hit the
/// gorilla is knocked out or the crater is carved, and the banana is
/// despawned. Returns `None` while the banana is still flying, or when there
/// is no banana at all.
pub fn advance_banana(
    world: &mut World,
    playfield: &Playfield,
    config: &Config,
    events: &mut Events,
) -> Option<ThrowOutcome> {
    let (entity, mut banana) = world
        .query::<&Banana>()
        .iter()
        .next()
        .map(|(e, b)| (e, *b))?;

    let t = banana.step as f32 * config.throw_dt;
    banana.pos = banana.throw.position(t);
    banana.step += 1;

    let collision = if banana.step > config.grace_steps {
        resolve_collision(world, banana.pos)
    } else {
        Collision::None
    };

    let outcome = match collision {
        Collision::Gorilla(target) => {
            for (_e, gorilla) in world.query_mut::<&mut Gorilla>() {
                if gorilla.player_id == target {
                    gorilla.alive = false;
                }
            }
            events.gorilla_hit = Some(target);
            events.explosion = Some(banana.pos);
            Some(ThrowOutcome::GorillaHit {
                shooter: banana.shooter,
                target,
                at: banana.pos,
            })
        }
        Collision::Building => {
            carve_crater(world, banana.pos, config.blast_radius);
            events.explosion = Some(banana.pos);
            Some(ThrowOutcome::BuildingHit {
                shooter: banana.shooter,
                at: banana.pos,
            })
        }
        Collision::None if playfield.has_left(banana.pos, config.offscreen_margin) => {
            events.missed = true;
            Some(ThrowOutcome::Missed {
                shooter: banana.shooter,
            })
        }
        Collision::None => None,
    };

    if outcome.is_some() {
        let _ = world.despawn(entity);
        log::debug!(
            "banana from player {} landed after {} frames at ({:.1}, {:.1})",
            banana.shooter + 1,
            banana.step,
            banana.pos.x,
            banana.pos.y
        );
    } else if let Ok(mut stored) = world.get::<&mut Banana>(entity) {
        *stored = banana;
    }

    outcome
}
