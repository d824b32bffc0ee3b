use glam::Vec2;
use hecs::World;

use crate::map::Aabb;
use crate::Building;

/// Bite an explosion takes out of one building
///
/// Strongest when the impact is level with the roof, fading to nothing one
/// blast radius above or below it. Only the roof line drops; there is no
/// per-column crater shape.
pub fn crater_bite(building: &Building, impact: Vec2, radius: f32) -> f32 {
    let blast = Aabb::around(impact, radius);
    // Strict horizontal overlap: grazing a wall edge does nothing
    if blast.min.x >= building.right() || blast.max.x <= building.left() {
        return 0.0;
    }
    if !blast.intersects(&building.bounds()) {
        return 0.0;
    }
    (radius - (impact.y - building.top()).abs()).max(0.0)
}

/// Carve a crater into every building the blast reaches
///
/// Buildings only ever lose height; windows left hanging outside the new
/// facade are removed. Returns how many buildings were lowered.
pub fn carve_crater(world: &mut World, impact: Vec2, radius: f32) -> usize {
    let mut lowered = 0;
    for (_entity, building) in world.query_mut::<&mut Building>() {
        let bite = crater_bite(building, impact, radius);
        if bite > 0.0 && building.lower(bite) > 0.0 {
            lowered += 1;
        }
    }
    log::debug!(
        "crater at ({:.1}, {:.1}) lowered {lowered} building(s)",
        impact.x,
        impact.y
    );
    lowered
}
