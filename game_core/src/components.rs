use glam::Vec2;

use crate::map::Aabb;
use crate::params::Params;
use crate::systems::Throw;

/// Facade colour of a building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Window decoration, positioned in playfield space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub pos: Vec2,
    pub lit: bool,
}

impl Window {
    pub fn new(pos: Vec2, lit: bool) -> Self {
        Self { pos, lit }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(
            self.pos,
            Vec2::new(Params::WINDOW_WIDTH, Params::WINDOW_HEIGHT),
        )
    }
}

/// Building component - one column of the skyline
///
/// `pos` is the top-left corner. The base never moves: craters push the top
/// edge down and shrink `height` by the same amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub windows: Vec<Window>,
}

impl Building {
    pub fn new(x: f32, ground: f32, width: f32, height: f32, color: Rgb) -> Self {
        Self {
            pos: Vec2::new(x, ground - height),
            width,
            height,
            color,
            windows: Vec::new(),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }

    /// Knock `amount` off the top. Returns how much was actually removed.
    pub fn lower(&mut self, amount: f32) -> f32 {
        let removed = amount.clamp(0.0, self.height);
        self.height -= removed;
        self.pos.y += removed;
        self.prune_windows();
        removed
    }

    /// Drop windows that no longer sit fully inside the facade
    pub fn prune_windows(&mut self) {
        let (top, bottom) = (self.top(), self.bottom());
        self.windows.retain(|w| {
            let bounds = w.bounds();
            bounds.min.y >= top && bounds.max.y <= bottom
        });
    }
}

/// Gorilla component - one per player
///
/// `pos` is the top-left of the 30x30 body; the head sticks out
/// `GORILLA_HEAD_ROOM` above it and counts for hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gorilla {
    pub player_id: u8, // 0 = left, 1 = right
    pub pos: Vec2,
    pub alive: bool,
}

impl Gorilla {
    pub fn new(player_id: u8, pos: Vec2) -> Self {
        Self {
            player_id,
            pos,
            alive: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.pos.x, self.pos.y - Params::GORILLA_HEAD_ROOM),
            self.pos + Vec2::splat(Params::GORILLA_SIZE),
        )
    }

    /// Where a throw leaves from, before the launch offset
    pub fn hand(&self) -> Vec2 {
        self.pos + Vec2::splat(Params::GORILLA_SIZE / 2.0)
    }
}

/// Banana component - the projectile of the throw in flight
#[derive(Debug, Clone, Copy)]
pub struct Banana {
    pub shooter: u8,
    pub throw: Throw,
    pub step: u32, // Animation frames taken so far
    pub pos: Vec2,
}

impl Banana {
    pub fn new(shooter: u8, throw: Throw) -> Self {
        Self {
            shooter,
            throw,
            step: 0,
            pos: throw.start,
        }
    }
}
