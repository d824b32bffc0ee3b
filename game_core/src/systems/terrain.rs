use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Building, Config, GameRng, Params, Rgb, Window};

/// Height bands as fractions of the height range: short, medium, tall
const HEIGHT_BANDS: [(f32, f32); 3] = [(0.2, 0.4), (0.4, 0.7), (0.7, 1.0)];

/// Draw a shuffled pool of height fractions, each from a random band
pub fn height_pool(rng: &mut GameRng, size: usize) -> Vec<f32> {
    let mut pool: Vec<f32> = (0..size)
        .map(|_| {
            let (lo, hi) = HEIGHT_BANDS[rng.0.gen_range(0..HEIGHT_BANDS.len())];
            rng.0.gen_range(lo..hi)
        })
        .collect();
    // Fisher-Yates, so neighbouring buildings don't share a band by construction
    pool.shuffle(&mut rng.0);
    pool
}

/// Muted facade colour
pub fn random_color(rng: &mut GameRng) -> Rgb {
    Rgb(
        rng.0.gen_range(100..200),
        rng.0.gen_range(80..160),
        rng.0.gen_range(60..120),
    )
}

/// Grid of windows inside the building's margins
pub fn window_grid(building: &Building, lit_chance: f64, rng: &mut GameRng) -> Vec<Window> {
    let mut windows = Vec::new();
    let mut wx = building.left() + Params::WINDOW_INSET_X;
    while wx < building.right() - Params::WINDOW_INSET_X {
        let mut wy = building.top() + Params::WINDOW_INSET_Y;
        while wy < building.bottom() - Params::WINDOW_INSET_Y {
            windows.push(Window::new(Vec2::new(wx, wy), rng.0.gen_bool(lit_chance)));
            wy += Params::WINDOW_PITCH_Y;
        }
        wx += Params::WINDOW_PITCH_X;
    }
    windows
}

/// Generate a skyline of adjacent buildings spanning the playfield, left to right
pub fn generate_skyline(config: &Config, rng: &mut GameRng) -> Vec<Building> {
    let pool = height_pool(rng, Params::HEIGHT_POOL_SIZE);
    let min_height = config.building_min_height;
    let max_height = config.building_max_height;
    let range = max_height - min_height;

    let mut buildings: Vec<Building> = Vec::new();
    let mut x = 0.0;
    while x < config.playfield_width {
        let width = rng
            .0
            .gen_range(config.building_min_width..=config.building_max_width);

        let fraction = pool[buildings.len() % pool.len()];
        let jitter = (rng.0.gen::<f32>() - 0.5) * config.height_jitter;
        let height = (min_height + fraction * range + jitter).clamp(min_height, max_height);

        let color = random_color(rng);
        let mut building = Building::new(x, config.playfield_height, width, height, color);
        building.windows = window_grid(&building, config.window_lit_chance, rng);

        buildings.push(building);
        x += width + config.building_gap;
    }

    log::debug!(
        "skyline: {} buildings across {}px",
        buildings.len(),
        config.playfield_width
    );
    buildings
}
