/// Game tuning parameters for Gorillas
///
/// Distances are in playfield pixels with the origin at the top-left and
/// `y` growing downwards. Gravity and launch velocity are game-feel scales,
/// not SI units: the banana moves `power * VELOCITY_SCALE` pixels per second
/// and falls with `GRAVITY * GRAVITY_SCALE` pixels per second squared.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Skyline
    pub const BUILDING_MIN_WIDTH: f32 = 40.0;
    pub const BUILDING_MAX_WIDTH: f32 = 100.0;
    pub const BUILDING_GAP: f32 = 2.0;
    pub const BUILDING_MIN_HEIGHT: f32 = 30.0;
    pub const BUILDING_MAX_HEIGHT: f32 = 280.0;
    pub const HEIGHT_POOL_SIZE: usize = 20; // More than a skyline ever needs
    pub const HEIGHT_JITTER: f32 = 40.0; // Full span, applied as +/- half

    // Windows
    pub const WINDOW_WIDTH: f32 = 6.0;
    pub const WINDOW_HEIGHT: f32 = 8.0;
    pub const WINDOW_INSET_X: f32 = 5.0;
    pub const WINDOW_INSET_Y: f32 = 8.0;
    pub const WINDOW_PITCH_X: f32 = 12.0;
    pub const WINDOW_PITCH_Y: f32 = 15.0;
    pub const WINDOW_LIT_CHANCE: f64 = 0.7;

    // Gorilla
    pub const GORILLA_SIZE: f32 = 30.0;
    pub const GORILLA_HEAD_ROOM: f32 = 15.0;

    // Throw
    pub const LAUNCH_OFFSET: f32 = 20.0; // Banana starts outside the thrower
    pub const VELOCITY_SCALE: f32 = 4.0;
    pub const GRAVITY: f32 = 9.8;
    pub const GRAVITY_SCALE: f32 = 25.0;
    pub const THROW_DT: f32 = 0.025; // Flight time per animation frame
    pub const GRACE_STEPS: u32 = 3;
    pub const OFFSCREEN_MARGIN: f32 = 10.0;
    pub const BLAST_RADIUS: f32 = 40.0;

    // Input ranges
    pub const ANGLE_MIN: f32 = 0.0;
    pub const ANGLE_MAX: f32 = 360.0;
    pub const POWER_MIN: f32 = 1.0;
    pub const POWER_MAX: f32 = 200.0;

    // Wind
    pub const WIND_MAX: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Timed transitions (seconds)
    pub const BUILDING_HIT_DELAY: f32 = 1.0;
    pub const MISS_DELAY: f32 = 1.0;
    pub const GORILLA_HIT_DELAY: f32 = 2.0;
    pub const MATCH_OVER_RESET_DELAY: f32 = 3.0;

    // Clock
    pub const FRAME_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
