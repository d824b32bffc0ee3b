//! Browser client for the Gorillas game
//!
//! The page owns the canvas, the text fields and the animation clock. It
//! calls `tick` from `requestAnimationFrame`, forwards the fire buttons and
//! draws whatever `snapshot` returns. Bindings are only generated when
//! compiling for wasm32; the rest is plain Rust.

pub mod input;
pub mod page;
pub mod view;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use game_core::{Config, GameRng, Match};
use page::PageNotifier;
use proto::ToView;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// One Gorillas match bound to the page
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct GorillasClient {
    game: Match,
    page: PageNotifier,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl GorillasClient {
    /// Default rules, fresh randomness
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Result<GorillasClient, String> {
        Self::build(Config::new(), GameRng::from_entropy())
    }

    /// Rules overridden by a (partial) JSON config, seeded for replays
    pub fn with_config(config_json: &str, seed: u32) -> Result<GorillasClient, String> {
        let config: Config = serde_json::from_str(config_json).map_err(|e| e.to_string())?;
        Self::build(config, GameRng::new(seed as u64))
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    /// Fire with the raw text of the angle and power fields.
    /// Returns false when the throw was rejected; the reason is queued as a notice.
    pub fn fire(&mut self, player: u8, angle_text: &str, power_text: &str) -> bool {
        let angle = input::parse_number(angle_text);
        let power = input::parse_number(power_text);
        self.game.fire(player, angle, power).is_ok()
    }

    /// Advance by `dt` seconds of wall clock
    pub fn tick(&mut self, dt: f32) {
        self.game.tick(dt);
    }

    /// Current frame, postcard-encoded `ToView::Snapshot`
    pub fn snapshot(&self) -> Vec<u8> {
        ToView::Snapshot(view::snapshot(&self.game))
            .to_bytes()
            .unwrap_or_default()
    }

    /// Next queued message, postcard-encoded, if any
    pub fn next_message(&self) -> Option<Vec<u8>> {
        self.page.pop().and_then(|msg| msg.to_bytes().ok())
    }

    /// Next queued status line as plain text, skipping non-text messages
    pub fn next_notice(&self) -> Option<String> {
        while let Some(msg) = self.page.pop() {
            if let ToView::Notice { text } = msg {
                return Some(text);
            }
        }
        None
    }

    pub fn current_player(&self) -> u8 {
        self.game.current_player
    }

    pub fn wind(&self) -> f32 {
        self.game.wind
    }

    pub fn is_animating(&self) -> bool {
        self.game.is_animating()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }
}

impl GorillasClient {
    fn build(config: Config, rng: GameRng) -> Result<Self, String> {
        let page = PageNotifier::new();
        let game = Match::new(config, rng, Box::new(page.clone())).map_err(|e| e.to_string())?;
        Ok(Self { game, page })
    }
}
