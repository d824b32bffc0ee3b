//! Match state to view snapshot

use game_core::{buildings_by_x, gorillas_by_id, Match, Phase};
use proto::{BuildingView, GorillaView, PhaseView, Snapshot, WindowView};

pub fn phase_view(phase: Phase) -> PhaseView {
    match phase {
        Phase::Idle => PhaseView::Idle,
        Phase::AwaitingShot { player } => PhaseView::AwaitingShot { player },
        Phase::Animating { shooter } => PhaseView::Animating { shooter },
        Phase::Resolved { .. } => PhaseView::Resolving,
        Phase::MatchOver { winner } => PhaseView::MatchOver { winner },
    }
}

pub fn snapshot(game: &Match) -> Snapshot {
    let buildings = buildings_by_x(&game.world)
        .into_iter()
        .map(|b| BuildingView {
            x: b.pos.x,
            y: b.pos.y,
            width: b.width,
            height: b.height,
            color: [b.color.0, b.color.1, b.color.2],
            windows: b
                .windows
                .iter()
                .map(|w| WindowView {
                    x: w.pos.x,
                    y: w.pos.y,
                    lit: w.lit,
                })
                .collect(),
        })
        .collect();

    let gorillas = gorillas_by_id(&game.world)
        .into_iter()
        .map(|g| GorillaView {
            player_id: g.player_id,
            x: g.pos.x,
            y: g.pos.y,
            alive: g.alive,
        })
        .collect();

    Snapshot {
        width: game.playfield.width,
        height: game.playfield.height,
        buildings,
        gorillas,
        banana: game.banana_position().map(|p| p.to_array()),
        explosion: game.events.explosion.map(|p| p.to_array()),
        wind: game.wind,
        scores: game.score.hits,
        current_player: game.current_player,
        phase: phase_view(game.phase()),
    }
}
