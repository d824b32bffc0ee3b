use std::fmt;

use crate::error::FireError;

/// Status line shown to the players on every transition
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    GameStarted,
    Turn { player: u8 },
    Fired { player: u8 },
    SelfHit { player: u8 },
    Hit { shooter: u8, target: u8 },
    BuildingHit { shooter: u8 },
    Missed,
    Won { winner: u8 },
    ReadyForNewGame,
    Rejected(FireError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Players are numbered from 1 on screen
        match self {
            Notice::GameStarted => write!(f, "Game Started! Player 1's turn."),
            Notice::Turn { player } => write!(f, "Player {}'s turn.", player + 1),
            Notice::Fired { player } => write!(f, "Player {} fires!", player + 1),
            Notice::SelfHit { player } => {
                write!(f, "Player {} hit themselves! Oops!", player + 1)
            }
            Notice::Hit { shooter, target } => {
                write!(f, "Player {} hits Player {}!", shooter + 1, target + 1)
            }
            Notice::BuildingHit { shooter } => {
                write!(f, "Player {} hits a building!", shooter + 1)
            }
            Notice::Missed => write!(f, "Shot missed!"),
            Notice::Won { winner } => write!(f, "Player {} wins the match!", winner + 1),
            Notice::ReadyForNewGame => write!(f, "Click 'NEW GAME' to play again!"),
            Notice::Rejected(err) => write!(f, "{err}"),
        }
    }
}

/// Receives notices. Fire-and-forget: the match never reads anything back.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that only logs
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        log::info!("{notice}");
    }
}
