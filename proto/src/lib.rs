//! View protocol for the Gorillas game
//!
//! What the page needs to draw a frame and show status text. Uses postcard
//! for compact binary encoding across the wasm boundary.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Frame state
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WindowView {
    pub x: f32,
    pub y: f32,
    pub lit: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BuildingView {
    pub x: f32,
    pub y: f32, // Top edge
    pub width: f32,
    pub height: f32,
    pub color: [u8; 3],
    pub windows: Vec<WindowView>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GorillaView {
    pub player_id: u8, // 0 = left, 1 = right
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

/// Match phase as the page sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PhaseView {
    Idle,
    AwaitingShot { player: u8 },
    Animating { shooter: u8 },
    Resolving,
    MatchOver { winner: u8 },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub buildings: Vec<BuildingView>,
    pub gorillas: Vec<GorillaView>,
    pub banana: Option<[f32; 2]>,
    pub explosion: Option<[f32; 2]>,
    pub wind: f32,
    pub scores: [u8; 2],
    pub current_player: u8,
    pub phase: PhaseView,
}

// ============================================================================
// Messages to the page
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ToView {
    /// Frame to draw
    Snapshot(Snapshot),

    /// Status line for the message bar
    Notice { text: String },

    /// Match decided
    MatchOver {
        winner: u8, // 0 = left, 1 = right
    },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl ToView {
    /// Serialize message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            width: 800.0,
            height: 500.0,
            buildings: vec![BuildingView {
                x: 0.0,
                y: 320.0,
                width: 60.0,
                height: 180.0,
                color: [140, 100, 70],
                windows: vec![
                    WindowView {
                        x: 5.0,
                        y: 328.0,
                        lit: true,
                    },
                    WindowView {
                        x: 17.0,
                        y: 328.0,
                        lit: false,
                    },
                ],
            }],
            gorillas: vec![
                GorillaView {
                    player_id: 0,
                    x: 15.0,
                    y: 305.0,
                    alive: true,
                },
                GorillaView {
                    player_id: 1,
                    x: 700.0,
                    y: 250.0,
                    alive: false,
                },
            ],
            banana: Some([120.5, 80.25]),
            explosion: None,
            wind: -3.5,
            scores: [2, 1],
            current_player: 1,
            phase: PhaseView::Animating { shooter: 1 },
        }
    }

    #[test]
    fn test_snapshot_serialization() {
        let msg = ToView::Snapshot(sample_snapshot());
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = ToView::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_notice_serialization() {
        let msg = ToView::Notice {
            text: "Player 2 hits Player 1!".to_string(),
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        match ToView::from_bytes(&bytes).expect("Deserialization should succeed") {
            ToView::Notice { text } => assert_eq!(text, "Player 2 hits Player 1!"),
            _ => panic!("Message type mismatch"),
        }
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = ToView::Snapshot(sample_snapshot()).to_bytes().unwrap();
        assert!(ToView::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
