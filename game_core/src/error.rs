use std::fmt;

/// Why a fire command was rejected. The match state is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireError {
    /// Angle outside [0, 360] degrees, or not a number.
    InvalidAngle(f32),
    /// Power outside [1, 200], or not a number.
    InvalidPower(f32),
    /// The other player is up.
    NotYourTurn { current: u8 },
    /// A banana is in flight or its outcome is still being shown.
    ThrowInProgress,
    /// No match is running (idle or already decided).
    MatchNotRunning,
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireError::InvalidAngle(_) => write!(f, "Invalid angle! Must be between 0 and 360."),
            FireError::InvalidPower(_) => {
                write!(f, "Invalid velocity! Must be between 1 and 200.")
            }
            FireError::NotYourTurn { current } => {
                write!(f, "It's Player {}'s turn!", current + 1)
            }
            FireError::ThrowInProgress => write!(f, "Wait for the current throw to finish."),
            FireError::MatchNotRunning => write!(f, "Click 'NEW GAME' to play again!"),
        }
    }
}

impl std::error::Error for FireError {}

/// Configuration rejected by [`crate::Config::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPlayfield,
    InvalidRange(&'static str),
    ZeroWinScore,
    NotFinite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPlayfield => write!(f, "playfield must have a positive size"),
            ConfigError::InvalidRange(what) => write!(f, "invalid {what} range"),
            ConfigError::ZeroWinScore => write!(f, "win score must be at least 1"),
            ConfigError::NotFinite => write!(f, "config values must be finite numbers"),
        }
    }
}

impl std::error::Error for ConfigError {}
