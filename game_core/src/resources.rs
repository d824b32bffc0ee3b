use glam::Vec2;

/// Match clock, in seconds since the match was created
///
/// Kept in f64 so a tab left open for days still advances by whole frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub now: f64,
}

impl Time {
    pub fn advance(&mut self, dt: f32) {
        self.now += f64::from(dt);
    }
}

/// Hits scored per player in the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub hits: [u8; 2],
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player_id: u8) -> u8 {
        let slot = &mut self.hits[player_id as usize & 1];
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn get(&self, player_id: u8) -> u8 {
        self.hits[player_id as usize & 1]
    }

    pub fn reset(&mut self) {
        self.hits = [0, 0];
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.hits[0] >= win_score {
            Some(0)
        } else if self.hits[1] >= win_score {
            Some(1)
        } else {
            None
        }
    }
}

/// Random number generator
///
/// Seed it for reproducible skylines and wind; seed it from entropy in play.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Things that happened during the last tick, for the renderer
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub explosion: Option<Vec2>,
    pub gorilla_hit: Option<u8>,
    pub missed: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.explosion = None;
        self.gorilla_hit = None;
        self.missed = false;
    }
}

/// Identity of a round. Bumped on every new round and every new game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundId(pub u64);

impl RoundId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Continuations the match defers after showing an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    SwitchPlayer,
    NewRound,
    ResetScores,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Task {
    pub due: f64,
    pub round: RoundId,
    pub action: Deferred,
}

/// One-shot deferred tasks on the match clock
///
/// Tasks remember the round they were scheduled in; the caller drops any
/// task whose round has been superseded by the time it comes due.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: f64, delay: f32, round: RoundId, action: Deferred) {
        self.tasks.push(Task {
            due: now + f64::from(delay),
            round,
            action,
        });
    }

    /// Remove and return the earliest task that is due at `now`
    pub fn pop_due(&mut self, now: f64) -> Option<Task> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due))
            .map(|(idx, _)| idx)?;
        Some(self.tasks.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
