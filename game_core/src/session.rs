//! Match controller
//!
//! Owns the world and drives turn order, scoring and round resets. Driven by
//! two inputs: [`Match::fire`] from the players and [`Match::tick`] from the
//! animation clock.

use glam::Vec2;
use hecs::World;

use crate::map::Playfield;
use crate::{
    advance_banana, banana_position, gorillas_by_id, setup_round, spawn_banana, Config,
    ConfigError, Deferred, Events, FireError, GameRng, Notice, Notifier, RoundId, Scheduler, Score,
    ThrowOutcome, Throw, Time,
};

/// Where the match stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No match running; waiting for "new game"
    Idle,
    AwaitingShot { player: u8 },
    Animating { shooter: u8 },
    /// Outcome on screen; its continuation is scheduled
    Resolved { outcome: ThrowOutcome },
    MatchOver { winner: u8 },
}

pub struct Match {
    pub notifier: Box<dyn Notifier>,
    pub world: World,
    pub time: Time,
    pub playfield: Playfield,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub scheduler: Scheduler,
    pub wind: f32,
    pub round: RoundId,
    pub current_player: u8, // 0 = left, 1 = right
    phase: Phase,
    accumulator: f32, // Unconsumed clock time, less than one frame
}

impl Match {
    /// Fails when `config` does not pass [`Config::validate`]
    pub fn new(
        config: Config,
        rng: GameRng,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            notifier,
            world: World::new(),
            time: Time::default(),
            playfield: Playfield::from_config(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            scheduler: Scheduler::new(),
            wind: 0.0,
            round: RoundId::default(),
            current_player: 0,
            phase: Phase::Idle,
            accumulator: 0.0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::MatchOver { .. })
    }

    pub fn banana_position(&self) -> Option<Vec2> {
        banana_position(&self.world)
    }

    /// Start a new match: fresh skyline, scores zeroed, player 1 to throw.
    ///
    /// Callable at any time. A throw in flight is abandoned and deferred
    /// continuations from the old match are orphaned by the new round id.
    pub fn new_game(&mut self) {
        self.round = self.round.next();
        self.score.reset();
        self.current_player = 0;
        self.accumulator = 0.0;
        self.start_round();
        self.phase = Phase::AwaitingShot { player: 0 };
        log::info!("new match, round {:?}, wind {:.1}", self.round, self.wind);
        self.notify(Notice::GameStarted);
    }

    /// Throw for `player` at `angle` degrees with `power`
    ///
    /// Rejections are announced through the notifier and change nothing.
    pub fn fire(&mut self, player: u8, angle: f32, power: f32) -> Result<(), FireError> {
        let result = self.try_fire(player, angle, power);
        if let Err(err) = result {
            log::debug!("player {} fire rejected: {err}", player + 1);
            self.notify(Notice::Rejected(err));
        }
        result
    }

    fn try_fire(&mut self, player: u8, angle: f32, power: f32) -> Result<(), FireError> {
        match self.phase {
            Phase::AwaitingShot { player: current } if current != player => {
                return Err(FireError::NotYourTurn { current });
            }
            Phase::AwaitingShot { .. } => {}
            Phase::Animating { .. } | Phase::Resolved { .. } => {
                return Err(FireError::ThrowInProgress);
            }
            Phase::Idle | Phase::MatchOver { .. } => return Err(FireError::MatchNotRunning),
        }
        self.config.check_shot(angle, power)?;

        let hand = gorillas_by_id(&self.world)
            .into_iter()
            .find(|g| g.player_id == player)
            .map(|g| g.hand())
            .ok_or(FireError::MatchNotRunning)?;

        let throw = Throw::launch(player, hand, angle, power, self.wind, &self.config);
        spawn_banana(&mut self.world, player, throw);
        self.phase = Phase::Animating { shooter: player };
        log::debug!(
            "player {} throws: angle {angle}, power {power}, wind {:.1}",
            player + 1,
            self.wind
        );
        self.notify(Notice::Fired { player });
        Ok(())
    }

    /// Advance the match clock by `dt` seconds
    ///
    /// Runs whole frames of `frame_dt`; each frame moves the banana one
    /// throw step and fires any deferred continuation that has come due.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };
        self.events.clear();

        self.accumulator += dt;
        while self.accumulator >= self.config.frame_dt {
            self.accumulator -= self.config.frame_dt;
            self.time.advance(self.config.frame_dt);
            self.frame();
        }
    }

    fn frame(&mut self) {
        self.run_due_tasks();

        // Leaving Animating is what cancels a throw
        if !self.is_animating() {
            return;
        }
        if let Some(outcome) =
            advance_banana(&mut self.world, &self.playfield, &self.config, &mut self.events)
        {
            self.resolve(outcome);
        }
    }

    fn resolve(&mut self, outcome: ThrowOutcome) {
        log::debug!("player {} throw ended: {outcome:?}", outcome.shooter() + 1);
        self.phase = Phase::Resolved { outcome };
        match outcome {
            ThrowOutcome::GorillaHit {
                shooter, target, ..
            } if shooter == target => {
                self.notify(Notice::SelfHit { player: shooter });
                self.defer(self.config.gorilla_hit_delay, Deferred::NewRound);
            }
            ThrowOutcome::GorillaHit {
                shooter, target, ..
            } => {
                self.notify(Notice::Hit { shooter, target });
                self.score.increment(shooter);
                log::info!(
                    "player {} scores ({}-{})",
                    shooter + 1,
                    self.score.get(0),
                    self.score.get(1)
                );
                if let Some(winner) = self.score.has_winner(self.config.win_score) {
                    self.phase = Phase::MatchOver { winner };
                    self.notify(Notice::Won { winner });
                    self.defer(self.config.match_over_reset_delay, Deferred::ResetScores);
                } else {
                    self.defer(self.config.gorilla_hit_delay, Deferred::NewRound);
                }
            }
            ThrowOutcome::BuildingHit { shooter, .. } => {
                self.notify(Notice::BuildingHit { shooter });
                self.defer(self.config.building_hit_delay, Deferred::SwitchPlayer);
            }
            ThrowOutcome::Missed { .. } => {
                self.notify(Notice::Missed);
                self.defer(self.config.miss_delay, Deferred::SwitchPlayer);
            }
        }
    }

    fn defer(&mut self, delay: f32, action: Deferred) {
        self.scheduler
            .schedule(self.time.now, delay, self.round, action);
    }

    fn run_due_tasks(&mut self) {
        while let Some(task) = self.scheduler.pop_due(self.time.now) {
            if task.round != self.round {
                log::debug!("dropping stale {:?} from {:?}", task.action, task.round);
                continue;
            }
            match task.action {
                Deferred::SwitchPlayer if matches!(self.phase, Phase::Resolved { .. }) => {
                    self.switch_player();
                }
                Deferred::NewRound if matches!(self.phase, Phase::Resolved { .. }) => {
                    self.round = self.round.next();
                    self.start_round();
                    log::info!("round {:?}, wind {:.1}", self.round, self.wind);
                    self.switch_player();
                }
                Deferred::ResetScores if self.is_game_over() => {
                    self.score.reset();
                    self.phase = Phase::Idle;
                    self.notify(Notice::ReadyForNewGame);
                }
                action => log::debug!("ignoring {action:?} in {:?}", self.phase),
            }
        }
    }

    fn start_round(&mut self) {
        self.wind = setup_round(&mut self.world, &self.config, &mut self.rng);
    }

    fn switch_player(&mut self) {
        self.current_player = 1 - self.current_player;
        self.phase = Phase::AwaitingShot {
            player: self.current_player,
        };
        self.notify(Notice::Turn {
            player: self.current_player,
        });
    }

    fn notify(&self, notice: Notice) {
        self.notifier.notify(&notice);
    }
}
