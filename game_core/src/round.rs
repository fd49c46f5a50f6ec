//! Round lifecycle
//!
//! Drives countdown → active → scored → next countdown, and parks the game
//! in `MatchOver` once the score tracker says so. Countdown ticks are
//! deadline based: `update` fires every tick whose time has come, and
//! starting a round replaces whatever deadline was pending.

use crate::systems::launch_ball;
use crate::{Config, GameRng, Overlay, Params, Side};
use hecs::World;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Ball parked at center; value is the number still on screen
    CountingDown(u32),
    /// Ball in play
    Active,
    /// Point just ended; only observable inside a frame
    Scored,
    /// Nothing runs until a restart
    MatchOver,
}

/// What the presenter should show over the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Countdown(u32),
    Go,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct RoundMachine {
    state: RoundState,
    countdown_secs: u32,
    next_tick_at: Option<f64>,
    go_until: Option<f64>,
}

impl RoundMachine {
    pub fn new(config: &Config) -> Self {
        Self {
            state: RoundState::CountingDown(config.countdown_secs),
            countdown_secs: config.countdown_secs,
            next_tick_at: None,
            go_until: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Physics gate
    pub fn is_active(&self) -> bool {
        self.state == RoundState::Active
    }

    /// Re-center and relaunch the ball toward `toward`, then count down
    pub fn start_round(
        &mut self,
        toward: Side,
        world: &mut World,
        config: &Config,
        rng: &mut GameRng,
        overlay: &mut Overlay,
        now: f64,
    ) {
        launch_ball(world, config, rng, toward);

        self.state = RoundState::CountingDown(self.countdown_secs);
        // Any pending countdown is dropped here
        self.next_tick_at = Some(now + Params::COUNTDOWN_INTERVAL);
        self.go_until = None;
        overlay.show(
            format!("Starting in {}", self.countdown_secs),
            now,
            Params::MSG_COUNTDOWN_FIRST,
        );
        info!(toward = toward.as_str(), countdown = self.countdown_secs, "Round starting");
    }

    /// Apply one countdown tick. Returns true when the round goes live.
    pub fn tick(&mut self, overlay: &mut Overlay, now: f64) -> bool {
        let RoundState::CountingDown(n) = self.state else {
            return false;
        };

        let n = n.saturating_sub(1);
        if n >= 1 {
            self.state = RoundState::CountingDown(n);
            overlay.show(format!("Starting in {n}"), now, Params::MSG_COUNTDOWN);
            debug!(remaining = n, "Countdown tick");
            false
        } else {
            self.state = RoundState::Active;
            self.next_tick_at = None;
            self.go_until = Some(now + Params::MSG_COUNTDOWN);
            overlay.show("GO!", now, Params::MSG_COUNTDOWN);
            info!("Round live");
            true
        }
    }

    /// Fire every countdown tick due by `now`
    pub fn update(&mut self, overlay: &mut Overlay, now: f64) -> bool {
        let mut went_live = false;
        while let Some(due) = self.next_tick_at {
            if now < due {
                break;
            }
            went_live |= self.tick(overlay, now);
            if let RoundState::CountingDown(_) = self.state {
                self.next_tick_at = Some(due + Params::COUNTDOWN_INTERVAL);
            }
        }
        went_live
    }

    pub fn scored(&mut self) {
        self.state = RoundState::Scored;
    }

    pub fn match_over(&mut self) {
        self.state = RoundState::MatchOver;
        self.next_tick_at = None;
        self.go_until = None;
    }

    pub fn status(&self, now: f64) -> RoundStatus {
        match self.state {
            RoundState::CountingDown(n) => RoundStatus::Countdown(n),
            RoundState::Active if self.go_until.is_some_and(|t| now < t) => RoundStatus::Go,
            _ => RoundStatus::Hidden,
        }
    }
}
