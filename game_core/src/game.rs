//! Frame-driven controller around `GameState`
//!
//! The host calls `frame` once per display refresh, feeds hand samples
//! through a `ControlSender`, and reads back a `RenderSnapshot`.

use crate::{
    step, Clock, Config, ConfigError, ControlAdapter, ControlSender, GameRng, GameState, Params,
    RenderSnapshot, Side,
};
use tracing::{info, warn};

/// Side effects the host may attach to match results
pub trait MatchHooks {
    fn on_match_over(&mut self, _winner: Side) {}

    /// Fired once, a short while after the opponent takes the match
    fn on_opponent_victory_cue(&mut self) {}
}

/// Hooks that do nothing
pub struct NoHooks;

impl MatchHooks for NoHooks {}

pub struct Game {
    state: GameState,
    control: ControlAdapter,
    clock: Box<dyn Clock>,
    hooks: Box<dyn MatchHooks>,
    victory_cue_at: Option<f64>,
}

impl Game {
    /// Validate the config and serve the first ball toward the opponent
    pub fn new(config: Config, clock: Box<dyn Clock>, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let control = ControlAdapter::new(&config);
        let mut state = GameState::new(config, rng);
        state.start_round(Side::Opponent, clock.now());

        Ok(Self {
            state,
            control,
            clock,
            hooks: Box::new(NoHooks),
            victory_cue_at: None,
        })
    }

    pub fn with_hooks(mut self, hooks: Box<dyn MatchHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Handle for the hand tracker
    pub fn control(&self) -> ControlSender {
        self.control.sender()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Advance one frame; returns the side that scored, if any
    pub fn frame(&mut self) -> Option<Side> {
        let now = self.clock.now();
        let scorer = step(&mut self.state, &self.control, now);

        if self.state.events.match_over {
            if let Some(winner) = self.state.score.winner() {
                self.hooks.on_match_over(winner);
                if winner == Side::Opponent {
                    self.victory_cue_at = Some(now + Params::VICTORY_CUE_DELAY);
                }
            }
        }

        if let Some(at) = self.victory_cue_at {
            if now >= at {
                self.victory_cue_at = None;
                self.state.events.opponent_victory_cue = true;
                self.hooks.on_opponent_victory_cue();
            }
        }

        scorer
    }

    /// Start a new match. Only honoured once the current one is over.
    pub fn restart(&mut self) -> bool {
        if !self.state.score.over {
            return false;
        }
        let now = self.clock.now();
        // A pending victory cue still fires
        self.state.score.reset();
        self.state.start_round(Side::Opponent, now);
        info!("Match restarted");
        true
    }

    /// The hand tracker could not start; play continues with the last
    /// known paddle position
    pub fn report_signal_unavailable(&mut self, reason: &str) {
        warn!(reason, "Control signal unavailable");
        self.state.overlay.show(
            "Camera error — check permissions.",
            self.clock.now(),
            Params::MSG_SIGNAL_LOST,
        );
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.clock.now())
    }
}
