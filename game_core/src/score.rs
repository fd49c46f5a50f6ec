use crate::{Overlay, Params, Side};
use tracing::info;

/// What a recorded point led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Point counted, match goes on
    Continue,
    /// Point counted and reached the target
    MatchOver { winner: Side },
    /// Match was already over; nothing changed
    Ignored,
}

/// Match score tracking
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
    pub target: u8,
    pub over: bool,
}

impl Score {
    pub fn new(target: u8) -> Self {
        Self {
            player: 0,
            opponent: 0,
            target,
            over: false,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Credit a point to `side`. No-op once the match is over.
    pub fn record_point(&mut self, side: Side, overlay: &mut Overlay, now: f64) -> PointOutcome {
        if self.over {
            return PointOutcome::Ignored;
        }

        match side {
            Side::Player => {
                self.player = self.player.saturating_add(1);
                overlay.show("You score!", now, Params::MSG_SCORE);
            }
            Side::Opponent => {
                self.opponent = self.opponent.saturating_add(1);
                overlay.show("AI scores!", now, Params::MSG_SCORE);
            }
        }
        info!(
            side = side.as_str(),
            player = self.player,
            opponent = self.opponent,
            "Point scored"
        );

        match self.winner() {
            Some(winner) => {
                self.over = true;
                let text = match winner {
                    Side::Player => "You win! 🎉",
                    Side::Opponent => "AI wins! 🤖",
                };
                overlay.show(text, now, Params::MSG_MATCH_OVER);
                info!(winner = winner.as_str(), "Match over");
                PointOutcome::MatchOver { winner }
            }
            None => PointOutcome::Continue,
        }
    }

    /// Side at or above the target score
    pub fn winner(&self) -> Option<Side> {
        if self.player >= self.target {
            Some(Side::Player)
        } else if self.opponent >= self.target {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.opponent = 0;
        self.over = false;
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new(Params::WIN_SCORE)
    }
}
