use crate::{Ball, GameState, Paddle, RoundStatus, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub text: String,
    pub remaining: f64,
}

/// Immutable per-frame picture of the game for the presenter
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub ball: BallView,
    pub player: PaddleView,
    pub opponent: PaddleView,
    pub player_score: u8,
    pub opponent_score: u8,
    pub round: RoundStatus,
    pub match_over: bool,
    pub winner: Option<Side>,
    pub message: Option<MessageView>,
    /// The restart control only makes sense once the match is decided
    pub show_restart: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, now: f64) -> Self {
        let config = &state.config;

        let center = config.center();
        let ball = state
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| b.pos)
            .unwrap_or(center);

        let mut player_y = config.paddle_spawn_y();
        let mut opponent_y = config.paddle_spawn_y();
        for (_e, paddle) in state.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Player => player_y = paddle.y,
                Side::Opponent => opponent_y = paddle.y,
            }
        }
        let paddle_view = |side: Side, y: f32| PaddleView {
            x: config.paddle_x(side),
            y,
            width: config.paddle_width,
            height: config.paddle_height,
        };

        let over = state.score.over;
        Self {
            ball: BallView {
                x: ball.x,
                y: ball.y,
                radius: config.ball_radius,
            },
            player: paddle_view(Side::Player, player_y),
            opponent: paddle_view(Side::Opponent, opponent_y),
            player_score: state.score.player,
            opponent_score: state.score.opponent,
            round: state.round.status(now),
            match_over: over,
            winner: if over { state.score.winner() } else { None },
            message: state
                .overlay
                .active(now)
                .zip(state.overlay.remaining(now))
                .map(|(m, remaining)| MessageView {
                    text: m.text.clone(),
                    remaining,
                }),
            show_restart: over,
        }
    }
}
