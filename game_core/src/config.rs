use crate::{ConfigError, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_jitter: f32,
    /// Floor for the horizontal speed of a returned ball
    pub ball_min_return_speed: f32,
    /// Added to the horizontal speed on every paddle hit
    pub ball_speed_increase: f32,
    /// Vertical speed for a hit at the very edge of a paddle
    pub ball_deflection: f32,
    pub win_score: u8,
    pub countdown_secs: u32,
    /// Decide paddle hits from where the ball crossed the paddle face
    /// during the step instead of where it ended up.
    pub swept_paddle_collision: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_jitter: Params::BALL_SPEED_JITTER,
            ball_min_return_speed: Params::BALL_MIN_RETURN_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_deflection: Params::BALL_DEFLECTION,
            win_score: Params::WIN_SCORE,
            countdown_secs: Params::COUNTDOWN_SECS,
            swept_paddle_collision: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail fast on values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written as negated comparisons so NaN is rejected too
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::Arena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if !(self.paddle_inset >= 0.0)
            || 2.0 * (self.paddle_inset + self.paddle_width) >= self.arena_width
        {
            return Err(ConfigError::PaddlesOverlap {
                inset: self.paddle_inset,
                arena: self.arena_width,
            });
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if !(self.ball_speed_base > 0.0 && self.ball_speed_base.is_finite()) {
            return Err(ConfigError::BallSpeed(self.ball_speed_base));
        }
        if !(self.ball_speed_jitter >= 0.0 && self.ball_speed_jitter.is_finite()) {
            return Err(ConfigError::BallJitter(self.ball_speed_jitter));
        }
        if !(self.ball_min_return_speed > 0.0
            && self.ball_min_return_speed.is_finite()
            && self.ball_speed_increase >= 0.0
            && self.ball_speed_increase.is_finite())
        {
            return Err(ConfigError::ReturnSpeed {
                min: self.ball_min_return_speed,
                increase: self.ball_speed_increase,
            });
        }
        if !(self.ball_deflection >= 0.0 && self.ball_deflection.is_finite()) {
            return Err(ConfigError::Deflection(self.ball_deflection));
        }
        if !(self.opponent_speed > 0.0 && self.opponent_speed.is_finite()) {
            return Err(ConfigError::OpponentSpeed(self.opponent_speed));
        }
        if !(self.opponent_dead_zone >= 0.0 && self.opponent_dead_zone.is_finite()) {
            return Err(ConfigError::OpponentDeadZone(self.opponent_dead_zone));
        }
        if self.win_score == 0 {
            return Err(ConfigError::TargetScore);
        }
        if self.countdown_secs == 0 {
            return Err(ConfigError::Countdown);
        }
        Ok(())
    }

    /// Left edge X of the paddle for the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// X of the face the ball bounces off
    pub fn paddle_face_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_x(side) + self.paddle_width,
            Side::Opponent => self.paddle_x(side),
        }
    }

    /// Clamp a paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
