use thiserror::Error;

/// Rejected configuration, reported before any frame runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena must have positive dimensions, got {width}x{height}")]
    Arena { width: f32, height: f32 },

    #[error("paddle must have positive dimensions, got {width}x{height}")]
    PaddleSize { width: f32, height: f32 },

    #[error("paddle height {paddle} does not fit arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("paddles at inset {inset} do not fit arena width {arena}")]
    PaddlesOverlap { inset: f32, arena: f32 },

    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),

    #[error("ball base speed must be positive and finite, got {0}")]
    BallSpeed(f32),

    #[error("ball speed jitter must be non-negative and finite, got {0}")]
    BallJitter(f32),

    #[error("paddle return needs a positive minimum speed and non-negative gain, got {min} and {increase}")]
    ReturnSpeed { min: f32, increase: f32 },

    #[error("ball deflection must be non-negative and finite, got {0}")]
    Deflection(f32),

    #[error("opponent speed must be positive and finite, got {0}")]
    OpponentSpeed(f32),

    #[error("opponent dead-zone must be non-negative and finite, got {0}")]
    OpponentDeadZone(f32),

    #[error("target score must be positive")]
    TargetScore,

    #[error("countdown must last at least one tick")]
    Countdown,
}
