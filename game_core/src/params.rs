/// Game tuning parameters for Palm Pong
///
/// Distances are in arena units (pixels of the presenter canvas) and
/// velocities in units per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between side wall and paddle
    pub const OPPONENT_SPEED: f32 = 3.5;
    pub const OPPONENT_DEAD_ZONE: f32 = 8.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_BASE: f32 = 5.0;
    pub const BALL_SPEED_JITTER: f32 = 1.5;
    pub const BALL_ANGLE_MIN: f32 = 0.02; // Keeps launch vy away from zero
    pub const BALL_ANGLE_MAX: f32 = 0.3;
    pub const BALL_MIN_RETURN_SPEED: f32 = 5.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.4; // Added on every paddle hit
    pub const BALL_DEFLECTION: f32 = 5.0; // vy at the very edge of a paddle

    // Match
    pub const WIN_SCORE: u8 = 10;
    pub const COUNTDOWN_SECS: u32 = 5;
    pub const COUNTDOWN_INTERVAL: f64 = 1.0;

    // Overlay durations (seconds)
    pub const MSG_COUNTDOWN_FIRST: f64 = 0.8;
    pub const MSG_COUNTDOWN: f64 = 0.9;
    pub const MSG_SCORE: f64 = 0.9;
    pub const MSG_MATCH_OVER: f64 = 3.0;
    pub const MSG_SIGNAL_LOST: f64 = 4.0;

    // Delay between match over and the opponent victory cue
    pub const VICTORY_CUE_DELAY: f64 = 0.5;
}
