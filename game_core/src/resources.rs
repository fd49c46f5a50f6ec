/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Unseeded generator; launch angles differ between runs
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

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub round_started: bool,
    pub round_went_live: bool,
    pub match_over: bool,
    pub opponent_victory_cue: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Transient text shown over the arena
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMessage {
    pub text: String,
    pub expires_at: f64,
}

/// Single-slot overlay; a new message replaces the previous one
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    message: Option<OverlayMessage>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: impl Into<String>, now: f64, duration: f64) {
        self.message = Some(OverlayMessage {
            text: text.into(),
            expires_at: now + duration,
        });
    }

    /// Message still on screen at `now`
    pub fn active(&self, now: f64) -> Option<&OverlayMessage> {
        self.message.as_ref().filter(|m| now < m.expires_at)
    }

    /// Seconds left for the active message
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.active(now).map(|m| m.expires_at - now)
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}
