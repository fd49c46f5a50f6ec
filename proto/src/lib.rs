//! Wire protocol between the Palm Pong engine and its collaborators
//!
//! The presenter receives one `S2C::Frame` per simulation frame; the hand
//! tracker and restart button talk back with `C2S` messages. Uses postcard
//! for compact binary serialization.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// C2S Messages (tracker / presenter to engine)
// ============================================================================

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum C2S {
    /// Palm position from one detection, normalized to the camera frame.
    /// Only `y` steers the paddle.
    HandSample { x: f32, y: f32 },

    /// Restart button pressed
    Restart,

    /// Tracker could not start (camera missing, permission denied, ...)
    SignalLost { reason: String },
}

// ============================================================================
// S2C Messages (engine to presenter)
// ============================================================================

/// Big centered overlay text
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Banner {
    Countdown(u32),
    Go,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum S2C {
    /// Everything needed to draw one frame
    Frame {
        tick: u32,
        ball_x: f32,
        ball_y: f32,
        ball_radius: f32,
        paddle_left_y: f32,
        paddle_right_y: f32,
        paddle_width: f32,
        paddle_height: f32,
        score_left: u8,
        score_right: u8,
        banner: Banner,
        /// Small transient message and milliseconds it stays up
        message: Option<(String, u32)>,
        show_restart: bool,
    },

    /// Match decided: 0 = left (player), 1 = right (opponent)
    MatchOver { winner: u8 },

    /// Non-fatal notice for the player
    Advisory { text: String },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
