//! Hand position to player paddle mapping
//!
//! Hand tracking delivers normalized samples at its own pace, possibly from
//! another thread. Each sample is mapped to a paddle top edge right away and
//! parked in an atomic cell; the frame loop picks up whatever was written
//! last.

use crate::Config;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{trace, warn};

/// Write side of the control signal. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct ControlSender {
    position: Arc<AtomicU32>,
    arena_height: f32,
    paddle_height: f32,
}

impl ControlSender {
    /// Map a normalized vertical sample (0 = top, 1 = bottom) to a paddle
    /// position. Out-of-range input is clamped; NaN is dropped.
    pub fn on_sample(&self, normalized_y: f32) {
        if normalized_y.is_nan() {
            warn!("Dropping NaN control sample");
            return;
        }
        let v = normalized_y.clamp(0.0, 1.0);
        let max_top = self.arena_height - self.paddle_height;
        let top = (v * self.arena_height - self.paddle_height / 2.0).clamp(0.0, max_top);
        trace!(normalized_y, top, "Control sample");
        self.position.store(top.to_bits(), Ordering::Relaxed);
    }

    /// One detection event; only the vertical component steers the paddle
    pub fn on_point(&self, _normalized_x: f32, normalized_y: f32) {
        self.on_sample(normalized_y);
    }
}

/// Owner of the player paddle position
#[derive(Debug)]
pub struct ControlAdapter {
    sender: ControlSender,
}

impl ControlAdapter {
    /// Starts with the paddle centered
    pub fn new(config: &Config) -> Self {
        let start = config.paddle_spawn_y();
        Self {
            sender: ControlSender {
                position: Arc::new(AtomicU32::new(start.to_bits())),
                arena_height: config.arena_height,
                paddle_height: config.paddle_height,
            },
        }
    }

    pub fn sender(&self) -> ControlSender {
        self.sender.clone()
    }

    pub fn on_sample(&self, normalized_y: f32) {
        self.sender.on_sample(normalized_y);
    }

    /// Last stored paddle top edge
    pub fn position(&self) -> f32 {
        f32::from_bits(self.sender.position.load(Ordering::Relaxed))
    }
}
