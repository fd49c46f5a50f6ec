//! Scripted stand-in for the hand tracker

use proto::C2S;

/// Palm that bobs up and down the camera frame
#[derive(Debug, Clone, Copy)]
pub struct HandScript {
    /// Full up-down cycles per second
    pub rate: f64,
    /// Fraction of the frame height covered, 0..=1
    pub sweep: f32,
}

impl Default for HandScript {
    fn default() -> Self {
        Self {
            rate: 0.35,
            sweep: 0.9,
        }
    }
}

impl HandScript {
    /// Sample the tracker would report at time `t`
    pub fn sample(&self, t: f64) -> C2S {
        let phase = (t * self.rate * std::f64::consts::TAU).sin() as f32;
        C2S::HandSample {
            x: 0.5,
            y: 0.5 + 0.5 * self.sweep * phase,
        }
    }
}
