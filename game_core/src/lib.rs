pub mod clock;
pub mod components;
pub mod config;
pub mod control;
pub mod error;
pub mod game;
pub mod params;
pub mod resources;
pub mod round;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use control::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use round::*;
pub use score::*;
pub use snapshot::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Run one frame of the Palm Pong simulation
///
/// Order is fixed: hand control, opponent, countdown, then ball physics
/// while the round is live. Returns the side that scored, if any.
pub fn step(state: &mut GameState, control: &ControlAdapter, now: f64) -> Option<Side> {
    // Clear events at start of frame
    state.events.clear();

    // 1. Hand position onto the player paddle
    apply_control(&mut state.world, control);

    // 2. Opponent follows the ball, live or not
    track_ball(&mut state.world, &state.config);

    // 3. Countdown
    if state.round.update(&mut state.overlay, now) {
        state.events.round_went_live = true;
    }
    if !state.round.is_active() {
        return None;
    }

    // 4. Move ball and resolve walls and paddles
    let prev_pos = move_ball(&mut state.world);
    check_collisions(&mut state.world, &state.config, &mut state.events, prev_pos);

    // 5. Scoring ends the step
    let scorer = check_scoring(&state.world, &state.config, &mut state.events)?;
    state.round.scored();
    match state.score.record_point(scorer, &mut state.overlay, now) {
        PointOutcome::MatchOver { .. } => {
            state.round.match_over();
            state.events.match_over = true;
        }
        // Serve toward the side that conceded
        PointOutcome::Continue => state.start_round(scorer.other(), now),
        PointOutcome::Ignored => state.round.match_over(),
    }
    Some(scorer)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
