use crate::{Ball, Config, Events, Side};
use hecs::World;
use tracing::info;

/// Check if ball left the arena; returns the side that won the point
///
/// Runs after the paddle checks, so a ball that is still here was missed.
pub fn check_scoring(world: &World, config: &Config, events: &mut Events) -> Option<Side> {
    let r = config.ball_radius;
    let ball = *world.query::<&Ball>().iter().next()?.1;

    let scorer = if ball.pos.x - r < 0.0 {
        Side::Opponent
    } else if ball.pos.x + r > config.arena_width {
        Side::Player
    } else {
        return None;
    };

    match scorer {
        Side::Player => events.player_scored = true,
        Side::Opponent => events.opponent_scored = true,
    }
    info!(scorer = scorer.as_str(), x = ball.pos.x, "Ball left the arena");
    Some(scorer)
}
