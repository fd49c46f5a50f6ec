use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move the opponent paddle toward the ball at a fixed speed
///
/// Runs whether or not a round is live, so the paddle keeps drifting toward
/// the parked ball during countdowns.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.y + config.paddle_height / 2.0;
        if center < ball_y - config.opponent_dead_zone {
            paddle.y += config.opponent_speed;
        } else if center > ball_y + config.opponent_dead_zone {
            paddle.y -= config.opponent_speed;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
