use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;
use tracing::debug;

/// Check ball collisions with walls and paddles
///
/// `prev_pos` is where the ball was before this frame's integration. It is
/// only consulted when `config.swept_paddle_collision` is set.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    prev_pos: Option<Vec2>,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        // Player side first, then opponent
        for side in [Side::Player, Side::Opponent] {
            let Some(&(_, paddle_y)) = paddles.iter().find(|(s, _)| *s == side) else {
                continue;
            };
            if bounce_paddle(ball, side, paddle_y, config, prev_pos) {
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect off top and bottom walls; no energy is lost
fn bounce_walls(ball: &mut Ball, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
    } else if ball.pos.y + r > config.arena_height {
        ball.pos.y = config.arena_height - r;
    } else {
        return false;
    }
    ball.vel.y = -ball.vel.y;
    debug!(y = ball.pos.y, vy = ball.vel.y, "Ball hit wall");
    true
}

/// Leading edge of the ball relative to a paddle face, positive once past it
fn penetration(x: f32, side: Side, face: f32, r: f32) -> f32 {
    match side {
        Side::Player => face - (x - r),
        Side::Opponent => (x + r) - face,
    }
}

fn bounce_paddle(
    ball: &mut Ball,
    side: Side,
    paddle_y: f32,
    config: &Config,
    prev_pos: Option<Vec2>,
) -> bool {
    let r = config.ball_radius;
    let face = config.paddle_face_x(side);

    let depth = penetration(ball.pos.x, side, face, r);
    if depth <= 0.0 {
        return false;
    }

    // Y at which the decision is made
    let mut hit_y = ball.pos.y;
    if config.swept_paddle_collision {
        if let Some(prev) = prev_pos {
            let prev_depth = penetration(prev.x, side, face, r);
            if prev_depth <= 0.0 {
                // Fraction of the step at which the leading edge met the face
                let t = -prev_depth / (depth - prev_depth);
                hit_y = prev.y + (ball.pos.y - prev.y) * t;
            }
        }
    }

    let top = paddle_y;
    let bottom = paddle_y + config.paddle_height;
    if !(hit_y > top && hit_y < bottom) {
        return false;
    }

    // -1 at the top edge, 0 at the center, 1 at the bottom edge
    let half = config.paddle_height / 2.0;
    let relative = (hit_y - (paddle_y + half)) / half;

    let speed = ball.vel.x.abs().max(config.ball_min_return_speed) + config.ball_speed_increase;
    let away = side.other().toward_sign();
    ball.vel = Vec2::new(away * speed, relative * config.ball_deflection);

    // Flush against the face so the next frame cannot re-trigger
    ball.pos.x = face + away * r;
    ball.pos.y = hit_y;

    debug!(
        side = side.as_str(),
        relative,
        vx = ball.vel.x,
        vy = ball.vel.y,
        "Ball hit paddle"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events};

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(5.0, -4.0);
        create_ball(&mut world, Vec2::new(400.0, 3.0), ball_vel);

        check_collisions(&mut world, &config, &mut events, None);

        let b = ball(&world);
        assert_eq!(b.pos.y, config.ball_radius, "Ball should be clamped to wall");
        assert_eq!(b.vel.y, 4.0, "Y velocity should invert with same magnitude");
        assert_eq!(b.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 497.0), Vec2::new(-5.0, 3.0));

        check_collisions(&mut world, &config, &mut events, None);

        let b = ball(&world);
        assert_eq!(b.pos.y, config.arena_height - config.ball_radius);
        assert_eq!(b.vel.y, -3.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_hit_in_open_field() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(5.0, 3.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
        assert_eq!(ball(&world).vel, Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        // Leading edge at 30, face at 32
        create_ball(&mut world, Vec2::new(40.0, 220.0), Vec2::new(-6.0, 2.0));

        check_collisions(&mut world, &config, &mut events, None);

        let b = ball(&world);
        assert!((b.vel.x - 6.4).abs() < 1e-5, "Speed grows by 0.4, got {}", b.vel.x);
        assert_eq!(b.pos.x, 42.0, "Ball should sit flush with the face");
        // Hit 30 above center of a 60 half-height paddle
        assert!((b.vel.y + 2.5).abs() < 1e-5);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 100.0);
        create_ball(&mut world, Vec2::new(760.0, 200.0), Vec2::new(8.0, -1.0));

        check_collisions(&mut world, &config, &mut events, None);

        let b = ball(&world);
        assert!((b.vel.x + 8.4).abs() < 1e-5);
        assert_eq!(b.pos.x, 758.0);
        assert!(b.vel.y > 0.0, "Below center deflects downward");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_slow_ball_gets_floor_speed() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(35.0, 250.0), Vec2::new(-1.0, 0.5));

        check_collisions(&mut world, &config, &mut events, None);

        assert!((ball(&world).vel.x - 5.4).abs() < 1e-5);
    }

    #[test]
    fn test_center_hit_goes_straight() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(38.0, 250.0), Vec2::new(-7.0, 3.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert_eq!(ball(&world).vel.y, 0.0);
    }

    #[test]
    fn test_edge_hits_deflect_sharply() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(38.0, 191.0), Vec2::new(-7.0, 0.0));

        check_collisions(&mut world, &config, &mut events, None);

        let vy = ball(&world).vel.y;
        assert!(vy < -4.5 && vy >= -5.0, "got {vy}");
    }

    #[test]
    fn test_return_tuning_comes_from_config() {
        let (mut world, _, mut events) = setup_world();
        let config = Config {
            ball_min_return_speed: 8.0,
            ball_speed_increase: 1.0,
            ball_deflection: 2.0,
            ..Config::default()
        };
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(38.0, 280.0), Vec2::new(-2.0, 0.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert!(events.ball_hit_paddle);
        assert_eq!(ball(&world).vel, Vec2::new(9.0, 1.0));
    }

    #[test]
    fn test_ball_outside_span_is_not_caught() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(38.0, 320.0), Vec2::new(-7.0, 0.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert!(!events.ball_hit_paddle);
        assert_eq!(ball(&world).vel.x, -7.0);
    }

    #[test]
    fn test_span_edges_are_exclusive() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);
        create_ball(&mut world, Vec2::new(38.0, 190.0), Vec2::new(-7.0, 0.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 190.0);

        check_collisions(&mut world, &config, &mut events, None);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_wall_and_paddle_can_fire_together() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, 0.0);
        create_ball(&mut world, Vec2::new(38.0, 4.0), Vec2::new(-7.0, -3.0));

        check_collisions(&mut world, &config, &mut events, None);

        assert!(events.ball_hit_wall);
        assert!(events.ball_hit_paddle);
    }

    // A fast diagonal ball that crosses the face inside the span but ends
    // the step above the paddle.
    fn tunneling_setup(swept: bool) -> (World, Config, Events, Vec2) {
        let (mut world, mut config, events) = setup_world();
        config.swept_paddle_collision = swept;
        create_paddle(&mut world, Side::Player, 190.0);
        let prev = Vec2::new(60.0, 200.0);
        let vel = Vec2::new(-40.0, -20.0);
        create_ball(&mut world, prev + vel, vel);
        (world, config, events, prev)
    }

    #[test]
    fn test_tunneling_gap_without_swept_collision() {
        let (mut world, config, mut events, prev) = tunneling_setup(false);

        check_collisions(&mut world, &config, &mut events, Some(prev));

        assert!(!events.ball_hit_paddle, "End-of-step y is above the paddle");
        assert_eq!(ball(&world).vel.x, -40.0);
    }

    #[test]
    fn test_swept_collision_closes_tunneling_gap() {
        let (mut world, config, mut events, prev) = tunneling_setup(true);

        check_collisions(&mut world, &config, &mut events, Some(prev));

        // Leading edge 50 -> 10 crosses the face at 32: t = 0.45, y = 191
        let b = ball(&world);
        assert!(events.ball_hit_paddle);
        assert!(b.vel.x > 0.0);
        assert!((b.pos.y - 191.0).abs() < 1e-3);
        assert_eq!(b.pos.x, 42.0);
    }

    #[test]
    fn test_swept_matches_legacy_for_slow_hits() {
        for swept in [false, true] {
            let (mut world, mut config, mut events) = setup_world();
            config.swept_paddle_collision = swept;
            create_paddle(&mut world, Side::Player, 190.0);
            create_ball(&mut world, Vec2::new(40.0, 250.0), Vec2::new(-6.0, 0.0));

            check_collisions(&mut world, &config, &mut events, Some(Vec2::new(46.0, 250.0)));

            let b = ball(&world);
            assert!(events.ball_hit_paddle);
            assert_eq!(b.vel.y, 0.0);
            assert_eq!(b.pos, Vec2::new(42.0, 250.0));
        }
    }
}
