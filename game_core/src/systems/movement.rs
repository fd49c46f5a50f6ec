use crate::{Ball, Config, GameRng, Params, Side};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Integrate ball position by one frame; returns where the ball started
pub fn move_ball(world: &mut World) -> Option<Vec2> {
    let mut prev = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        prev = Some(ball.pos);
        ball.pos += ball.vel;
    }
    prev
}

/// Park the ball at the arena center and aim it toward `toward`
///
/// Speed is the configured base plus jitter. The vertical component is a
/// random fraction of that speed with a random sign, never zero.
pub fn launch_ball(world: &mut World, config: &Config, rng: &mut GameRng, toward: Side) {
    let speed = config.ball_speed_base + rng.0.gen::<f32>() * config.ball_speed_jitter;
    let mut angle = rng.0.gen_range(Params::BALL_ANGLE_MIN..Params::BALL_ANGLE_MAX);
    if rng.0.gen_bool(0.5) {
        angle = -angle;
    }

    let pos = config.center();
    let vel = Vec2::new(toward.toward_sign() * speed, speed * angle);

    let mut launched = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
        launched = true;
    }
    if !launched {
        world.spawn((Ball::new(pos, vel),));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn ball(world: &World) -> Ball {
        *world.query::<&Ball>().iter().next().unwrap().1
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(5.0, -2.0));

        let prev = move_ball(&mut world);

        assert_eq!(prev, Some(Vec2::new(100.0, 100.0)));
        assert_eq!(ball(&world).pos, Vec2::new(105.0, 98.0));
    }

    #[test]
    fn test_move_ball_without_ball() {
        let mut world = World::new();
        assert_eq!(move_ball(&mut world), None);
    }

    #[test]
    fn test_launch_toward_each_side() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(3.0, 4.0), Vec2::ZERO);

        launch_ball(&mut world, &config, &mut rng, Side::Opponent);
        let b = ball(&world);
        assert_eq!(b.pos, config.center());
        assert!(b.vel.x > 0.0);

        launch_ball(&mut world, &config, &mut rng, Side::Player);
        assert!(ball(&world).vel.x < 0.0);
        assert_eq!(world.query::<&Ball>().iter().count(), 1);
    }

    #[test]
    fn test_launch_velocity_ranges() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut world = World::new();

        for _ in 0..500 {
            launch_ball(&mut world, &config, &mut rng, Side::Opponent);
            let b = ball(&world);
            assert!(b.vel.x >= 5.0 && b.vel.x < 6.5, "speed {}", b.vel.x);
            assert!(b.vel.y != 0.0);
            let angle = (b.vel.y / b.vel.x).abs();
            assert!(angle < Params::BALL_ANGLE_MAX + 1e-4);
        }
    }

    #[test]
    fn test_launch_spawns_missing_ball() {
        let config = Config::new();
        let mut world = World::new();
        launch_ball(&mut world, &config, &mut GameRng::default(), Side::Player);
        assert_eq!(world.query::<&Ball>().iter().count(), 1);
    }
}
