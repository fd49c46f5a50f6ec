use hecs::World;

use crate::components::*;
use crate::control::ControlAdapter;

/// Copy the latest hand-driven position onto the player paddle
pub fn apply_control(world: &mut World, adapter: &ControlAdapter) {
    let y = adapter.position();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    #[test]
    fn test_apply_control_moves_only_player_paddle() {
        let config = Config::new();
        let mut world = World::new();
        let player = create_paddle(&mut world, Side::Player, config.paddle_spawn_y());
        let opponent = create_paddle(&mut world, Side::Opponent, config.paddle_spawn_y());

        let adapter = ControlAdapter::new(&config);
        adapter.on_sample(0.0);
        apply_control(&mut world, &adapter);

        assert_eq!(world.get::<&Paddle>(player).unwrap().y, 0.0);
        assert_eq!(world.get::<&Paddle>(opponent).unwrap().y, 190.0);
    }

    #[test]
    fn test_no_sample_keeps_paddle_centered() {
        let config = Config::new();
        let mut world = World::new();
        let player = create_paddle(&mut world, Side::Player, config.paddle_spawn_y());
        let adapter = ControlAdapter::new(&config);

        for _ in 0..10 {
            apply_control(&mut world, &adapter);
        }

        assert_eq!(world.get::<&Paddle>(player).unwrap().y, 190.0);
    }
}
