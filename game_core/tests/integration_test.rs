use game_core::*;
use glam::Vec2;

fn new_game(config: Config, seed: u64) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let game = Game::new(config, Box::new(clock.clone()), GameRng::new(seed)).unwrap();
    (game, clock)
}

fn ball(game: &Game) -> Ball {
    *game.state().world.query::<&Ball>().iter().next().unwrap().1
}

#[test]
fn test_scenario_control_mapping() {
    let (mut game, _clock) = new_game(Config::new(), 1);
    let control = game.control();

    control.on_sample(0.5);
    game.frame();
    assert_eq!(game.snapshot().player.y, 190.0);

    control.on_sample(-1.0);
    game.frame();
    assert_eq!(game.snapshot().player.y, 0.0);

    control.on_sample(2.0);
    game.frame();
    assert_eq!(game.snapshot().player.y, 380.0);
}

#[test]
fn test_samples_between_frames_last_one_wins() {
    let (mut game, _clock) = new_game(Config::new(), 1);
    let control = game.control();

    control.on_point(0.2, 0.1);
    control.on_point(0.3, 0.9);
    control.on_point(0.4, 0.5);
    game.frame();

    assert_eq!(game.snapshot().player.y, 190.0);
}

#[test]
fn test_opponent_drifts_toward_parked_ball_during_countdown() {
    let (mut game, _clock) = new_game(Config::new(), 1);
    for (_e, paddle) in game.state_mut().world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Opponent {
            paddle.y = 0.0;
        }
    }

    for _ in 0..200 {
        game.frame();
    }

    let snap = game.snapshot();
    let center = snap.opponent.y + snap.opponent.height / 2.0;
    assert!((center - 250.0).abs() <= Params::OPPONENT_DEAD_ZONE);
    assert_eq!(snap.ball.x, 400.0, "Ball stays parked until the countdown ends");
}

#[test]
fn test_full_match_against_idle_hand() {
    // Hand parked at the very top; rounds keep ending until someone
    // reaches the target.
    let (mut game, clock) = new_game(Config::new(), 42);
    game.control().on_sample(0.0);

    let mut points = 0;
    let mut frames = 0;
    while !game.state().score.over {
        clock.advance(1.0 / 60.0);
        if game.frame().is_some() {
            points += 1;
            let s = &game.state().score;
            assert_eq!(u32::from(s.player) + u32::from(s.opponent), points);
            assert!(game.state().events.player_scored || game.state().events.opponent_scored);
        }
        frames += 1;
        assert!(frames < 600_000, "match never finished");

        let b = ball(&game);
        assert!(b.pos.y >= 0.0 && b.pos.y <= 500.0);
    }

    let snap = game.snapshot();
    assert!(snap.match_over);
    assert!(snap.show_restart);
    let winner = snap.winner.unwrap();
    assert_eq!(
        match winner {
            Side::Player => snap.player_score,
            Side::Opponent => snap.opponent_score,
        },
        10
    );
    assert_eq!(game.state().round.state(), RoundState::MatchOver);
    assert!(game.restart());
    assert_eq!(game.snapshot().player_score, 0);
}

#[test]
fn test_ten_opponent_points_end_match() {
    let mut score = Score::default();
    let mut overlay = Overlay::new();

    for _ in 0..10 {
        score.record_point(Side::Opponent, &mut overlay, 0.0);
    }

    assert!(score.over);
    assert_eq!(overlay.active(0.0).unwrap().text, "AI wins! 🤖");
    for side in [Side::Opponent, Side::Player, Side::Opponent] {
        assert_eq!(
            score.record_point(side, &mut overlay, 0.0),
            PointOutcome::Ignored
        );
    }
    assert_eq!((score.player, score.opponent), (0, 10));
}

#[test]
fn test_rally_speeds_up() {
    let (mut game, clock) = new_game(Config::new(), 8);
    for _ in 0..5 {
        clock.advance(1.0);
        game.frame();
    }
    assert!(game.state().round.is_active());

    // Serve straight at the center of the player paddle
    game.control().on_sample(0.5);
    for (_e, b) in game.state_mut().world.query_mut::<&mut Ball>() {
        b.pos = Vec2::new(60.0, 250.0);
        b.vel = Vec2::new(-7.0, 0.0);
    }
    let mut hit = false;
    for _ in 0..10 {
        game.frame();
        if game.state().events.ball_hit_paddle {
            hit = true;
            break;
        }
    }

    assert!(hit);
    let b = ball(&game);
    assert!((b.vel.x - 7.4).abs() < 1e-5);
    assert_eq!(b.vel.y, 0.0);
}
