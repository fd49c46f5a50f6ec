use crate::{create_paddle, Config, Events, GameRng, Overlay, RoundMachine, Score, Side};
use hecs::World;

/// Everything the simulation mutates, in one place
///
/// Systems take the pieces they need explicitly, so tests can build any
/// arrangement of ball and paddles without running the loop.
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub round: RoundMachine,
    pub score: Score,
    pub overlay: Overlay,
    pub events: Events,
    pub rng: GameRng,
}

impl GameState {
    /// Paddles centered, no ball yet; call `start_round` to launch one
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();
        let spawn_y = config.paddle_spawn_y();
        create_paddle(&mut world, Side::Player, spawn_y);
        create_paddle(&mut world, Side::Opponent, spawn_y);

        Self {
            world,
            round: RoundMachine::new(&config),
            score: Score::new(config.win_score),
            overlay: Overlay::new(),
            events: Events::new(),
            rng,
            config,
        }
    }

    pub fn start_round(&mut self, toward: Side, now: f64) {
        self.round.start_round(
            toward,
            &mut self.world,
            &self.config,
            &mut self.rng,
            &mut self.overlay,
            now,
        );
        self.events.round_started = true;
    }
}
