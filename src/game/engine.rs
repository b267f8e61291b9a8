use super::{
    config::GameConfig,
    food::place_food,
    state::{CollisionType, GameState, Grid, Position, SessionPhase, Snake},
};
use crate::score::ScoreTracker;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether eating pushed the best-ever score up
    pub new_high_score: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the run has ended
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn alive(info: StepInfo) -> Self {
        Self {
            terminated: false,
            info,
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    grid: Grid,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose food placement replays the same sequence for a seed
    pub fn seeded(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Fresh board: one-cell snake in the centre, standing still, food elsewhere
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center());
        let food = self.spawn_food_avoid_snake(&snake).unwrap_or(snake.head());

        GameState::new(self.grid, snake, food)
    }

    /// Execute one tick of the game.
    ///
    /// Only a running state advances. The pending velocity moves the head; a
    /// head outside the grid or on any other segment (the tail included, as it
    /// has not moved yet) ends the run. Otherwise the snake either eats and
    /// grows or drops its tail.
    pub fn step(&mut self, state: &mut GameState, scores: &mut ScoreTracker) -> StepResult {
        if state.phase != SessionPhase::Running {
            return StepResult {
                terminated: state.phase == SessionPhase::GameOver,
                info: StepInfo::default(),
            };
        }

        let velocity = state.velocity;
        state.steps += 1;

        if velocity.is_still() {
            state.last_velocity = velocity;
            return StepResult::alive(StepInfo::default());
        }

        // Calculate new head position
        let new_head = state.snake.head().moved_with(velocity);
        state.snake.push_head(new_head);

        // Check for collisions
        if let Some(collision_type) = self.check_collision(state, new_head) {
            debug!(?collision_type, x = new_head.x, y = new_head.y, "fatal collision");
            state.phase = SessionPhase::GameOver;

            return StepResult {
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..Default::default()
                },
            };
        }

        let mut info = StepInfo::default();

        if new_head == state.food {
            info.ate_food = true;
            info.new_high_score = scores.record_food_eaten();
            match self.spawn_food_avoid_snake(&state.snake) {
                Some(food) => state.food = food,
                None => debug!("no free cell left for food"),
            }
        } else {
            state.snake.pop_tail();
        }

        state.last_velocity = velocity;
        trace!(
            x = new_head.x,
            y = new_head.y,
            len = state.snake.len(),
            "tick"
        );

        StepResult::alive(info)
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        // Check wall collision
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Check self-collision
        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Position> {
        place_food(&mut self.rng, self.grid, snake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Velocity};
    use crate::score::MemoryStore;

    fn scores() -> ScoreTracker {
        ScoreTracker::load(Box::new(MemoryStore::new()))
    }

    fn running(
        engine: &GameEngine,
        body: Vec<Position>,
        food: Position,
        dir: Direction,
    ) -> GameState {
        let mut state = GameState::new(engine.grid(), Snake::from_segments(body), food);
        state.velocity = dir.into();
        state.last_velocity = dir.into();
        state.phase = SessionPhase::Running;
        state
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 1);
        let state = engine.reset();

        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.body, vec![Position::new(10, 10)]);
        assert!(state.velocity.is_still());
        assert_ne!(state.food, Position::new(10, 10));
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 2);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(10, 10)],
            Position::new(0, 0),
            Direction::Right,
        );

        let result = engine.step(&mut state, &mut scores);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(state.snake.body, vec![Position::new(11, 10)]);
        assert_eq!(scores.score(), 0);
        assert_eq!(state.steps, 1);
    }

    #[test]
    fn test_movement_keeps_length() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 3);
        let mut scores = scores();
        let body = vec![Position::new(5, 5), Position::new(5, 6), Position::new(5, 7)];
        let mut state = running(&engine, body, Position::new(0, 0), Direction::Up);

        engine.step(&mut state, &mut scores);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(5, 4));
        assert_eq!(state.snake.tail(), Position::new(5, 6));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 4);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(5, 5)],
            Position::new(6, 5),
            Direction::Right,
        );

        let result = engine.step(&mut state, &mut scores);

        assert!(result.info.ate_food);
        assert!(result.info.new_high_score);
        assert_eq!(state.snake.body, vec![Position::new(6, 5), Position::new(5, 5)]);
        assert_eq!(scores.score(), 1);
        assert_eq!(scores.high_score(), 1);
        assert!(!state.is_occupied_by_snake(state.food));
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::seeded(&GameConfig::small(), 5);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(0, 5)],
            Position::new(5, 5),
            Direction::Left,
        );

        let result = engine.step(&mut state, &mut scores);

        assert!(result.terminated);
        assert_eq!(state.phase, SessionPhase::GameOver);
        assert_eq!(state.snake.head().x, -1);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    }

    #[test]
    fn test_wall_collision_far_side() {
        let mut engine = GameEngine::seeded(&GameConfig::small(), 6);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(4, 9)],
            Position::new(0, 0),
            Direction::Down,
        );

        let result = engine.step(&mut state, &mut scores);

        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::seeded(&GameConfig::small(), 7);
        let mut scores = scores();

        // Head at (5,5) turning up into its own body at (5,4)
        let body = vec![
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 4),
            Position::new(5, 4),
            Position::new(4, 4),
        ];
        let mut state = running(&engine, body, Position::new(8, 8), Direction::Left);
        state.velocity = Direction::Up.into();

        let result = engine.step(&mut state, &mut scores);

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_moving_into_tail_is_fatal() {
        let mut engine = GameEngine::seeded(&GameConfig::small(), 8);
        let mut scores = scores();

        // A 2x2 loop: the head steps onto the cell the tail still occupies
        let body = vec![
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ];
        let mut state = running(&engine, body, Position::new(0, 0), Direction::Left);
        state.velocity = Direction::Down.into();

        let result = engine.step(&mut state, &mut scores);

        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_standing_still_is_noop() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 9);
        let mut scores = scores();
        let mut state = engine.reset();
        state.phase = SessionPhase::Running;
        let before = state.snake.clone();

        let result = engine.step(&mut state, &mut scores);

        assert!(!result.terminated);
        assert_eq!(state.snake, before);
        assert_eq!(state.phase, SessionPhase::Running);
    }

    #[test]
    fn test_records_last_velocity() {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 10);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(10, 10)],
            Position::new(0, 0),
            Direction::Right,
        );
        state.velocity = Direction::Down.into();

        engine.step(&mut state, &mut scores);

        assert_eq!(state.last_velocity, Velocity::from(Direction::Down));
    }

    #[test]
    fn test_not_running_no_update() {
        let mut engine = GameEngine::seeded(&GameConfig::small(), 11);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(3, 3)],
            Position::new(0, 0),
            Direction::Right,
        );

        for phase in [SessionPhase::Idle, SessionPhase::Paused, SessionPhase::GameOver] {
            state.phase = phase;
            let result = engine.step(&mut state, &mut scores);
            assert_eq!(result.terminated, phase == SessionPhase::GameOver);
            assert_eq!(state.snake.head(), Position::new(3, 3));
            assert_eq!(state.steps, 0); // Should not increment
        }
    }

    #[test]
    fn test_grows_until_full_grid() {
        // 3x1 grid, snake walks right eating everything in its path
        let config = GameConfig::new(3, 1);
        let mut engine = GameEngine::seeded(&config, 12);
        let mut scores = scores();
        let mut state = running(
            &engine,
            vec![Position::new(0, 0)],
            Position::new(1, 0),
            Direction::Right,
        );

        engine.step(&mut state, &mut scores);
        assert_eq!(state.food, Position::new(2, 0));

        engine.step(&mut state, &mut scores);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(scores.score(), 2);

        let result = engine.step(&mut state, &mut scores);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    }
}
