use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{POINTS_PER_FOOD, START_DIRECTION, START_FOOD};
use crate::food::place_food;
use crate::grid::{GridSize, Position};
use crate::input::{Direction, GameInput, propose_direction};
use crate::snake::Snake;

/// Lifecycle phase of the current run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// Why the last run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one process.
///
/// `high_score` survives [`GameState::reset`]; everything else describes the
/// current run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh, not-yet-started game seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        assert!(
            bounds.width > 0 && bounds.height > 0,
            "grid must have at least one cell"
        );

        let start = start_position(bounds);
        let food = if START_FOOD.is_within_bounds(bounds) && START_FOOD != start {
            START_FOOD
        } else {
            place_food(&mut rng, bounds)
        };

        Self {
            snake: Snake::new(start),
            food,
            direction: START_DIRECTION,
            pending_direction: START_DIRECTION,
            score: 0,
            high_score: 0,
            phase: GamePhase::NotStarted,
            death_reason: None,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Does nothing unless the phase is [`GamePhase::Running`].
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.tick_count += 1;
        self.direction = self.pending_direction;
        let new_head = self.snake.head().offset(self.direction);

        if !new_head.is_within_bounds(self.bounds) {
            self.end(DeathReason::WallCollision);
            return;
        }

        // Checked against the full pre-move body, so the cell the tail is
        // about to leave still counts as occupied.
        if self.snake.collides_with_self(new_head) {
            self.end(DeathReason::SelfCollision);
            return;
        }

        self.snake.advance(new_head);

        if new_head == self.food {
            self.score += POINTS_PER_FOOD;
            self.food = place_food(&mut self.rng, self.bounds);
            debug!(
                "ate food at ({}, {}), score {}, length {}, next food ({}, {})",
                new_head.x,
                new_head.y,
                self.score,
                self.snake.len(),
                self.food.x,
                self.food.y
            );
        } else {
            self.snake.drop_tail();
        }

        trace!("tick {} head ({}, {})", self.tick_count, new_head.x, new_head.y);
        self.debug_check_invariants();
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                // The title screen accepts a starting heading.
                if matches!(self.phase, GamePhase::Running | GamePhase::NotStarted) {
                    self.pending_direction =
                        propose_direction(self.direction, self.pending_direction, direction);
                }
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Start => self.start(),
            GameInput::Reset => self.reset(),
            GameInput::Confirm => match self.phase {
                GamePhase::NotStarted => self.start(),
                GamePhase::Ended => self.reset(),
                GamePhase::Running | GamePhase::Paused => {}
            },
            GameInput::Quit => {}
        }
    }

    /// Moves a not-started game into play. Ignored in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
            info!("game started");
        }
    }

    /// Toggles between running and paused. Ignored before start and after
    /// game over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => {
                info!("game paused");
                GamePhase::Paused
            }
            GamePhase::Paused => {
                info!("game resumed");
                GamePhase::Running
            }
            other => other,
        };
    }

    /// Returns to the title screen with a fresh snake, new food and zero
    /// score. The high score is kept.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds));
        self.food = place_food(&mut self.rng, self.bounds);
        self.direction = START_DIRECTION;
        self.pending_direction = START_DIRECTION;
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.death_reason = None;
        self.tick_count = 0;
        info!("game reset, high score {}", self.high_score);
    }

    fn end(&mut self, reason: DeathReason) {
        self.phase = GamePhase::Ended;
        self.death_reason = Some(reason);

        info!(
            "game over ({reason:?}) after {} ticks, score {}",
            self.tick_count, self.score
        );

        if self.score > self.high_score {
            self.high_score = self.score;
            info!("new high score {}", self.high_score);
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert!(!self.snake.is_empty(), "snake lost its last segment");
        debug_assert!(
            self.snake.len() <= self.bounds.total_cells(),
            "snake longer than the board"
        );
        debug_assert!(
            self.snake
                .segments()
                .all(|segment| segment.is_within_bounds(self.bounds)),
            "snake segment committed outside the board"
        );
    }
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
