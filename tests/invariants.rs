use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_snake::config::GRID_SIZE;
use grid_snake::game::{GamePhase, GameState};
use grid_snake::grid::Position;
use grid_snake::input::{Direction, GameInput};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[test]
fn random_play_preserves_board_laws() {
    let mut driver = StdRng::seed_from_u64(2024);
    let mut state = GameState::new_with_seed(GRID_SIZE, 99);
    let mut previous_high_score = 0;

    for _ in 0..20_000 {
        match driver.gen_range(0..10) {
            0..=3 => {
                let direction = DIRECTIONS[driver.gen_range(0..DIRECTIONS.len())];
                state.apply_input(GameInput::Direction(direction));
            }
            4 => state.apply_input(GameInput::Confirm),
            _ => {}
        }

        let before_len = state.snake.len();
        let before_score = state.score;
        let before_head = state.snake.head();
        let before_food = state.food;
        let before_phase = state.phase;
        let before_high_score = state.high_score;
        let direction = state.pending_direction;

        state.tick();

        let len = state.snake.len();
        assert!((1..=GRID_SIZE.total_cells()).contains(&len));
        assert!(state.high_score >= previous_high_score);
        previous_high_score = state.high_score;

        if state.phase != GamePhase::Ended {
            assert!(
                state
                    .snake
                    .segments()
                    .all(|segment| segment.is_within_bounds(GRID_SIZE))
            );
        }

        if before_phase != GamePhase::Running {
            assert_eq!(len, before_len);
            assert_eq!(state.snake.head(), before_head);
            assert_eq!(state.score, before_score);
            continue;
        }

        match state.phase {
            GamePhase::Ended => {
                assert_eq!(len, before_len);
                assert_eq!(state.score, before_score);
                assert_eq!(state.high_score, before_high_score.max(before_score));
            }
            GamePhase::Running => {
                assert_eq!(state.snake.head(), before_head.offset(direction));
                if state.snake.head() == before_food {
                    assert_eq!(len, before_len + 1);
                    assert_eq!(state.score, before_score + 1);
                } else {
                    assert_eq!(len, before_len);
                    assert_eq!(state.score, before_score);
                }
            }
            other => panic!("tick produced unexpected phase {other:?}"),
        }
    }
}

#[test]
fn high_score_never_decreases_across_resets() {
    let mut state = GameState::new_with_seed(GRID_SIZE, 5);
    let mut best = 0;

    for run_score in [3, 1, 7, 0, 7, 2] {
        state.apply_input(GameInput::Start);
        state.score = run_score;
        state.food = Position { x: 0, y: 0 };
        // Head straight into the right wall.
        for _ in 0..GRID_SIZE.width {
            state.tick();
        }
        assert_eq!(state.phase, GamePhase::Ended);

        best = best.max(run_score);
        assert_eq!(state.high_score, best);

        state.apply_input(GameInput::Reset);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, best);
    }
}
