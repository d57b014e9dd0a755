use rand::Rng;

use crate::grid::{GridSize, Position};

/// Picks a uniformly random cell on the board.
///
/// Each axis is drawn independently from `[0, size)`. The snake body is not
/// consulted, so the returned cell may lie under the snake.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
