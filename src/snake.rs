use std::collections::VecDeque;

use crate::grid::Position;

/// Ordered snake body, head first.
///
/// Movement is split into [`Snake::advance`] and [`Snake::drop_tail`] so the
/// step function decides between translation and growth after it knows
/// whether food was eaten.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Prepends `new_head`. The tail is kept until [`Snake::drop_tail`].
    pub fn advance(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Removes the oldest segment, never the last remaining one.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if `cell` matches any segment of the current body,
    /// tail included.
    #[must_use]
    pub fn collides_with_self(&self, cell: Position) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a live snake; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
