use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_CELL, PALETTE};
use crate::game::{GamePhase, GameState};
use crate::grid::{GridSize, Position};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let board_area = board_rect(frame.area(), state.bounds());
    let play_area = render_hud(frame, board_area, state);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(PALETTE.border_fg).bg(PALETTE.border_bg))
        .style(Style::new().bg(PALETTE.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    match state.phase {
        GamePhase::NotStarted => render_start_menu(frame, play_area, state.high_score),
        GamePhase::Paused => render_pause_menu(frame, play_area),
        GamePhase::Ended => render_game_over_menu(
            frame,
            play_area,
            state.score,
            state.high_score,
            state.death_reason,
        ),
        GamePhase::Running => {}
    }
}

/// Centers a bordered board plus one HUD row inside the terminal.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height.saturating_add(3);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let buffer = frame.buffer_mut();

    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(PALETTE.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(PALETTE.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
