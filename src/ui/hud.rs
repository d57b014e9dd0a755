use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::PALETTE;
use crate::game::GameState;

/// Renders the one-line score HUD above the board and returns the board area
/// below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let [left, right] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(score_area);

    frame.render_widget(
        Paragraph::new(score_line("Score", state.score, PALETTE.score)).alignment(Alignment::Left),
        left,
    );
    frame.render_widget(
        Paragraph::new(score_line("Hi", state.high_score, PALETTE.high_score))
            .alignment(Alignment::Right),
        right,
    );

    play_area
}

fn score_line(label: &'static str, value: u32, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(PALETTE.muted)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
