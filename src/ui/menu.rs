use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::PALETTE;
use crate::game::DeathReason;

const POPUP_WIDTH: u16 = 30;

/// Draws the title screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32) {
    let lines = vec![
        Line::from("SNAKE").style(
            Style::default()
                .fg(PALETTE.score)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("High score: {high_score}"))
            .style(Style::default().fg(PALETTE.high_score)),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[Q]/[Esc] Quit"),
        Line::from(""),
        Line::from("Arrows/WASD to move").style(Style::default().fg(PALETTE.muted)),
        Line::from("[Space]/[P] to pause").style(Style::default().fg(PALETTE.muted)),
    ];

    render_popup(frame, area, " start ", lines);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[R] Restart"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over screen as a centered popup.
///
/// `high_score` is the already-updated value, so a run that set a new record
/// shows `score == high_score`.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    death_reason: Option<DeathReason>,
) {
    let is_new_high = score > 0 && score == high_score;
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(PALETTE.game_over)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(death_reason_text(death_reason)),
        Line::from(if is_new_high { "New high score!" } else { "" })
            .style(Style::default().fg(PALETTE.high_score)),
        Line::from(""),
        Line::from("[Enter] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    render_popup(frame, area, " game over ", lines);
}

fn death_reason_text(death_reason: Option<DeathReason>) -> &'static str {
    match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        None => "",
    }
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title))
            .style(Style::default().bg(PALETTE.border_bg)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_popup, death_reason_text};
    use crate::game::DeathReason;

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 42, 22);

        let popup = centered_popup(area, 30, 10);
        assert_eq!(popup, Rect::new(6, 6, 30, 10));

        let clamped = centered_popup(Rect::new(0, 0, 10, 4), 30, 10);
        assert!(clamped.width <= 10 && clamped.height <= 4);
    }

    #[test]
    fn death_reason_is_described() {
        assert_eq!(
            death_reason_text(Some(DeathReason::WallCollision)),
            "Cause: hit wall"
        );
        assert_eq!(
            death_reason_text(Some(DeathReason::SelfCollision)),
            "Cause: hit yourself"
        );
        assert_eq!(death_reason_text(None), "");
    }
}
