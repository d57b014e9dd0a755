use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::{GridSize, Position};
use crate::input::Direction;

/// Board dimensions. Fixed for the lifetime of the process.
pub const GRID_SIZE: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Step function period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Head cell of a freshly reset snake.
pub const START_POSITION: Position = Position { x: 10, y: 10 };

/// Food cell of a freshly reset board.
pub const START_FOOD: Position = Position { x: 15, y: 15 };

/// Movement direction of a freshly reset snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// Points awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 1;

/// Colours used by the presentation layer.
#[derive(Debug)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub score: Color,
    pub high_score: Color,
    pub muted: Color,
    pub game_over: Color,
}

pub const PALETTE: Palette = Palette {
    snake_head: Color::Rgb(187, 247, 208),
    snake_body: Color::Rgb(74, 222, 128),
    food: Color::Rgb(239, 68, 68),
    play_bg: Color::Rgb(26, 26, 26),
    border_fg: Color::Rgb(55, 65, 81),
    border_bg: Color::Rgb(17, 24, 39),
    score: Color::Rgb(74, 222, 128),
    high_score: Color::Rgb(250, 204, 21),
    muted: Color::Rgb(156, 163, 175),
    game_over: Color::Rgb(239, 68, 68),
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// One grid cell is drawn two terminal columns wide so the board looks square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_CELL: &str = "██";
