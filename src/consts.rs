//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default number of columns in the grid
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default number of rows in the grid
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 7;

/// Default number of cells in the snake, head included
pub(crate) const DEFAULT_SNAKE_LENGTH: u16 = 4;

/// Default number of food items scattered over the grid at the start of each
/// epoch
pub(crate) const DEFAULT_FOOD_COUNT: usize = 120;

/// Default number of snake movements per second
pub(crate) const DEFAULT_FPS: u32 = 9;

/// Glyphs for the snake's segments, from the head down to the tail.  Each
/// glyph covers an equal share of the snake's length, so the snake appears to
/// taper off toward its tail.
pub(crate) const SNAKE_SEGMENT_SYMBOLS: [char; 4] = ['█', '▓', '▒', '░'];

/// Glyph for food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph marking the cell the snake is heading back to once all food is gone
pub(crate) const START_SYMBOL: char = '◇';

/// Glyph for empty cells of the grid
pub(crate) const EMPTY_SYMBOL: char = '·';

/// Style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Style for food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Green);

/// Style for [`START_SYMBOL`]
pub(crate) const START_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for empty cells
pub(crate) const EMPTY_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
