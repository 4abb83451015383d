use super::{Bounds, World};
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl<R> Widget for &World<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [status_area, field_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let status = if self.returning() {
            String::from(" Returning to start")
        } else {
            format!(" Food: {}/{}", self.foods().len(), self.food_count())
        };
        Line::styled(status, consts::STATUS_BAR_STYLE).render(status_area, buf);

        Line::from_iter([
            Span::raw(" Steer ("),
            Span::styled("arrows", consts::KEY_STYLE),
            Span::raw(")  Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(help_area, buf);

        let mut block_size = self.bounds().size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(field_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut field = Canvas {
            bounds: self.bounds(),
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for pos in self.bounds().positions() {
            field.draw_cell(pos, consts::EMPTY_SYMBOL, consts::EMPTY_STYLE);
        }
        if self.returning() {
            field.draw_cell(self.start(), consts::START_SYMBOL, consts::START_STYLE);
        } else {
            for &pos in self.foods() {
                field.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
            }
        }
        // Draw from the tail up so that, where the snake crosses itself, the
        // segment nearer the head is the one shown
        let len = self.snake().len();
        let glyphs = consts::SNAKE_SEGMENT_SYMBOLS;
        for (i, pos) in (0..len).rev().zip(self.snake().segments().rev()) {
            let symbol = glyphs[i * glyphs.len() / len];
            field.draw_cell(pos, symbol, consts::SNAKE_STYLE);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    bounds: Bounds,
    /// Where the grid's top-left cell is drawn.  Cells falling outside this
    /// area (when the terminal is too small) are clipped.
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        if !self.bounds.contains(pos) {
            return;
        }
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::world::snake::Snake;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn small_world() -> World<ChaCha12Rng> {
        let config = WorldConfig {
            width: 6,
            height: 3,
            snake_length: 3,
            food_count: 2,
        };
        World::new(config, ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF))
    }

    /// Build the expected 28x9 frame for `small_world()` with the given
    /// status bar text and rows of the grid
    fn expected_frame(status: &str, rows: [&str; 3]) -> Buffer {
        let mut expected = Buffer::with_lines([
            status,
            "",
            "          ┌──────┐          ",
            rows[0],
            rows[1],
            rows[2],
            "          └──────┘          ",
            "",
            " Steer (arrows)  Quit (q)",
        ]);
        expected.set_style(Rect::new(0, 0, 28, 1), consts::STATUS_BAR_STYLE);
        expected.set_style(Rect::new(11, 3, 6, 3), consts::EMPTY_STYLE);
        expected.set_style(Rect::new(8, 8, 6, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(23, 8, 1, 1), consts::KEY_STYLE);
        expected
    }

    #[test]
    fn seeking() {
        let mut world = small_world();
        world.snake = Snake::stretched_west(Position::new(4, 1), 3);
        world.start = Position::new(4, 1);
        world.foods = vec![Position::new(0, 0), Position::new(5, 2)];
        let area = Rect::new(0, 0, 28, 9);
        let mut buffer = Buffer::empty(area);
        world.render(area, &mut buffer);
        let mut expected = expected_frame(
            " Food: 2/2",
            [
                "          │●·····│",
                "          │··▒▓█·│",
                "          │·····●│",
            ],
        );
        expected.set_style(Rect::new(11, 3, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(16, 5, 1, 1), consts::FOOD_STYLE);
        expected.set_style(Rect::new(13, 4, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn returning() {
        let mut world = small_world();
        world.snake = Snake::stretched_west(Position::new(2, 2), 3);
        world.start = Position::new(5, 0);
        world.foods = vec![Position::new(0, 0)];
        world.returning = true;
        let area = Rect::new(0, 0, 28, 9);
        let mut buffer = Buffer::empty(area);
        world.render(area, &mut buffer);
        let mut expected = expected_frame(
            " Returning to start",
            [
                "          │·····◇│",
                "          │······│",
                "          │▒▓█···│",
            ],
        );
        expected.set_style(Rect::new(16, 3, 1, 1), consts::START_STYLE);
        expected.set_style(Rect::new(11, 5, 3, 1), consts::SNAKE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn overlapping_segments_show_head() {
        let mut world = small_world();
        world.snake = Snake::stretched_west(Position::new(4, 1), 5);
        world.snake.advance(Position::new(4, 2));
        world.snake.advance(Position::new(3, 2));
        world.snake.advance(Position::new(3, 1));
        // The head is now on the same cell as the tail
        assert_eq!(
            world.snake.segments().collect::<Vec<_>>(),
            [
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(4, 2),
                Position::new(4, 1),
                Position::new(3, 1),
            ]
        );
        let area = Rect::new(0, 0, 28, 9);
        let mut buffer = Buffer::empty(area);
        world.render(area, &mut buffer);
        assert_eq!(buffer[(14, 4)].symbol(), "█");
        assert_eq!(buffer[(14, 5)].symbol(), "█");
        assert_eq!(buffer[(15, 5)].symbol(), "▓");
        assert_eq!(buffer[(15, 4)].symbol(), "▒");
    }

    #[test]
    fn tail_to_head_glyphs() {
        let mut world = small_world();
        world.snake = Snake::stretched_west(Position::new(4, 1), 5);
        let area = Rect::new(0, 0, 28, 9);
        let mut buffer = Buffer::empty(area);
        world.render(area, &mut buffer);
        let row = (11..16)
            .map(|x| buffer[(x, 4)].symbol().to_owned())
            .collect::<String>();
        assert_eq!(row, "░▒▓██");
    }

    #[test]
    fn cells_off_grid_are_not_drawn() {
        let area = Rect::new(0, 0, 12, 6);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas {
            bounds: Bounds::new(6, 3),
            area: Rect::new(1, 1, 10, 4),
            buf: &mut buffer,
        };
        canvas.draw_cell(Position::new(6, 0), 'X', Style::new());
        canvas.draw_cell(Position::new(0, 3), 'X', Style::new());
        canvas.draw_cell(Position::new(5, 2), 'O', Style::new());
        let mut expected = Buffer::empty(area);
        if let Some(cell) = expected.cell_mut((6, 3)) {
            cell.set_char('O');
            cell.set_style(Style::reset());
        }
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn cells_outside_area_are_clipped() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buffer = Buffer::empty(area);
        let mut canvas = Canvas {
            bounds: Bounds::new(6, 3),
            area: Rect::new(1, 1, 3, 2),
            buf: &mut buffer,
        };
        canvas.draw_cell(Position::new(4, 0), 'X', Style::new());
        canvas.draw_cell(Position::new(0, 2), 'X', Style::new());
        assert_eq!(buffer, Buffer::empty(area));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let world = small_world();
        let area = Rect::new(0, 0, 5, 2);
        let mut buffer = Buffer::empty(area);
        world.render(area, &mut buffer);
    }
}
