use super::bounds::Bounds;
use enum_map::Enum;
use ratatui::layout::Position;

/// A heading the snake can move in.
///
/// The declaration order is also the order in which the navigator considers
/// candidate headings, and so decides ties between equally good moves.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step would leave `bounds`.
    pub(crate) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = increment_in_bounds(x, bounds.width)?,
            Direction::South => y = increment_in_bounds(y, bounds.height)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        Some(Position { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn increment_in_bounds(x: u16, max: u16) -> Option<u16> {
    x.checked_add(1).filter(|&xx| xx < max)
}
