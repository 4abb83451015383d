use ratatui::layout::{Position, Positions, Rect, Size};

/// The dimensions of the grid the snake lives on.  Cells are addressed from
/// the top-left corner, `x` growing rightwards and `y` growing downwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn new(width: u16, height: u16) -> Bounds {
        Bounds { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell in the grid in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Total number of cells in the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}
