use ratatui::layout::Position;
use std::collections::VecDeque;

/// A snake of fixed length.
///
/// All positions are relative to the top-left corner of the grid.  The snake
/// never grows: every move drops the oldest body cell once the snake is at
/// its full length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body, with the most
    /// recent at the front.
    pub(super) body: VecDeque<Position>,

    /// The maximum length of the body, not counting the head
    pub(super) max_len: usize,
}

impl Snake {
    /// Create a snake of `len` cells (at least one) with its head at `head`
    /// and its body trailing off to the left.  `head.x` must be at least
    /// `len - 1`.
    pub(super) fn stretched_west(head: Position, len: u16) -> Snake {
        let body = (1..len)
            .map(|i| Position::new(head.x - i, head.y))
            .collect::<VecDeque<_>>();
        Snake {
            head,
            max_len: body.len(),
            body,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Iterate over the cells of the snake from head to tail
    pub(crate) fn segments(&self) -> impl DoubleEndedIterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the number of cells in the snake, head included
    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Move the snake's head to `pos`, dragging the body along behind it.
    pub(super) fn advance(&mut self, pos: Position) {
        self.body.push_front(self.head);
        self.head = pos;
        while self.body.len() > self.max_len {
            let _ = self.body.pop_back();
        }
    }
}
