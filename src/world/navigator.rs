//! Greedy one-step steering toward a target cell
use super::bounds::Bounds;
use super::direction::Direction;
use crate::util::EnumExt;
use ratatui::layout::Position;

/// A move chosen by [`choose_step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Step {
    /// The snake's new heading
    pub(crate) heading: Direction,

    /// The cell the head moves into
    pub(crate) to: Position,
}

pub(crate) fn manhattan(a: Position, b: Position) -> u32 {
    u32::from(a.x.abs_diff(b.x)) + u32::from(a.y.abs_diff(b.y))
}

/// Return the cell in `cells` closest to `from`.  Among equally close cells,
/// the first one yielded wins.
pub(crate) fn nearest<I>(from: Position, cells: I) -> Option<Position>
where
    I: IntoIterator<Item = Position>,
{
    cells.into_iter().min_by_key(|&c| manhattan(from, c))
}

/// Pick the next move for a snake whose head is at `head` and which last
/// moved in `heading`.
///
/// The snake may not turn around on the spot, nor step outside `bounds`.  Of
/// the remaining headings, the one whose destination is closest to `target`
/// is chosen, ties going to the heading declared first in [`Direction`].
/// Returns `None` only when every permitted heading leads off the grid, which
/// requires a grid less than two cells wide or tall.
pub(crate) fn choose_step(
    head: Position,
    heading: Direction,
    target: Position,
    bounds: Bounds,
) -> Option<Step> {
    let opposite = heading.reverse();
    Direction::iter()
        .filter(|&d| d != opposite)
        .filter_map(|d| {
            d.advance(head, bounds)
                .map(|to| Step { heading: d, to })
        })
        .min_by_key(|step| manhattan(step.to, target))
}
