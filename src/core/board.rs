//! Board snapshots.
//!
//! Every position owns its own board. Children are created by copying the
//! parent's cells and filling one vacant square, so no board is ever
//! shared or mutated after construction.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Player;

/// A board of `len()` cells, each empty or holding one player's mark.
///
/// Cells are stored inline; both rule sets fit in 9 cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: SmallVec<[Option<Player>; 9]>,
}

impl Board {
    /// Create an empty board with `squares` cells.
    #[must_use]
    pub fn empty(squares: usize) -> Self {
        Self {
            cells: SmallVec::from_elem(None, squares),
        }
    }

    /// Build a board from explicit cells.
    #[must_use]
    pub fn from_cells(cells: &[Option<Player>]) -> Self {
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Number of squares.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the board has no squares at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark at a square.
    ///
    /// Panics if `square` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, square: usize) -> Option<Player> {
        self.cells[square]
    }

    /// Check if a square holds no mark.
    #[inline]
    #[must_use]
    pub fn is_vacant(&self, square: usize) -> bool {
        self.cells[square].is_none()
    }

    /// All cells in square order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Player>] {
        &self.cells
    }

    /// Vacant squares in ascending index order.
    pub fn vacant_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// New snapshot with `player`'s mark placed on `square`.
    ///
    /// Panics if `square` is out of range or already occupied. Both are
    /// caller bugs; move generation only ever offers vacant squares.
    #[must_use]
    pub fn with_mark(&self, square: usize, player: Player) -> Self {
        assert!(
            square < self.cells.len(),
            "square {square} out of range for a {}-square board",
            self.cells.len()
        );
        assert!(
            self.cells[square].is_none(),
            "square {square} is already occupied"
        );

        let mut next = self.clone();
        next.cells[square] = Some(player);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(9);

        assert_eq!(board.len(), 9);
        assert!(!board.is_empty());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.vacant_squares().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_mark_leaves_parent_untouched() {
        let parent = Board::empty(4);
        let child = parent.with_mark(2, Player::X);

        assert!(parent.is_vacant(2));
        assert_eq!(child.get(2), Some(Player::X));
        assert_eq!(child.occupied_count(), 1);
        assert_eq!(child.vacant_squares().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_from_cells() {
        let board = Board::from_cells(&[Some(Player::X), None, Some(Player::O), None]);

        assert_eq!(board.len(), 4);
        assert_eq!(board.get(0), Some(Player::X));
        assert_eq!(board.get(2), Some(Player::O));
        assert_eq!(board.vacant_squares().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_mark_on_occupied_square() {
        let board = Board::empty(9).with_mark(4, Player::X);
        let _ = board.with_mark(4, Player::O);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mark_out_of_range() {
        let _ = Board::empty(4).with_mark(4, Player::X);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::empty(9).with_mark(0, Player::X).with_mark(4, Player::O);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
