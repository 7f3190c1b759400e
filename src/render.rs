//! Text rendering of boards.
//!
//! Each cell maps to one glyph: `_` for empty, `ο` for O and `×` for X,
//! with a line break after every row.

use crate::core::Board;
use crate::tree::{PositionId, PositionStore};

/// Glyph for an empty square.
pub const EMPTY_GLYPH: char = '_';

/// Render a board, `row_width` cells per line.
///
/// ```
/// use tictactoe_minimax::core::{Board, Player};
/// use tictactoe_minimax::render::render_board;
///
/// let board = Board::empty(4).with_mark(0, Player::X).with_mark(3, Player::O);
/// assert_eq!(render_board(&board, 2), "×_\n_ο\n");
/// ```
#[must_use]
pub fn render_board(board: &Board, row_width: usize) -> String {
    assert!(row_width > 0, "row width must be positive");

    let mut out = String::with_capacity(board.len() * 3);
    for (index, cell) in board.cells().iter().enumerate() {
        out.push(cell.map_or(EMPTY_GLYPH, |player| player.glyph()));
        if index % row_width == row_width - 1 {
            out.push('\n');
        }
    }
    out
}

/// Render a stored position using its tree's row width.
#[must_use]
pub fn render_position(store: &PositionStore, id: PositionId) -> String {
    render_board(store.board(id), store.rules().row_width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::rules::RuleSet;

    #[test]
    fn test_render_empty_classic() {
        assert_eq!(render_board(&Board::empty(9), 3), "___\n___\n___\n");
    }

    #[test]
    fn test_render_marks() {
        let board = Board::empty(9)
            .with_mark(0, Player::X)
            .with_mark(4, Player::O)
            .with_mark(8, Player::X);

        assert_eq!(render_board(&board, 3), "×__\n_ο_\n__×\n");
    }

    #[test]
    fn test_render_position_uses_rule_set() {
        let store = PositionStore::new(RuleSet::simple());
        assert_eq!(render_position(&store, store.root()), "__\n__\n");
    }
}
