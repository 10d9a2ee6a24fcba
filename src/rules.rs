//! Win and draw detection. Pure functions over a board snapshot.

use crate::board::Board;
use crate::types::Player;

/// The eight winning lines as `(row, col)` triples, in the order they are
/// checked: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Owner of the first complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = board.get(a.0, a.1).player()?;
        let same = |&(row, col): &(usize, usize)| board.get(row, col).player() == Some(first);
        (same(b) && same(c)).then_some(first)
    })
}

/// Full board and nobody has a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(r, c, Player::X),
                    'O' => board.place(r, c, Player::O),
                    _ => continue,
                };
            }
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn detects_rows_columns_and_diagonals() {
        assert_eq!(winner(&board_from(["...", "OOO", "XX."])), Some(Player::O));
        assert_eq!(winner(&board_from(["..X", "O.X", "O.X"])), Some(Player::X));
        assert_eq!(winner(&board_from(["X.O", ".XO", "..X"])), Some(Player::X));
        assert_eq!(winner(&board_from(["X.O", "XO.", "O.X"])), Some(Player::O));
    }

    #[test]
    fn scan_order_is_fixed() {
        // Two parallel lines can't come from real play, but the scan order still decides.
        assert_eq!(winner(&board_from(["OOO", "...", "XXX"])), Some(Player::O));
        assert_eq!(winner(&board_from(["XXX", "...", "OOO"])), Some(Player::X));
        assert_eq!(winner(&board_from(["O.X", "O.X", "O.X"])), Some(Player::O));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = board_from(["XOX", "XOX", "OXO"]);
        assert!(board.is_full());
        assert_eq!(winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn full_board_with_line_is_not_draw() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
