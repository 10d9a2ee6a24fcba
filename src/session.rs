//! One game from first move to result, plus restart.
//!
//! A [`GameSession`] is the only mutable game state in the program. The host
//! creates one at startup and hands it by reference to the input mapper
//! (which may change it) and the renderer (which only reads it).

use tracing::{debug, info, instrument};

use crate::board::{Board, Placement};
use crate::rules;
use crate::types::{Outcome, Player};

/// What a call to [`GameSession::submit_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The game is already decided; the move never reached the board.
    Ignored,
    /// The board refused the cell (taken or off the board).
    Rejected,
    /// The mark went down; carries the outcome after the move.
    Accepted(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameSession {
    /// Fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is. Frozen on the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Single terminal check used for both input gating and the result overlay.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Current player tries to mark (row, col).
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.is_over() {
            debug!(outcome = ?self.outcome, "move after game end ignored");
            return MoveResult::Ignored;
        }

        if self.board.place(row, col, self.current_player) == Placement::Rejected {
            debug!("cell unavailable, move rejected");
            return MoveResult::Rejected;
        }

        if let Some(winner) = rules::winner(&self.board) {
            self.outcome = Outcome::Won(winner);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }

        if let Some(message) = self.outcome.message() {
            info!("{message}");
            debug!("final board:\n{}", self.board);
        }
        MoveResult::Accepted(self.outcome)
    }

    /// Start over. Allowed from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::X;
        self.outcome = Outcome::InProgress;
        info!("new game");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            session.submit_move(r, c);
        }
    }

    #[test]
    fn starts_in_progress_with_x() {
        let session = GameSession::new();
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn accepted_move_toggles_player() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_move(1, 1), MoveResult::Accepted(Outcome::InProgress));
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.board().cell_at(1, 1), Ok(Cell::Occupied(Player::X)));
    }

    #[test]
    fn occupied_cell_leaves_everything_alone() {
        let mut session = GameSession::new();
        session.submit_move(0, 0);
        let before = session.clone();
        assert_eq!(session.submit_move(0, 0), MoveResult::Rejected);
        assert_eq!(session, before);
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn off_board_move_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_move(5, 1), MoveResult::Rejected);
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn win_freezes_player_and_ignores_further_moves() {
        let mut session = GameSession::new();
        play(&mut session, &[(0, 0), (1, 1), (0, 1), (1, 0)]);
        assert_eq!(session.submit_move(0, 2), MoveResult::Accepted(Outcome::Won(Player::X)));
        assert_eq!(session.current_player(), Player::X);

        let before = session.clone();
        assert_eq!(session.submit_move(2, 2), MoveResult::Ignored);
        assert_eq!(session, before);
    }

    #[test]
    fn last_cell_without_line_is_draw() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (1, 2), (2, 2)],
        );
        assert_eq!(session.submit_move(2, 1), MoveResult::Accepted(Outcome::Draw));
        assert!(session.is_over());
    }

    #[test]
    fn reset_from_finished_game() {
        let mut session = GameSession::new();
        play(&mut session, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(session.outcome(), Outcome::Won(Player::X));
        session.reset();
        assert_eq!(session, GameSession::new());
    }
}
