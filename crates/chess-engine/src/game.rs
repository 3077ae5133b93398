//! A game session: a board plus the result once the game has ended.

use chess_core::{Color, Move, PieceKind, Square};
use thiserror::Error;
use tracing::info;

use crate::rules::{GameResult, MoveError, MoveOutcome};
use crate::serialize::SerializeError;
use crate::Board;

/// Error type for game operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    State(#[from] SerializeError),

    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A chess game between two players at one board.
///
/// The result is re-evaluated after every move and after loading a saved
/// state. Once it is set no further moves are accepted.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    moves: Vec<MoveOutcome>,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
            result: None,
        }
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board) -> Self {
        let mut game = Game {
            board,
            moves: Vec::new(),
            result: None,
        };
        game.result = game.board.game_result();
        game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color to move.
    pub fn current_player(&self) -> Color {
        self.board.current_player()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.board.is_check(self.board.current_player())
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the moves played since the game started or was loaded.
    pub fn move_history(&self) -> &[MoveOutcome] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Makes a move, promoting to a queen.
    pub fn make_move(&mut self, m: Move) -> Result<MoveOutcome, GameError> {
        self.make_move_with(m, |_, _| None)
    }

    /// Makes a move, asking `choose_promotion` what a pawn on the far rank
    /// becomes.
    pub fn make_move_with<F>(&mut self, m: Move, choose_promotion: F) -> Result<MoveOutcome, GameError>
    where
        F: FnOnce(Square, Color) -> Option<PieceKind>,
    {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let outcome = self.board.make_move_with(m.from(), m.to(), choose_promotion)?;
        self.moves.push(outcome);
        self.result = self.board.game_result();
        Ok(outcome)
    }

    /// Resigns the game for the side to move.
    pub fn resign(&mut self) -> Result<GameResult, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let loser = self.board.current_player();
        let result = GameResult::Resignation {
            winner: loser.opposite(),
        };
        info!(%loser, "resigned");
        self.result = Some(result);
        Ok(result)
    }

    /// Returns the board state as a string for saving.
    pub fn save_state(&self) -> Result<String, GameError> {
        Ok(self.board.serialize()?)
    }

    /// Replaces the board with a saved state and re-evaluates the result.
    ///
    /// On error the game is unchanged.
    pub fn load_state(&mut self, state: &str) -> Result<(), GameError> {
        let board = Board::deserialize(state)?;
        *self = Game::from_board(board);
        Ok(())
    }
}
