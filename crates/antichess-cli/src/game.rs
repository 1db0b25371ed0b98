//! A single game: the board plus whose turn it is.

use antichess_core::{Board, Color, Move, Piece, RulesEngine};
use tracing::{debug, info};

use crate::error::GameError;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The winner has no pieces left.
    EmptyArmy,
    /// The loser had no legal move on their turn.
    NoLegalMoves,
    /// The loser quit.
    Resignation,
}

/// The result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Color,
    pub termination: Termination,
}

/// Game state owned by the driver.
///
/// The rules engine is stateless about turn order; `Game` holds the side to
/// move and passes it into every engine call.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    outcome: Option<Outcome>,
}

impl Game {
    /// Standard setup, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::new_standard_setup(), Color::White)
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The outcome if the game is over.
    ///
    /// A side to move with no legal move loses: its opponent wins. This is
    /// the opposite convention from the empty-army rule, where the emptied
    /// side wins.
    pub fn status(&self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if RulesEngine::legal_moves(&self.board, self.side_to_move).is_empty() {
            return Some(Outcome {
                winner: self.side_to_move.flip(),
                termination: Termination::NoLegalMoves,
            });
        }
        None
    }

    /// Every legal move for the side to move, ignoring mandatory capture.
    pub fn hints(&self) -> Vec<Move> {
        RulesEngine::legal_moves(&self.board, self.side_to_move)
    }

    /// Play `mv` for the side to move.
    ///
    /// On success the move is applied, then the empty-army rule is checked;
    /// if nobody has won the turn passes. A rejected move leaves the game
    /// untouched.
    pub fn play(&mut self, mv: Move) -> Result<Option<Outcome>, GameError> {
        if self.status().is_some() {
            return Err(GameError::Finished);
        }
        let mover = self.side_to_move;
        RulesEngine::validate(&self.board, mv, mover)?;

        let captured: Option<Piece> = self.board.relocate(mv.from, mv.to);
        debug!(%mv, color = %mover, ?captured, "move played");

        if let Some(winner) = RulesEngine::winner(&self.board) {
            let outcome = Outcome {
                winner,
                termination: Termination::EmptyArmy,
            };
            info!(%winner, "army emptied");
            self.outcome = Some(outcome);
            return Ok(Some(outcome));
        }

        self.side_to_move = mover.flip();
        Ok(None)
    }

    /// The side to move quits; the opponent wins.
    pub fn resign(&mut self) -> Outcome {
        let outcome = Outcome {
            winner: self.side_to_move.flip(),
            termination: Termination::Resignation,
        };
        info!(loser = %self.side_to_move, "resigned");
        self.outcome = Some(outcome);
        outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use antichess_core::{IllegalMove, Square};

    use super::*;

    #[test]
    fn new_game_white_to_move() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), None);
        assert_eq!(game.hints().len(), 20);
    }

    #[test]
    fn accepted_move_passes_turn() {
        let mut game = Game::new();
        let outcome = game.play(Move::new(Square::E2, Square::E4)).unwrap();
        assert_eq!(outcome, None);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.board().get(Square::E4), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let mut game = Game::new();
        let err = game.play(Move::new(Square::E2, Square::E5)).unwrap_err();
        assert!(matches!(err, GameError::Rejected { source: IllegalMove::NotLegal }));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &Board::new_standard_setup());
    }

    #[test]
    fn capture_is_forced() {
        let mut game = Game::new();
        game.play(Move::new(Square::E2, Square::E4)).unwrap();
        game.play(Move::new(Square::D7, Square::D5)).unwrap();

        let err = game.play(Move::new(Square::A2, Square::A3)).unwrap_err();
        assert!(matches!(
            err,
            GameError::Rejected {
                source: IllegalMove::CaptureRequired
            }
        ));
        // The hint listing still shows the quiet move
        assert!(game.hints().contains(&Move::new(Square::A2, Square::A3)));

        game.play(Move::new(Square::E4, Square::D5)).unwrap();
        assert_eq!(game.board().piece_count(Color::Black), 15);
    }

    #[test]
    fn emptied_army_wins() {
        let board: Board = "8/8/8/8/8/8/1p6/R7".parse().unwrap();
        let mut game = Game::from_board(board, Color::Black);
        // Black must capture the only white piece
        let outcome = game.play(Move::new(Square::B2, Square::A1)).unwrap();
        assert_eq!(
            outcome,
            Some(Outcome {
                winner: Color::White,
                termination: Termination::EmptyArmy,
            })
        );
        assert_eq!(game.status(), outcome);
        assert!(matches!(
            game.play(Move::new(Square::A1, Square::A2)),
            Err(GameError::Finished)
        ));
    }

    #[test]
    fn stuck_side_loses() {
        let board: Board = "8/8/8/3p4/3P4/8/8/7K".parse().unwrap();
        let game = Game::from_board(board, Color::Black);
        assert_eq!(
            game.status(),
            Some(Outcome {
                winner: Color::White,
                termination: Termination::NoLegalMoves,
            })
        );
    }

    #[test]
    fn resignation() {
        let mut game = Game::new();
        game.play(Move::new(Square::G1, Square::F3)).unwrap();
        let outcome = game.resign();
        assert_eq!(outcome.winner, Color::White);
        assert_eq!(outcome.termination, Termination::Resignation);
        assert_eq!(game.status(), Some(outcome));
    }
}
