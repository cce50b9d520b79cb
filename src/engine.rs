//! Game engine: board state, turn order, outcome and move history
//!
//! The engine is the single owner of a game in progress. Every applied move
//! writes the board, appends to the history and re-evaluates the status in
//! one step, so the three never drift apart:
//!
//! 1. **Validate**: the game must be in progress, the cell in range and empty
//! 2. **Apply**: place the stone and record the move
//! 3. **Evaluate**: five-in-a-row through the new stone wins, a full board draws,
//!    otherwise the turn passes to the opponent
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::default();
//! let outcome = engine.apply_move(7, 7).unwrap();
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! assert_eq!(engine.current_player(), Player::White);
//!
//! engine.undo();
//! assert_eq!(engine.move_count(), 0);
//! assert_eq!(engine.current_player(), Player::Black);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Player, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::{ConfigError, GameError};
use crate::rules::{find_five_line_at_pos, has_five_at_pos, suggest_move};

/// One placed stone. Moves are never edited, only pushed and popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub player: Player,
}

impl Move {
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}

/// Outcome of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Won or Draw
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Wins per color across games of one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

impl Scores {
    #[inline]
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    fn record_win(&mut self, player: Player) {
        match player {
            Player::Black => self.black += 1,
            Player::White => self.white += 1,
        }
    }
}

/// Result of a successful `apply_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Status after the move
    pub status: GameStatus,
    /// This move completed five in a row
    pub just_won: bool,
    /// This move filled the last cell without a five
    pub just_draw: bool,
}

impl MoveOutcome {
    #[inline]
    fn in_progress() -> Self {
        Self {
            status: GameStatus::InProgress,
            just_won: false,
            just_draw: false,
        }
    }

    #[inline]
    fn won(player: Player) -> Self {
        Self {
            status: GameStatus::Won(player),
            just_won: true,
            just_draw: false,
        }
    }

    #[inline]
    fn draw() -> Self {
        Self {
            status: GameStatus::Draw,
            just_won: false,
            just_draw: true,
        }
    }
}

/// Gomoku rule engine.
///
/// Owns the board, the move history, whose turn it is, the game status,
/// the session scores and the current hint. Callers drive it through
/// [`apply_move`](Self::apply_move), [`undo`](Self::undo),
/// [`restart`](Self::restart) and [`compute_hint`](Self::compute_hint),
/// and read everything else through copy-out queries.
///
/// Scores survive `restart` and are not reverted by `undo`: undoing a
/// winning move reopens the game but the win stays counted.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    moves: Vec<Move>,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
    hint: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
}

impl GameEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        let board = Board::new(config.board_size);
        Self {
            config,
            moves: Vec::with_capacity(board.total_cells()),
            board,
            current_player: Player::Black,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            hint: None,
            winning_line: None,
        }
    }

    /// Create an engine with an N x N board.
    pub fn with_board_size(size: usize) -> Result<Self, ConfigError> {
        Self::new(EngineConfig::with_board_size(size))
    }

    /// Place the current player's stone at (row, col).
    ///
    /// Rejections leave every piece of state untouched. The game-over check
    /// comes first, then bounds, then occupancy.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, GameError> {
        let pos = self.validate_move(row, col).inspect_err(|err| {
            debug!(row, col, %err, "move rejected");
        })?;

        let player = self.current_player;
        self.board.place_stone(pos, player);
        self.moves.push(Move {
            row: pos.row,
            col: pos.col,
            player,
        });
        self.hint = None;
        debug!(row, col, %player, moves = self.moves.len(), "move applied");

        if has_five_at_pos(&self.board, pos, player) {
            self.status = GameStatus::Won(player);
            self.scores.record_win(player);
            self.winning_line = find_five_line_at_pos(&self.board, pos, player);
            info!(
                winner = %player,
                black = self.scores.black,
                white = self.scores.white,
                "game won"
            );
            return Ok(MoveOutcome::won(player));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.moves.len(), "game drawn, board full");
            return Ok(MoveOutcome::draw());
        }

        self.current_player = player.opponent();
        Ok(MoveOutcome::in_progress())
    }

    fn validate_move(&self, row: i32, col: i32) -> Result<Pos, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        let pos = self.board.pos(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(pos)
    }

    /// Take back the last move.
    ///
    /// The turn returns to the player who made it and a finished game
    /// becomes in progress again. Returns the removed move, or `None` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.moves.pop()?;
        self.board.remove_stone(last.pos());
        self.current_player = last.player;
        if self.status.is_terminal() {
            self.status = GameStatus::InProgress;
        }
        self.hint = None;
        self.winning_line = None;
        debug!(row = last.row, col = last.col, player = %last.player, moves = self.moves.len(), "move undone");
        Some(last)
    }

    /// Start a new game on the same board size. Scores are kept.
    pub fn restart(&mut self) {
        self.board.clear();
        self.moves.clear();
        self.current_player = Player::Black;
        self.status = GameStatus::InProgress;
        self.hint = None;
        self.winning_line = None;
        debug!("game restarted");
    }

    /// Suggest the empty cell nearest the center and remember it as the hint.
    pub fn compute_hint(&mut self) -> Result<Option<Pos>, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        self.hint = suggest_move(&self.board);
        if let Some(pos) = self.hint {
            debug!(row = pos.row, col = pos.col, "hint computed");
        }
        Ok(self.hint)
    }

    /// Apply moves in order, stopping at the first rejection.
    ///
    /// Returns how many moves were applied.
    pub fn replay<I>(&mut self, moves: I) -> Result<usize, GameError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut applied = 0;
        for (row, col) in moves {
            self.apply_move(row, col)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Cell contents, `None` when (row, col) is off the board
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        self.board.pos(row, col).map(|pos| self.board.get(pos))
    }

    #[inline]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[inline]
    pub fn hint(&self) -> Option<Pos> {
        self.hint
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Move history, oldest first
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Read-only view of the board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Stones of the five (or longer) that ended the game, if it was won
    #[inline]
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Black plays `black`, White plays `white`, interleaved starting with Black.
    fn play(engine: &mut GameEngine, black: &[(i32, i32)], white: &[(i32, i32)]) -> MoveOutcome {
        let mut last = MoveOutcome::in_progress();
        for i in 0..black.len().max(white.len()) {
            if let Some(&(r, c)) = black.get(i) {
                last = engine.apply_move(r, c).unwrap();
            }
            if let Some(&(r, c)) = white.get(i) {
                last = engine.apply_move(r, c).unwrap();
            }
        }
        last
    }

    #[test]
    fn test_engine_creation() {
        let engine = GameEngine::default();
        assert_eq!(engine.size(), 15);
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.scores(), Scores::default());
        assert_eq!(engine.hint(), None);
        assert!(!engine.is_board_full());
    }

    #[test]
    fn test_engine_with_config() {
        let engine = GameEngine::with_board_size(19).unwrap();
        assert_eq!(engine.size(), 19);
        assert_eq!(engine.config().board_size, 19);
        assert_eq!(
            GameEngine::with_board_size(2).unwrap_err(),
            ConfigError::BoardSize(2)
        );
    }

    #[test]
    fn test_apply_move_switches_turn() {
        let mut engine = GameEngine::default();
        let outcome = engine.apply_move(7, 7).unwrap();
        assert_eq!(outcome, MoveOutcome::in_progress());
        assert_eq!(engine.cell(7, 7), Some(Stone::Black));
        assert_eq!(engine.current_player(), Player::White);

        engine.apply_move(7, 8).unwrap();
        assert_eq!(engine.cell(7, 8), Some(Stone::White));
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(
            engine.last_move(),
            Some(Move {
                row: 7,
                col: 8,
                player: Player::White
            })
        );
    }

    #[test]
    fn test_black_wins_horizontal() {
        let mut engine = GameEngine::default();
        let outcome = play(
            &mut engine,
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        assert!(outcome.just_won);
        assert!(!outcome.just_draw);
        assert_eq!(outcome.status, GameStatus::Won(Player::Black));
        assert_eq!(engine.status(), GameStatus::Won(Player::Black));
        assert_eq!(engine.scores().black, 1);
        assert_eq!(engine.scores().white, 0);
        // Winner stays the current player
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.winning_line().map(|l| l.len()), Some(5));
    }

    #[test]
    fn test_white_wins_diagonal() {
        let mut engine = GameEngine::default();
        let outcome = play(
            &mut engine,
            &[(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)],
            &[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)],
        );
        assert_eq!(outcome.status, GameStatus::Won(Player::White));
        assert_eq!(engine.scores().white, 1);
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.move_count(), 10);
    }

    #[test]
    fn test_reject_out_of_bounds() {
        let mut engine = GameEngine::default();
        assert_eq!(
            engine.apply_move(15, 0),
            Err(GameError::OutOfBounds {
                row: 15,
                col: 0,
                size: 15
            })
        );
        assert_eq!(
            engine.apply_move(-1, 3),
            Err(GameError::OutOfBounds {
                row: -1,
                col: 3,
                size: 15
            })
        );
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.current_player(), Player::Black);
    }

    #[test]
    fn test_reject_occupied() {
        let mut engine = GameEngine::default();
        engine.apply_move(7, 7).unwrap();
        assert_eq!(
            engine.apply_move(7, 7),
            Err(GameError::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(engine.cell(7, 7), Some(Stone::Black));
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.move_count(), 1);
    }

    #[test]
    fn test_reject_after_game_over() {
        let mut engine = GameEngine::default();
        play(
            &mut engine,
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        let before = engine.board().clone();
        // Game over is reported even for out-of-range input
        assert_eq!(engine.apply_move(20, 20), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.apply_move(3, 3), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.move_count(), 9);
        assert_eq!(engine.scores().black, 1);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut engine = GameEngine::default();
        assert_eq!(engine.undo(), None);
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_undo_three_moves() {
        let mut engine = GameEngine::default();
        engine.replay([(7, 7), (7, 8), (8, 8)]).unwrap();
        let undone = engine.undo().unwrap();
        assert_eq!(undone.pos(), Pos::new(8, 8));
        assert_eq!(undone.player, Player::Black);

        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.cell(8, 8), Some(Stone::Empty));
        assert_eq!(engine.cell(7, 7), Some(Stone::Black));
        assert_eq!(engine.cell(7, 8), Some(Stone::White));
    }

    #[test]
    fn test_undo_after_win_keeps_score() {
        let mut engine = GameEngine::default();
        play(
            &mut engine,
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        engine.undo().unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.winning_line(), None);
        // The win is not taken back
        assert_eq!(engine.scores().black, 1);

        // Winning again counts a second time
        engine.apply_move(7, 11).unwrap();
        assert_eq!(engine.scores().black, 2);
    }

    #[test]
    fn test_undo_clears_hint() {
        let mut engine = GameEngine::default();
        engine.apply_move(0, 0).unwrap();
        engine.compute_hint().unwrap();
        assert!(engine.hint().is_some());
        engine.undo();
        assert_eq!(engine.hint(), None);
    }

    #[test]
    fn test_restart_keeps_scores() {
        let mut engine = GameEngine::default();
        play(
            &mut engine,
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        engine.restart();
        assert_eq!(engine.move_count(), 0);
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.hint(), None);
        assert_eq!(engine.scores().black, 1);
    }

    #[test]
    fn test_hint_empty_board() {
        let mut engine = GameEngine::default();
        assert_eq!(engine.compute_hint(), Ok(Some(Pos::new(7, 7))));
        assert_eq!(engine.hint(), Some(Pos::new(7, 7)));
        // Hint does not touch the board or turn
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.current_player(), Player::Black);
    }

    #[test]
    fn test_hint_cleared_by_move() {
        let mut engine = GameEngine::default();
        engine.compute_hint().unwrap();
        engine.apply_move(0, 0).unwrap();
        assert_eq!(engine.hint(), None);
    }

    #[test]
    fn test_hint_rejected_after_game_over() {
        let mut engine = GameEngine::default();
        play(
            &mut engine,
            &[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)],
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
        );
        assert_eq!(engine.compute_hint(), Err(GameError::GameAlreadyOver));
        assert_eq!(engine.hint(), None);
    }

    #[test]
    fn test_cell_out_of_range() {
        let engine = GameEngine::default();
        assert_eq!(engine.cell(0, 0), Some(Stone::Empty));
        assert_eq!(engine.cell(15, 0), None);
        assert_eq!(engine.cell(0, -1), None);
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let mut engine = GameEngine::default();
        let err = engine.replay([(1, 1), (2, 2), (1, 1), (3, 3)]).unwrap_err();
        assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
        assert_eq!(engine.move_count(), 2);
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert!(GameStatus::Won(Player::White).is_terminal());
        assert_eq!(GameStatus::Won(Player::White).winner(), Some(Player::White));
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_scores_get() {
        let scores = Scores { black: 3, white: 1 };
        assert_eq!(scores.get(Player::Black), 3);
        assert_eq!(scores.get(Player::White), 1);
    }
}
