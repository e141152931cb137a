//! Game session: board ownership, turn order and game status

use crate::board::{Board, Move, Pos, Stone};
use crate::config::{FirstMove, GameConfig};
use crate::engine::{apply_move, is_winning_move, AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::find_winning_line;

/// Who is to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Ai,
}

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Won(Stone),
    Drawn,
}

/// One game between a human and the AI.
///
/// Owns the board exclusively; the human input handler and the AI take
/// turns mutating it through [`GameSession::play_human`] and
/// [`GameSession::play_ai`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human_color: Stone,
    first_move: FirstMove,
    current: Player,
    status: Status,
    history: Vec<Move>,
    winning_line: Option<Vec<Pos>>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::with_size(config.board_size)?,
            human_color: config.human_color,
            first_move: config.first_move,
            current: Self::opener(config.first_move),
            status: Status::Ongoing,
            history: Vec::new(),
            winning_line: None,
        })
    }

    fn opener(first_move: FirstMove) -> Player {
        match first_move {
            FirstMove::Human => Player::Human,
            FirstMove::Ai => Player::Ai,
        }
    }

    /// Clear the board and restart with the same settings
    pub fn reset(&mut self) {
        self.board = Board::with_size(self.board.size()).unwrap_or_default();
        self.current = Self::opener(self.first_move);
        self.status = Status::Ongoing;
        self.history.clear();
        self.winning_line = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Ongoing
    }

    pub fn human_color(&self) -> Stone {
        self.human_color
    }

    pub fn ai_color(&self) -> Stone {
        self.human_color.opponent()
    }

    /// Color of the player to move
    pub fn current_color(&self) -> Stone {
        match self.current {
            Player::Human => self.human_color,
            Player::Ai => self.ai_color(),
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Stones of the winning five (or longer), once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Place the human's stone at `pos`.
    pub fn play_human(&mut self, pos: Pos) -> Result<Status, GameError> {
        self.ensure_turn(Player::Human)?;
        self.apply(Move::new(pos, self.human_color))
    }

    /// Let the AI choose and play its move.
    ///
    /// A full board with no move left ends the game as a draw.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<MoveResult, GameError> {
        self.ensure_turn(Player::Ai)?;
        let result = engine.select_move_with_stats(&self.board, self.ai_color(), self.human_color);
        match result.best_move {
            Some(mv) => {
                self.apply(mv)?;
            }
            None => {
                log::info!("no move left for the AI, game drawn");
                self.status = Status::Drawn;
            }
        }
        Ok(result)
    }

    fn ensure_turn(&self, player: Player) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current != player {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<Status, GameError> {
        apply_move(&mut self.board, mv)?;
        self.history.push(mv);

        if is_winning_move(&self.board, mv) {
            log::info!("{} wins at {} after {} moves", mv.stone.name(), mv.pos, self.history.len());
            self.status = Status::Won(mv.stone);
            self.winning_line = find_winning_line(&self.board, mv.pos, mv.stone);
        } else if self.board.is_full() {
            log::info!("board full, game drawn");
            self.status = Status::Drawn;
        } else {
            self.current = match self.current {
                Player::Human => Player::Ai,
                Player::Ai => Player::Human,
            };
        }
        Ok(self.status)
    }
}
