//! Game state management for the Gomoku GUI

use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::eval::evaluate_board;
use crate::session::{GameSession, Player, Status};
use crate::{AIEngine, Board, Move, MoveResult, Pos, Stone};

/// Main game state: the running session plus the settings for the next one
pub struct GameState {
    /// Settings edited in the side panel, applied by [`GameState::start`]
    pub settings: GameConfig,
    session: GameSession,
    engine: AIEngine,
    /// When the pending AI move may be played
    ai_due: Option<Instant>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let session = GameSession::new(&config)?;
        let engine = AIEngine::with_config(config.difficulty, config.seed);
        let mut state = Self {
            settings: config,
            session,
            engine,
            ai_due: None,
            last_ai_result: None,
            message: None,
        };
        state.schedule_ai(Instant::now());
        Ok(state)
    }

    /// Start a new game with the current settings
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn start_at(&mut self, now: Instant) {
        match GameSession::new(&self.settings) {
            Ok(session) => {
                self.session = session;
                self.engine = AIEngine::with_config(self.settings.difficulty, self.settings.seed);
                self.last_ai_result = None;
                self.message = None;
                self.ai_due = None;
                log::info!(
                    "new game: difficulty {}, human plays {}",
                    self.settings.difficulty,
                    self.settings.human_color.name()
                );
                self.schedule_ai(now);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn difficulty(&self) -> crate::Difficulty {
        self.engine.difficulty()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.session.is_over() && self.session.current_player() == Player::Human
    }

    /// An AI move is scheduled but not yet played
    pub fn is_ai_thinking(&self) -> bool {
        self.ai_due.is_some()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.session.last_move()
    }

    /// Pattern evaluation of the stones on the board for each color
    pub fn evaluations(&self) -> (i32, i32) {
        let board = self.session.board();
        (
            evaluate_board(board, Stone::Black),
            evaluate_board(board, Stone::White),
        )
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Status, GameError> {
        self.try_place_stone_at(pos, Instant::now())
    }

    fn try_place_stone_at(&mut self, pos: Pos, now: Instant) -> Result<Status, GameError> {
        let status = self.session.play_human(pos)?;
        self.message = None;
        self.schedule_ai(now);
        Ok(status)
    }

    /// Queue the AI's move after the display delay if it is the AI's turn
    fn schedule_ai(&mut self, now: Instant) {
        if self.session.is_over() || self.session.current_player() != Player::Ai {
            return;
        }
        let delay_ms = if self.session.history().is_empty() {
            self.settings.ai_opening_delay_ms
        } else {
            self.settings.ai_delay_ms
        };
        self.ai_due = Some(now + Duration::from_millis(delay_ms));
    }

    /// Play the AI's move once its delay has elapsed
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    fn update_at(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;

        match self.session.play_ai(&mut self.engine) {
            Ok(result) => {
                if result.best_move.is_none() {
                    self.message = Some("No move left".to_string());
                }
                self.last_ai_result = Some(result);
            }
            Err(err) => {
                log::warn!("AI move rejected: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Time left before the pending AI move
    pub fn ai_remaining(&self) -> Option<Duration> {
        self.ai_due
            .map(|due| due.saturating_duration_since(Instant::now()))
    }
}
