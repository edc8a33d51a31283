//! Game state management for the Freedom GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{Bitboard, Player};
use crate::error::Result;
use crate::eval::live_stones;
use crate::game::{Command, GameController, GameSettings};
use crate::{MoveResult, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }

    /// Wall-clock time of the last computer turn, worker thread included
    pub fn last_ai_time(&self) -> Option<Duration> {
        self.ai_thinking_time
    }
}

/// GUI-side wrapper around the controller.
///
/// Computer moves are searched on a worker thread over a copy of the board;
/// the controller only sees the finished result.
pub struct GameState {
    pub game: GameController,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            game: GameController::new(settings),
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    /// Forward a menu command to the controller.
    ///
    /// Commands that start a new game abandon a search in progress; its
    /// result is dropped with the receiver.
    pub fn apply(&mut self, command: Command) {
        let restarts = matches!(command, Command::NewGame(_) | Command::SetBoardSize(_));
        if restarts {
            self.ai_state = AiState::Idle;
            self.move_timer = MoveTimer::default();
        }

        match self.game.apply(command) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Restart with the current mode
    pub fn restart(&mut self) {
        let mode = self.game.settings().mode;
        self.apply(Command::NewGame(mode));
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether a click on the board should be turned into a move
    pub fn accepts_input(&self) -> bool {
        self.game.is_human_turn() && !self.is_ai_thinking()
    }

    /// Human move from a board click
    pub fn try_play(&mut self, pos: Pos) {
        if self.is_ai_thinking() {
            self.message = Some("Computer is thinking".to_string());
            return;
        }
        match self.game.play(pos) {
            Ok(()) => {
                self.message = None;
                self.move_timer.start();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Start AI thinking when the computer is to move
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_computer_turn() || self.is_ai_thinking() {
            return;
        }

        let request = match self.game.search_request() {
            Ok(request) => request,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };

        let (tx, rx) = channel();
        thread::spawn(move || {
            let _ = tx.send(request.run());
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            let outcome = result.and_then(|r| self.game.commit_computer_move(r));
            match outcome {
                Ok(()) => self.move_timer.start(),
                Err(e) => {
                    warn!(error = %e, "computer move rejected");
                    self.message = Some(e.to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Stones currently forming live fours, per player
    pub fn live_stones(&self) -> [Bitboard; 2] {
        let board = self.game.board();
        [live_stones(board, Player::One), live_stones(board, Player::Two)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use crate::game::GameMode;

    fn settings(mode: GameMode) -> GameSettings {
        GameSettings {
            size: BoardSize::Six,
            mode,
            fixed_depth: Some(1),
            seed: Some(7),
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_move_timer_records_ai_time() {
        let mut timer = MoveTimer::default();
        assert_eq!(timer.last_ai_time(), None);

        timer.set_ai_time(Duration::from_millis(250));
        assert_eq!(timer.last_ai_time(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_computer_turn_sets_ai_time() {
        let mut state = GameState::new(settings(GameMode::ComputerVsComputer));
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        while state.is_ai_thinking() {
            state.check_ai_result();
            thread::yield_now();
        }

        assert!(state.message.is_none(), "{:?}", state.message);
        assert!(state.move_timer.last_ai_time().is_some());
        assert_eq!(state.game.history().len(), 1);
    }

    #[test]
    fn test_new_game_clears_ai_time() {
        let mut state = GameState::new(settings(GameMode::HumanVsHuman));
        state.move_timer.set_ai_time(Duration::from_millis(10));
        state.restart();
        assert_eq!(state.move_timer.last_ai_time(), None);
    }
}
