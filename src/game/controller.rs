//! Turn order, seats and game termination

use tracing::info;

use crate::board::{Board, BoardSize, Player, Pos};
use crate::engine::{FreedomEngine, MoveResult};
use crate::error::{FreedomError, Result};
use crate::eval::{exact_score, final_scores, EvalTerm, EvalWeights};
use crate::search::{Algorithm, Difficulty, SearchConfig};

/// Who plays a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer,
}

/// Seat assignment for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    HumanVsHuman,
    /// The computer plays second
    #[default]
    HumanVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::HumanVsHuman,
        GameMode::HumanVsComputer,
        GameMode::ComputerVsComputer,
    ];

    pub fn seat(self, player: Player) -> Seat {
        match (self, player) {
            (GameMode::HumanVsHuman, _) => Seat::Human,
            (GameMode::HumanVsComputer, Player::One) => Seat::Human,
            (GameMode::HumanVsComputer, Player::Two) => Seat::Computer,
            (GameMode::ComputerVsComputer, _) => Seat::Computer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }
}

/// Everything that configures a game and the computer players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub size: BoardSize,
    pub mode: GameMode,
    pub algorithm: Algorithm,
    pub difficulty: Difficulty,
    pub weights: EvalWeights,
    /// Fixed search depth instead of the empty-cell policy
    pub fixed_depth: Option<u8>,
    /// Seed for the engine's random number generator
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: BoardSize::Ten,
            mode: GameMode::HumanVsComputer,
            algorithm: Algorithm::AlphaBeta,
            difficulty: Difficulty::Normal,
            weights: EvalWeights::ALL,
            fixed_depth: None,
            seed: None,
        }
    }
}

impl GameSettings {
    /// Search settings for a position with `empty_cells` empty cells
    pub fn search_config(&self, empty_cells: usize) -> SearchConfig {
        match self.fixed_depth {
            Some(depth) => SearchConfig::new(depth, self.algorithm, self.weights),
            None => SearchConfig::for_position(
                empty_cells,
                self.difficulty,
                self.algorithm,
                self.weights,
            ),
        }
    }
}

/// Input accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewGame(GameMode),
    SetBoardSize(BoardSize),
    SetAlgorithm(Algorithm),
    SetDifficulty(Difficulty),
    ToggleTerm(EvalTerm),
    EnableAllTerms,
    DisableAllTerms,
    Play(Pos),
}

/// A stone committed to the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub pos: Pos,
    /// Placed by the last-cell rule rather than chosen
    pub forced: bool,
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Live fours per player, indexed by [`Player::index`]
    pub scores: [i32; 2],
    /// `None` on a tie
    pub winner: Option<Player>,
    /// Player who left the last cell empty
    pub passed: Option<Player>,
}

impl Outcome {
    fn from_board(board: &Board, passed: Option<Player>) -> Self {
        let scores = final_scores(board);
        let winner = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            scores,
            winner,
            passed,
        }
    }

    pub fn score(&self, player: Player) -> i32 {
        self.scores[player.index()]
    }
}

/// Self-contained computer move request that can be sent to another thread
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub board: Board,
    pub player: Player,
    pub config: SearchConfig,
    engine: FreedomEngine,
}

impl SearchRequest {
    /// Run the search
    pub fn run(mut self) -> Result<MoveResult> {
        self.engine.choose_move(&self.board, self.player, &self.config)
    }
}

/// Drives a game: whose turn it is, who sits where, and when it ends.
#[derive(Debug, Clone)]
pub struct GameController {
    settings: GameSettings,
    board: Board,
    to_move: Player,
    outcome: Option<Outcome>,
    history: Vec<MoveRecord>,
    last_result: Option<MoveResult>,
    engine: FreedomEngine,
}

impl GameController {
    pub fn new(settings: GameSettings) -> Self {
        let engine = match settings.seed {
            Some(seed) => FreedomEngine::with_seed(seed),
            None => FreedomEngine::new(),
        };
        let mut controller = Self {
            settings,
            board: Board::new(settings.size),
            to_move: Player::One,
            outcome: None,
            history: Vec::new(),
            last_result: None,
            engine,
        };
        controller.reset();
        controller
    }

    #[inline]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move (the player who would move next once the game is over)
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|m| m.pos)
    }

    /// Last engine decision, for display
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    /// Current live-four count of both players
    pub fn scores(&self) -> [i32; 2] {
        final_scores(&self.board)
    }

    pub fn seat(&self, player: Player) -> Seat {
        self.settings.mode.seat(player)
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.seat(self.to_move) == Seat::Human
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.seat(self.to_move) == Seat::Computer
    }

    /// Apply one command.
    ///
    /// Setting changes other than the board size take effect from the next
    /// computer move; a new board size starts a new game.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::NewGame(mode) => {
                self.settings.mode = mode;
                self.reset();
            }
            Command::SetBoardSize(size) => {
                self.settings.size = size;
                self.reset();
            }
            Command::SetAlgorithm(algorithm) => self.settings.algorithm = algorithm,
            Command::SetDifficulty(difficulty) => self.settings.difficulty = difficulty,
            Command::ToggleTerm(term) => self.settings.weights.toggle(term),
            Command::EnableAllTerms => self.settings.weights = EvalWeights::ALL,
            Command::DisableAllTerms => self.settings.weights = EvalWeights::NONE,
            Command::Play(pos) => return self.play(pos),
        }
        Ok(())
    }

    /// Start a new game with the current settings
    pub fn reset(&mut self) {
        self.board = Board::new(self.settings.size);
        self.to_move = Player::One;
        self.outcome = None;
        self.history.clear();
        self.last_result = None;
        info!(
            mode = self.settings.mode.label(),
            size = %self.settings.size,
            algorithm = ?self.settings.algorithm,
            difficulty = ?self.settings.difficulty,
            "new game"
        );
    }

    /// Human move for the player to move
    pub fn play(&mut self, pos: Pos) -> Result<()> {
        if self.is_over() {
            return Err(FreedomError::GameOver);
        }
        if self.seat(self.to_move) != Seat::Human {
            return Err(FreedomError::NotHumanTurn(self.to_move));
        }
        self.commit(pos)
    }

    /// Snapshot of everything needed to compute the computer's move
    pub fn search_request(&mut self) -> Result<SearchRequest> {
        self.ensure_computer_turn()?;
        Ok(SearchRequest {
            board: self.board.clone(),
            player: self.to_move,
            config: self.settings.search_config(self.board.empty_count()),
            engine: self.engine.fork(),
        })
    }

    /// Apply a computer move computed from [`Self::search_request`]
    pub fn commit_computer_move(&mut self, result: MoveResult) -> Result<()> {
        self.ensure_computer_turn()?;
        let pos = result.best_move;
        self.last_result = Some(result);
        self.commit(pos)
    }

    /// Let the computer play one move
    pub fn step_computer(&mut self) -> Result<MoveResult> {
        self.ensure_computer_turn()?;
        let config = self.settings.search_config(self.board.empty_count());
        let result = self.engine.choose_move(&self.board, self.to_move, &config)?;
        self.last_result = Some(result.clone());
        self.commit(result.best_move)?;
        Ok(result)
    }

    /// Let the computer move until a human is to move or the game is over.
    /// Returns the number of moves played.
    pub fn run_computer_turns(&mut self) -> Result<usize> {
        let mut moves = 0;
        while self.is_computer_turn() {
            self.step_computer()?;
            moves += 1;
        }
        Ok(moves)
    }

    fn ensure_computer_turn(&self) -> Result<()> {
        if self.is_over() {
            return Err(FreedomError::GameOver);
        }
        if self.seat(self.to_move) != Seat::Computer {
            return Err(FreedomError::NotComputerTurn(self.to_move));
        }
        Ok(())
    }

    /// Place for the player to move, pass the turn and check for the end
    fn commit(&mut self, pos: Pos) -> Result<()> {
        let player = self.to_move;
        self.board.try_place(player, pos)?;
        self.history.push(MoveRecord {
            player,
            pos,
            forced: false,
        });
        info!(
            ?player,
            %pos,
            empty = self.board.empty_count(),
            "move"
        );
        self.to_move = player.other();
        self.settle_last_cell();
        Ok(())
    }

    /// With one cell left the player to move takes it, unless that lowers
    /// their score, in which case they pass. Either way the game ends.
    fn settle_last_cell(&mut self) {
        let passed = match self.board.empty_count() {
            0 => None,
            1 => {
                let player = self.to_move;
                let Some(pos) = self.board.empty_cells().next() else {
                    return;
                };
                let before = exact_score(&self.board, player);
                self.board.place(player, pos);
                if exact_score(&self.board, player) < before {
                    self.board.unplace(player, pos);
                    info!(?player, %pos, "pass on the last cell");
                    Some(player)
                } else {
                    self.history.push(MoveRecord {
                        player,
                        pos,
                        forced: true,
                    });
                    self.to_move = player.other();
                    info!(?player, %pos, "last cell filled");
                    None
                }
            }
            _ => return,
        };

        let outcome = Outcome::from_board(&self.board, passed);
        info!(
            one = outcome.scores[0],
            two = outcome.scores[1],
            winner = ?outcome.winner,
            "game over"
        );
        self.outcome = Some(outcome);
    }

    #[cfg(test)]
    fn with_position(settings: GameSettings, board: Board, to_move: Player) -> Self {
        let mut controller = Self::new(settings);
        controller.board = board;
        controller.to_move = to_move;
        controller
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchType;

    fn settings(mode: GameMode) -> GameSettings {
        GameSettings {
            size: BoardSize::Six,
            mode,
            fixed_depth: Some(1),
            seed: Some(17),
            ..GameSettings::default()
        }
    }

    /// 6x6 position without any run longer than two, except that Two owns
    /// row 0 columns 0..4. Cells (0, 4) and (5, 5) are left empty.
    fn two_cells_left() -> Board {
        let mut board = Board::new(BoardSize::Six);
        for r in 0..6u8 {
            for c in 0..6u8 {
                if (r, c) == (0, 4) || (r, c) == (5, 5) {
                    continue;
                }
                let player = if r == 0 && c < 4 {
                    Player::Two
                } else if ((c + 2 * r) / 2) % 2 == 0 {
                    Player::One
                } else {
                    Player::Two
                };
                board.place(player, Pos::new(r, c));
            }
        }
        board
    }

    #[test]
    fn test_default_settings() {
        let s = GameSettings::default();
        assert_eq!(s.size, BoardSize::Ten);
        assert_eq!(s.mode, GameMode::HumanVsComputer);
        assert_eq!(s.algorithm, Algorithm::AlphaBeta);
        assert_eq!(s.difficulty, Difficulty::Normal);
        assert_eq!(s.weights, EvalWeights::ALL);
        assert_eq!(GameMode::HumanVsComputer.seat(Player::One), Seat::Human);
        assert_eq!(GameMode::HumanVsComputer.seat(Player::Two), Seat::Computer);
    }

    #[test]
    fn test_search_config_from_settings() {
        let mut s = GameSettings::default();
        assert_eq!(s.search_config(100).max_depth, 3);
        s.fixed_depth = Some(2);
        assert_eq!(s.search_config(100).max_depth, 2);
    }

    #[test]
    fn test_human_move_then_computer_turn() {
        let mut game = GameController::new(settings(GameMode::HumanVsComputer));
        assert!(game.is_human_turn());

        game.play(Pos::new(2, 2)).unwrap();
        assert_eq!(game.board().get(Pos::new(2, 2)), Some(Player::One));
        assert_eq!(game.to_move(), Player::Two);
        assert!(game.is_computer_turn());
        assert_eq!(game.play(Pos::new(3, 3)), Err(FreedomError::NotHumanTurn(Player::Two)));

        let result = game.step_computer().unwrap();
        assert_eq!(game.board().get(result.best_move), Some(Player::Two));
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.last_move(), Some(result.best_move));
    }

    #[test]
    fn test_invalid_human_moves() {
        let mut game = GameController::new(settings(GameMode::HumanVsHuman));
        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(
            game.play(Pos::new(0, 0)),
            Err(FreedomError::CellOccupied(Pos::new(0, 0)))
        );
        assert!(matches!(
            game.play(Pos::new(7, 1)),
            Err(FreedomError::OutOfBounds { row: 7, col: 1, size: 6 })
        ));
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.step_computer().err(), Some(FreedomError::NotComputerTurn(Player::Two)));
    }

    #[test]
    fn test_computer_vs_computer_completes() {
        let mut game = GameController::new(settings(GameMode::ComputerVsComputer));
        let moves = game.run_computer_turns().unwrap();

        assert!(game.is_over());
        assert!(game.board().empty_count() <= 1);
        assert_eq!(moves, game.history().iter().filter(|m| !m.forced).count());
        assert_eq!(game.history().len(), 36 - game.board().empty_count());

        let outcome = *game.outcome().unwrap();
        assert_eq!(outcome.scores, final_scores(game.board()));
        assert_eq!(game.step_computer().err(), Some(FreedomError::GameOver));
    }

    #[test]
    fn test_random_game_completes() {
        let mut game = GameController::new(settings(GameMode::ComputerVsComputer));
        game.apply(Command::DisableAllTerms).unwrap();
        game.apply(Command::NewGame(GameMode::ComputerVsComputer)).unwrap();
        game.run_computer_turns().unwrap();
        assert!(game.is_over());
        assert_eq!(game.last_result().unwrap().search_type, SearchType::Random);
    }

    #[test]
    fn test_pass_when_last_cell_lowers_score() {
        let board = two_cells_left();
        assert_eq!(exact_score(&board, Player::Two), 1);
        assert_eq!(exact_score(&board, Player::One), 0);

        let mut game =
            GameController::with_position(settings(GameMode::HumanVsHuman), board, Player::One);
        game.play(Pos::new(5, 5)).unwrap();

        let outcome = *game.outcome().unwrap();
        assert_eq!(outcome.passed, Some(Player::Two));
        assert_eq!(outcome.scores, [0, 1]);
        assert_eq!(outcome.winner, Some(Player::Two));
        assert!(game.board().is_empty(Pos::new(0, 4)));
        assert_eq!(game.board().empty_count(), 1);
        assert_eq!(game.play(Pos::new(0, 4)), Err(FreedomError::GameOver));
    }

    #[test]
    fn test_last_cell_filled_when_harmless() {
        let board = two_cells_left();
        let mut game =
            GameController::with_position(settings(GameMode::HumanVsHuman), board, Player::Two);
        game.play(Pos::new(5, 5)).unwrap();

        let outcome = *game.outcome().unwrap();
        assert_eq!(outcome.passed, None);
        assert_eq!(outcome.winner, Some(Player::Two));
        assert!(game.board().is_full());

        let last = *game.history().last().unwrap();
        assert_eq!(last.player, Player::One);
        assert_eq!(last.pos, Pos::new(0, 4));
        assert!(last.forced);
    }

    #[test]
    fn test_worker_request_and_commit() {
        let mut game = GameController::new(settings(GameMode::HumanVsComputer));
        assert_eq!(
            game.search_request().err(),
            Some(FreedomError::NotComputerTurn(Player::One))
        );
        game.play(Pos::new(1, 1)).unwrap();

        let request = game.search_request().unwrap();
        assert_eq!(request.player, Player::Two);
        let result = std::thread::spawn(move || request.run()).join().unwrap().unwrap();
        let pos = result.best_move;
        game.commit_computer_move(result).unwrap();

        assert_eq!(game.board().get(pos), Some(Player::Two));
        assert!(game.last_result().is_some());
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_commands() {
        let mut game = GameController::new(settings(GameMode::HumanVsHuman));
        game.apply(Command::Play(Pos::new(0, 0))).unwrap();

        game.apply(Command::SetAlgorithm(Algorithm::Minimax)).unwrap();
        game.apply(Command::SetDifficulty(Difficulty::Genius)).unwrap();
        game.apply(Command::ToggleTerm(EvalTerm::OpenThree)).unwrap();
        assert_eq!(game.history().len(), 1, "option changes keep the game");
        assert_eq!(game.settings().algorithm, Algorithm::Minimax);
        assert_eq!(game.settings().difficulty, Difficulty::Genius);
        assert!(!game.settings().weights.open_three);

        game.apply(Command::DisableAllTerms).unwrap();
        assert!(game.settings().weights.is_disabled());
        game.apply(Command::EnableAllTerms).unwrap();
        assert_eq!(game.settings().weights, EvalWeights::ALL);

        game.apply(Command::SetBoardSize(BoardSize::Eight)).unwrap();
        assert_eq!(game.board().dim(), 8);
        assert!(game.history().is_empty());

        game.apply(Command::NewGame(GameMode::ComputerVsComputer)).unwrap();
        assert!(game.is_computer_turn());
        assert_eq!(game.board().empty_count(), 64);
    }
}
