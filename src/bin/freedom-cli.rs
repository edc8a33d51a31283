//! Headless Freedom match runner: computer plays computer and the results
//! are printed.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use freedom::eval::EvalWeights;
use freedom::search::{Algorithm, Difficulty};
use freedom::{BoardSize, Command, GameController, GameMode, GameSettings, Player};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Minimax,
    AlphaBeta,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DifficultyArg {
    Easy,
    Normal,
    Genius,
}

#[derive(Parser, Debug)]
#[command(name = "freedom-cli", version, about = "Play Freedom games between two computer players")]
struct Cli {
    /// Board side length (6, 8 or 10)
    #[arg(short = 's', long, default_value = "10", value_parser = parse_size)]
    size: BoardSize,
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    games: u32,
    #[arg(short = 'a', long, value_enum, default_value_t = AlgorithmArg::AlphaBeta)]
    algorithm: AlgorithmArg,
    #[arg(short = 'd', long, value_enum, default_value_t = DifficultyArg::Normal)]
    difficulty: DifficultyArg,
    /// Search this many plies on every move instead of the empty-cell policy
    #[arg(long, value_name = "PLIES")]
    depth: Option<u8>,
    /// Leave live fours out of the evaluation
    #[arg(long)]
    no_exact_score: bool,
    /// Leave open threes out of the evaluation
    #[arg(long)]
    no_open_three: bool,
    /// Leave latent fours out of the evaluation
    #[arg(long)]
    no_latent_four: bool,
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Only print the summary
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn parse_size(s: &str) -> Result<BoardSize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    BoardSize::try_from(n).map_err(|e| e.to_string())
}

impl Cli {
    fn settings(&self) -> GameSettings {
        GameSettings {
            size: self.size,
            mode: GameMode::ComputerVsComputer,
            algorithm: match self.algorithm {
                AlgorithmArg::Minimax => Algorithm::Minimax,
                AlgorithmArg::AlphaBeta => Algorithm::AlphaBeta,
            },
            difficulty: match self.difficulty {
                DifficultyArg::Easy => Difficulty::Easy,
                DifficultyArg::Normal => Difficulty::Normal,
                DifficultyArg::Genius => Difficulty::Genius,
            },
            weights: EvalWeights {
                exact_score: !self.no_exact_score,
                open_three: !self.no_open_three,
                latent_four: !self.no_latent_four,
            },
            fixed_depth: self.depth,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut game = GameController::new(cli.settings());
    // wins for One, Two, then draws
    let mut tally = [0u32; 3];

    for n in 1..=cli.games {
        if n > 1 {
            game.apply(Command::NewGame(GameMode::ComputerVsComputer))?;
        }
        let moves = game.run_computer_turns()?;
        let outcome = *game.outcome().ok_or("game stopped before it was decided")?;

        if !cli.quiet {
            println!("{}", game.board());
        }
        let result = match outcome.winner {
            Some(Player::One) => {
                tally[0] += 1;
                "white wins"
            }
            Some(Player::Two) => {
                tally[1] += 1;
                "black wins"
            }
            None => {
                tally[2] += 1;
                "draw"
            }
        };
        let pass = match outcome.passed {
            Some(player) => format!(", {player:?} passed"),
            None => String::new(),
        };
        println!(
            "Game {n}: white {} - {} black, {result} ({moves} moves{pass})",
            outcome.score(Player::One),
            outcome.score(Player::Two),
        );
    }

    info!(games = cli.games, "match finished");
    println!(
        "White {} / Black {} / Draws {}",
        tally[0], tally[1], tally[2]
    );
    Ok(())
}
