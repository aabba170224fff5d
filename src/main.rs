use clap::{Parser, ValueEnum};
use reversi_core::engine::config::EngineConfig;
use reversi_core::engine::random::RandomEngine;
use reversi_core::engine::search::NegamaxEngine;
use reversi_core::engine::{Move, Searcher};
use reversi_core::logic::board::Color;
use reversi_core::logic::game::{GameState, GameStatus};
use reversi_core::logic::rules;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "reversi", about = "Reversi engine with a terminal front end")]
struct Args {
    /// Board size (even, 4 to 12)
    #[arg(long, default_value_t = 6)]
    size: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = 6)]
    depth: u8,

    /// Who plays Black (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = PlayerKind::Engine)]
    white: PlayerKind,

    /// JSON engine configuration; absent fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random player
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Engine,
    Random,
    Human,
}

enum Player {
    Engine(NegamaxEngine),
    Random(RandomEngine),
    Human,
}

impl Player {
    fn build(kind: PlayerKind, config: &Arc<EngineConfig>, seed: u64) -> Self {
        match kind {
            PlayerKind::Engine => Self::Engine(NegamaxEngine::new(config.clone())),
            PlayerKind::Random => Self::Random(RandomEngine::new(seed)),
            PlayerKind::Human => Self::Human,
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.size < 4 || args.size > 12 || args.size % 2 != 0 {
        return Err("board size must be even and between 4 and 12".into());
    }

    let mut config = match &args.config {
        Some(path) => EngineConfig::load_from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::for_board_size(args.size),
    };
    config.search_depth = args.depth;
    let config = Arc::new(config);

    let mut game = GameState::new(args.size);
    config.validate_for(&game.board)?;

    let mut black = Player::build(args.black, &config, args.seed);
    let mut white = Player::build(args.white, &config, args.seed.wrapping_add(1));

    while game.status == GameStatus::Playing {
        println!("{}", game.board);
        let mover = game.turn;
        println!("{} to move", name_of(mover));

        let mv = match current_player(&mut black, &mut white, mover) {
            Player::Human => match read_human_move(&game)? {
                Some(mv) => mv,
                None => {
                    println!("quit");
                    return Ok(());
                }
            },
            Player::Engine(engine) => pick(engine, &game)?,
            Player::Random(engine) => pick(engine, &game)?,
        };

        println!("{} plays {}", name_of(mover), mv);
        game.make_move(mv).map_err(|e| e.to_string())?;

        if game.status == GameStatus::Playing && game.turn == mover {
            println!("{} has no move and passes", name_of(mover.opposite()));
        }
    }

    println!("{}", game.board);
    let black_count = game.board.count(Color::Black);
    let white_count = game.board.count(Color::White);
    println!("final score: Black {black_count} - White {white_count}");
    match game.status {
        GameStatus::Finished(Some(winner)) => println!("{} wins", name_of(winner)),
        GameStatus::Finished(None) => println!("draw"),
        GameStatus::Playing => {}
    }
    Ok(())
}

fn current_player<'a>(black: &'a mut Player, white: &'a mut Player, turn: Color) -> &'a mut Player {
    match turn {
        Color::Black => black,
        Color::White => white,
    }
}

fn pick(searcher: &mut dyn Searcher, game: &GameState) -> Result<Move, Box<dyn Error>> {
    let (mv, stats) = searcher
        .select_move(&game.board, game.turn)?
        .ok_or("searcher found no move in a live position")?;
    tracing::debug!(
        depth = stats.depth,
        nodes = stats.nodes,
        time_ms = stats.time_ms,
        "search finished"
    );
    Ok(mv)
}

/// Prompt until a legal move arrives. `Ok(None)` means end of input.
fn read_human_move(game: &GameState) -> Result<Option<Move>, Box<dyn Error>> {
    let stdin = io::stdin();
    loop {
        print!("enter move as `x y`: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let coords = (
            parts.next().and_then(|t| t.parse::<u8>().ok()),
            parts.next().and_then(|t| t.parse::<u8>().ok()),
        );
        let (Some(x), Some(y)) = coords else {
            println!("could not parse that, try e.g. `2 1`");
            continue;
        };

        let mv = Move::new(x, y);
        match rules::validate_move(&game.board, mv, game.turn) {
            Ok(()) => return Ok(Some(mv)),
            Err(e) => println!("illegal move: {e}"),
        }
    }
}

fn name_of(color: Color) -> &'static str {
    match color {
        Color::Black => "Black (X)",
        Color::White => "White (O)",
    }
}
