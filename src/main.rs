//! Chinese Checkers command-line front end
//!
//! Self-play between two engines, one-off move suggestions for a saved
//! position, and legal-destination listings.

use std::error::Error;
use std::fs;
use std::path::{Path as FsPath, PathBuf};
use std::process::ExitCode;

use chinese_checkers::rules::{valid_destinations, valid_paths, HeuristicKind};
use chinese_checkers::{
    Board, ComputerPlayer, EngineConfig, Game, GameOutcome, Occupancy, ScoringScheme, Side,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

#[derive(Debug, Parser)]
#[command(name = "chinese-checkers", about = "Two-player Chinese Checkers engine")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Let two engines play each other from the starting position
    Selfplay {
        /// Search depth for both sides
        #[arg(long, default_value_t = 4)]
        depth: u8,
        /// Score table used at the leaves
        #[arg(long, value_enum, default_value_t = SchemeArg::Distance)]
        scheme: SchemeArg,
        /// Stop after this many turns
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
    },
    /// Suggest a path for one side in a saved position
    Suggest {
        /// JSON file holding 17 rows of "O", "X" or "." cells
        #[arg(long)]
        board: PathBuf,
        /// Side to move
        #[arg(long, value_enum)]
        side: SideArg,
        #[arg(long, default_value_t = 4)]
        depth: u8,
        #[arg(long, value_enum, default_value_t = SchemeArg::Distance)]
        scheme: SchemeArg,
    },
    /// List where the piece on a cell can go
    Moves {
        #[arg(long)]
        row: usize,
        #[arg(long)]
        col: usize,
        /// Position to inspect (starting position if omitted)
        #[arg(long)]
        board: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Distance,
    Positional,
}

impl From<SchemeArg> for ScoringScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Distance => ScoringScheme::Distance,
            SchemeArg::Positional => ScoringScheme::Positional,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Player1,
    Player2,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Player1 => Side::Player1,
            SideArg::Player2 => Side::Player2,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Cmd) -> Result<(), Box<dyn Error>> {
    match cmd {
        Cmd::Selfplay {
            depth,
            scheme,
            max_turns,
        } => selfplay(depth, scheme.into(), max_turns),
        Cmd::Suggest {
            board,
            side,
            depth,
            scheme,
        } => suggest(&board, side.into(), depth, scheme.into()),
        Cmd::Moves { row, col, board } => list_moves(row, col, board.as_deref()),
    }
}

fn selfplay(depth: u8, scheme: ScoringScheme, max_turns: usize) -> Result<(), Box<dyn Error>> {
    let config = EngineConfig {
        depth,
        scheme,
        ..EngineConfig::default()
    };
    let mut game = Game::new(
        ComputerPlayer::with_config(Side::Player1, config)?,
        ComputerPlayer::with_config(Side::Player2, config)?,
        max_turns,
    );

    let outcome = game.run()?;
    println!("{}", game.board());
    match outcome {
        GameOutcome::Won(side) => info!("{side:?} wins after {} turns", game.history().len()),
        GameOutcome::NoMove(side) => info!("{side:?} has no move, game stopped"),
        GameOutcome::Declined(side) => info!("{side:?} declined to move, game stopped"),
        GameOutcome::TurnLimit => info!("turn limit of {max_turns} reached"),
    }
    Ok(())
}

fn suggest(
    path: &FsPath,
    side: Side,
    depth: u8,
    scheme: ScoringScheme,
) -> Result<(), Box<dyn Error>> {
    let mut board = load_board(path)?;
    let config = EngineConfig {
        depth,
        scheme,
        ..EngineConfig::default()
    };
    let player = ComputerPlayer::with_config(side, config)?;

    let result = player.get_move_with_stats(&mut board);
    match result.best_path {
        Some(best) => println!("{best}"),
        None => println!("no move"),
    }
    info!(
        "score {}, {} nodes in {}ms",
        result.score, result.nodes, result.time_ms
    );
    Ok(())
}

fn list_moves(row: usize, col: usize, path: Option<&FsPath>) -> Result<(), Box<dyn Error>> {
    let board = match path {
        Some(path) => load_board(path)?,
        None => Board::new(),
    };
    let cell = board.cell_at(row, col)?;
    let Some(side) = board.owner(cell) else {
        println!("({row},{col}) is empty");
        return Ok(());
    };

    for dest in valid_destinations(&board, cell) {
        println!("({},{})", dest.row(), dest.col());
    }
    let paths = valid_paths(&board, cell, &HeuristicKind::AcceptAll);
    info!("{side:?} piece at ({row},{col}): {} path(s)", paths.len());
    Ok(())
}

fn load_board(path: &FsPath) -> Result<Board, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<Vec<Occupancy>> = serde_json::from_str(&text)?;
    let mut board = Board::empty();
    board.load_occupancy(&rows)?;
    Ok(board)
}
