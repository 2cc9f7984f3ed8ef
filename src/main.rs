//! Gomoku engine CLI
//!
//! Runs a fixed list of scenarios against the engine and reports PASS/FAIL
//! for each. Exits non-zero if any scenario fails.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};

use gomoku::{
    is_win, print_board, score, Board, BoardError, Engine, EngineConfig, Outcome, Pos, Stone,
    MAX_BOARD_SIZE,
};

/// Smallest board every scenario fits on
const MIN_SCENARIO_SIZE: usize = 6;

#[derive(Parser)]
#[command(name = "gomoku", about = "Run the Gomoku engine scenarios")]
struct Args {
    /// Board size used by every scenario
    #[arg(long, default_value_t = gomoku::DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Print each scenario's board
    #[arg(long)]
    print: bool,
}

struct Check {
    board: Board,
    passed: bool,
    detail: String,
}

struct Scenario {
    name: &'static str,
    run: fn(usize) -> Result<Check, Box<dyn Error>>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.log_level.parse::<Level>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("unknown log level: {}", args.log_level);
            return ExitCode::from(2);
        }
    };
    init_logging(level, args.json);

    if !(MIN_SCENARIO_SIZE..=MAX_BOARD_SIZE).contains(&args.size) {
        error!(
            size = args.size,
            "board size must be between {} and {}", MIN_SCENARIO_SIZE, MAX_BOARD_SIZE
        );
        return ExitCode::from(2);
    }

    let scenarios = vec![
        Scenario {
            name: "black completes diagonal",
            run: black_completes_diagonal,
        },
        Scenario {
            name: "white completes column",
            run: white_completes_column,
        },
        Scenario {
            name: "black blocks open four",
            run: black_blocks_open_four,
        },
        Scenario {
            name: "black blocks semi-open four",
            run: black_blocks_semi_open_four,
        },
        Scenario {
            name: "one empty cell",
            run: one_empty_cell,
        },
        Scenario {
            name: "full board",
            run: full_board,
        },
        Scenario {
            name: "empty board",
            run: empty_board,
        },
        Scenario {
            name: "color swap negates score",
            run: color_swap_negates,
        },
    ];

    let failures = run_scenarios(&scenarios, args.size, args.print);

    println!();
    if failures == 0 {
        println!("All {} scenarios passed", scenarios.len());
        ExitCode::SUCCESS
    } else {
        println!("{} of {} scenarios failed", failures, scenarios.len());
        ExitCode::FAILURE
    }
}

fn init_logging(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Run every scenario in order and return the number that failed.
fn run_scenarios(scenarios: &[Scenario], size: usize, print: bool) -> usize {
    let mut failures = 0;

    for scenario in scenarios {
        match (scenario.run)(size) {
            Ok(check) => {
                let status = if check.passed { "PASS" } else { "FAIL" };
                println!("{}: {} ({})", status, scenario.name, check.detail);
                if print {
                    print!("{}", print_board(&check.board));
                }
                if !check.passed {
                    failures += 1;
                }
            }
            Err(e) => {
                println!("FAIL: {} ({})", scenario.name, e);
                failures += 1;
            }
        }
    }

    failures
}

/// Board filled with no run longer than two on any axis.
fn drawn_board(size: usize) -> Result<Board, BoardError> {
    let mut board = Board::new(size)?;
    for row in 0..size {
        for col in 0..size {
            let stone = if ((col + 2 * (row % 2)) / 2) % 2 == 0 {
                Stone::Black
            } else {
                Stone::White
            };
            board.set(Pos::new(row, col), stone)?;
        }
    }
    Ok(board)
}

fn expect_move(board: Board, got: Option<Pos>, accepted: &[Option<Pos>]) -> Check {
    let detail = match got {
        Some(pos) => format!("played {}", pos),
        None => "no move".to_string(),
    };
    Check {
        passed: accepted.contains(&got),
        board,
        detail,
    }
}

fn black_completes_diagonal(size: usize) -> Result<Check, Box<dyn Error>> {
    let mut board = Board::new(size)?;
    board.put_seq(Pos::new(0, 0), 1, 1, 4, Stone::Black)?;

    let got = Engine::new().get_move(&board);
    if let Some(pos) = got {
        board.place_stone(pos, Stone::Black);
    }
    let mut check = expect_move(board, got, &[Some(Pos::new(4, 4))]);
    check.passed &= is_win(&check.board) == Outcome::BlackWon;
    Ok(check)
}

fn white_completes_column(size: usize) -> Result<Check, Box<dyn Error>> {
    let col = size - 1;
    let mut board = Board::new(size)?;
    board.put_seq(Pos::new(1, col), 1, 0, 4, Stone::White)?;
    board.put_seq(Pos::new(0, 0), 0, 1, 3, Stone::Black)?;

    let engine = Engine::with_config(EngineConfig {
        color: Stone::White,
        ..EngineConfig::default()
    })?;
    let got = engine.get_move(&board);
    Ok(expect_move(
        board,
        got,
        &[Some(Pos::new(0, col)), Some(Pos::new(5, col))],
    ))
}

fn black_blocks_open_four(size: usize) -> Result<Check, Box<dyn Error>> {
    let mut board = Board::new(size)?;
    board.put_seq(Pos::new(3, 1), 0, 1, 4, Stone::White)?;

    let got = Engine::new().get_move(&board);
    Ok(expect_move(board, got, &[Some(Pos::new(3, 0)), Some(Pos::new(3, 5))]))
}

fn black_blocks_semi_open_four(size: usize) -> Result<Check, Box<dyn Error>> {
    let mut board = Board::new(size)?;
    board.put_seq(Pos::new(0, 0), 0, 1, 4, Stone::White)?;
    board.put_seq(Pos::new(4, 2), 0, 1, 3, Stone::Black)?;

    let got = Engine::new().get_move(&board);
    Ok(expect_move(board, got, &[Some(Pos::new(0, 4))]))
}

fn one_empty_cell(size: usize) -> Result<Check, Box<dyn Error>> {
    let hole = Pos::new(size / 2, size / 2);
    let mut board = drawn_board(size)?;
    board.set(hole, Stone::Empty)?;

    let got = Engine::new().get_move(&board);
    Ok(expect_move(board, got, &[Some(hole)]))
}

fn full_board(size: usize) -> Result<Check, Box<dyn Error>> {
    let board = drawn_board(size)?;
    let got = Engine::new().get_move(&board);
    let mut check = expect_move(board, got, &[None]);
    check.passed &= is_win(&check.board) == Outcome::Draw;
    Ok(check)
}

fn empty_board(size: usize) -> Result<Check, Box<dyn Error>> {
    let board = Board::new(size)?;
    let got = Engine::new().get_move(&board);
    Ok(expect_move(board, got, &[Some(Pos::new(0, 0))]))
}

fn color_swap_negates(size: usize) -> Result<Check, Box<dyn Error>> {
    let mut board = Board::new(size)?;
    board.put_seq(Pos::new(1, 1), 0, 1, 3, Stone::Black)?;
    board.put_seq(Pos::new(2, 3), 1, 1, 2, Stone::White)?;
    board.set(Pos::new(1, 0), Stone::White)?;

    let before = score(&board);
    let after = score(&board.swap_colors());
    Ok(Check {
        passed: before == -after,
        detail: format!("score {} vs swapped {}", before, after),
        board,
    })
}
