//! Terminal front end for the Gomoku minimax engine
//!
//! ## Usage
//!
//! - `gomoku` - Play against the engine in the terminal
//! - `gomoku play --engine-first` - Let the engine open the game
//! - `gomoku demo` - Watch the engine play both sides

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gomoku::{check_winner, Board, Engine, Pos, Stone, BOARD_SIZE, DEFAULT_DEPTH_LIMIT};

/// Gomoku: a five-in-a-row engine over a cached minimax game tree
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// Search horizon in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
        depth: u32,
        /// Let the engine make the opening move
        #[arg(long)]
        engine_first: bool,
    },
    /// Watch the engine play both sides
    Demo {
        /// Search horizon in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
        depth: u32,
        /// Stop after this many moves if nobody has won
        #[arg(long, default_value_t = 60)]
        moves: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { depth, moves }) => run_demo(depth, moves),
        Some(Commands::Play {
            depth,
            engine_first,
        }) => run_play(depth, engine_first),
        None => run_play(DEFAULT_DEPTH_LIMIT, false),
    }
}

fn run_play(depth: u32, engine_first: bool) -> Result<()> {
    let mut engine = Engine::new(depth);
    let mut board = Board::new();
    let (human_stone, engine_stone) = if engine_first {
        (Stone::White, Stone::Black)
    } else {
        (Stone::Black, Stone::White)
    };

    println!("Gomoku {}x{} - you are {}", BOARD_SIZE, BOARD_SIZE, stone_name(human_stone));
    println!("Enter moves as: row col (0-{})", BOARD_SIZE - 1);

    if engine_first {
        let pos = engine
            .respond(None)
            .context("engine failed to open the game")?;
        board.set(pos, engine_stone);
        println!("engine plays {}", pos);
    }

    let stdin = io::stdin();
    loop {
        render(&board);
        let human = read_move(&stdin, &board)?;
        board.set(human, human_stone);

        if let Some(winner) = check_winner(&board) {
            render(&board);
            println!("{} wins!", stone_name(winner));
            return Ok(());
        }

        match engine.respond(Some(human)) {
            Ok(reply) => {
                board.set(reply, engine_stone);
                println!("engine plays {}", reply);
            }
            Err(gomoku::Error::GameOver) => {
                render(&board);
                println!("draw - no moves left");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(winner) = check_winner(&board) {
            render(&board);
            println!("{} wins!", stone_name(winner));
            return Ok(());
        }
    }
}

fn run_demo(depth: u32, max_moves: u32) -> Result<()> {
    let mut black = Engine::new(depth);
    let mut white = Engine::new(depth);
    let mut board = Board::new();

    let mut last = black.respond(None).context("opening move failed")?;
    board.set(last, Stone::Black);
    println!("Black plays {}", last);

    for move_no in 1..max_moves {
        let (engine, stone) = if move_no % 2 == 1 {
            (&mut white, Stone::White)
        } else {
            (&mut black, Stone::Black)
        };

        last = match engine.respond(Some(last)) {
            Ok(pos) => pos,
            Err(gomoku::Error::GameOver) => {
                println!("draw - no moves left");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        board.set(last, stone);
        println!("{} plays {}", stone_name(stone), last);

        if let Some(winner) = check_winner(&board) {
            render(&board);
            println!("{} wins after {} moves", stone_name(winner), move_no + 1);
            return Ok(());
        }
    }

    render(&board);
    println!("no winner within {} moves", max_moves);
    Ok(())
}

/// Prompt until the user enters a legal move.
fn read_move(stdin: &io::Stdin, board: &Board) -> Result<Pos> {
    loop {
        print!("your move> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let n = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        anyhow::ensure!(n > 0, "input closed");

        match parse_move(&line) {
            Ok(pos) if board.is_empty(pos) => return Ok(pos),
            Ok(pos) => println!("{} is already occupied", pos),
            Err(e) => println!("{}", e),
        }
    }
}

fn parse_move(line: &str) -> Result<Pos> {
    let mut parts = line.split_whitespace();
    let row: usize = parts
        .next()
        .context("expected: row col")?
        .parse()
        .context("row is not a number")?;
    let col: usize = parts
        .next()
        .context("expected: row col")?
        .parse()
        .context("col is not a number")?;
    anyhow::ensure!(
        row < BOARD_SIZE && col < BOARD_SIZE,
        "coordinates must be 0-{}",
        BOARD_SIZE - 1
    );
    Ok(Pos::new(row as u8, col as u8))
}

fn render(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{:>2}", col % 10);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:>2} ", row);
        for col in 0..BOARD_SIZE {
            let ch = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Black => 'X',
                Stone::White => 'O',
                Stone::Empty => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "nobody",
    }
}
