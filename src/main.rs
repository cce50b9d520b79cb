//! Gomoku terminal driver
//!
//! Reads one command per line from stdin and plays a hotseat game on the
//! rule engine. Set `GOMOKU_BOARD_SIZE` to change the board size and
//! `RUST_LOG` to see engine events.

use std::io::{self, BufRead, Write};

use gomoku::{EngineConfig, GameEngine, GameStatus, Player, Pos, Stone};
use tracing::error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  <row> <col>   place a stone (zero-based)
  undo          take back the last move
  restart       new game, scores kept
  hint          suggest a move
  board         print the board
  score         print the scores
  help          show this text
  quit          exit";

enum Command {
    Move(i32, i32),
    Undo,
    Restart,
    Hint,
    Board,
    Score,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let first = parts.next().ok_or_else(|| "empty command".to_string())?;
    let cmd = match first {
        "undo" | "u" => Command::Undo,
        "restart" | "r" => Command::Restart,
        "hint" | "h" => Command::Hint,
        "board" | "b" => Command::Board,
        "score" | "s" => Command::Score,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        row => {
            let col = parts.next().ok_or_else(|| format!("expected '<row> <col>', got '{line}'"))?;
            let row = row.parse().map_err(|_| format!("invalid row '{row}'"))?;
            let col = col.parse().map_err(|_| format!("invalid column '{col}'"))?;
            Command::Move(row, col)
        }
    };
    if parts.next().is_some() {
        return Err(format!("unexpected trailing input in '{line}'"));
    }
    Ok(cmd)
}

fn print_board(engine: &GameEngine) {
    let size = engine.size();
    let hint = engine.hint();
    print!("   ");
    for c in 0..size {
        print!("{:3}", c);
    }
    println!();

    for r in 0..size {
        print!("{:3}", r);
        for c in 0..size {
            let pos = Pos::new(r as u8, c as u8);
            let ch = match engine.board().get(pos) {
                Stone::Black => "  X",
                Stone::White => "  O",
                Stone::Empty if hint == Some(pos) => "  *",
                Stone::Empty => "  .",
            };
            print!("{}", ch);
        }
        println!();
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::Black => "Black (X)",
        Player::White => "White (O)",
    }
}

fn print_status(engine: &GameEngine) {
    match engine.status() {
        GameStatus::InProgress => println!("{} to move", player_name(engine.current_player())),
        GameStatus::Won(player) => println!("{} wins!", player_name(player)),
        GameStatus::Draw => println!("Draw, the board is full"),
    }
}

fn print_scores(engine: &GameEngine) {
    let scores = engine.scores();
    println!("Black {} - {} White", scores.black, scores.white);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    let mut engine = match GameEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "failed to create engine");
            std::process::exit(2);
        }
    };

    println!("Gomoku {0}x{0}. Type 'help' for commands.", engine.size());
    print_board(&engine);
    print_status(&engine);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match cmd {
            Command::Move(row, col) => match engine.apply_move(row, col) {
                Ok(outcome) => {
                    print_board(&engine);
                    print_status(&engine);
                    if outcome.just_won {
                        print_scores(&engine);
                    }
                }
                Err(e) => println!("Invalid move: {e}"),
            },
            Command::Undo => match engine.undo() {
                Some(m) => {
                    println!("Took back {} at {}", player_name(m.player), m.pos());
                    print_board(&engine);
                    print_status(&engine);
                }
                None => println!("Nothing to undo"),
            },
            Command::Restart => {
                engine.restart();
                print_board(&engine);
                print_status(&engine);
            }
            Command::Hint => match engine.compute_hint() {
                Ok(Some(pos)) => {
                    print_board(&engine);
                    println!("Hint: {pos}");
                }
                Ok(None) => println!("No empty cell left"),
                Err(e) => println!("{e}"),
            },
            Command::Board => {
                print_board(&engine);
                print_status(&engine);
            }
            Command::Score => print_scores(&engine),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
}
