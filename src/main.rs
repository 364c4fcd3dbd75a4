use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{error, info};

use pseudo_chess::chess_errors::ChessResult;
use pseudo_chess::game_state::chess_types::{Color, Square};
use pseudo_chess::game_state::game_state::GameState;
use pseudo_chess::move_generation::move_generator::MoveSet;
use pseudo_chess::move_generation::perft::perft_counts;
use pseudo_chess::session::play_session::{PlaySession, SelectionOutcome};
use pseudo_chess::session::session_config::{OpponentMode, SessionConfig};
use pseudo_chess::utils::algebraic::algebraic_to_square;
use pseudo_chess::utils::move_list::{captured_pieces, format_move, move_list_text, write_move_log};
use pseudo_chess::utils::render_game_state::render_board;

const HELP: &str = "commands: show | select <sq> | moves <sq> | move <from> <to> | undo | reset \
| history | captured | fen | setfen <fen> | log | perft <depth> | set <name> <value> | help | quit";

fn main() {
    env_logger::init();

    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}; falling back to defaults");
            SessionConfig::default()
        }
    };
    info!("starting session with {config:?}");
    let mut session = PlaySession::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{HELP}");
    print_board(&session, &MoveSet::new());

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        if let Err(e) = handle_command(&mut session, trimmed) {
            println!("error: {e}");
        }
        stdout.flush().ok();
    }
}

fn handle_command(session: &mut PlaySession, line: &str) -> ChessResult<()> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let now = Instant::now();

    match (command, args.as_slice()) {
        ("help", _) => println!("{HELP}"),
        ("show", _) => print_board(session, session.highlights()),
        ("select", [square]) => {
            let outcome = session.select(algebraic_to_square(square)?, now)?;
            report(session, &outcome);
            run_opponent(session)?;
        }
        ("moves", [square]) => {
            let origin = algebraic_to_square(square)?;
            let destinations = session.game().moves_from(origin);
            println!("{}", join_squares(&destinations));
            print_board(session, &destinations);
        }
        ("move", [from, to]) => {
            let from = algebraic_to_square(from)?;
            let to = algebraic_to_square(to)?;
            let outcome = session.play(from, to, now)?;
            report(session, &outcome);
            run_opponent(session)?;
        }
        ("undo", _) => match session.undo(now) {
            Some(record) => {
                println!("undid {}", format_move(&record));
                print_board(session, &MoveSet::new());
            }
            None => println!("nothing undone"),
        },
        ("reset", _) => {
            session.reset();
            print_board(session, &MoveSet::new());
        }
        ("history", _) => println!("{}", move_list_text(session.game().history())),
        ("captured", _) => {
            let history = session.game().history();
            for color in [Color::White, Color::Black] {
                let pieces: String = captured_pieces(history, color)
                    .into_iter()
                    .map(|p| p.fen_char())
                    .collect();
                println!("{color} lost: {pieces}");
            }
        }
        ("fen", _) => println!("{}", session.game().get_fen()),
        ("setfen", fields) if !fields.is_empty() => {
            session.load(GameState::from_fen(&fields.join(" "))?);
            print_board(session, &MoveSet::new());
        }
        ("log", _) => print!("{}", write_move_log(session.game().history(), "*")),
        ("perft", [depth]) => {
            let Ok(depth) = depth.parse::<u8>() else {
                println!("perft depth must be a small number");
                return Ok(());
            };
            let mut game = session.game().clone();
            let started = Instant::now();
            let counts = perft_counts(&mut game, depth)?;
            println!(
                "perft {depth}: nodes {} captures {} promotions {} ({} ms)",
                counts.nodes,
                counts.captures,
                counts.promotions,
                started.elapsed().as_millis()
            );
        }
        ("set", [name, value]) => session.set_option(name, value)?,
        _ => println!("unrecognized command: {line}\n{HELP}"),
    }

    Ok(())
}

fn report(session: &PlaySession, outcome: &SelectionOutcome) {
    match outcome {
        SelectionOutcome::Selected {
            origin,
            destinations,
        } => {
            println!("selected {origin}: {}", join_squares(destinations));
            print_board(session, destinations);
        }
        SelectionOutcome::Deselected => println!("selection cleared"),
        SelectionOutcome::Moved(record) => {
            println!("played {}", format_move(record));
            print_board(session, &MoveSet::new());
        }
        SelectionOutcome::Ignored(reason) => println!("ignored: {reason}"),
    }
}

/// Give the engine its move once the cooldown has run out.
fn run_opponent(session: &mut PlaySession) -> ChessResult<()> {
    if session.config().opponent == OpponentMode::Human {
        return Ok(());
    }
    if session.is_locked(Instant::now()) {
        std::thread::sleep(session.config().cooldown);
    }
    if let Some(record) = session.play_opponent(Instant::now())? {
        println!("opponent played {}", format_move(&record));
        print_board(session, &MoveSet::new());
    }
    Ok(())
}

fn print_board(session: &PlaySession, highlights: &MoveSet) {
    println!(
        "{}",
        render_board(session.game().board(), highlights, session.config().unicode)
    );
    println!("{} to move", session.game().turn());
}

fn join_squares(squares: &MoveSet) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
