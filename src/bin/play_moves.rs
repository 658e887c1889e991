use std::env;
use std::str::FromStr;

use chess_rules::{Game, MoveOutcome, Piece, Square};

/// Parse a coordinate move like "e2e4" or "a7a8q".
fn parse_move(text: &str) -> Option<(Square, Square, Option<Piece>)> {
    if text.len() != 4 && text.len() != 5 {
        return None;
    }
    let from = Square::from_str(text.get(0..2)?).ok()?;
    let to = Square::from_str(text.get(2..4)?).ok()?;
    let promotion = match text.chars().nth(4) {
        Some(c) => Some(Piece::from_char(c)?),
        None => None,
    };
    Some((from, to, promotion))
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: play_moves <move1> <move2> ...");
        eprintln!("       moves in coordinate form, e.g. e2e4 e7e5 a7a8q");
        return;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let Some((from, to, promotion)) = parse_move(text) else {
            eprintln!("unparseable move: {text}");
            return;
        };
        match game.try_move(from, to, promotion) {
            Ok(MoveOutcome::Applied(_)) => {}
            Ok(MoveOutcome::Rejected) => {
                eprintln!("illegal move: {text}");
                return;
            }
            Err(err) => {
                eprintln!("board corrupted: {err}");
                return;
            }
        }
    }

    println!("{}", game.board());
    println!("side_to_move: {}", game.turn());
    match game.status() {
        Ok(status) => println!("status: {status}"),
        Err(err) => eprintln!("board corrupted: {err}"),
    }
}
