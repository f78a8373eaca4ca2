// Simple command-line application to play chess until a king falls

use regicide::{Color, Game, PrettyStyle, StandardLayout};
use std::io::{self, BufRead, Write};

fn side_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new();
    game.start(&StandardLayout).unwrap();

    loop {
        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        let scores = game.status();
        println!("score: {}", scores);

        print!("{} move (e.g. `e2 e4`): ", side_name(game.turn()));
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }

        // Any failure is reported and the same side is prompted again.
        if let Err(e) = game.make_move_line(s.trim()) {
            println!("Bad move: {}", e);
            println!();
            continue;
        }
        println!();

        if game.is_finished() {
            println!("{}", game.board().pretty(PrettyStyle::Ascii));
            println!("{} wins by capturing the king!", side_name(game.winner().unwrap()));
            break;
        }
    }
}
