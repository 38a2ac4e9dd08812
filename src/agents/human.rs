//! Terminal player
//!
//! Prompts for moves on an output stream and reads them from an input
//! stream, so tests can script a game with in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chess_engine::api::is_legal_move;
use chess_engine::{Color, Move, Position, Square};
use tracing::warn;

use super::ChessAgent;

/// Reads moves as coordinate pairs, one per line
///
/// Accepts `e2 e4`, `e2e4` or `e2-e4`. Unreadable or illegal input is
/// reported and asked for again; end of input or `quit` gives up the game.
pub struct HumanPlayer<R = StdinLock<'static>, W = Stdout> {
    color: Color,
    input: R,
    output: W,
}

impl HumanPlayer {
    /// Player at the terminal
    pub fn stdin(color: Color) -> Self {
        Self::new(color, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    fn read_move(&mut self, position: &Position) -> io::Result<Option<Move>> {
        let mut scratch = position.deep_copy();
        writeln!(self.output, "{position}")?;

        loop {
            write!(self.output, "{} to move (e.g. e2 e4, or quit): ", self.color)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            let Some(mv) = parse_move(line) else {
                writeln!(self.output, "Could not read {line:?}, expected two squares like e2 e4")?;
                continue;
            };
            if scratch.color_at(mv.from) != Some(self.color) {
                writeln!(self.output, "No {} piece on {}", self.color, mv.from)?;
                continue;
            }
            if !is_legal_move(&mut scratch, mv.from, mv.to) {
                writeln!(self.output, "Invalid move {mv}")?;
                continue;
            }
            return Ok(Some(mv));
        }
    }
}

impl<R: BufRead, W: Write> ChessAgent for HumanPlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, position: &Position) -> Option<Move> {
        match self.read_move(position) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("[MATCH] {} input failed: {}", self.color, e);
                None
            }
        }
    }
}

fn parse_move(text: &str) -> Option<Move> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect();

    let (from, to) = match parts.as_slice() {
        [from, to] => (*from, *to),
        [both] if both.len() == 4 && both.is_ascii() => both.split_at(2),
        _ => return None,
    };
    Some(Move::new(Square::from_coord(from)?, Square::from_coord(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new(Color::White, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_move_formats() {
        let expected = Some(Move::new(sq("e2"), sq("e4")));
        assert_eq!(parse_move("e2 e4"), expected);
        assert_eq!(parse_move("e2e4"), expected);
        assert_eq!(parse_move("e2-e4"), expected);
        assert_eq!(parse_move("e2"), None);
        assert_eq!(parse_move("e9 e4"), None);
    }

    #[test]
    fn test_reads_a_legal_move() {
        let mut human = player("g1 f3\n");
        let mv = human.choose_action(&Position::standard());
        assert_eq!(mv, Some(Move::new(sq("g1"), sq("f3"))));
    }

    #[test]
    fn test_asks_again_after_bad_input() {
        let mut human = player("hello\ne7 e5\ne2 e5\nd2 d4\n");
        let mv = human.choose_action(&Position::standard());
        assert_eq!(mv, Some(Move::new(sq("d2"), sq("d4"))));

        let transcript = String::from_utf8(human.output.clone()).unwrap();
        assert!(transcript.contains("Could not read"));
        assert!(transcript.contains("No white piece on e7"));
        assert!(transcript.contains("Invalid move e2e5"));
    }

    #[test]
    fn test_quit_and_end_of_input_stop() {
        assert_eq!(player("quit\n").choose_action(&Position::standard()), None);
        assert_eq!(player("").choose_action(&Position::standard()), None);
    }
}
