use std::boxed::Box;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Point};
use crate::fleet::Fleet;
use crate::ship::Orientation;
use crate::ui::LineInput;

use super::Player;

/// Player driven by typed input. Malformed lines are re-prompted; running
/// out of input abandons placement or concedes the game.
pub struct HumanPlayer<'a> {
    name: String,
    fleet: &'a Fleet,
    input: LineInput<'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> HumanPlayer<'a> {
    pub fn new(
        name: &str,
        fleet: &'a Fleet,
        input: impl BufRead + 'a,
        output: impl Write + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            fleet,
            input: LineInput::reader(input),
            output: Box::new(output),
        }
    }

    /// Human on the process's stdin and stdout.
    pub fn stdio(name: &str, fleet: &'a Fleet) -> Self {
        Self {
            name: name.into(),
            fleet,
            input: LineInput::Stdin(io::stdin()),
            output: Box::new(io::stdout()),
        }
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn read_orientation(&mut self, ship: &str, length: i32) -> Option<Orientation> {
        let question = std::format!("Enter h or v for direction of {} (length {}): ", ship, length);
        loop {
            match self.prompt(&question)?.trim() {
                "h" => return Some(Orientation::Horizontal),
                "v" => return Some(Orientation::Vertical),
                _ => self.say("Direction must be h or v."),
            }
        }
    }

    fn read_point(&mut self, question: &str) -> Option<Point> {
        loop {
            let line = self.prompt(question)?;
            match parse_point(&line) {
                Some(p) => return Some(p),
                None => self.say("You must enter two integers."),
            }
        }
    }
}

/// Parse "row col" into a point.
fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Point::new(row, col))
}

impl Player for HumanPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), BoardError> {
        let fleet = self.fleet;
        let intro = std::format!("{} must place {} ships.", self.name, fleet.len());
        self.say(&intro);
        for (id, def) in fleet.iter() {
            let view = std::format!("{}", board.render(false));
            let _ = write!(self.output, "{}", view);
            let orientation = self
                .read_orientation(def.name(), def.length())
                .ok_or(BoardError::PlacementExhausted)?;
            let question = match orientation {
                Orientation::Horizontal => "Enter row and column of leftmost cell (e.g. 3 5): ",
                Orientation::Vertical => "Enter row and column of topmost cell (e.g. 3 5): ",
            };
            loop {
                let origin = self
                    .read_point(question)
                    .ok_or(BoardError::PlacementExhausted)?;
                match board.place_ship(origin, id, orientation) {
                    Ok(()) => break,
                    Err(e) => {
                        log::debug!("rejected placement for {}: {}", self.name, e);
                        self.say("The ship can not be placed there.");
                    }
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Option<Point> {
        self.read_point("Enter the row and column to attack (e.g. 3 5): ")
    }
}
