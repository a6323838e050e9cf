#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{AttackResult, BoardError, Point},
    game::GameObserver,
    player::Player,
};

/// Where typed lines come from. Stdin is locked only for the duration of
/// each read, so a human player and the console observer can both own one.
pub(crate) enum LineInput<'a> {
    Stdin(io::Stdin),
    Reader(Box<dyn BufRead + 'a>),
}

impl<'a> LineInput<'a> {
    pub(crate) fn reader(reader: impl BufRead + 'a) -> Self {
        LineInput::Reader(Box::new(reader))
    }

    /// Read one line into `buf`; `Ok(0)` at end of input.
    pub(crate) fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self {
            LineInput::Stdin(stdin) => stdin.read_line(buf),
            LineInput::Reader(reader) => reader.read_line(buf),
        }
    }
}

/// Narrates a game as text: the defender's board before and after every
/// shot, the result of each shot, and the winner. With `pause` set it waits
/// for Enter between half-turns.
pub struct ConsoleObserver<'a> {
    input: LineInput<'a>,
    output: Box<dyn Write + 'a>,
    pause: bool,
}

impl<'a> ConsoleObserver<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a, pause: bool) -> Self {
        Self {
            input: LineInput::reader(input),
            output: Box::new(output),
            pause,
        }
    }

    /// Observer on the process's stdin and stdout.
    pub fn stdio(pause: bool) -> Self {
        Self {
            input: LineInput::Stdin(io::stdin()),
            output: Box::new(io::stdout()),
            pause,
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn show(&mut self, board: &Board<'_>, shots_only: bool) {
        let _ = write!(self.output, "{}", board.render(shots_only));
    }

    fn wait_for_enter(&mut self) {
        let _ = write!(self.output, "Press enter to continue: ");
        let _ = self.output.flush();
        let mut discard = String::new();
        let _ = self.input.read_line(&mut discard);
    }
}

/// One-line description of a resolved shot.
pub fn describe_attack(
    attacker: &str,
    point: Point,
    outcome: &Result<AttackResult, BoardError>,
    board: &Board<'_>,
) -> String {
    match outcome {
        Err(_) => std::format!("{} wasted a shot at {}.", attacker, point),
        Ok(AttackResult::Sunk(id)) => {
            let ship = board.fleet().get(*id).map_or("ship", |def| def.name());
            std::format!(
                "{} attacked {} and destroyed the {}, resulting in:",
                attacker, point, ship
            )
        }
        Ok(AttackResult::Hit(_)) => std::format!(
            "{} attacked {} and hit something, resulting in:",
            attacker, point
        ),
        Ok(AttackResult::Miss) => {
            std::format!("{} attacked {} and missed, resulting in:", attacker, point)
        }
    }
}

impl GameObserver for ConsoleObserver<'_> {
    fn turn_started(&mut self, attacker: &dyn Player, defender: &dyn Player, board: &Board<'_>) {
        let heading = std::format!("{}'s turn. Board for {}:", attacker.name(), defender.name());
        self.line(&heading);
        self.show(board, attacker.is_human());
    }

    fn attack_resolved(
        &mut self,
        attacker: &dyn Player,
        point: Point,
        outcome: &Result<AttackResult, BoardError>,
        board: &Board<'_>,
    ) {
        let text = describe_attack(attacker.name(), point, outcome, board);
        self.line(&text);
        self.show(board, attacker.is_human());
        if self.pause && !board.all_ships_destroyed() {
            self.wait_for_enter();
        }
    }

    fn forfeited(&mut self, attacker: &dyn Player) {
        let text = std::format!("{} has no shots left and forfeits.", attacker.name());
        self.line(&text);
    }

    fn game_over(&mut self, winner: &dyn Player, loser: &dyn Player, loser_board: &Board<'_>) {
        if loser.is_human() {
            self.show(loser_board, false);
        }
        let text = std::format!("{} wins!", winner.name());
        self.line(&text);
    }
}
