#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::board::{Board, Cell};
use crate::common::{Coordinate, ShotResult};
use crate::config::FIELD_SIZE;
use crate::ui::render_field_pair;

use super::Player;

/// Interactive player: shows both boards and reads moves such as `B4`.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl ConsolePlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, own: &Board, mirror: &Board) -> io::Result<Option<Coordinate>> {
        write!(self.output, "{}", render_field_pair(own, mirror))?;
        loop {
            write!(self.output, "Your shot: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_coord(line.trim()) {
                Ok(c) if matches!(mirror.cell(c), Ok(Cell::Empty)) => return Ok(Some(c)),
                Ok(c) => writeln!(self.output, "You have already fired at {}.", c)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

/// Parse move notation: a column letter followed by a row number.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let last_col = (b'A' + FIELD_SIZE as u8 - 1) as char;
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .map(|ch| ch.to_ascii_uppercase())
        .ok_or("No column letter")?;
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch, last_col
        ));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= FIELD_SIZE {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch, last_col
        ));
    }
    let row_str = chars.as_str().trim();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let invalid_row = || format!("Invalid row '{}' - must be a number 1-{}", row_str, FIELD_SIZE);
    // `usize::from_str` would also take a leading '+'.
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_row());
    }
    let row: usize = row_str.parse().map_err(|_| invalid_row())?;
    if row == 0 || row > FIELD_SIZE {
        return Err(format!(
            "Row {} out of bounds - must be 1-{}",
            row, FIELD_SIZE
        ));
    }
    Ok(Coordinate::new(row - 1, col))
}

impl<R, W> Player for ConsolePlayer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn select_target(&mut self, own: &Board, mirror: &Board) -> Option<Coordinate> {
        match self.prompt(own, mirror) {
            Ok(target) => target,
            Err(e) => {
                log::warn!("console input failed: {}", e);
                None
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) {
        let text = match result {
            ShotResult::Miss => "miss",
            ShotResult::Hit => "hit!",
            ShotResult::Kill => "ship sunk!",
        };
        let _ = writeln!(self.output, "{}: {}", target, text);
    }

    fn handle_incoming_shot(&mut self, target: Coordinate, result: ShotResult) {
        let text = match result {
            ShotResult::Miss => "missed",
            ShotResult::Hit => "hit your ship",
            ShotResult::Kill => "sank your ship",
        };
        let _ = writeln!(self.output, "Opponent fired at {}: {}", target, text);
    }
}
