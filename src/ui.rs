#![cfg(feature = "std")]

use std::fmt::Write;

use crate::board::{Board, Cell};
use crate::common::Coordinate;
use crate::config::FIELD_SIZE;

const LEFT_PAD: &str = "  ";
const DELIMITER: &str = "    ";

fn cell_char(board: &Board, cell: Cell) -> char {
    match cell {
        Cell::Empty if board.is_mirror() => '?',
        Cell::Empty => '.',
        Cell::Ship(_) => 'O',
        Cell::Hit => 'x',
        Cell::Kill => 'X',
        Cell::Miss => '*',
    }
}

fn letter_line(out: &mut String) {
    out.push_str("  ");
    for c in 0..FIELD_SIZE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
}

fn board_line(out: &mut String, board: &Board, row: usize) {
    let _ = write!(out, "{} ", row + 1);
    for col in 0..FIELD_SIZE {
        let cell = board
            .cell(Coordinate::new(row, col))
            .unwrap_or(Cell::Empty);
        out.push(' ');
        out.push(cell_char(board, cell));
    }
}

/// Render our board (ships visible) next to the mirrored opponent board.
pub fn render_field_pair(own: &Board, mirror: &Board) -> String {
    let mut out = String::new();
    let border = |out: &mut String| {
        out.push_str(LEFT_PAD);
        letter_line(out);
        out.push_str(DELIMITER);
        letter_line(out);
        out.push('\n');
    };
    border(&mut out);
    for row in 0..FIELD_SIZE {
        out.push_str(LEFT_PAD);
        board_line(&mut out, own, row);
        out.push_str(DELIMITER);
        board_line(&mut out, mirror, row);
        out.push('\n');
    }
    border(&mut out);
    out
}

pub fn print_field_pair(own: &Board, mirror: &Board) {
    std::print!("{}", render_field_pair(own, mirror));
}
