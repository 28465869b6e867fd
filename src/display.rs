//! Text rendering of boards and coordinate parsing for terminal front ends.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::board::{Board, CellView};
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Symbol drawn for a cell. Intact ships show as water unless `reveal`.
pub fn cell_symbol(view: CellView, reveal: bool) -> char {
    match view {
        CellView::Water => '.',
        CellView::Ship if reveal => 'S',
        CellView::Ship => '.',
        CellView::Hit => 'X',
        CellView::Sunk => '#',
        CellView::Miss => 'o',
    }
}

/// Draw `board` as a labelled grid, columns A–J and rows 1–10.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..GRID_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "  {:2}", r + 1);
        for c in 0..GRID_SIZE {
            let view = board.cell_view(r, c).unwrap_or(CellView::Water);
            let _ = write!(out, " {}", cell_symbol(view, reveal));
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("  Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water\n");
    } else {
        out.push_str("  Legend: X=Hit  #=Sunk  o=Miss  .=Unknown\n");
    }
    out
}

/// Format (`row`, `col`) as e.g. `B7`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse a coordinate like `B7` (case-insensitive) into (`row`, `col`).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or_else(|| "No column letter".to_string())?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str = chars.as_str();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}
