use std::io::{self, Write};

use crate::ascii::grid::CharGrid;

/// Writes one text line per grid row.
pub fn write<W: Write>(grid: &CharGrid, out: &mut W) -> io::Result<()> {
    for line in grid.lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints the grid to stdout.
pub fn print(grid: &CharGrid) -> io::Result<()> {
    let stdout = io::stdout();
    write(grid, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_row() {
        let grid = CharGrid::new(2, 2, vec!['a', 'b', 'c', 'd']);
        let mut out = Vec::new();
        write(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\ncd\n");
    }
}
