/// Row-major grid of characters produced by one render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    pub columns: usize,
    pub rows: usize,
    pub cells: Vec<char>,
}

impl CharGrid {
    /// # Panics
    ///
    /// Panics if `columns * rows` does not match the cell count.
    pub fn new(columns: usize, rows: usize, cells: Vec<char>) -> Self {
        assert_eq!(columns * rows, cells.len());
        Self { columns, rows, cells }
    }

    pub fn get(&self, column: usize, row: usize) -> char {
        self.cells[row * self.columns + column]
    }

    /// Rows rendered as strings, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.columns).map(|row| row.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_render_rows_top_to_bottom() {
        let grid = CharGrid::new(2, 2, vec!['a', 'b', 'c', 'd']);
        let lines: Vec<String> = grid.lines().collect();
        assert_eq!(lines, vec!["ab".to_string(), "cd".to_string()]);
        assert_eq!(grid.get(1, 1), 'd');
    }

    #[test]
    #[should_panic]
    fn mismatched_cell_count_panics() {
        CharGrid::new(2, 2, vec!['a']);
    }
}
