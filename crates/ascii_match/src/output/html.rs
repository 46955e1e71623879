use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::ascii::grid::CharGrid;

/// Writes the grid as a standalone HTML document styled with `font_family`.
pub fn write<W: Write>(grid: &CharGrid, font_family: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html><head><meta charset=\"utf-8\"></head>")?;
    writeln!(out, "<body style=\"background:black;\">")?;
    writeln!(
        out,
        "<pre style=\"color:white; font-family:'{font_family}', monospace; \
         font-size:10px; letter-spacing:0.2em;\">"
    )?;
    for line in grid.lines() {
        writeln!(out, "{}", escape(&line))?;
    }
    writeln!(out, "</pre></body></html>")
}

/// Writes the document to `path`, truncating any previous render.
pub fn write_file<P: AsRef<Path>>(grid: &CharGrid, font_family: &str, path: P) -> io::Result<()> {
    let mut file = File::create(path)?;
    write(grid, font_family, &mut file)
}

fn escape(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_contains_escaped_rows_and_font() {
        let grid = CharGrid::new(3, 1, vec!['<', '&', 'a']);
        let mut out = Vec::new();
        write(&grid, "Courier New", &mut out).unwrap();
        let document = String::from_utf8(out).unwrap();
        assert!(document.contains("&lt;&amp;a"));
        assert!(document.contains("font-family:'Courier New'"));
    }

    #[test]
    fn write_file_creates_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let grid = CharGrid::new(1, 1, vec!['x']);
        write_file(&grid, "monospace", &path).unwrap();
        let document = std::fs::read_to_string(&path).unwrap();
        assert!(document.contains('x'));
        assert!(document.contains("</html>"));
    }
}
