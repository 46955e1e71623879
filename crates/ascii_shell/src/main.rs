mod commands;

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ascii_match::{console, html, BrightnessMatcher, FontRasterizer, GlyphRasterizer, PixelSource};
use clap::Parser;
use log::info;

use commands::{parse, Command};

const PROMPT: &str = ">>> ";
const HTML_FILE: &str = "out.html";
const INITIAL_CHARS_IN_ROW: u32 = 64;
const MIN_PIXELS_PER_CHAR: u32 = 2;
const RESIZE_FACTOR: u32 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an image as ASCII art from an interactive shell")]
struct Cli {
    /// Input image path
    image: PathBuf,
    /// TrueType font used to sample character brightness
    #[arg(long, default_value = "DejaVuSansMono.ttf")]
    font: PathBuf,
    /// Font family advertised in the HTML output
    #[arg(long, default_value = "Courier New")]
    font_family: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputTarget {
    Html,
    Console,
}

struct Shell<R: GlyphRasterizer> {
    matcher: BrightnessMatcher<R>,
    charset: BTreeSet<char>,
    chars_in_row: u32,
    min_chars_in_row: u32,
    max_chars_in_row: u32,
    target: OutputTarget,
    font_family: String,
}

impl<R: GlyphRasterizer> Shell<R> {
    fn new(matcher: BrightnessMatcher<R>, font_family: String) -> Self {
        let image = matcher.image();
        let min_chars_in_row = (image.width() / image.height()).max(1);
        let max_chars_in_row = image.width() / MIN_PIXELS_PER_CHAR;
        let chars_in_row = INITIAL_CHARS_IN_ROW.min(max_chars_in_row).max(min_chars_in_row);
        Self {
            matcher,
            charset: ('0'..='9').collect(),
            chars_in_row,
            min_chars_in_row,
            max_chars_in_row,
            target: OutputTarget::Html,
            font_family,
        }
    }

    fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        loop {
            writeln!(out, "{PROMPT}")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match parse(&line) {
                Ok(Command::Exit) => return Ok(()),
                Ok(command) => self.dispatch(command, out)?,
                Err(err) => writeln!(out, "{}", err.message())?,
            }
        }
    }

    fn dispatch(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::ListChars => {
                let listed: Vec<String> =
                    self.charset.iter().map(|ch| ch.to_string()).collect();
                writeln!(out, "{}", listed.join(" "))?;
            }
            Command::Add(selection) => {
                for ch in selection.chars() {
                    self.charset.insert(ch);
                }
            }
            Command::Remove(selection) => {
                for ch in selection.chars() {
                    self.charset.remove(&ch);
                }
            }
            Command::ResUp => self.resize(self.chars_in_row * RESIZE_FACTOR, out)?,
            Command::ResDown => self.resize(self.chars_in_row / RESIZE_FACTOR, out)?,
            Command::Console => self.target = OutputTarget::Console,
            Command::Render => self.render(out)?,
            Command::Exit => {}
        }
        Ok(())
    }

    fn resize(&mut self, requested: u32, out: &mut impl Write) -> Result<()> {
        if (self.min_chars_in_row..=self.max_chars_in_row).contains(&requested) {
            self.chars_in_row = requested;
            writeln!(out, "Width set to <{requested}>")?;
        } else {
            writeln!(out, "Did not change due to exceeding boundaries")?;
        }
        Ok(())
    }

    fn render(&mut self, out: &mut impl Write) -> Result<()> {
        let grid = match self.matcher.render(self.chars_in_row, &self.charset) {
            Ok(grid) => grid,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };
        match self.target {
            OutputTarget::Html => {
                html::write_file(&grid, &self.font_family, Path::new(HTML_FILE))
                    .with_context(|| format!("failed to write {HTML_FILE}"))?;
                info!("wrote {}x{} grid to {HTML_FILE}", grid.columns, grid.rows);
            }
            OutputTarget::Console => console::write(&grid, out)?,
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let image = ascii_match::open_image(&cli.image)
        .with_context(|| format!("failed to load image {:?}", cli.image))?;
    info!("loaded {}x{} padded image from {:?}", image.width(), image.height(), cli.image);
    let rasterizer = FontRasterizer::from_file(&cli.font)
        .with_context(|| format!("failed to load font {:?}", cli.font))?;

    let mut shell = Shell::new(BrightnessMatcher::new(image, rasterizer), cli.font_family);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_match::{Rgb, RootImage};
    use std::io::Cursor;

    struct FlatGlyphs;

    impl GlyphRasterizer for FlatGlyphs {
        fn raster(&self, ch: char, resolution: u32) -> Vec<bool> {
            // ink proportional to the code point, so every char is distinct
            let total = (resolution * resolution) as usize;
            let ink = (ch as usize) % total;
            let mut cells = vec![false; total];
            for cell in cells.iter_mut().take(ink) {
                *cell = true;
            }
            cells
        }
    }

    fn shell_for(width: u32, height: u32) -> Shell<FlatGlyphs> {
        let image = RootImage::filled(width, height, Rgb::WHITE);
        Shell::new(BrightnessMatcher::new(image, FlatGlyphs), "monospace".into())
    }

    fn run_script(shell: &mut Shell<FlatGlyphs>, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        shell.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_width_is_clamped_to_the_image_bounds() {
        let shell = shell_for(16, 16);
        assert_eq!(shell.chars_in_row, 8);
        assert_eq!(shell.min_chars_in_row, 1);
        assert_eq!(shell.max_chars_in_row, 8);
    }

    #[test]
    fn res_honors_the_boundaries() {
        let mut shell = shell_for(16, 16);
        let out = run_script(&mut shell, "res up\nres down\nexit\n");
        assert!(out.contains("Did not change due to exceeding boundaries"));
        assert!(out.contains("Width set to <4>"));
        assert_eq!(shell.chars_in_row, 4);
    }

    #[test]
    fn chars_lists_the_initial_digits() {
        let mut shell = shell_for(16, 16);
        let out = run_script(&mut shell, "chars\nexit\n");
        assert!(out.contains("0 1 2 3 4 5 6 7 8 9"));
    }

    #[test]
    fn add_and_remove_update_the_set() {
        let mut shell = shell_for(16, 16);
        run_script(&mut shell, "add a-c\nremove 0-8\nexit\n");
        let remaining: Vec<char> = shell.charset.iter().copied().collect();
        assert_eq!(remaining, vec!['9', 'a', 'b', 'c']);
    }

    #[test]
    fn console_render_writes_rows_to_the_output() {
        let mut shell = shell_for(16, 16);
        let out = run_script(&mut shell, "console\nrender\nexit\n");
        let rows: Vec<&str> =
            out.lines().filter(|line| !line.starts_with(PROMPT.trim_end())).collect();
        // 8 columns at tile edge 2 over a 16px-tall image gives 8 rows
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|row| row.chars().count() == 8));
    }

    #[test]
    fn render_with_no_characters_reports_the_error_and_continues() {
        let mut shell = shell_for(16, 16);
        let out = run_script(&mut shell, "remove 0-9\nrender\nchars\nexit\n");
        assert!(out.contains("no characters available"));
    }
}
