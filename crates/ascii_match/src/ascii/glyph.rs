use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::MatchError;

/// Side length of the square raster used to sample character brightness.
pub const GLYPH_RESOLUTION: u32 = 16;

/// Rasterizes a character into a fixed-size monochrome bitmap.
///
/// `true` marks glyph ink. Implementations must be pure: the same character
/// always yields the same raster.
pub trait GlyphRasterizer {
    /// Row-major `resolution * resolution` bitmap for `ch`.
    fn raster(&self, ch: char, resolution: u32) -> Vec<bool>;
}

/// Glyph rasterizer backed by a TrueType/OpenType font.
pub struct FontRasterizer {
    font: Font,
}

impl FontRasterizer {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MatchError> {
        let bytes =
            std::fs::read(path.as_ref()).map_err(|err| MatchError::Font(err.to_string()))?;
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|err| MatchError::Font(err.to_string()))?;
        Ok(Self { font })
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn raster(&self, ch: char, resolution: u32) -> Vec<bool> {
        let size = resolution as usize;
        let mut cells = vec![false; size * size];
        let (metrics, coverage) = self.font.rasterize(ch, resolution as f32);
        if metrics.width == 0 || metrics.height == 0 {
            return cells;
        }

        // Baseline sits at three quarters of the cell; the glyph is centered
        // horizontally. Pixels falling outside the cell are clipped.
        let baseline = (resolution as f32 * 0.75) as i32;
        let y_offset = baseline - metrics.height as i32 - metrics.ymin;
        let x_offset = (size as i32 - metrics.width as i32) / 2;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                if coverage[row * metrics.width + col] < 0x80 {
                    continue;
                }
                let x = col as i32 + x_offset;
                let y = row as i32 + y_offset;
                if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
                    continue;
                }
                cells[y as usize * size + x as usize] = true;
            }
        }
        cells
    }
}
