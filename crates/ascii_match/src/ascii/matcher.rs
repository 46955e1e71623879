use std::collections::BTreeSet;

use log::debug;

use super::cache::BrightnessCache;
use super::glyph::{GlyphRasterizer, GLYPH_RESOLUTION};
use super::grid::CharGrid;
use crate::image_pipeline::partition::tiles;
use crate::image_pipeline::view::{PixelSource, RootImage};
use crate::MatchError;

/// Average brightness of a view in [0, 1].
///
/// Computed once per tile per render call; tile identity is not stable across
/// calls, so caching here would be meaningless.
pub fn brightness<S: PixelSource>(view: &S) -> f64 {
    let mut sum = 0.0;
    for y in 0..view.height() {
        for x in 0..view.width() {
            sum += view.pixel(x, y).luma();
        }
    }
    let count = u64::from(view.width()) * u64::from(view.height());
    sum / (count as f64 * 255.0)
}

/// Matches image blocks to the characters whose glyph brightness is nearest.
///
/// Owns the brightness cache exclusively; one instance serves every render
/// call for an image, so the monotone normalization bounds survive
/// character-set changes across calls.
pub struct BrightnessMatcher<R: GlyphRasterizer> {
    image: RootImage,
    rasterizer: R,
    cache: BrightnessCache,
}

impl<R: GlyphRasterizer> BrightnessMatcher<R> {
    pub fn new(image: RootImage, rasterizer: R) -> Self {
        Self { image, rasterizer, cache: BrightnessCache::new() }
    }

    pub fn image(&self) -> &RootImage {
        &self.image
    }

    /// Renders the image as a character grid with `chars_in_row` columns.
    ///
    /// The tile edge is `image.width() / chars_in_row`; partial blocks at the
    /// right and bottom edges are dropped by the partitioner. With a single
    /// candidate character the whole grid is filled with it regardless of
    /// image content.
    pub fn render(
        &mut self,
        chars_in_row: u32,
        charset: &BTreeSet<char>,
    ) -> Result<CharGrid, MatchError> {
        if charset.is_empty() {
            return Err(MatchError::NoCharacters);
        }
        if chars_in_row == 0 || chars_in_row > self.image.width() {
            return Err(MatchError::InvalidWidth);
        }

        let edge = self.image.width() / chars_in_row;
        let columns = (self.image.width() / edge) as usize;
        let rows = (self.image.height() / edge) as usize;
        debug!(
            "rendering {columns}x{rows} grid, tile edge {edge}px, {} candidate chars",
            charset.len()
        );

        self.update_cache(charset);

        if charset.len() == 1 {
            let only = charset.iter().copied().next().ok_or(MatchError::NoCharacters)?;
            return Ok(CharGrid::new(columns, rows, vec![only; columns * rows]));
        }

        self.cache.normalize(charset);
        if !self.cache.has_candidates() {
            return Err(MatchError::NoCharacters);
        }

        let mut cells = Vec::with_capacity(columns * rows);
        for tile in tiles(&self.image, edge) {
            let target = brightness(&tile);
            let ch = self.cache.nearest(target).ok_or(MatchError::NoCharacters)?;
            cells.push(ch);
        }
        Ok(CharGrid::new(columns, rows, cells))
    }

    /// Rasterizes the characters of `charset` that are not cached yet. Raw
    /// brightness is the non-ink fraction of the glyph raster, so denser
    /// characters score darker.
    fn update_cache(&mut self, charset: &BTreeSet<char>) {
        for &ch in charset {
            if self.cache.contains(ch) {
                continue;
            }
            let raster = self.rasterizer.raster(ch, GLYPH_RESOLUTION);
            let ink = raster.iter().filter(|&&on| on).count();
            let raw = (raster.len() - ink) as f64 / raster.len() as f64;
            self.cache.insert_raw(ch, raw);
        }
    }
}
