use super::view::{PixelSource, SubImage};

/// Lazy row-major sequence of square windows covering `image`.
///
/// Windows scan left-to-right, top-to-bottom. A window that would cross the
/// right or bottom edge is not emitted, so trailing partial blocks are
/// dropped. Every call site builds a fresh iterator; no cursor state survives
/// between render calls.
pub fn tiles<S: PixelSource>(image: &S, edge: u32) -> Tiles<'_, S> {
    Tiles { image, edge, x: 0, y: 0 }
}

pub struct Tiles<'a, S: PixelSource> {
    image: &'a S,
    edge: u32,
    x: u32,
    y: u32,
}

impl<'a, S: PixelSource> Iterator for Tiles<'a, S> {
    type Item = SubImage<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.edge == 0 || self.y + self.edge > self.image.height() {
            return None;
        }
        let tile = SubImage::new(self.image, self.x, self.y, self.edge);
        self.x += self.edge;
        if self.x + self.edge > self.image.width() {
            self.x = 0;
            self.y += self.edge;
        }
        Some(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::view::{Rgb, RootImage};

    fn corners<S: PixelSource>(image: &S, edge: u32) -> Vec<(u32, u32)> {
        tiles(image, edge).map(|tile| (tile.left(), tile.top())).collect()
    }

    #[test]
    fn eight_by_eight_with_edge_four_yields_four_tiles_in_row_major_order() {
        let image = RootImage::filled(8, 8, Rgb::WHITE);
        assert_eq!(corners(&image, 4), vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn partial_trailing_blocks_are_dropped() {
        let image = RootImage::filled(10, 9, Rgb::WHITE);
        assert_eq!(corners(&image, 4), vec![(0, 0), (4, 0), (0, 4), (4, 4)]);
    }

    #[test]
    fn sequence_is_restartable() {
        let image = RootImage::filled(8, 8, Rgb::WHITE);
        assert_eq!(corners(&image, 4), corners(&image, 4));
    }

    #[test]
    fn oversized_edge_yields_nothing() {
        let image = RootImage::filled(8, 8, Rgb::WHITE);
        assert!(corners(&image, 16).is_empty());
    }

    #[test]
    fn zero_edge_yields_nothing() {
        let image = RootImage::filled(8, 8, Rgb::WHITE);
        assert!(corners(&image, 0).is_empty());
    }
}
