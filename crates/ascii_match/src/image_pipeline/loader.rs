use std::path::Path;

use image::RgbImage;

use super::view::{Rgb, RootImage};
use crate::MatchError;

/// Decodes `path` and pads it for tile partitioning.
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<RootImage, MatchError> {
    let decoded = image::open(path)?.to_rgb8();
    Ok(pad_to_power_of_two(&decoded))
}

/// Centers the decoded pixels on a white canvas whose width and height are
/// rounded up to the next power of two. Successive halvings of the padded
/// dimensions stay divisible, which the tile partitioner relies on.
pub fn pad_to_power_of_two(decoded: &RgbImage) -> RootImage {
    let (orig_width, orig_height) = decoded.dimensions();
    let width = orig_width.next_power_of_two();
    let height = orig_height.next_power_of_two();
    let pad_x = (width - orig_width) / 2;
    let pad_y = (height - orig_height) / 2;

    let mut pixels = vec![Rgb::WHITE; width as usize * height as usize];
    for (x, y, pixel) in decoded.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        pixels[(y + pad_y) as usize * width as usize + (x + pad_x) as usize] = Rgb::new(r, g, b);
    }
    RootImage::new(width, height, pixels)
}
