mod ascii;
mod image_pipeline;
mod output;

pub use ascii::{
    cache::BrightnessCache,
    glyph::{FontRasterizer, GlyphRasterizer, GLYPH_RESOLUTION},
    grid::CharGrid,
    matcher::{brightness, BrightnessMatcher},
};
pub use image_pipeline::{
    loader::{open_image, pad_to_power_of_two},
    partition::{tiles, Tiles},
    view::{PixelSource, Rgb, RootImage, SubImage},
};
pub use output::{console, html};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to load font: {0}")]
    Font(String),
    #[error("unsupported grid width")]
    InvalidWidth,
    #[error("no characters available for matching")]
    NoCharacters,
}
