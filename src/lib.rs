//! # Shiori
//!
//! Word-wrapped paragraphs painted onto raster canvases.
//!
//! ## Overview
//!
//! `Shiori` measures text rune by rune against a width budget, works out how
//! tall the wrapped paragraph will be, optionally lays a translucent panel
//! underneath it, and paints the glyphs onto an RGBA canvas that can then be
//! written out as a JPEG.
//!
//! The layout engine only needs two capabilities: a [`FontFace`] for glyph and
//! face metrics, and a [`renderer::Surface`] to draw on. [`FontdueFace`] and
//! `image::RgbaImage` are the provided implementations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiori::{FaceConfig, FontdueFace, ParagraphConfig, BackgroundStyle};
//!
//! # fn main() -> shiori::Result<()> {
//! let font_data = std::fs::read("font.ttf").expect("font file");
//! let face = FontdueFace::new(&FaceConfig::new(font_data, 20.0))?;
//!
//! let mut canvas = shiori::renderer::new_dot_pattern_canvas(500, 500);
//! let config = ParagraphConfig {
//!     background: Some(BackgroundStyle::default()),
//!     ..Default::default()
//! };
//! shiori::render_paragraph(&mut canvas, "Hello, world", &face, &config);
//!
//! shiori::codec::save_jpeg("output.jpg", &canvas, shiori::codec::DEFAULT_JPEG_QUALITY)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! *   **Per-rune wrapping**: lines stay strictly narrower than the budget; a
//!     glyph wider than the budget gets a line of its own.
//! *   **Fixed-point metrics**: advances are summed in 26.6 fixed point.
//! *   **Background panels**: sized from the wrapped paragraph before any glyph is drawn.
//! *   **Font Management**: faces from raw bytes, font files, or system fonts.

pub mod codec;
pub mod error;
pub mod face;
pub mod fixed;
pub mod font_storage;
pub mod paragraph;
pub mod renderer;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

// common re-exports
pub use error::{Error, Result};
pub use face::{FaceConfig, FaceMetrics, FontFace, FontdueFace, GlyphMask, GlyphMetrics};
pub use fixed::{Fixed, FixedPoint, FixedRect};
pub use font_storage::FontStorage;
pub use paragraph::{
    BackgroundStyle, Paragraph, ParagraphConfig, layout_paragraph, render_paragraph,
};

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use image;
