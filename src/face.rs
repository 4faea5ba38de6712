use std::sync::Arc;

use crate::{
    error::{Error, Result},
    fixed::{Fixed, FixedRect},
};

/// Metrics of a single rune as seen by the line breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub ch: char,
    pub advance: Fixed,
    /// Ink bounds relative to the dot, y-axis down. `None` for blank glyphs.
    pub bounds: Option<FixedRect>,
    /// `false` when the face has no glyph for `ch`. Such runes are dropped
    /// from layout rather than reported as errors.
    pub found: bool,
}

impl GlyphMetrics {
    /// Metrics for a rune the face cannot map.
    pub fn missing(ch: char) -> Self {
        Self {
            ch,
            advance: Fixed::ZERO,
            bounds: None,
            found: false,
        }
    }
}

/// Face-wide vertical metrics, constant for a face/size pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceMetrics {
    /// Distance from the top of the line to the baseline.
    pub ascent: Fixed,
    /// Distance from the baseline down to the lowest typical extent.
    pub descent: Fixed,
    /// Recommended distance between two consecutive baselines.
    pub line_height: Fixed,
}

/// 8-bit coverage mask of a rasterized glyph.
///
/// Rows are stored top to bottom. `xmin` is the horizontal offset from the
/// dot, `ymin` the offset of the bottom row from the baseline (positive is up).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    pub width: usize,
    pub height: usize,
    pub xmin: i32,
    pub ymin: i32,
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Offset of the top row from the baseline, y-axis down.
    pub fn top(&self) -> i32 {
        -(self.ymin + self.height as i32)
    }
}

/// Font capability consumed by the layout engine.
///
/// Implementations must behave as pure functions of the rune for the duration
/// of a layout pass.
pub trait FontFace {
    fn glyph_metrics(&self, ch: char) -> GlyphMetrics;

    fn face_metrics(&self) -> FaceMetrics;

    /// Rasterizes `ch`. Returns `None` for unmapped or blank glyphs.
    fn glyph_mask(&self, ch: char) -> Option<GlyphMask>;
}

impl<F: FontFace + ?Sized> FontFace for &F {
    fn glyph_metrics(&self, ch: char) -> GlyphMetrics {
        (**self).glyph_metrics(ch)
    }

    fn face_metrics(&self) -> FaceMetrics {
        (**self).face_metrics()
    }

    fn glyph_mask(&self, ch: char) -> Option<GlyphMask> {
        (**self).glyph_mask(ch)
    }
}

/// Everything needed to build a [`FontdueFace`] without touching the filesystem.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceConfig {
    /// Raw TrueType/OpenType data (a collection is allowed).
    pub font_data: Vec<u8>,
    /// Face index inside a font collection, `0` for single-face files.
    pub collection_index: u32,
    /// Size in points at 72 dpi, i.e. in pixels.
    pub point_size: f32,
}

impl FaceConfig {
    pub fn new(font_data: impl Into<Vec<u8>>, point_size: f32) -> Self {
        Self {
            font_data: font_data.into(),
            collection_index: 0,
            point_size,
        }
    }
}

/// [`FontFace`] backed by a `fontdue` font at a fixed pixel size.
#[derive(Clone)]
pub struct FontdueFace {
    font: Arc<fontdue::Font>,
    px: f32,
    metrics: FaceMetrics,
}

impl FontdueFace {
    /// Parses the font data in `config`.
    pub fn new(config: &FaceConfig) -> Result<Self> {
        let font = fontdue::Font::from_bytes(
            config.font_data.as_slice(),
            fontdue::FontSettings {
                collection_index: config.collection_index,
                ..Default::default()
            },
        )
        .map_err(Error::FontParse)?;

        Self::from_font(Arc::new(font), config.point_size)
    }

    /// Wraps an already parsed font.
    pub fn from_font(font: Arc<fontdue::Font>, point_size: f32) -> Result<Self> {
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(Error::InvalidPointSize(point_size));
        }

        let line = font
            .horizontal_line_metrics(point_size)
            .ok_or(Error::MissingLineMetrics)?;

        let metrics = FaceMetrics {
            ascent: Fixed::from_f32(line.ascent),
            descent: Fixed::from_f32(-line.descent),
            line_height: Fixed::from_f32(line.new_line_size),
        };

        Ok(Self {
            font,
            px: point_size,
            metrics,
        })
    }

    pub fn point_size(&self) -> f32 {
        self.px
    }

    pub fn font(&self) -> &Arc<fontdue::Font> {
        &self.font
    }

    fn glyph_index(&self, ch: char) -> Option<u16> {
        // fontdue maps unknown characters to the notdef glyph
        match self.font.lookup_glyph_index(ch) {
            0 => None,
            index => Some(index),
        }
    }
}

impl FontFace for FontdueFace {
    fn glyph_metrics(&self, ch: char) -> GlyphMetrics {
        let Some(index) = self.glyph_index(ch) else {
            return GlyphMetrics::missing(ch);
        };

        let metrics = self.font.metrics_indexed(index, self.px);
        let bounds = (metrics.width > 0 && metrics.height > 0).then(|| {
            let left = metrics.xmin;
            let bottom = -metrics.ymin;
            FixedRect::new(
                euclid::point2(
                    Fixed::from_int(left),
                    Fixed::from_int(bottom - metrics.height as i32),
                ),
                euclid::point2(
                    Fixed::from_int(left + metrics.width as i32),
                    Fixed::from_int(bottom),
                ),
            )
        });

        GlyphMetrics {
            ch,
            advance: Fixed::from_f32(metrics.advance_width),
            bounds,
            found: true,
        }
    }

    fn face_metrics(&self) -> FaceMetrics {
        self.metrics
    }

    fn glyph_mask(&self, ch: char) -> Option<GlyphMask> {
        let index = self.glyph_index(ch)?;
        let (metrics, coverage) = self.font.rasterize_indexed(index, self.px);

        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }

        Some(GlyphMask {
            width: metrics.width,
            height: metrics.height,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            coverage,
        })
    }
}
