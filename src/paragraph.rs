use image::Rgba;

use crate::{
    face::{FaceMetrics, FontFace},
    fixed::{Fixed, FixedPoint, FixedRect},
    renderer::{Color, ComposeMode, PixelRect, Surface, paint_background, paint_text},
    text::{ParagraphBox, TextLine, WrapConfig, ink_bounds, paragraph_box, wrap},
};

/// Translucent panel painted under a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundStyle {
    pub color: Color,
    pub mode: ComposeMode,
    /// Extra pixels added on every side of the paragraph box.
    pub padding: i32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            color: Rgba([0, 0, 0, 150]),
            mode: ComposeMode::Over,
            padding: 0,
        }
    }
}

/// Placement and styling of a single paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphConfig {
    /// Top-left corner of the paragraph, y-axis down.
    pub origin: FixedPoint,
    /// Every line stays strictly narrower than this.
    pub max_width: Fixed,
    /// Extra space between two lines, on top of the face's line height.
    pub spacing: Fixed,
    pub text_color: Color,
    pub background: Option<BackgroundStyle>,
    pub wrap: WrapConfig,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            origin: euclid::point2(Fixed::from_int(10), Fixed::ZERO),
            max_width: Fixed::from_int(250),
            spacing: Fixed::ZERO,
            text_color: Rgba([100, 100, 0, 255]),
            background: None,
            wrap: WrapConfig::default(),
        }
    }
}

/// A wrapped paragraph together with the geometry derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub origin: FixedPoint,
    pub lines: Vec<TextLine>,
    pub metrics: FaceMetrics,
    pub paragraph_box: ParagraphBox,
    /// Glyph ink relative to `origin`, see [`ink_bounds`].
    pub ink: Option<FixedRect>,
}

impl Paragraph {
    /// Smallest pixel rectangle holding the paragraph box and all glyph ink,
    /// grown by `padding`.
    pub fn panel_rect(&self, padding: i32) -> PixelRect {
        let layout = FixedRect::new(
            self.origin,
            euclid::point2(
                self.origin.x + self.paragraph_box.width,
                self.origin.y + self.paragraph_box.height,
            ),
        );
        let area = match self.ink {
            Some(ink) => layout.union(&ink.translate(self.origin.to_vector())),
            None => layout,
        };

        PixelRect::new(
            euclid::point2(area.min.x.floor() - padding, area.min.y.floor() - padding),
            euclid::point2(area.max.x.ceil() + padding, area.max.y.ceil() + padding),
        )
    }
}

/// Wraps `text` and measures the result without touching any surface.
pub fn layout_paragraph<F: FontFace>(text: &str, face: &F, config: &ParagraphConfig) -> Paragraph {
    let metrics = face.face_metrics();
    let lines = wrap(text, config.max_width, face, &config.wrap);
    let paragraph_box = paragraph_box(&lines, &metrics, config.spacing);
    let ink = ink_bounds(&lines, face, config.spacing);

    log::debug!(
        "laid out {} lines, box {}x{}",
        lines.len(),
        paragraph_box.width,
        paragraph_box.height
    );

    Paragraph {
        origin: config.origin,
        lines,
        metrics,
        paragraph_box,
        ink,
    }
}

/// Lays out `text` and paints it, background panel first when configured.
pub fn render_paragraph<S, F>(
    surface: &mut S,
    text: &str,
    face: &F,
    config: &ParagraphConfig,
) -> Paragraph
where
    S: Surface + ?Sized,
    F: FontFace,
{
    let paragraph = layout_paragraph(text, face, config);

    if let Some(background) = &config.background
        && !paragraph.lines.is_empty()
    {
        let rect = paragraph.panel_rect(background.padding);
        paint_background(surface, rect, background.color, background.mode);
    }

    paint_text(
        surface,
        &paragraph.lines,
        face,
        paragraph.origin,
        config.spacing,
        config.text_color,
    );

    paragraph
}
