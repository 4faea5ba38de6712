use crate::{
    face::{FaceMetrics, FontFace},
    fixed::{Fixed, FixedPoint},
    text::TextLine,
};

use super::{
    glyph_run::draw_glyph_run,
    surface::{Color, Surface},
};

/// Baseline position of the line about to be painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaselineCursor {
    pub dot: FixedPoint,
}

impl BaselineCursor {
    /// First baseline of a paragraph whose top-left corner is `origin`.
    pub fn start(origin: FixedPoint, metrics: &FaceMetrics) -> Self {
        Self {
            dot: euclid::point2(origin.x, origin.y + metrics.ascent),
        }
    }

    /// Baseline of the following line. `x` returns to the paragraph's left edge.
    pub fn next_line(self, metrics: &FaceMetrics, spacing: Fixed) -> Self {
        Self {
            dot: euclid::point2(self.dot.x, self.dot.y + metrics.line_height + spacing),
        }
    }
}

/// Paints pre-wrapped `lines` top to bottom starting at `origin`.
///
/// No wrapping happens here. Only pixels under glyph coverage are touched.
/// Returns the cursor positioned where a following line would go.
pub fn paint_text<S, F>(
    surface: &mut S,
    lines: &[TextLine],
    face: &F,
    origin: FixedPoint,
    spacing: Fixed,
    color: Color,
) -> BaselineCursor
where
    S: Surface + ?Sized,
    F: FontFace,
{
    let metrics = face.face_metrics();

    lines
        .iter()
        .fold(BaselineCursor::start(origin, &metrics), |cursor, line| {
            draw_glyph_run(&mut *surface, face, &line.text, cursor.dot, color);
            cursor.next_line(&metrics, spacing)
        })
}
