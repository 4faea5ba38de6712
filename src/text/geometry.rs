use crate::{
    face::{FaceMetrics, FontFace},
    fixed::{Fixed, FixedRect},
    text::TextLine,
};

/// Size of a wrapped paragraph, measured from its top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParagraphBox {
    pub width: Fixed,
    pub height: Fixed,
}

/// Height occupied by `lines` when painted with `spacing` between them.
///
/// The first baseline sits `ascent` below the top and every line adds one
/// `line_height + spacing`. The spacing after the last line is not part of the
/// paragraph. An empty paragraph has zero height.
pub fn paragraph_height(lines: &[TextLine], metrics: &FaceMetrics, spacing: Fixed) -> Fixed {
    if lines.is_empty() {
        return Fixed::ZERO;
    }

    let count = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    metrics.ascent + (metrics.line_height + spacing) * count - spacing
}

/// Width of the widest line together with [`paragraph_height`].
pub fn paragraph_box(lines: &[TextLine], metrics: &FaceMetrics, spacing: Fixed) -> ParagraphBox {
    let width = lines
        .iter()
        .map(|line| line.width)
        .max()
        .unwrap_or(Fixed::ZERO);

    ParagraphBox {
        width,
        height: paragraph_height(lines, metrics, spacing),
    }
}

/// Union of the glyph ink boxes of `lines`, relative to the paragraph origin.
///
/// Glyphs are placed where the painter puts them: the pen starts at `x = 0` on
/// every line and baselines step by `line_height + spacing`. Left bearings
/// and overhangs can reach outside the [`ParagraphBox`]. `None` when nothing
/// has ink.
pub fn ink_bounds<F: FontFace>(
    lines: &[TextLine],
    face: &F,
    spacing: Fixed,
) -> Option<FixedRect> {
    let metrics = face.face_metrics();
    let mut baseline = metrics.ascent;
    let mut ink: Option<FixedRect> = None;

    for line in lines {
        let mut pen = Fixed::ZERO;
        for ch in line.text.chars() {
            let glyph = face.glyph_metrics(ch);
            if !glyph.found {
                continue;
            }

            if let Some(bounds) = glyph.bounds {
                let placed = bounds.translate(euclid::vec2(pen, baseline));
                ink = Some(match ink {
                    Some(acc) => acc.union(&placed),
                    None => placed,
                });
            }
            pen += glyph.advance;
        }
        baseline += metrics.line_height + spacing;
    }

    ink
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BoxFace;

    fn metrics() -> FaceMetrics {
        FaceMetrics {
            ascent: Fixed::from_int(16),
            descent: Fixed::from_int(4),
            line_height: Fixed::from_int(22),
        }
    }

    fn lines(n: usize) -> Vec<TextLine> {
        (0..n)
            .map(|i| TextLine {
                text: "x".repeat(i + 1),
                width: Fixed::from_int(10 * (i as i32 + 1)),
            })
            .collect()
    }

    #[test]
    fn single_line_has_no_trailing_spacing() {
        let height = paragraph_height(&lines(1), &metrics(), Fixed::from_int(5));
        assert_eq!(height, Fixed::from_int(16 + 22));
    }

    #[test]
    fn formula_for_several_lines() {
        let height = paragraph_height(&lines(3), &metrics(), Fixed::from_int(5));
        assert_eq!(height, Fixed::from_int(16 + (22 + 5) * 3 - 5));
    }

    #[test]
    fn empty_paragraph_is_flat() {
        let bx = paragraph_box(&[], &metrics(), Fixed::from_int(5));
        assert_eq!(bx, ParagraphBox::default());
    }

    #[test]
    fn height_is_monotonic_in_line_count() {
        for spacing in [0, 3, 12] {
            let spacing = Fixed::from_int(spacing);
            let heights: Vec<Fixed> = (0..8)
                .map(|n| paragraph_height(&lines(n), &metrics(), spacing))
                .collect();
            assert!(heights.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn width_is_the_widest_line() {
        let bx = paragraph_box(&lines(4), &metrics(), Fixed::ZERO);
        assert_eq!(bx.width, Fixed::from_int(40));
    }

    #[test]
    fn huge_paragraph_height_saturates() {
        let tall = FaceMetrics {
            line_height: Fixed::from_raw(i32::MAX / 2),
            ..metrics()
        };
        let height = paragraph_height(&lines(3), &tall, Fixed::ZERO);
        assert_eq!(height, Fixed::from_raw(i32::MAX));
    }

    #[test]
    fn ink_of_plain_glyphs_stays_inside_the_box() {
        let face = BoxFace::default();
        let lines = vec![
            TextLine {
                text: "ab".into(),
                width: Fixed::from_int(20),
            },
            TextLine {
                text: "c ".into(),
                width: Fixed::from_int(20),
            },
        ];

        let ink = ink_bounds(&lines, &face, Fixed::from_int(3)).unwrap();
        let bx = paragraph_box(&lines, &face.face_metrics(), Fixed::from_int(3));

        // last glyph ink: x 10..19 on line one, descent 4 below baseline 8 + 17
        assert_eq!(ink.min, euclid::point2(Fixed::ZERO, Fixed::ZERO));
        assert_eq!(ink.max, euclid::point2(Fixed::from_int(19), Fixed::from_int(29)));
        assert!(ink.max.x <= bx.width && ink.max.y <= bx.height);
    }

    #[test]
    fn overhanging_glyphs_reach_outside_the_box() {
        let face = BoxFace::default().with_overhang(['j', 'f']);
        let lines = vec![TextLine {
            text: "jaf".into(),
            width: Fixed::from_int(30),
        }];

        let ink = ink_bounds(&lines, &face, Fixed::ZERO).unwrap();
        assert_eq!(ink.min.x, Fixed::from_int(-3));
        assert_eq!(ink.max.x, Fixed::from_int(32));
    }

    #[test]
    fn blank_paragraph_has_no_ink() {
        let face = BoxFace::default();
        let lines = vec![TextLine {
            text: "   ".into(),
            width: Fixed::from_int(30),
        }];
        assert!(ink_bounds(&lines, &face, Fixed::ZERO).is_none());
        assert!(ink_bounds(&[], &face, Fixed::ZERO).is_none());
    }
}
