use crate::{
    face::{FontFace, GlyphMask},
    fixed::FixedPoint,
};

use super::surface::{Color, Surface, blend_over};

/// Draws `text` as one run with its baseline at `dot`.
///
/// Each glyph's own advance moves the dot to the next origin; no kerning is
/// applied, so the run is exactly as wide as the line breaker measured it.
/// Returns the dot after the last glyph.
pub fn draw_glyph_run<S, F>(
    surface: &mut S,
    face: &F,
    text: &str,
    mut dot: FixedPoint,
    color: Color,
) -> FixedPoint
where
    S: Surface + ?Sized,
    F: FontFace,
{
    for ch in text.chars() {
        let metrics = face.glyph_metrics(ch);
        if !metrics.found {
            continue;
        }

        if let Some(mask) = face.glyph_mask(ch) {
            let origin = [dot.x.round() + mask.xmin, dot.y.round() + mask.top()];
            blit_mask(surface, &mask, origin, color);
        }

        dot.x += metrics.advance;
    }

    dot
}

/// Blends `color` through `mask` with the mask's top-left at `origin`.
///
/// Pixels with zero coverage and pixels outside the surface are left alone,
/// as are cells missing from a `coverage` shorter than `width * height`.
pub fn blit_mask<S: Surface + ?Sized>(
    surface: &mut S,
    mask: &GlyphMask,
    origin: [i32; 2],
    color: Color,
) {
    let [width, height] = surface.size();

    for row in 0..mask.height {
        let y = origin[1] as i64 + row as i64;
        if y < 0 || y >= height as i64 {
            continue;
        }

        for col in 0..mask.width {
            let coverage = match mask.coverage.get(row * mask.width + col) {
                Some(&coverage) if coverage > 0 => coverage,
                _ => continue,
            };

            let x = origin[0] as i64 + col as i64;
            if x < 0 || x >= width as i64 {
                continue;
            }

            let (x, y) = (x as u32, y as u32);
            let out = blend_over(surface.pixel(x, y), color, coverage);
            surface.set_pixel(x, y, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixed::Fixed,
        renderer::surface::{WHITE, new_canvas},
        testing::BoxFace,
    };
    use image::Rgba;

    const INK: Color = Rgba([100, 100, 0, 255]);

    #[test]
    fn dot_advances_by_each_glyph() {
        let face = BoxFace::default().with_wide(['W']);
        let mut canvas = new_canvas(100, 30);
        let start = euclid::point2(Fixed::from_int(5), Fixed::from_int(20));

        let end = draw_glyph_run(&mut canvas, &face, "aWb", start, INK);

        assert_eq!(end.x, Fixed::from_int(5 + 10 + 30 + 10));
        assert_eq!(end.y, start.y);
    }

    #[test]
    fn glyph_box_sits_on_the_baseline() {
        let face = BoxFace::default();
        let mut canvas = new_canvas(40, 30);
        let start = euclid::point2(Fixed::from_int(2), Fixed::from_int(20));

        draw_glyph_run(&mut canvas, &face, "a", start, INK);

        // ink spans x 2..11 and y 12..24 (ascent 8 above, descent 4 below)
        assert_eq!(*canvas.get_pixel(2, 12), INK);
        assert_eq!(*canvas.get_pixel(10, 23), INK);
        assert_eq!(*canvas.get_pixel(11, 12), WHITE);
        assert_eq!(*canvas.get_pixel(2, 11), WHITE);
        assert_eq!(*canvas.get_pixel(2, 24), WHITE);
        assert_eq!(*canvas.get_pixel(1, 20), WHITE);
    }

    #[test]
    fn unmapped_and_blank_runes_leave_no_ink() {
        let face = BoxFace::default().with_missing(['?']);
        let mut canvas = new_canvas(60, 30);
        let start = euclid::point2(Fixed::ZERO, Fixed::from_int(20));

        let end = draw_glyph_run(&mut canvas, &face, "? ?", start, INK);

        assert_eq!(end.x, Fixed::from_int(10));
        assert!(canvas.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn mask_is_clipped_at_the_edges() {
        let mask = GlyphMask {
            width: 4,
            height: 4,
            xmin: 0,
            ymin: 0,
            coverage: vec![255; 16],
        };
        let mut canvas = new_canvas(3, 3);

        blit_mask(&mut canvas, &mask, [-2, 1], INK);

        assert_eq!(*canvas.get_pixel(0, 1), INK);
        assert_eq!(*canvas.get_pixel(1, 2), INK);
        assert_eq!(*canvas.get_pixel(2, 1), WHITE);
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn short_coverage_paints_only_present_cells() {
        let mask = GlyphMask {
            width: 3,
            height: 2,
            xmin: 0,
            ymin: 0,
            coverage: vec![255; 4],
        };
        let mut canvas = new_canvas(3, 2);

        blit_mask(&mut canvas, &mask, [0, 0], INK);

        assert_eq!(*canvas.get_pixel(2, 0), INK);
        assert_eq!(*canvas.get_pixel(0, 1), INK);
        assert_eq!(*canvas.get_pixel(1, 1), WHITE);
        assert_eq!(*canvas.get_pixel(2, 1), WHITE);
    }

    #[test]
    fn partial_coverage_blends() {
        let mask = GlyphMask {
            width: 1,
            height: 1,
            xmin: 0,
            ymin: 0,
            coverage: vec![128],
        };
        let mut canvas = new_canvas(1, 1);

        blit_mask(&mut canvas, &mask, [0, 0], Rgba([0, 0, 0, 255]));

        let p = canvas.get_pixel(0, 0);
        assert!(p[0] > 120 && p[0] < 135, "{p:?}");
        assert_eq!(p[3], 255);
    }
}
