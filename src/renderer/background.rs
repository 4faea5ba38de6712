use super::surface::{Color, PixelRect, Surface, blend_over};

/// How a flat fill combines with the pixels already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposeMode {
    /// Overwrite the pixel, alpha included.
    Replace,
    /// Source-over blending; the old pixel shows through by `1 - alpha`.
    #[default]
    Over,
}

/// Fills `rect` with `color`.
///
/// The rectangle is clipped to the surface. Paint the panel before any text
/// that should sit on top of it: glyphs already on the surface are treated as
/// ordinary pixels.
pub fn paint_background<S: Surface + ?Sized>(
    surface: &mut S,
    rect: PixelRect,
    color: Color,
    mode: ComposeMode,
) {
    let Some(clipped) = rect.intersection(&surface.bounds()) else {
        return;
    };

    for y in clipped.min.y..clipped.max.y {
        for x in clipped.min.x..clipped.max.x {
            let (x, y) = (x as u32, y as u32);
            let out = match mode {
                ComposeMode::Replace => color,
                ComposeMode::Over => blend_over(surface.pixel(x, y), color, u8::MAX),
            };
            surface.set_pixel(x, y, out);
        }
    }
}
