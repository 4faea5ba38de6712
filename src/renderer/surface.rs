use image::{Rgba, RgbaImage};

/// Straight (non-premultiplied) RGBA color.
pub type Color = Rgba<u8>;
/// Pixel rectangle, `min` inclusive and `max` exclusive.
pub type PixelRect = euclid::default::Box2D<i32>;

pub const WHITE: Color = Rgba([255, 255, 255, 255]);

/// Byte stride of the diagnostic pattern drawn by [`new_dot_pattern_canvas`].
pub const DOT_PATTERN_STRIDE: usize = 250;

/// Pixel grid the painters draw into.
///
/// The painters only ever address pixels inside `size()`.
pub trait Surface {
    fn size(&self) -> [u32; 2];

    fn pixel(&self, x: u32, y: u32) -> Color;

    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    fn bounds(&self) -> PixelRect {
        let [width, height] = self.size();
        PixelRect::new(
            euclid::point2(0, 0),
            euclid::point2(
                i32::try_from(width).unwrap_or(i32::MAX),
                i32::try_from(height).unwrap_or(i32::MAX),
            ),
        )
    }
}

impl Surface for RgbaImage {
    fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        *self.get_pixel(x, y)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color);
    }
}

/// Opaque white canvas.
pub fn new_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, WHITE)
}

/// White canvas with every [`DOT_PATTERN_STRIDE`]-th raw byte zeroed.
///
/// The zeroed bytes land on different channels from pixel to pixel, which
/// leaves a faint pattern of colored dots. Useful to see which pixels a
/// painter has touched.
pub fn new_dot_pattern_canvas(width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for (i, byte) in canvas.iter_mut().enumerate() {
        *byte = if i % DOT_PATTERN_STRIDE == 0 { 0 } else { 255 };
    }
    canvas
}

/// Source-over blend of `src` scaled by `coverage` onto `dst`.
pub fn blend_over(dst: Color, src: Color, coverage: u8) -> Color {
    let a = (src[3] as f32 / 255.0) * (coverage as f32 / 255.0);
    if a <= 0.0 {
        return dst;
    }

    let bg_a = dst[3] as f32 / 255.0;
    let out_a = a + bg_a * (1.0 - a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let fg = src[i] as f32 / 255.0;
        let bg = dst[i] as f32 / 255.0;
        let out = (fg * a + bg * bg_a * (1.0 - a)) / out_a;
        (out.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
    ])
}
