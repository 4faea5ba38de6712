pub mod background;
pub mod glyph_run;
pub mod surface;
pub mod text_painter;

pub use background::{ComposeMode, paint_background};
pub use glyph_run::{blit_mask, draw_glyph_run};
pub use surface::{Color, PixelRect, Surface, new_canvas, new_dot_pattern_canvas};
pub use text_painter::{BaselineCursor, paint_text};
