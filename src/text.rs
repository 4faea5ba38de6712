/// Paragraph size computed from wrapped lines.
pub mod geometry;
/// Per-rune line breaking against a width budget.
pub mod wrap;

pub use geometry::{ParagraphBox, ink_bounds, paragraph_box, paragraph_height};
pub use wrap::{TextLine, WrapConfig, wrap};
