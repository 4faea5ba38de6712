//! Synthetic face used by unit tests in place of a real font file.

use std::collections::HashSet;

use crate::{
    face::{FaceMetrics, FontFace, GlyphMask, GlyphMetrics},
    fixed::{Fixed, FixedRect},
};

pub(crate) const OVERHANG: i32 = 3;

/// Every mapped rune is a solid box one pixel narrower than its advance,
/// reaching from `ascent` above the baseline to `descent` below it.
/// A space is mapped but has no ink. Overhanging runes extend their ink
/// [`OVERHANG`] pixels past both sides of that box.
pub(crate) struct BoxFace {
    pub advance: Fixed,
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
    pub wide: HashSet<char, fxhash::FxBuildHasher>,
    pub missing: HashSet<char, fxhash::FxBuildHasher>,
    pub overhang: HashSet<char, fxhash::FxBuildHasher>,
}

impl Default for BoxFace {
    fn default() -> Self {
        Self {
            advance: Fixed::from_int(10),
            ascent: 8,
            descent: 4,
            line_gap: 2,
            wide: HashSet::default(),
            missing: HashSet::default(),
            overhang: HashSet::default(),
        }
    }
}

impl BoxFace {
    pub fn with_advance(mut self, advance: Fixed) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_missing(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.missing.extend(chars);
        self
    }

    /// Runes that advance three times as far as the others.
    pub fn with_wide(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.wide.extend(chars);
        self
    }

    /// Runes whose ink reaches left of the dot and right of the advance.
    pub fn with_overhang(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.overhang.extend(chars);
        self
    }

    fn advance_of(&self, ch: char) -> Fixed {
        if self.wide.contains(&ch) {
            self.advance * 3
        } else {
            self.advance
        }
    }

    /// Horizontal ink offset from the dot and ink width.
    fn ink_span(&self, ch: char) -> (i32, usize) {
        let width = (self.advance_of(ch).floor() - 1).max(1);
        if self.overhang.contains(&ch) {
            (-OVERHANG, (width + 2 * OVERHANG) as usize)
        } else {
            (0, width as usize)
        }
    }
}

impl FontFace for BoxFace {
    fn glyph_metrics(&self, ch: char) -> GlyphMetrics {
        if self.missing.contains(&ch) {
            return GlyphMetrics::missing(ch);
        }

        let bounds = (ch != ' ').then(|| {
            let (xmin, width) = self.ink_span(ch);
            FixedRect::new(
                euclid::point2(Fixed::from_int(xmin), Fixed::from_int(-self.ascent)),
                euclid::point2(
                    Fixed::from_int(xmin + width as i32),
                    Fixed::from_int(self.descent),
                ),
            )
        });

        GlyphMetrics {
            ch,
            advance: self.advance_of(ch),
            bounds,
            found: true,
        }
    }

    fn face_metrics(&self) -> FaceMetrics {
        FaceMetrics {
            ascent: Fixed::from_int(self.ascent),
            descent: Fixed::from_int(self.descent),
            line_height: Fixed::from_int(self.ascent + self.descent + self.line_gap),
        }
    }

    fn glyph_mask(&self, ch: char) -> Option<GlyphMask> {
        if ch == ' ' || self.missing.contains(&ch) {
            return None;
        }

        let (xmin, width) = self.ink_span(ch);
        let height = (self.ascent + self.descent) as usize;
        Some(GlyphMask {
            width,
            height,
            xmin,
            ymin: -self.descent,
            coverage: vec![255; width * height],
        })
    }
}
