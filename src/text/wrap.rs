use std::collections::HashSet;

use crate::{face::FontFace, fixed::Fixed};

/// Configuration knobs used by the line breaker.
#[derive(Clone, Debug, PartialEq)]
pub struct WrapConfig {
    /// Runes that end the current line. They are never emitted.
    pub linebreak_chars: HashSet<char, fxhash::FxBuildHasher>,
    /// Runes skipped before any metric lookup (e.g. the `\r` of a CRLF pair).
    pub ignored_chars: HashSet<char, fxhash::FxBuildHasher>,
}

impl Default for WrapConfig {
    fn default() -> Self {
        let mut linebreak_chars = HashSet::default();
        linebreak_chars.insert('\n');

        let mut ignored_chars = HashSet::default();
        ignored_chars.insert('\r');

        Self {
            linebreak_chars,
            ignored_chars,
        }
    }
}

/// One wrapped line: a substring of the input minus dropped runes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    /// Sum of the advances of every rune in `text`.
    pub width: Fixed,
}

impl TextLine {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Intermediate storage used while collecting runes for a single line.
#[derive(Default)]
struct LineBuffer {
    text: String,
    width: Fixed,
}

impl LineBuffer {
    fn push(&mut self, ch: char, advance: Fixed) {
        self.text.push(ch);
        self.width += advance;
    }

    /// Moves the buffered runes into `lines` and resets the buffer.
    fn flush(&mut self, lines: &mut Vec<TextLine>) {
        let taken = std::mem::take(self);
        lines.push(TextLine {
            text: taken.text,
            width: taken.width,
        });
    }
}

/// Breaks `text` into lines whose advance sum stays strictly below `max_width`.
///
/// Runes are measured one at a time. A rune that would bring the line to or
/// past `max_width` closes the current line and is measured again against a
/// fresh one. Runes the face cannot map are dropped without consuming width.
///
/// A rune that does not fit even on an empty line is emitted as a line of its
/// own, so the loop always makes progress. That line is the only one allowed
/// to reach `max_width`.
///
/// Empty input produces no lines, and a trailing line break does not add an
/// empty line at the end.
pub fn wrap<F: FontFace>(
    text: &str,
    max_width: Fixed,
    face: &F,
    config: &WrapConfig,
) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut line = LineBuffer::default();
    let mut chars = text.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if config.linebreak_chars.contains(&ch) {
            line.flush(&mut lines);
            chars.next();
            continue;
        }

        if config.ignored_chars.contains(&ch) {
            chars.next();
            continue;
        }

        let metrics = face.glyph_metrics(ch);
        if !metrics.found {
            log::debug!("dropping unmapped rune {ch:?}");
            chars.next();
            continue;
        }

        if line.width + metrics.advance < max_width {
            line.push(ch, metrics.advance);
            chars.next();
        } else if line.text.is_empty() {
            log::debug!(
                "rune {ch:?} (advance {}) is wider than the line budget {max_width}",
                metrics.advance
            );
            line.push(ch, metrics.advance);
            line.flush(&mut lines);
            chars.next();
        } else {
            // the same rune is measured again against the fresh line
            line.flush(&mut lines);
        }
    }

    if !line.text.is_empty() {
        line.flush(&mut lines);
    }

    lines
}
