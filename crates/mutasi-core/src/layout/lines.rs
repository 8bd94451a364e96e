//! Grouping of positioned words into visual text lines.

use crate::pdf::PositionedWord;

/// Default vertical tolerance for words on the same line.
pub const DEFAULT_LINE_TOLERANCE: f64 = 5.0;

/// A visual text line: words sharing approximately the same `top`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// `top` of the first word placed on the line.
    pub top: f64,
    /// Words on the line, in `(top, x0)` order.
    pub words: Vec<PositionedWord>,
}

impl Line {
    fn starting_with(word: PositionedWord) -> Self {
        Self {
            top: word.top,
            words: vec![word],
        }
    }

    /// Join the word texts with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the first word in `(top, x0)` order.
    pub fn first_word(&self) -> Option<&PositionedWord> {
        self.words.first()
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Group words into lines ordered top-to-bottom.
///
/// Words are sorted by `(top, x0)`. A word joins the current line while its
/// `top` is within `tolerance` of the line's reference `top`, which is the
/// `top` of the first word of that line and is never averaged.
pub fn group_words_into_lines(mut words: Vec<PositionedWord>, tolerance: f64) -> Vec<Line> {
    words.sort_by(|a, b| a.top.total_cmp(&b.top).then(a.x0.total_cmp(&b.x0)));

    let mut lines = Vec::new();
    let mut current: Option<Line> = None;

    for word in words {
        match current.as_mut() {
            Some(line) if (word.top - line.top).abs() < tolerance => line.words.push(word),
            _ => {
                if let Some(done) = current.replace(Line::starting_with(word)) {
                    lines.push(done);
                }
            }
        }
    }

    if let Some(done) = current {
        lines.push(done);
    }

    lines
}
