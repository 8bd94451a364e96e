//! Word collection from pdf-extract glyph output.

use pdf_extract::{MediaBox, OutputDev, OutputError, Transform};
use tracing::trace;

use super::PositionedWord;
use crate::layout::group_words_into_lines;

/// Maximum horizontal gap between glyphs of the same word.
const X_TOLERANCE: f64 = 3.0;

/// Maximum vertical offset between glyphs of the same word.
const Y_TOLERANCE: f64 = 3.0;

/// Glyphs of a word being assembled.
#[derive(Debug)]
struct PendingWord {
    text: String,
    x0: f64,
    x1: f64,
    top: f64,
    bottom: f64,
}

impl PendingWord {
    fn accepts(&self, x: f64, top: f64) -> bool {
        x - self.x1 <= X_TOLERANCE && x >= self.x0 && (top - self.top).abs() <= Y_TOLERANCE
    }

    fn into_word(self) -> PositionedWord {
        PositionedWord {
            text: self.text,
            x0: self.x0,
            x1: self.x1,
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// Output device that turns positioned glyphs into words, page by page.
///
/// Glyph positions are flipped so that `top` is measured from the top edge
/// of the page. A word ends at whitespace or when the next glyph is more than
/// a few points away.
#[derive(Debug, Default)]
pub struct WordCollector {
    pages: Vec<Vec<PositionedWord>>,
    current: Vec<PositionedWord>,
    pending: Option<PendingWord>,
    page_height: f64,
}

impl WordCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the collector, returning the words of each finished page.
    pub fn into_pages(self) -> Vec<Vec<PositionedWord>> {
        self.pages
    }

    fn flush(&mut self) {
        if let Some(word) = self.pending.take() {
            self.current.push(word.into_word());
        }
    }
}

impl OutputDev for WordCollector {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        trace!("Collecting words from page {}", page_num);
        self.page_height = media_box.ury - media_box.lly;
        self.current.clear();
        self.pending = None;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.flush();
        self.pages.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        _spacing: f64,
        font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        if char.trim().is_empty() {
            self.flush();
            return Ok(());
        }

        let scaled_x = font_size * (trm.m11 + trm.m21);
        let scaled_y = font_size * (trm.m12 + trm.m22);
        let size = (scaled_x * scaled_y).abs().sqrt();

        let x = trm.m31;
        let baseline = self.page_height - trm.m32;
        let top = baseline - size;
        let advance = width * size;

        match self.pending.as_mut() {
            Some(word) if word.accepts(x, top) => {
                word.text.push_str(char);
                word.x1 = word.x1.max(x + advance);
            }
            _ => {
                self.flush();
                self.pending = Some(PendingWord {
                    text: char.to_string(),
                    x0: x,
                    x1: x + advance,
                    top,
                    bottom: baseline,
                });
            }
        }

        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Render words as text: one visual line per text line, words space-separated.
pub(crate) fn render_text(words: &[PositionedWord]) -> String {
    group_words_into_lines(words.to_vec(), Y_TOLERANCE)
        .iter()
        .map(|line| line.text())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MEDIA_BOX: MediaBox = MediaBox {
        llx: 0.0,
        lly: 0.0,
        urx: 600.0,
        ury: 800.0,
    };

    /// Emit `text` glyph by glyph at a 10pt size with 5pt advances.
    fn show(collector: &mut WordCollector, text: &str, x: f64, y: f64) {
        for (i, c) in text.chars().enumerate() {
            let trm = Transform::row_major(1.0, 0.0, 0.0, 1.0, x + i as f64 * 5.0, y);
            collector
                .output_character(&trm, 0.5, 0.0, 10.0, &c.to_string())
                .unwrap();
        }
    }

    #[test]
    fn test_words_split_on_space_and_gap() {
        let mut collector = WordCollector::new();
        collector.begin_page(1, &MEDIA_BOX, None).unwrap();
        show(&mut collector, "Saldo Awal", 50.0, 500.0);
        show(&mut collector, "1,000.00", 400.0, 500.0);
        collector.end_page().unwrap();

        let pages = collector.into_pages();
        let texts: Vec<&str> = pages[0].iter().map(|w| w.text.as_str()).collect();

        assert_eq!(texts, vec!["Saldo", "Awal", "1,000.00"]);
        assert_eq!(pages[0][0].x0, 50.0);
        assert_eq!(pages[0][0].x1, 75.0);
        assert_eq!(pages[0][0].top, 290.0);
        assert_eq!(pages[0][0].bottom, 300.0);
        assert_eq!(pages[0][2].x0, 400.0);
    }

    #[test]
    fn test_words_split_on_line_change() {
        let mut collector = WordCollector::new();
        collector.begin_page(1, &MEDIA_BOX, None).unwrap();
        show(&mut collector, "AB", 50.0, 500.0);
        show(&mut collector, "CD", 60.0, 480.0);
        collector.end_page().unwrap();

        let pages = collector.into_pages();
        assert_eq!(pages[0].len(), 2);
        assert_eq!(pages[0][1].top, 310.0);
    }

    #[test]
    fn test_pages_kept_separate() {
        let mut collector = WordCollector::new();
        for page in 1..=2 {
            collector.begin_page(page, &MEDIA_BOX, None).unwrap();
            show(&mut collector, "Tanggal", 30.0, 450.0);
            collector.end_page().unwrap();
        }

        let pages = collector.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn test_render_text() {
        let words = vec![
            PositionedWord::new("Valuta", 10.0, 100.0),
            PositionedWord::new(":", 60.0, 100.0),
            PositionedWord::new("IDR", 70.0, 101.0),
            PositionedWord::new("Unit", 10.0, 120.0),
        ];

        assert_eq!(render_text(&words), "Valuta : IDR\nUnit");
        assert_eq!(render_text(&[]), "");
    }
}
