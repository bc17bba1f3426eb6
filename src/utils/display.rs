//! Terminal display utilities for robust CLI output formatting.
//!
//! This module provides utilities for formatting CLI output that handles
//! different screen sizes, Unicode text, and terminal capabilities.

use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use terminal_size::terminal_size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal information with cached size and capabilities.
#[derive(Debug, Clone)]
pub struct Terminal {
    width: usize,
    is_tty: bool,
}

static TERMINAL_INFO: OnceLock<Terminal> = OnceLock::new();

/// Get the global terminal information, initialized on first call.
pub fn terminal_info() -> &'static Terminal {
    TERMINAL_INFO.get_or_init(|| {
        let width = terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_WIDTH);

        Terminal {
            width,
            is_tty: io::stdout().is_terminal(),
        }
    })
}

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

/// Widest card we draw, even on very wide terminals.
pub const MAX_CARD_WIDTH: usize = 72;

/// Narrowest card we draw.
pub const MIN_CARD_WIDTH: usize = 24;

/// Get the current terminal width in characters.
#[inline]
pub fn terminal_width() -> usize {
    terminal_info().width
}

/// Check if stdout is a terminal.
#[inline]
pub fn is_terminal() -> bool {
    terminal_info().is_tty
}

/// Card width for the current terminal.
pub fn card_width() -> usize {
    terminal_width().clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
}

/// Display width of `text` in terminal columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Word-wrap text into lines no wider than `max_width` columns.
///
/// Existing line breaks are kept. Words wider than a whole line are split.
///
/// ```
/// use prophet_says::utils::wrap_text;
///
/// assert_eq!(wrap_text("the quick brown fox", 9), vec!["the quick", "brown fox"]);
/// ```
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let (chunks, rest) = split_word(word, max_width);
                lines.extend(chunks);
                line_width = display_width(&rest);
                line = rest;
                continue;
            }

            let needed = if line.is_empty() {
                word_width
            } else {
                line_width + 1 + word_width
            };

            if needed > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            } else {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width = needed;
            }
        }

        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split an over-long word into full-width chunks plus a remainder.
fn split_word(word: &str, max_width: usize) -> (Vec<String>, String) {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for c in word.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(1);
        if width + w > max_width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            width = 0;
        }
        current.push(c);
        width += w;
    }

    (chunks, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("short", 20), vec!["short"]);
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        assert_eq!(wrap_text("a b\nc d", 10), vec!["a b", "c d"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_text_lines_fit() {
        let text = "This tradition has also been transmitted by Abu Hurairah through a different chain";
        for line in wrap_text(text, 20) {
            assert!(display_width(&line) <= 20, "line too wide: {:?}", line);
        }
    }
}
