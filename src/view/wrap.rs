//! Greedy word wrapping by terminal display width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` display cells.
///
/// Words are split on whitespace and joined with single spaces. A word
/// wider than `width` is hard-split across lines. Empty input yields no
/// lines. A zero width is treated as one.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for piece in split_by_width(word, width) {
                lines.push(piece);
            }
            // Continue filling after the last piece.
            if let Some(last) = lines.pop() {
                current_width = last.width();
                current = last;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_by_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Pad `text` with trailing spaces to exactly `width` cells.
///
/// Text already at or over `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_fits_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap_text("a   b\n\nc", 10), vec!["a b c"]);
    }

    #[test]
    fn hard_splits_long_words() {
        assert_eq!(
            wrap_text("https://example.com/x", 8),
            vec!["https://", "example.", "com/x"]
        );
    }

    #[test]
    fn continues_after_split_word() {
        assert_eq!(wrap_text("abcdefgh ij", 5), vec!["abcde", "fgh", "ij"]);
        assert_eq!(wrap_text("abcdefg h", 5), vec!["abcde", "fg h"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK char is two cells wide.
        assert_eq!(wrap_text("日本語 テキスト", 7), vec!["日本語", "テキス", "ト"]);
    }

    #[test]
    fn pad_to_width_fills_with_spaces() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }
}
