use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::mem;

use bitmap_text_font6x8::FONT_WIDTH;
use log::debug;

/// Greedily wrap `text` into lines no wider than `max_width` pixels of
/// unscaled glyph cells.
///
/// Words are separated by runs of whitespace and rejoined with single
/// spaces. A word longer than a whole line is hard-broken into full-width
/// chunks; its remainder starts the next line and can take further words.
///
/// The budget does not account for scaling: to wrap text rendered at
/// `font_size`, pass `max_width / font_size`. A width narrower than one glyph
/// still allows one character per line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut chars_per_line = max_width / FONT_WIDTH;
    if chars_per_line == 0 {
        debug!("max width {max_width} is narrower than one glyph, wrapping one character per line");
        chars_per_line = 1;
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len + word_len + 1 <= chars_per_line {
            if !current.is_empty() {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        } else {
            if !current.is_empty() {
                lines.push(mem::take(&mut current));
            }
            current = word.to_owned();
            current_len = word_len;

            while current_len > chars_per_line {
                let rest = split_off_chars(&mut current, chars_per_line);
                lines.push(mem::replace(&mut current, rest));
                current_len -= chars_per_line;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncate `s` to its first `n` characters, returning the rest.
fn split_off_chars(s: &mut String, n: usize) -> String {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_off(at)
}
