//! Plain-text measuring and wrapping helpers for widget layout

use ratatui::text::{Span, Text};

/// Display width of `s` in terminal cells
#[must_use]
pub fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Truncate `s` to at most `width` cells, ending with `…` when cut
#[must_use]
pub fn truncate_with_ellipsis(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let mut buf = [0u8; 4];
        let w = display_width(ch.encode_utf8(&mut buf));
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap of `s` into lines of at most `width` cells.
///
/// Words longer than `width` are split. An empty input yields no lines.
#[must_use]
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_width = 0;
    for word in s.split_whitespace() {
        let word_width = display_width(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-split an overlong word.
        for ch in word.chars() {
            let mut buf = [0u8; 4];
            let w = display_width(ch.encode_utf8(&mut buf));
            if current_width + w > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap to at most `max_lines`, ellipsizing the last kept line when text is cut
#[must_use]
pub fn clamp_lines(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(s, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let marked = format!("{last} …");
            *last = truncate_with_ellipsis(&marked, width);
            if !last.ends_with('…') {
                last.push('…');
            }
        }
    }
    lines
}

/// Concatenated plain text of each line of `text`
#[must_use]
pub fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
        .collect()
}
