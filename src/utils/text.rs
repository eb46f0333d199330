//! Text fitting helpers for card and column rendering
//!
//! All widths are counted in chars, so multi-byte titles are cut on char
//! boundaries.

/// Cut `s` to at most `max_len` chars, ending in "..." when something was cut
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{kept}...")
}

/// Split words longer than `width` into width-sized pieces
fn pieces(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            out.push(chunk.iter().collect());
        }
    }
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` chars.
///
/// When the text does not fit, the last kept line ends in "...".
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for piece in pieces(text, width) {
        let piece_len = piece.chars().count();
        let current_len = current.chars().count();
        if current_len == 0 {
            current = piece;
        } else if current_len + 1 + piece_len <= width {
            current.push(' ');
            current.push_str(&piece);
        } else {
            lines.push(std::mem::replace(&mut current, piece));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let last_len = last.chars().count();
            if last_len + 3 <= width {
                last.push_str("...");
            } else {
                let kept: String = last.chars().take(width.saturating_sub(3)).collect();
                *last = format!("{kept}...");
            }
        }
    }
    lines
}
