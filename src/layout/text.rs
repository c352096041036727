//! Greedy word wrapping against font metrics.

use super::fonts::StandardFont;

/// Wraps `text` to lines no wider than `max_width` when set in `font` at `size`.
///
/// Explicit newlines always break; each paragraph is wrapped on its own so
/// bullet rows and `key: value` rows never merge. A whitespace-only paragraph
/// becomes one empty line. A word wider than `max_width` is kept whole on its
/// own line.
pub fn wrap_text(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = text.replace('\r', "");
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, font, size, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    font: StandardFont,
    size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) {
    let mut line = String::new();
    for word in paragraph.split_whitespace() {
        let trial = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if font.measure(&trial, size) <= max_width {
            line = trial;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
}
