//! Help-text layout helpers shared by option and form rendering.

/// Display width help blocks are wrapped to.
pub(crate) const WRAP_WIDTH: usize = 80;

/// Break text into lines of at most `width` columns on word boundaries.
/// Words longer than the width get a line of their own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(16);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
