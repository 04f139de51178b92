//! Text helpers used by the details and listing output.

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Formats a byte count as `N B`, `X.Y KB` or `X.Y MB`.
pub fn format_file_size(bytes: usize) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Counts `\n`-separated segments: empty text is one line and a trailing
/// newline starts a final empty line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Returns at most `max_lines` lines of `text`, each cut to `max_line_len`
/// characters (ending in `...` when cut). A final `...` line marks omitted
/// lines.
pub fn content_preview(text: &str, max_lines: usize, max_line_len: usize) -> String {
    let mut out = Vec::with_capacity(max_lines + 1);
    for (i, line) in text.split('\n').enumerate() {
        if i >= max_lines {
            out.push("...".to_string());
            break;
        }
        out.push(truncate_line(line, max_line_len));
    }
    out.join("\n")
}

/// Keeps the tail of `path` when it is longer than `max_len` characters.
/// The result never exceeds `max_len`; below 4 there is no room for the
/// ellipsis and the bare tail is returned.
pub fn short_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        return path.to_string();
    }
    if max_len <= 3 {
        return path.chars().skip(len - max_len).collect();
    }
    let keep = max_len - 3;
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

fn truncate_line(line: &str, max_len: usize) -> String {
    if line.chars().count() <= max_len {
        return line.to_string();
    }
    if max_len <= 3 {
        return line.chars().take(max_len).collect();
    }
    let head: String = line.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", head)
}
