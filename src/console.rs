use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

pub const ANSI_REGEX_PATTERN: &str = r"\x1b\[[0-9;?]*[a-zA-Z]|\x1b].*?(\x1b\\|[\x07])";

pub fn strip_ansi_codes(s: &str) -> String {
    static RE: std::sync::LazyLock<regex::Regex> =
        std::sync::LazyLock::new(|| regex::Regex::new(ANSI_REGEX_PATTERN).unwrap());
    RE.replace_all(s, "").to_string()
}

pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        // 1. Check ROLLBOOK_COLUMNS
        if let Ok(w) = std::env::var("ROLLBOOK_COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        // 2. Check COLUMNS
        if let Ok(w) = std::env::var("COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        // 3. System TTY (only consulted when the env vars are missing)
        if is_stdout_terminal()
            && let Ok((w, _)) = crossterm::terminal::size()
        {
            return w as usize;
        }

        // 4. Default fallback
        80
    });

    *TERMINAL_WIDTH
}

/// Renders a box-drawing panel with centered content, e.g. the shell banner.
pub fn render_panel(title: &str, lines: &[String], width: usize) -> String {
    let inner_width = width.saturating_sub(2);
    let title_fmt = if title.is_empty() {
        String::new()
    } else {
        format!(" {} ", title)
    };

    let title_width = UnicodeWidthStr::width(title_fmt.as_str());
    let total_dashes = inner_width.saturating_sub(title_width);
    let left_dashes = total_dashes / 2;
    let right_dashes = total_dashes - left_dashes;

    let mut out = format!(
        "╭{}{}{}╮\n",
        "─".repeat(left_dashes),
        title_fmt,
        "─".repeat(right_dashes)
    );

    for line in lines {
        let stripped = strip_ansi_codes(line);
        let visible_len = UnicodeWidthStr::width(stripped.as_str());
        let total_padding = inner_width.saturating_sub(visible_len);
        let left_padding = total_padding / 2;
        let right_padding = total_padding - left_padding;

        out.push_str(&format!(
            "│{}{}{}│\n",
            " ".repeat(left_padding),
            line,
            " ".repeat(right_padding)
        ));
    }

    out.push_str(&format!("╰{}╯\n", "─".repeat(inner_width)));
    out
}

pub fn is_stdout_terminal() -> bool {
    if std::env::var("ROLLBOOK_FORCE_TTY").is_ok() {
        return true;
    }
    std::io::stdout().is_terminal()
}
