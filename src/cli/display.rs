// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal output for `folio search` and `folio inspect`.
//!
//! Colors come from a small role-based palette with a dark and a light
//! variant. The variant is picked from `FOLIO_THEME` ("dark" or "light"),
//! then the `COLORFGBG` background hint, then macOS appearance, and falls
//! back to dark. `NO_COLOR` or a non-TTY stdout turns styling off entirely.
//!
//! ```text
//! ╔══════════════════════════════════╗
//! ║       folio search: "love"       ║   banner()
//! ╚══════════════════════════════════╝
//! ┌─ THE SONNETS (3) ────────────────┐   section()
//! │ ...thy *love* is better than...  │   line()
//! └──────────────────────────────────┘   close()
//! ```

use folio::Highlight;
use std::sync::OnceLock;

/// Inner width of every box, border characters excluded.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

fn detect_theme() -> Theme {
    if let Ok(value) = std::env::var("FOLIO_THEME") {
        match value.to_ascii_lowercase().as_str() {
            "light" => return Theme::Light,
            "dark" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and 9..=15 are light
    let light_background = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8);
    if light_background {
        return Theme::Light;
    }

    #[cfg(target_os = "macos")]
    {
        let appearance = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output();
        if let Ok(output) = appearance {
            if output.status.success() && !String::from_utf8_lossy(&output.stdout).contains("Dark")
            {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(detect_theme)
}

/// Whether stdout gets ANSI styling.
pub fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// What a piece of text is, independent of how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Single-line section borders
    Border,
    /// Double-line banner borders
    Frame,
    /// Banner text
    Title,
    /// Section labels
    Heading,
    /// Table column names
    Label,
    /// Highlighted match text
    Match,
    /// Footnotes and secondary values
    Muted,
}

impl Role {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Role::Border | Role::Muted) => (92, 99, 112),
            (Theme::Dark, Role::Frame) => (97, 175, 239),
            (Theme::Dark, Role::Title) => (102, 217, 239),
            (Theme::Dark, Role::Heading) => (86, 182, 194),
            (Theme::Dark, Role::Label | Role::Match) => (229, 192, 123),
            (Theme::Light, Role::Border | Role::Muted) => (160, 161, 167),
            (Theme::Light, Role::Frame) => (64, 120, 242),
            (Theme::Light, Role::Title) => (1, 112, 158),
            (Theme::Light, Role::Heading) => (1, 132, 188),
            (Theme::Light, Role::Label | Role::Match) => (193, 132, 1),
        }
    }

    fn weight(self) -> &'static str {
        match self {
            Role::Title | Role::Heading | Role::Label | Role::Match => BOLD,
            Role::Muted => DIM,
            Role::Border | Role::Frame => "",
        }
    }

    fn open(self) -> String {
        let (r, g, b) = self.rgb();
        format!("{}\x1b[38;2;{};{};{}m", self.weight(), r, g, b)
    }
}

/// Style `text` for `role`, or return it untouched without colors.
pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", role.open(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printable width of `s`, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for terminator in chars.by_ref() {
                if terminator == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Pad `s` with spaces to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KB * KB {
        format!("{:.1} MB", b / KB / KB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

// ============================================================================
// BOXES
// ============================================================================

/// Three-line double-bordered title block.
pub fn banner(text: &str) {
    let edge = "═".repeat(BOX_WIDTH);
    let label = paint(Role::Title, text);
    let free = BOX_WIDTH.saturating_sub(visible_len(&label));
    let (left, right) = (free / 2, free - free / 2);

    println!("{}", paint(Role::Frame, &format!("╔{}╗", edge)));
    println!(
        "{}{}{}{}{}",
        paint(Role::Frame, "║"),
        " ".repeat(left),
        label,
        " ".repeat(right),
        paint(Role::Frame, "║")
    );
    println!("{}", paint(Role::Frame, &format!("╚{}╝", edge)));
}

/// Open a section box with `label` set into its top border.
pub fn section(label: &str) {
    let label = format!("─ {} ", paint(Role::Heading, label));
    let rest = BOX_WIDTH.saturating_sub(visible_len(&label));
    println!(
        "{}{}{}",
        paint(Role::Border, "┌"),
        label,
        paint(Role::Border, &format!("{}┐", "─".repeat(rest)))
    );
}

/// One padded line inside the current section.
pub fn line(content: &str) {
    println!(
        "{}{}{}",
        paint(Role::Border, "│"),
        pad_right(content, BOX_WIDTH),
        paint(Role::Border, "│")
    );
}

/// A `label  value` line, labels aligned to `width`.
pub fn field(label: &str, value: &str, width: usize) {
    line(&format!(" {} {}", pad_right(&paint(Role::Muted, label), width), value));
}

pub fn close() {
    println!("{}", paint(Role::Border, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Dimmed line outside any box.
pub fn footnote(text: &str) {
    println!("{}", paint(Role::Muted, text));
}

// ============================================================================
// SNIPPETS
// ============================================================================

/// Replace highlight markers with terminal styling and flatten line breaks.
///
/// Without colors the match is wrapped in `*`.
pub fn render_snippet(text: &str, highlight: &Highlight, colors: bool) -> String {
    let (open, close) = if colors {
        (Role::Match.open(), RESET.to_string())
    } else {
        ("*".to_string(), "*".to_string())
    };
    text.replace(&highlight.open, &open)
        .replace(&highlight.close, &close)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greedy word wrap by visible width. A word wider than `width` sits on a
/// line of its own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_len = visible_len(word);
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
