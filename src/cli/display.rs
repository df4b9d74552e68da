// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the topmatch CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Respects
//! `NO_COLOR` and falls back to plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `TOPMATCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use topmatch::MatchTier;

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TOPMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg" where bg 7 or 9-15 is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Named palette slots, resolved against the current theme.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Blue,
    Magenta,
    Cyan,
    Yellow,
    Gray,
}

impl Color {
    fn rgb(self) -> (u8, u8, u8) {
        match (theme(), self) {
            (Theme::Dark, Color::Green) => (152, 195, 121),
            (Theme::Dark, Color::Blue) => (97, 175, 239),
            (Theme::Dark, Color::Magenta) => (198, 120, 221),
            (Theme::Dark, Color::Cyan) => (86, 182, 194),
            (Theme::Dark, Color::Yellow) => (229, 192, 123),
            (Theme::Dark, Color::Gray) => (92, 99, 112),
            (Theme::Light, Color::Green) => (80, 161, 79),
            (Theme::Light, Color::Blue) => (64, 120, 242),
            (Theme::Light, Color::Magenta) => (166, 38, 164),
            (Theme::Light, Color::Cyan) => (1, 132, 188),
            (Theme::Light, Color::Yellow) => (193, 132, 1),
            (Theme::Light, Color::Gray) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Colors only when stdout is a terminal and `NO_COLOR` is unset.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color (plus modifiers) if colors are on.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `s` to at most `max` visible chars, marking the cut with '…'.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn border(text: &str) -> String {
    themed(Color::Gray, &[], text)
}

/// ┌─ LABEL ──────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(Color::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// │ content      │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// └──────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// Color-coded tier badge.
pub fn tier_label(tier: MatchTier) -> String {
    let (short, color) = match tier {
        MatchTier::Exact => ("EXACT", Color::Green),
        MatchTier::Substring => ("SUBSTR", Color::Blue),
        MatchTier::TokenOverlap => ("TOKENS", Color::Magenta),
    };
    themed(color, &[], &format!("{:<6}", short))
}

/// Score with three decimals, brighter for stronger tiers.
pub fn score_value(score: f64, tier: MatchTier) -> String {
    let color = match tier {
        MatchTier::Exact => Color::Green,
        MatchTier::Substring => Color::Yellow,
        MatchTier::TokenOverlap => Color::Gray,
    };
    themed(color, &[], &format!("{:>8.3}", score))
}
