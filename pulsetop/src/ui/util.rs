//! Small UI helpers shared by the panels.

use ratatui::style::Color;

/// Green / yellow / red by load.
pub fn pct_color(pct: u8) -> Color {
    match pct {
        0..=59 => Color::Green,
        60..=84 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Reads a ps-style percent column ("23.4"); anything else counts as zero.
pub fn parse_pct(s: &str) -> f32 {
    s.trim().trim_end_matches('%').parse::<f32>().unwrap_or(0.0)
}
