//! Top header with host, OS, uptime, collection time and the loading marker.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>, loading: bool) {
    let status = if loading { "  ⟳ collecting..." } else { "" };
    let title = if let Some(ss) = s {
        format!(
            "pulsetop | host: {} | {} | up {} | at {}{}  ('r' refresh, 'q' quit)",
            ss.host.hostname, ss.host.os, ss.host.uptime, ss.collected_at, status
        )
    } else {
        format!("pulsetop | waiting for first sample...{status}  ('q' to quit)")
    };
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
