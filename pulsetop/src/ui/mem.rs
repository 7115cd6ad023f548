//! Memory gauge.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

pub fn draw_mem(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let mem = s.map(|ss| ss.memory.clone()).unwrap_or_default();
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Memory"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(u16::from(mem.percent.min(100)))
        .label(format!("{} / {} ({} free)", mem.used, mem.total, mem.free));
    f.render_widget(g, area);
}
