//! Root volume gauge.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::ui::util::pct_color;

pub fn draw_disk(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let disk = s.map(|ss| ss.host.disk.clone()).unwrap_or_default();
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Disk /"))
        .gauge_style(Style::default().fg(pct_color(disk.percent)))
        .percent(u16::from(disk.percent.min(100)))
        .label(format!(
            "{} / {} ({} avail)",
            disk.used, disk.total, disk.available
        ));
    f.render_widget(g, area);
}
