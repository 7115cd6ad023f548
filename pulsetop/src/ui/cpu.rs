//! CPU gauge: combined user + system load, breakdown in the label.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
};

use crate::ui::util::pct_color;

pub fn draw_cpu(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let cpu = s.map(|ss| ss.cpu.clone()).unwrap_or_default();
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("CPU"))
        .gauge_style(Style::default().fg(pct_color(cpu.usage)))
        .percent(u16::from(cpu.usage.min(100)))
        .label(format!(
            "{}%  (usr {:.1} sys {:.1} idle {:.1})",
            cpu.usage, cpu.user, cpu.system, cpu.idle
        ));
    f.render_widget(g, area);
}
