//! Battery panel: gauge when a charge level is known, text otherwise.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

pub fn draw_battery(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let batt = s.map(|ss| ss.battery.clone()).unwrap_or_default();
    let state = if batt.charging { "charging" } else { "on battery" };
    let title = format!("Battery ({})", batt.source);

    if !batt.is_known() {
        let p = Paragraph::new(batt.percent_label())
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(p, area);
        return;
    }

    let color = if batt.charging {
        Color::Cyan
    } else if batt.percent < 20 {
        Color::Red
    } else {
        Color::Green
    };
    let pct = u16::try_from(batt.percent).unwrap_or(0).min(100);
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{} {}", batt.percent_label(), state));
    f.render_widget(g, area);
}
