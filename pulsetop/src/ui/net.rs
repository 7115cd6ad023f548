//! Connectivity panel: Wi-Fi network and Bluetooth radio with connected devices.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw_net(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let (wifi, bt) = s
        .map(|ss| (ss.wifi.clone(), ss.bluetooth.clone()))
        .unwrap_or_default();

    let wifi_color = if wifi.connected { Color::Green } else { Color::DarkGray };
    let bt_color = if bt.enabled { Color::Blue } else { Color::DarkGray };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Wi-Fi:     "),
            Span::styled(wifi.network, Style::default().fg(wifi_color)),
        ]),
        Line::from(vec![
            Span::raw("Bluetooth: "),
            Span::styled(
                if bt.enabled { "On" } else { "Off" },
                Style::default().fg(bt_color),
            ),
        ]),
    ];
    if bt.devices.is_empty() {
        lines.push(Line::from("  no devices connected"));
    } else {
        for d in &bt.devices {
            lines.push(Line::from(format!("  • {d}")));
        }
    }

    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Network"));
    f.render_widget(p, area);
}
