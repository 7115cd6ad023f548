//! Listening TCP ports table.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

const COLS: [Constraint; 3] = [
    Constraint::Length(7),  // Port
    Constraint::Min(10),    // Process
    Constraint::Length(8),  // PID
];

pub fn draw_ports(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let ports = s.map(|ss| ss.ports.as_slice()).unwrap_or_default();
    let rows = ports.iter().map(|p| {
        Row::new(vec![p.port.clone(), p.process.clone(), p.pid.clone()])
            .style(Style::default().fg(Color::Gray))
    });
    let header = Row::new(vec!["PORT", "PROCESS", "PID"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(rows, COLS).header(header).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Listening Ports ({})", ports.len())),
    );
    f.render_widget(table, area);
}
