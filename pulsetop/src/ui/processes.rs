//! Top processes table with per-cell coloring and zebra striping.

use pulsetop_agent::Snapshot;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::ui::util::parse_pct;

const COLS: [Constraint; 4] = [
    Constraint::Length(8),  // PID
    Constraint::Min(12),    // Name
    Constraint::Length(7),  // CPU %
    Constraint::Length(7),  // Mem %
];

fn cpu_color(v: f32) -> Color {
    if v > 70.0 {
        Color::Red
    } else if v > 30.0 {
        Color::Rgb(255, 165, 0)
    } else {
        Color::Green
    }
}

pub fn draw_processes(f: &mut ratatui::Frame<'_>, area: Rect, s: Option<&Snapshot>) {
    let procs = s.map(|ss| ss.processes.as_slice()).unwrap_or_default();
    let rows = procs.iter().enumerate().map(|(i, p)| {
        let zebra = if i % 2 == 0 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default()
        };
        let mem_style = if parse_pct(&p.mem) > 10.0 {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(p.pid.clone()),
            Cell::from(p.name.clone()),
            Cell::from(p.cpu.clone()).style(Style::default().fg(cpu_color(parse_pct(&p.cpu)))),
            Cell::from(p.mem.clone()).style(mem_style),
        ])
        .style(zebra)
    });
    let header = Row::new(vec!["PID", "NAME", "CPU %", "MEM %"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let table = Table::new(rows, COLS)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL).title("Top Processes"));
    f.render_widget(table, area);
}
