//! App state and main loop: input handling, reading the latest snapshot, drawing.

use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pulsetop_agent::{Sampler, Snapshot};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::time::timeout;
use tracing::debug;

use crate::ui::{
    battery::draw_battery, cpu::draw_cpu, disks::draw_disk, header::draw_header, mem::draw_mem,
    net::draw_net, ports::draw_ports, processes::draw_processes,
};

// Upper bound between redraws when no new snapshot arrives (keeps input responsive).
const FRAME_WAIT: Duration = Duration::from_millis(200);

pub struct App {
    sampler: Sampler,
    should_quit: bool,
}

impl App {
    pub fn new(sampler: Sampler) -> Self {
        Self {
            sampler,
            should_quit: false,
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let mut app = self;

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = app.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        app.sampler.shutdown().await;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        let mut updates = self.sampler.subscribe();
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind != KeyEventKind::Press {
                        continue;
                    }
                    match k.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.should_quit = true;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            debug!("manual refresh requested");
                            self.sampler.refresh();
                        }
                        _ => {}
                    }
                }
            }
            if self.should_quit {
                break;
            }

            let snapshot = self.sampler.latest();
            let loading = self.sampler.is_loading();
            terminal.draw(|f| draw(f, snapshot.as_deref(), loading))?;

            // Wake early when a fresh snapshot lands
            let _ = timeout(FRAME_WAIT, updates.changed()).await;
        }
        Ok(())
    }
}

pub fn draw(f: &mut ratatui::Frame<'_>, snapshot: Option<&Snapshot>, loading: bool) {
    let area = f.area();

    // Root rows: header, gauges, connectivity, tables
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // cpu | memory | disk
            Constraint::Length(6), // wifi + bluetooth | battery
            Constraint::Min(8),    // processes | ports
        ])
        .split(area);

    draw_header(f, rows[0], snapshot, loading);

    let gauges = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    draw_cpu(f, gauges[0], snapshot);
    draw_mem(f, gauges[1], snapshot);
    draw_disk(f, gauges[2], snapshot);

    let conn = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[2]);
    draw_net(f, conn[0], snapshot);
    draw_battery(f, conn[1], snapshot);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[3]);
    draw_processes(f, bottom[0], snapshot);
    draw_ports(f, bottom[1], snapshot);
}
