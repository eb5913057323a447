pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use officeday_core::{FileSettingsRepository, FileStatusRepository, Settings, TrackerService};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

pub fn run(
    service: TrackerService<FileStatusRepository>,
    settings_repo: FileSettingsRepository,
    stored: Settings,
    settings: Settings,
    today: NaiveDate,
) -> Result<()> {
    // Build state before touching the terminal so load errors print normally
    let mut app = App::new(service, settings_repo, stored, settings, today)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-7),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(7),
                    KeyCode::Char(' ') | KeyCode::Enter => app.cycle_selected(),
                    KeyCode::Char('n') | KeyCode::PageDown => app.next_month(),
                    KeyCode::Char('p') | KeyCode::PageUp => app.previous_month(),
                    KeyCode::Char('t') => app.jump_to_today(),
                    KeyCode::Char('w') => app.toggle_pattern(),
                    KeyCode::Char('b') => app.toggle_holidays(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_percent(5),
                    KeyCode::Char('-') => app.nudge_percent(-5),
                    KeyCode::Char('r') => app.reset_month(),
                    _ => {}
                }
            }
        }
    }
}
