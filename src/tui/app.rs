mod handlers;
mod render;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use super::widgets::{Spinner, TextInput};
use crate::analysis::Analyzer;
use crate::presentation::{Event, Session};

/// Terminal-only state that never reaches the reducer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub input: TextInput,
    pub editing: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run the full-screen view until the user quits.
pub fn run_app(analyzer: Arc<dyn Analyzer>) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(analyzer);
    let mut ui = UiState::new();
    let mut spinner = Spinner::new();

    session.dispatch(Event::Start);
    let result = main_loop(&mut terminal, &mut session, &mut ui, &mut spinner);

    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if session.in_flight() > 0 {
        tracing::debug!(pending = session.in_flight(), "leaving with analyses in flight");
    }
    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    ui: &mut UiState,
    spinner: &mut Spinner,
) -> Result<()> {
    loop {
        session.poll_completions();
        let view = session.view();

        terminal.draw(|frame| {
            let area = frame.area();
            render::draw_ui(area, frame.buffer_mut(), &view, ui, spinner);
        })?;

        if ui.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            if let TermEvent::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                for event in handlers::handle_key(ui, session.state(), key) {
                    session.dispatch(event);
                }
            }
        } else {
            spinner.advance();
        }
    }
}
