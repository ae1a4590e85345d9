use crate::app::{AppMode, App};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{render_input_pane, render_output_pane, render_status_line};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw and dispatch input until the app asks to quit.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                debug!("leaving event loop");
                return Ok(());
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let state = app.get_render_state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let input_area = chunks[0];
    let inner_height = input_area.height.saturating_sub(2);
    frame.render_widget(render_input_pane(&state, inner_height), input_area);
    frame.render_widget(render_output_pane(&state), chunks[1]);
    frame.render_widget(render_status_line(&state), chunks[2]);

    match state.mode {
        AppMode::Editing => {
            let (row, col) = state.cursor;
            let row = u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_sub(state.input_scroll(inner_height));
            let col = u16::try_from(col).unwrap_or(u16::MAX);
            let x = input_area
                .x
                .saturating_add(1)
                .saturating_add(col)
                .min(input_area.right().saturating_sub(2));
            let y = input_area.y.saturating_add(1).saturating_add(row);
            frame.set_cursor_position(Position::new(x, y));
        }
        AppMode::Command => {
            let deck_len = state
                .command_line
                .as_deref()
                .map(unicode_width::UnicodeWidthStr::width)
                .unwrap_or(0);
            let x = chunks[2]
                .x
                .saturating_add(2)
                .saturating_add(u16::try_from(deck_len).unwrap_or(u16::MAX));
            frame.set_cursor_position(Position::new(x, chunks[2].y));
        }
        _ => {}
    }
}
