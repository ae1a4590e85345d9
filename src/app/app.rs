use super::buffer::InputBuffer;
use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::Config;
use crate::error::TokenizeError;
use crate::input::{self, Source};
use crate::report::render_outcome;
use crate::tokenizer::{Token, Tokenizer};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

pub const HELP_TEXT: &str = "\
Enter text, separating segments with the delimiter, then press Ctrl+T.

Keys
  Ctrl+T        tokenize the input
  Tab           switch between input and output
  Up/Down       scroll output (output focused)
  Esc           open the command deck
  Ctrl+C        quit

Commands
  :t  :tokenize tokenize the input
  :c  :clear    clear input and output
  :h  :help     show this help
  :q  :quit     quit
  @path         load a text file into the input
  @@            load the clipboard into the input";

/// Result of the most recent tokenize request.
pub type Outcome = Result<Vec<Token>, TokenizeError>;

pub struct App {
    mode: AppMode,
    buffer: InputBuffer,
    command_line: String,
    tokenizer: Tokenizer,
    separator_width: usize,
    outcome: Option<Outcome>,
    show_help: bool,
    status: String,
    scroll: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: AppMode::Editing,
            buffer: InputBuffer::new(),
            command_line: String::new(),
            tokenizer: Tokenizer::new(config.delimiter),
            separator_width: config.separator_width,
            outcome: None,
            show_help: false,
            status: format!("Delimiter '{}'. Esc for commands, :h for help.", config.delimiter),
            scroll: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
    }

    /// Tokenize the current input, replacing any previous outcome.
    pub fn tokenize(&mut self) {
        let outcome = self.tokenizer.analyze(self.buffer.text());
        match &outcome {
            Ok(tokens) => {
                info!(tokens = tokens.len(), "tokenize request");
                self.status = format!("{} tokens", tokens.len());
            }
            Err(err) => {
                warn!(%err, "tokenize request rejected");
                self.status = err.to_string();
            }
        }
        self.outcome = Some(outcome);
        self.show_help = false;
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tokenize => self.tokenize(),
            AppEvent::Clear => {
                self.buffer.clear();
                self.outcome = None;
                self.scroll = 0;
                self.status = "Cleared".to_string();
            }
            AppEvent::LoadFile(path) => self.load(Source::File(path)),
            AppEvent::LoadClipboard => self.load(Source::Clipboard),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => {
                self.show_help = true;
                self.scroll = 0;
            }
            AppEvent::InvalidCommand(input) => {
                self.status = format!("Unknown command: {input}");
            }
        }
    }

    fn load(&mut self, source: Source) {
        match input::load(&source) {
            Ok(loaded) => {
                self.buffer.set_text(loaded.text);
                self.status = format!("Loaded {}", loaded.source);
            }
            Err(err) => {
                warn!(%err, "failed to load input");
                self.status = err.to_string();
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.mode = AppMode::Quit,
                KeyCode::Char('t') => self.tokenize(),
                _ => {}
            }
            return;
        }

        match self.mode {
            AppMode::Editing => self.handle_editing_key(key.code),
            AppMode::Command => self.handle_command_key(key.code),
            AppMode::Viewing => self.handle_viewing_key(key.code),
            AppMode::Quit => {}
        }
    }

    /// Bracketed paste goes straight into whichever line has focus.
    pub fn handle_paste(&mut self, text: &str) {
        match self.mode {
            AppMode::Editing => self.buffer.insert_str(text),
            AppMode::Command => self.command_line.push_str(text.trim_end_matches('\n')),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.buffer.insert(c),
            KeyCode::Enter => self.buffer.insert('\n'),
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Home => self.buffer.move_line_start(),
            KeyCode::End => self.buffer.move_line_end(),
            KeyCode::Tab => self.mode = AppMode::Viewing,
            KeyCode::Esc => self.enter_command_mode(),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.command_line.push(c),
            KeyCode::Backspace => {
                self.command_line.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.command_line);
                self.mode = AppMode::Editing;
                self.handle_event(command_to_app_event(parse_command(&line)));
            }
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = AppMode::Editing;
            }
            _ => {}
        }
    }

    fn handle_viewing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Tab => self.mode = AppMode::Editing,
            KeyCode::Esc => self.enter_command_mode(),
            _ => {}
        }
    }

    fn enter_command_mode(&mut self) {
        self.command_line.clear();
        self.mode = AppMode::Command;
    }

    /// Text for the output pane: help, the latest report, or a prompt.
    pub fn output_text(&self) -> String {
        if self.show_help {
            return HELP_TEXT.to_string();
        }
        match &self.outcome {
            Some(outcome) => render_outcome(outcome, self.separator_width),
            None => "Press Ctrl+T to tokenize.".to_string(),
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            input: self.buffer.text().to_string(),
            cursor: self.buffer.cursor_position(),
            output: self.output_text(),
            is_error: matches!(self.outcome, Some(Err(_))) && !self.show_help,
            status: self.status.clone(),
            command_line: (self.mode == AppMode::Command).then(|| self.command_line.clone()),
            scroll: self.scroll,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
