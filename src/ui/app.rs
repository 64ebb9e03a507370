//! Main TUI application state and logic

use crate::interpreter::constants::PLAY_INTERVAL_MS;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::ui::panes::{self, SourceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Grid,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> grid -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Grid,
            FocusedPane::Grid => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Log,
            FocusedPane::Grid => FocusedPane::Source,
            FocusedPane::Log => FocusedPane::Grid,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance, already run
    pub interpreter: Interpreter,

    /// The source code being executed
    pub source_code: String,

    /// Error that stopped the run early, shown in the status bar
    pub run_error: Option<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app with the given interpreter and source code
    pub fn new(interpreter: Interpreter, source_code: String, run_error: Option<RuntimeError>) -> Self {
        let now = Instant::now();
        App {
            interpreter,
            source_code,
            run_error: run_error.map(|e| e.to_string()),
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS) {
                if self.interpreter.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.log_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        // Left column: Program (top) | Moves (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            self.interpreter.current_location(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_log_pane(
            frame,
            left_rows[1],
            self.interpreter.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        panes::render_grid_pane(
            frame,
            columns[1],
            self.interpreter.robot(),
            self.interpreter.trail(),
            self.focused_pane == FocusedPane::Grid,
        );

        let at_end = self.interpreter.history_position() + 1 >= self.interpreter.total_snapshots();
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.interpreter.history_position(),
            self.interpreter.total_snapshots(),
            self.run_error.as_deref().filter(|_| at_end),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c as usize - '0' as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.interpreter.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
                FocusedPane::Grid => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
                FocusedPane::Grid => {}
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(PLAY_INTERVAL_MS))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.interpreter.jump_to_end() {
                    Ok(()) => "Jumped to end".to_string(),
                    Err(e) => e.to_string(),
                };
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.interpreter.rewind_to_start() {
                    Ok(()) => "Jumped to start".to_string(),
                    Err(e) => e.to_string(),
                };
                self.log_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.interpreter.step_forward() {
            Ok(()) => {
                self.status_message = match self.interpreter.current_command() {
                    Some(cmd) => format!("Stepped forward: {}", cmd),
                    None => "Stepped forward".to_string(),
                };
                self.log_scroll = usize::MAX;
            }
            Err(RuntimeError::HistoryOperationFailed { message }) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.interpreter.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(RuntimeError::HistoryOperationFailed { message }) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}
