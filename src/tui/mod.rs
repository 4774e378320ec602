pub mod widgets;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use rand::RngExt;

use crate::pipeline::sample::{MAX_COUNT, MIN_COUNT};
use crate::pipeline::source::SelectionMode;
use crate::session::Session;

use widgets::{ControlsWidget, PaletteWidget};

type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// What keystrokes currently mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing the path of a palette file to load.
    LoadPath(String),
}

/// State for the interactive TUI application.
pub struct TuiApp<R: RngExt> {
    pub session: Session,
    pub mode: SelectionMode,
    pub count: usize,
    pub out_dir: PathBuf,
    pub input: InputMode,
    pub status: Option<String>,
    pub running: bool,
    rng: R,
}

impl<R: RngExt> TuiApp<R> {
    pub fn new(
        session: Session,
        mode: SelectionMode,
        count: usize,
        out_dir: PathBuf,
        rng: R,
    ) -> Self {
        Self {
            session,
            mode,
            count: count.clamp(MIN_COUNT, MAX_COUNT),
            out_dir,
            input: InputMode::Normal,
            status: None,
            running: true,
            rng,
        }
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match &mut self.input {
            InputMode::LoadPath(path) => match code {
                KeyCode::Enter => {
                    let path = PathBuf::from(path.trim());
                    self.input = InputMode::Normal;
                    self.load(path);
                }
                KeyCode::Esc => {
                    self.input = InputMode::Normal;
                    self.status = None;
                }
                KeyCode::Backspace => {
                    path.pop();
                }
                KeyCode::Char(c) => path.push(c),
                _ => {}
            },
            InputMode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
                    self.count = (self.count + 1).min(MAX_COUNT);
                }
                KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => {
                    self.count = self.count.saturating_sub(1).max(MIN_COUNT);
                }
                KeyCode::Char('m') | KeyCode::Tab => self.mode = self.mode.next(),
                KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter => self.generate(),
                KeyCode::Char('s') => self.export(),
                KeyCode::Char('l') => self.input = InputMode::LoadPath(String::new()),
                _ => {}
            },
        }
    }

    fn generate(&mut self) {
        self.status = match self.session.generate(self.mode, self.count, &mut self.rng) {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
    }

    fn export(&mut self) {
        self.status = match self.session.export_image(&self.out_dir) {
            Ok(Some(path)) => Some(format!("Palette saved as {}", path.display())),
            Ok(None) => Some("Nothing to save yet".to_string()),
            Err(e) => Some(e.to_string()),
        };
    }

    fn load(&mut self, path: PathBuf) {
        self.status = match self.session.load_file(&path) {
            Ok(report) => Some(format!(
                "Loaded {} color(s) from {}, skipped {} line(s)",
                report.entries.len(),
                path.display(),
                report.skipped
            )),
            Err(e) => Some(e.to_string()),
        };
    }

    fn status_line(&self) -> Line<'_> {
        match &self.input {
            InputMode::LoadPath(path) => Line::from(vec![
                Span::styled("  Load file: ", Style::default().fg(Color::Yellow)),
                Span::raw(path.as_str()),
                Span::styled("█", Style::default().fg(Color::DarkGray)),
            ]),
            InputMode::Normal => match &self.status {
                Some(msg) => Line::from(format!("  {msg}")),
                None => Line::from(""),
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [controls, palette, status] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let source = self.session.source();
        frame.render_widget(
            ControlsWidget {
                count: self.count,
                mode: &self.mode.to_string(),
                builtin: source.builtin().len(),
                loaded: source.loaded().len(),
            },
            controls,
        );
        frame.render_widget(PaletteWidget::new(self.session.current()), palette);
        frame.render_widget(Paragraph::new(self.status_line()), status);
    }
}

fn init_terminal() -> Result<Terminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(ratatui::Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Launch the TUI application and block until the user quits.
pub fn run<R: RngExt>(app: &mut TuiApp<R>) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(app, &mut terminal);
    restore_terminal()?;
    result
}

fn event_loop<R: RngExt>(app: &mut TuiApp<R>, terminal: &mut Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    while app.running {
        terminal.draw(|frame| app.draw(frame))?;
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}
