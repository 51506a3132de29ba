//! Terminal host for the gesture keyboard, using crossterm and ratatui.
//!
//! Press and hold a key with the left mouse button. After a short hold the
//! gesture surface opens: drag before releasing, or while still holding the
//! button use the arrow keys (`q`/`e`/`z`/`c` for diagonals, `.` for a tap)
//! to add strokes. Releasing commits the composed letter.
//!
//! `Tab` toggles translation mode (the demo "translator" just reverses the
//! text). `Esc` or `Ctrl-C` quits. An optional first argument names a TOML
//! settings file. Set `RUST_LOG=gesture_keys=debug` to log to
//! `gesture_keys_demo.log`.
//!
//! Run with: cargo run --example terminal

use std::cell::RefCell;
use std::collections::VecDeque;
use std::error::Error;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gesture_keys::{
    Controller, EditorAction, GestureConfig, HoldPhase, OutputMode, Point, RequestId, TextSink,
    Translator, layout,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ropey::Rope;
use tracing_subscriber::EnvFilter;

/// Terminal cells are much coarser than touch units.
const UNITS_PER_COLUMN: f32 = 10.0;
const UNITS_PER_ROW: f32 = 20.0;
const KEY_HEIGHT: u16 = 3;

/// Text field backed by a rope, with a separate preview span.
#[derive(Default)]
struct RopeSink {
    rope: Rope,
    preview: String,
}

impl TextSink for RopeSink {
    fn set_preview(&mut self, text: &str) {
        self.preview = text.to_string();
    }

    fn commit(&mut self, text: &str) {
        self.preview.clear();
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
    }

    fn delete_backward(&mut self, count: usize) {
        self.preview.clear();
        let end = self.rope.len_chars();
        self.rope.remove(end.saturating_sub(count)..end);
    }

    fn send_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Newline => self.commit("\n"),
        }
    }

    fn text_before_cursor(&self, max_chars: usize) -> Option<String> {
        let end = self.rope.len_chars();
        Some(self.rope.slice(end.saturating_sub(max_chars)..end).to_string())
    }
}

type Pending = Rc<RefCell<VecDeque<(RequestId, String)>>>;

/// Queues requests; the main loop answers them one iteration later.
struct ReversingTranslator {
    pending: Pending,
}

impl Translator for ReversingTranslator {
    fn request(&mut self, id: RequestId, text: &str) {
        self.pending.borrow_mut().push_back((id, text.to_string()));
    }
}

struct Press {
    label: &'static str,
    origin: Point,
    current: Point,
}

struct App {
    controller: Controller,
    sink: RopeSink,
    pending: Pending,
    keys: Vec<(Rect, &'static str)>,
    press: Option<Press>,
    should_quit: bool,
}

impl App {
    fn new(config: GestureConfig) -> Self {
        let pending = Pending::default();
        let controller = Controller::builder()
            .config(config)
            .translator(ReversingTranslator {
                pending: Rc::clone(&pending),
            })
            .build();
        Self {
            controller,
            sink: RopeSink::default(),
            pending,
            keys: Vec::new(),
            press: None,
            should_quit: false,
        }
    }

    fn key_at(&self, column: u16, row: u16) -> Option<&'static str> {
        self.keys
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, label)| *label)
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        let now = Instant::now();
        let at = Point::new(
            f32::from(event.column) * UNITS_PER_COLUMN,
            f32::from(event.row) * UNITS_PER_ROW,
        );
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(label) = self.key_at(event.column, event.row) {
                    self.controller.key_down(label, now, &mut self.sink);
                    self.press = Some(Press {
                        label,
                        origin: at,
                        current: at,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(press) = &mut self.press {
                    press.current = at;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(press) = self.press.take() {
                    // Fire a due reveal first so a drag on a long hold counts.
                    self.controller.poll(now, &mut self.sink);
                    if self.controller.is_surface_visible() && press.origin != at {
                        self.controller.surface_stroke(press.origin, at, &mut self.sink);
                    }
                    self.controller.key_up(press.label, now, &mut self.sink);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            let next = match self.controller.output_mode() {
                OutputMode::Direct => OutputMode::Translation,
                OutputMode::Translation => OutputMode::Direct,
            };
            self.controller.set_output_mode(next, &mut self.sink);
            return;
        }

        let step = match key.code {
            KeyCode::Up => (0.0, -50.0),
            KeyCode::Down => (0.0, 50.0),
            KeyCode::Left => (-50.0, 0.0),
            KeyCode::Right => (50.0, 0.0),
            KeyCode::Char('q') => (-50.0, -50.0),
            KeyCode::Char('e') => (50.0, -50.0),
            KeyCode::Char('z') => (-50.0, 50.0),
            KeyCode::Char('c') => (50.0, 50.0),
            KeyCode::Char('.') => (0.0, 0.0),
            _ => return,
        };
        let start = self.press.as_ref().map_or(Point::ZERO, |p| p.current);
        let end = Point::new(start.x + step.0, start.y + step.1);
        self.controller.surface_stroke(start, end, &mut self.sink);
    }

    fn resolve_translations(&mut self) {
        let ready: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (id, text) in ready {
            let reversed: String = text.chars().rev().collect();
            self.controller.translation_finished(id, Ok(reversed));
        }
    }
}

fn key_rects(area: Rect, page: u8) -> Vec<(Rect, &'static str)> {
    let Some(rows) = layout::page(page) else {
        return Vec::new();
    };
    let mut cells = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        let total: f32 = row
            .iter()
            .enumerate()
            .map(|(c, label)| layout::key_weight(label, r, c, row.len()))
            .sum();
        let y = area.y + r as u16 * KEY_HEIGHT;
        let mut x = f32::from(area.x);
        for (c, label) in row.iter().enumerate() {
            let share = layout::key_weight(label, r, c, row.len()) / total;
            let width = (share * f32::from(area.width)).floor().max(3.0);
            cells.push((Rect::new(x as u16, y, width as u16, KEY_HEIGHT), *label));
            x += width;
        }
    }
    cells
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(KEY_HEIGHT * 4),
            Constraint::Length(1),
        ])
        .split(f.size());

    let text = Paragraph::new(Line::from(vec![
        Span::raw(app.sink.rope.to_string()),
        Span::styled(
            app.sink.preview.clone(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
    ]))
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title("gesture_keys demo"));
    f.render_widget(text, chunks[0]);

    let snapshot = app.controller.snapshot();
    let panel_text = match snapshot.mode {
        OutputMode::Direct => snapshot.panel.clone(),
        OutputMode::Translation => format!("{}  →  {}", snapshot.scratch, snapshot.panel),
    };
    let panel = Paragraph::new(panel_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(match snapshot.mode {
            OutputMode::Direct => "translation (auto)",
            OutputMode::Translation => "translation (manual)",
        }));
    f.render_widget(panel, chunks[1]);

    app.keys = key_rects(chunks[2], snapshot.page);
    let surface = snapshot.phase == HoldPhase::Gesturing;
    for (rect, label) in &app.keys {
        let held = snapshot.held_key.as_deref() == Some(*label);
        let mut style = Style::default();
        if held {
            style = style.bg(Color::Gray).fg(Color::Black);
        } else if *label == "⇧" && snapshot.shifted {
            style = style.bg(Color::DarkGray);
        }
        if surface {
            style = style.add_modifier(Modifier::DIM);
        }
        let shown = layout::display_label(label, snapshot.shifted, snapshot.page);
        let key = Paragraph::new(shown)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(key, *rect);
    }

    let status = format!(
        "{:?}  strokes: {:?}  page {}/{}",
        snapshot.phase,
        snapshot.symbols,
        snapshot.page,
        layout::PAGE_COUNT
    );
    f.render_widget(
        Paragraph::new(status).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[3],
    );
}

fn load_config() -> Result<GestureConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(GestureConfig::from_toml_str(&std::fs::read_to_string(path)?)?),
        None => Ok(GestureConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log = File::create("gesture_keys_demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    let mut app = App::new(load_config()?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.controller.start_input(&mut app.sink);

    while !app.should_quit {
        terminal.draw(|f| ui(f, &mut app))?;

        let timeout = app
            .controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(100));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Key(key) => app.handle_key(key),
                _ => {}
            }
        }
        app.controller.poll(Instant::now(), &mut app.sink);
        app.resolve_translations();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
