mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use caret_config::{default_log_file, Settings};
use caret_editor::TextEditor;
use caret_keyboard::KeyPress;
use caret_logger::Level;

fn main() -> Result<()> {
    // Config problems must not keep the demo from starting.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("caret: falling back to default settings: {err:#}");
            Settings::default()
        }
    };

    let log_file = match settings.general.log_file.clone() {
        Some(path) => path,
        None => default_log_file()?,
    };
    let level = settings
        .general
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::Info);
    caret_logger::init(log_file, level);
    caret_logger::info("caret demo starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, settings.display.tab_width as usize);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    caret_logger::info("caret demo stopped");
    result
}

/// Event loop: keyboard events feed the engine, snapshots drive the screen.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, tab_width: usize) -> Result<()> {
    let mut editor = TextEditor::new();
    let snapshots = editor.subscribe();
    let mut current = editor.snapshot();

    loop {
        terminal.draw(|frame| ui::draw(frame, &current, tab_width))?;

        match event::read()? {
            // Only handle presses; with the kitty keyboard protocol,
            // release and repeat events arrive as well.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                editor.handle_key(KeyPress::from(key));
                for snapshot in snapshots.try_iter() {
                    current = snapshot;
                }
            }
            Event::Resize(..) => {}
            _ => {}
        }
    }
}
