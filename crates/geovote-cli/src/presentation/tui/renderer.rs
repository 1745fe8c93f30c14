//! Terminal driver for the treemap browser.
//!
//! The renderer owns the terminal and nothing else: key presses and
//! resizes are forwarded to a [`TuiApp`], which also decides how long the
//! loop may sleep before it has work to do.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::view_models::ScreenViewModel;
use super::views;

const MAX_IDLE: Duration = Duration::from_millis(100);

pub trait TuiApp {
    fn handle_key(&mut self, key: KeyEvent);

    /// Terminal resized to `width` x `height` cells.
    fn handle_resize(&mut self, width: u16, height: u16, now: Instant);

    /// Apply finished background work and due timers.
    fn tick(&mut self, now: Instant);

    /// Time until the next timer fires, if one is pending.
    fn next_deadline(&self, now: Instant) -> Option<Duration>;

    fn screen(&self) -> ScreenViewModel;

    fn should_quit(&self) -> bool;
}

pub struct TuiRenderer;

impl TuiRenderer {
    pub fn run<A: TuiApp>(app: &mut A) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = Self::event_loop(&mut terminal, app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<A: TuiApp>(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut A,
    ) -> Result<()> {
        loop {
            app.tick(Instant::now());
            if app.should_quit() {
                break;
            }

            let screen = app.screen();
            terminal.draw(|f| views::draw(f, &screen))?;

            let timeout = app
                .next_deadline(Instant::now())
                .map_or(MAX_IDLE, |due| due.min(MAX_IDLE));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    Event::Resize(width, height) => {
                        app.handle_resize(width, height, Instant::now())
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
