//! Vykreslenie confusion matrix a ROC krivky testovacieho splitu.

pub mod widgets;

use std::io::{self, IsTerminal};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::warn;

use crate::error::{EvalError, Result};
use crate::evaluation::TestFigures;
use widgets::draw_figures;

/// Kam sa posielajú grafy po evaluácii
pub trait Renderer {
    fn render(&mut self, model_name: &str, figures: &TestFigures) -> Result<()>;
}

/// Nevykresľuje nič
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _model_name: &str, _figures: &TestFigures) -> Result<()> {
        Ok(())
    }
}

/// Celoobrazovkový náhľad v termináli, blokuje kým ho používateľ nezavrie
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    tick_rate: Duration,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(200),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_err(err: io::Error) -> EvalError {
    EvalError::Render(err.to_string())
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, model_name: &str, figures: &TestFigures) -> Result<()> {
        if !io::stdout().is_terminal() {
            warn!(model = %model_name, "stdout is not a terminal, skipping plots");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode().map_err(render_err)?;
        let mut terminal = setup_or_restore(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )
        .map_err(render_err)?;

        let result = self.run_viewer(&mut terminal, model_name, figures);

        // Restore terminal
        disable_raw_mode().map_err(render_err)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(render_err)?;
        terminal.show_cursor().map_err(render_err)?;

        result.map_err(render_err)
    }
}

/// Pri zlyhaní setupu zavolá `restore`, aby terminál neostal v raw móde
fn setup_or_restore<T>(setup: impl FnOnce() -> io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(err) => {
            restore();
            Err(err)
        }
    }
}

impl TerminalRenderer {
    fn run_viewer<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        model_name: &str,
        figures: &TestFigures,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| draw_figures(frame, model_name, figures))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    let close = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter);
                    if key.kind == KeyEventKind::Press && close {
                        return Ok(());
                    }
                }
            }
        }
    }
}
