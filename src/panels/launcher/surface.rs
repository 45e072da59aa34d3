//! Plain-text launcher surface.
//!
//! Draws the filter state as text rows and tracks visibility the way a
//! layer-shell window would.

use capy_apps::{FilterState, LauncherSurface, Row, RowContent, render_rows};
use log::warn;
use std::io::Write;

/// One text row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextRow {
    line: String,
    selected: bool,
}

impl TextRow {
    pub fn render(&self) -> String {
        let marker = if self.selected { '>' } else { ' ' };
        format!("{marker} {}", self.line)
    }
}

impl Row for TextRow {
    fn attach(&mut self, content: &RowContent<'_>) {
        self.line = format!("[{}] {} - {}", content.icon, content.name, content.description);
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

pub struct TerminalSurface<W: Write> {
    out: W,
    rows: Vec<TextRow>,
    visible: bool,
}

impl<W: Write> TerminalSurface<W> {
    /// `max_rows` should match the launcher's result cap.
    pub fn new(out: W, max_rows: usize) -> Self {
        Self {
            out,
            rows: vec![TextRow::default(); max_rows],
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn draw(&mut self, state: &FilterState) -> std::io::Result<()> {
        writeln!(self.out, "search: {}", state.query())?;

        let filled = render_rows(state, &mut self.rows);
        for row in &self.rows[..filled] {
            writeln!(self.out, "{}", row.render())?;
        }

        if let Some(empty) = state.empty_state() {
            writeln!(self.out, "  {}", empty.message())?;
        }

        self.out.flush()
    }
}

impl<W: Write> LauncherSurface for TerminalSurface<W> {
    fn render(&mut self, state: &FilterState) {
        if !self.visible {
            return;
        }
        if let Err(e) = self.draw(state) {
            warn!("Failed to draw launcher: {}", e);
        }
    }

    fn hide(&mut self) {
        self.visible = false;
        let _ = writeln!(self.out, "(hidden)");
        let _ = self.out.flush();
    }
}
