//! A [`DisplaySink`] that writes to a terminal.

use std::io::Write;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::debug;

use crate::platform::DisplaySink;

/// Writes the sampler's output to a terminal (or any writer).
///
/// In inline mode the text rewrites a single line in place. Otherwise every
/// visible text change is printed on its own line, which suits pipes and log
/// files. Write errors are logged and dropped.
pub struct TerminalDisplay<W: Write> {
    out: W,
    inline: bool,
    visible: bool,
    text: String,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, inline: bool) -> Self {
        Self {
            out,
            inline,
            visible: false,
            text: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self) {
        let text = if self.visible { self.text.clone() } else { String::new() };

        if self.inline {
            self.render_inline(&text);
        } else if !text.is_empty() {
            if let Err(err) = writeln!(self.out, "{text}") {
                debug!("Failed to write to the display: {err}");
            }
        }

        if let Err(err) = self.out.flush() {
            debug!("Failed to flush the display: {err}");
        }
    }

    fn render_inline(&mut self, text: &str) {
        if let Err(err) = queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text)
        ) {
            debug!("Failed to write to the display: {err}");
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.render();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.render();
        }
    }
}
