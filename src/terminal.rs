//! The line-oriented terminal writer that a bar draws through.

use std::io::{Stderr, Stdout, Write};
use terminal_size::{terminal_size, Width};

/// Move to column 0 and erase the whole line.
const CLEAR_LINE: &str = "\r\x1B[2K";
const HIDE_CURSOR: &str = "\x1B[?25l";
const SHOW_CURSOR: &str = "\x1B[?25h";

/// An attached terminal line.
///
/// Attaching hides the cursor so that it doesn't flicker at the end of each
/// redraw. [`Terminal::release`] consumes the handle and restores it, so a
/// released terminal can't be drawn to again.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    /// Known terminal width, used to keep a frame on a single line.
    columns: Option<usize>,
}

impl Terminal<Stdout> {
    /// Attach to `stdout`, measuring its width if it is a terminal.
    pub fn stdout() -> std::io::Result<Terminal<Stdout>> {
        let columns = terminal_size().map(|(Width(w), _)| w as usize);
        Terminal::attach(std::io::stdout(), columns)
    }
}

impl Terminal<Stderr> {
    /// Attach to `stderr`. Its width is never measured.
    pub fn stderr() -> std::io::Result<Terminal<Stderr>> {
        Terminal::attach(std::io::stderr(), None)
    }
}

impl<W: Write> Terminal<W> {
    /// Attach to an arbitrary stream.
    pub fn attach(mut out: W, columns: Option<usize>) -> std::io::Result<Terminal<W>> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Terminal { out, columns })
    }

    /// Width of the terminal in cells, if known.
    pub fn columns(&self) -> Option<usize> {
        self.columns
    }

    /// Erase the current line, leaving the cursor at its start.
    pub fn clear_line(&mut self) -> std::io::Result<()> {
        self.out.write_all(CLEAR_LINE.as_bytes())?;
        self.out.flush()
    }

    /// Write `line` in place, without a trailing newline.
    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        // Very important, or the output won't appear fluid.
        self.out.flush()
    }

    /// Write `msg` on its own line, scrolling it above whatever comes next.
    pub fn write_message(&mut self, msg: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", msg)?;
        self.out.flush()
    }

    /// Restore the cursor and hand back the underlying stream.
    pub fn release(mut self) -> std::io::Result<W> {
        self.out.write_all(SHOW_CURSOR.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}
