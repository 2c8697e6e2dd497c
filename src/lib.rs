//! A single-line, in-place terminal progress bar driven by ticks.
//!
//! # Features
//!
//! - Templated lines with `:tokens`.
//! - Caller-supplied tokens on every tick.
//! - Redraws in place; nothing scrolls.
//! - Linear ETA and rate estimates.
//! - Any [`Write`] can back the bar.
//!
//! # Usage
//!
//! A bar is built from a format string and some [`Options`], then advanced
//! with [`ProgressBar::tick`] and friends. The tick that reaches the total
//! completes the bar and releases the terminal:
//!
//! ```
//! use tickline::{Options, ProgressBar};
//!
//! let mut bar = ProgressBar::new("downloading [:bar] :percent :etas", Options::new(20))?;
//!
//! while !bar.is_complete() {
//!     // ... Your logic ...
//!     bar.tick()?;
//! }
//! # Ok::<(), tickline::Error>(())
//! ```
//!
//! ## Tokens
//!
//! The following tokens are recognized in the format string:
//!
//! | Token       | Value                                      |
//! |-------------|--------------------------------------------|
//! | `:bar`      | the bar itself                             |
//! | `:current`  | ticks so far                               |
//! | `:total`    | ticks for completion                       |
//! | `:elapsed`  | seconds since the first tick, e.g. `3.1`   |
//! | `:eta`      | estimated seconds remaining                |
//! | `:percent`  | completion, e.g. `42%`                     |
//! | `:rate`     | ticks per second                           |
//!
//! Anything else of the form `:name` can be filled per tick:
//!
//! ```
//! use tickline::{Options, ProgressBar};
//!
//! let mut bar = ProgressBar::with_stream(":bar :speed", Options::new(10), std::io::sink())?;
//! bar.tick_with([("speed", "3MB/s")])?;
//! # Ok::<(), tickline::Error>(())
//! ```
//!
//! Only the *first* occurrence of each token in the format is replaced.
//!
//! # Caveats
//!
//! - Your terminal must support ANSI codes.
//! - One bar per line; no multi-bars.
//! - A bar that never completes keeps the cursor hidden until
//!   [`ProgressBar::terminate`] is called.

use log::{debug, trace};
use std::fmt::Display;
use std::io::{Stdout, Write};
use std::time::Instant;

mod error;
mod options;
mod template;
mod terminal;

pub use error::Error;
pub use options::Options;
pub use terminal::Terminal;

use template::Frame;

/// A single progress bar, drawn on the current terminal line.
///
/// `ProgressBar` owns its [`Terminal`] until it completes or is terminated.
pub struct ProgressBar<W: Write = Stdout> {
    format: String,
    total: u64,
    width: u64,
    complete: char,
    incomplete: char,
    hide_after: bool,
    current: u64,
    /// Set by the first tick.
    start: Option<Instant>,
    completed: bool,
    /// Tokens from the latest render, kept for redraws.
    tokens: Vec<(String, String)>,
    drawn: bool,
    /// `None` once released.
    term: Option<Terminal<W>>,
}

impl ProgressBar<Stdout> {
    /// Create a bar that draws to `stdout`.
    pub fn new<S: Into<String>>(format: S, opts: Options) -> Result<ProgressBar<Stdout>, Error> {
        let format = format.into();
        // Validate before touching the terminal.
        let size = validate(&format, &opts)?;
        Ok(ProgressBar::build(format, &opts, size, Terminal::stdout()?))
    }
}

impl<W: Write> ProgressBar<W> {
    /// Create a bar that draws to an arbitrary stream.
    pub fn with_stream<S: Into<String>>(
        format: S,
        opts: Options,
        out: W,
    ) -> Result<ProgressBar<W>, Error> {
        let format = format.into();
        let size = validate(&format, &opts)?;
        Ok(ProgressBar::build(format, &opts, size, Terminal::attach(out, None)?))
    }

    /// Create a bar over an already-attached [`Terminal`].
    ///
    /// If the format or options are rejected, `term` is released before the
    /// error is returned, so the cursor is restored.
    pub fn with_terminal<S: Into<String>>(
        format: S,
        opts: Options,
        term: Terminal<W>,
    ) -> Result<ProgressBar<W>, Error> {
        let format = format.into();

        match validate(&format, &opts) {
            Ok(size) => Ok(ProgressBar::build(format, &opts, size, term)),
            Err(e) => {
                if let Err(io) = term.release() {
                    debug!("Failed to release terminal after bad options: {}", io);
                }
                Err(e)
            }
        }
    }

    fn build(
        format: String,
        opts: &Options,
        (total, width): (u64, u64),
        term: Terminal<W>,
    ) -> ProgressBar<W> {
        debug!("New bar: total {}, width {}, {:?}", total, width, format);

        ProgressBar {
            format,
            total,
            width,
            complete: opts.complete,
            incomplete: opts.incomplete,
            hide_after: opts.hide_after,
            current: 0,
            start: None,
            completed: false,
            tokens: Vec::new(),
            drawn: false,
            term: Some(term),
        }
    }

    /// Advance by one and redraw.
    pub fn tick(&mut self) -> Result<(), Error> {
        self.tick_by(1)
    }

    /// Advance by `delta` and redraw.
    ///
    /// `tick_by(0)` doesn't advance the bar, but does redraw it.
    pub fn tick_by(&mut self, delta: u64) -> Result<(), Error> {
        self.tick_by_with(delta, std::iter::empty::<(&str, &str)>())
    }

    /// Advance by one and redraw with the given extra tokens.
    pub fn tick_with<I, K, V>(&mut self, tokens: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        self.tick_by_with(1, tokens)
    }

    /// Advance by `delta` and redraw with the given extra tokens.
    ///
    /// The tick that brings the bar to its total doesn't draw a frame.
    /// Instead the bar is [terminated](ProgressBar::terminate). Ticks after
    /// that are ignored.
    pub fn tick_by_with<I, K, V>(&mut self, delta: u64, tokens: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        if self.completed {
            return Ok(());
        }

        if self.start.is_none() {
            self.start = Some(Instant::now());
        }

        self.current = self.current.saturating_add(delta);

        if self.current >= self.total {
            self.completed = true;
            debug!("Bar complete at {}/{}", self.current, self.total);
            return self.terminate();
        }

        self.render(tokens)
    }

    /// Draw the current state of the bar, replacing whatever was on the line.
    ///
    /// Does nothing once the bar has been terminated.
    pub fn render<I, K, V>(&mut self, tokens: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        self.tokens = tokens
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
            .collect();

        self.draw()
    }

    fn draw(&mut self) -> Result<(), Error> {
        let columns = match self.term.as_ref() {
            Some(term) => term.columns(),
            None => return Ok(()),
        };

        let line = self.frame(columns).render(&self.format, &self.tokens);

        if let Some(term) = self.term.as_mut() {
            term.clear_line()?;
            term.write_line(&line)?;
            trace!("Drew {:?}", line);
        }

        self.drawn = true;
        Ok(())
    }

    fn frame(&self, columns: Option<usize>) -> Frame {
        Frame {
            current: self.current,
            total: self.total,
            width: self.width,
            complete: self.complete,
            incomplete: self.incomplete,
            elapsed: self.start.map(|s| s.elapsed()),
            columns,
        }
    }

    /// Print `msg` on its own line above the bar, then redraw the bar.
    ///
    /// Does nothing once the bar has been terminated.
    pub fn interrupt(&mut self, msg: &str) -> Result<(), Error> {
        match self.term.as_mut() {
            Some(term) => {
                term.clear_line()?;
                term.write_message(msg)?;
            }
            None => return Ok(()),
        }

        if self.drawn {
            self.draw()?;
        }

        Ok(())
    }

    /// Erase the bar if so configured, and release the terminal.
    ///
    /// Called automatically by the tick that completes the bar. Call it
    /// yourself if you abandon a bar early. Later calls do nothing.
    pub fn terminate(&mut self) -> Result<(), Error> {
        if let Some(mut term) = self.term.take() {
            if self.hide_after {
                term.clear_line()?;
            }

            term.release()?;
            debug!("Released terminal at {}/{}", self.current, self.total);
        }

        Ok(())
    }

    /// Ticks so far.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Ticks needed for completion.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Has the bar reached its total?
    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

/// Check a format and options, yielding the resolved `(total, width)`.
fn validate(format: &str, opts: &Options) -> Result<(u64, u64), Error> {
    if format.is_empty() {
        return Err(Error::FormatRequired);
    }

    opts.resolve()
}
