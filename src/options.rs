//! Construction-time configuration for a [`ProgressBar`](crate::ProgressBar).

use crate::Error;

/// Settings consumed when a bar is created.
///
/// Only `total` is required. Everything else has a sensible default:
///
/// ```
/// use tickline::Options;
///
/// let opts = Options::new(40).width(20).complete('#').hide_after(false);
/// assert_eq!(Some(40), opts.total);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of ticks that make up 100%.
    pub total: Option<u64>,
    /// Cells given to the `:bar` glyph. Defaults to `total`.
    ///
    /// On a terminal of known width this is an upper bound: the bar shrinks
    /// so that the whole line fits without wrapping.
    pub width: Option<u64>,
    /// Glyph for the filled part of the bar.
    pub complete: char,
    /// Glyph for the unfilled part of the bar.
    pub incomplete: char,
    /// Erase the line once the bar completes.
    pub hide_after: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            total: None,
            width: None,
            complete: '=',
            incomplete: '-',
            hide_after: true,
        }
    }
}

impl Options {
    /// Default options with the given `total`.
    pub fn new(total: u64) -> Options {
        Options {
            total: Some(total),
            ..Options::default()
        }
    }

    /// Set the number of ticks that make up 100%.
    pub fn total(self, total: u64) -> Options {
        Options {
            total: Some(total),
            ..self
        }
    }

    /// Set the maximum cells for the `:bar` glyph.
    pub fn width(self, width: u64) -> Options {
        Options {
            width: Some(width),
            ..self
        }
    }

    /// Set the glyph for the filled part of the bar.
    pub fn complete(self, complete: char) -> Options {
        Options { complete, ..self }
    }

    /// Set the glyph for the unfilled part of the bar.
    pub fn incomplete(self, incomplete: char) -> Options {
        Options { incomplete, ..self }
    }

    /// Choose whether to erase the line on completion.
    pub fn hide_after(self, hide_after: bool) -> Options {
        Options { hide_after, ..self }
    }

    /// Check the options, yielding the resolved `(total, width)` pair.
    pub(crate) fn resolve(&self) -> Result<(u64, u64), Error> {
        let total = match self.total {
            Some(t) if t > 0 => t,
            _ => return Err(Error::TotalRequired),
        };

        match self.width {
            Some(0) => Err(Error::InvalidWidth),
            Some(w) => Ok((total, w)),
            None => Ok((total, total)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_defaults_to_total() {
        assert_eq!((7, 7), Options::new(7).resolve().unwrap());
        assert_eq!((7, 3), Options::new(7).width(3).resolve().unwrap());
    }

    #[test]
    fn missing_or_zero_total() {
        assert!(matches!(
            Options::default().resolve(),
            Err(Error::TotalRequired)
        ));
        assert!(matches!(
            Options::new(0).resolve(),
            Err(Error::TotalRequired)
        ));
    }

    #[test]
    fn zero_width() {
        assert!(matches!(
            Options::new(10).width(0).resolve(),
            Err(Error::InvalidWidth)
        ));
    }
}
