//! Token computation and substitution for bar templates.
//!
//! Substitution is a single find-and-replace per token: only the *first*
//! occurrence of each `:name` is replaced. A format like `":current of
//! :current"` renders as `"3 of :current"`.

use std::time::Duration;

/// Everything needed to draw one frame, minus the template itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub current: u64,
    pub total: u64,
    pub width: u64,
    pub complete: char,
    pub incomplete: char,
    /// Time since the first tick, if there has been one.
    pub elapsed: Option<Duration>,
    /// Terminal width, when known.
    pub columns: Option<usize>,
}

impl Frame {
    /// Produce the full line for the given template and caller tokens.
    pub(crate) fn render(&self, format: &str, tokens: &[(String, String)]) -> String {
        let width = match self.columns {
            Some(cols) if format.contains(":bar") => {
                let bare = self.substitute(format, "", tokens).chars().count();
                let room = cols.saturating_sub(bare) as u64;
                self.width.min(room)
            }
            _ => self.width,
        };

        let bar = self.bar(width);
        self.substitute(format, &bar, tokens)
    }

    fn substitute(&self, format: &str, bar: &str, tokens: &[(String, String)]) -> String {
        let builtins = [
            (":bar", bar.to_string()),
            (":current", self.current.to_string()),
            (":total", self.total.to_string()),
            (":elapsed", seconds(self.elapsed)),
            (":eta", self.eta()),
            (":percent", self.percent()),
        ];

        let mut line = builtins
            .iter()
            .fold(format.to_string(), |acc, (k, v)| acc.replacen(k, v, 1));

        // `:rate` yields to a caller token of the same name, and never eats
        // the front of a longer one like `:ratelimit`.
        if !tokens.iter().any(|(k, _)| k == "rate") {
            line = replace_word(&line, ":rate", &self.rate());
        }

        tokens.iter().fold(line, |acc, (k, v)| {
            acc.replacen(&format!(":{}", k), v, 1)
        })
    }

    /// The bar glyph at a given cell width.
    fn bar(&self, width: u64) -> String {
        let filled = (width as f64 * self.current as f64 / self.total as f64).round() as u64;
        let empty = width.saturating_sub(filled);

        let mut s = String::with_capacity((filled + empty) as usize);
        s.extend(std::iter::repeat(self.complete).take(filled as usize));
        s.extend(std::iter::repeat(self.incomplete).take(empty as usize));
        s
    }

    fn percent(&self) -> String {
        let p = (self.current as f64 / self.total as f64 * 100.0).round();
        format!("{}%", p as u64)
    }

    fn eta(&self) -> String {
        match self.elapsed {
            Some(e) if self.current > 0 => {
                let ratio = self.total as f64 / self.current as f64 - 1.0;
                format!("{:.1}", e.as_secs_f64() * ratio)
            }
            _ => "0.0".to_string(),
        }
    }

    /// Ticks per second.
    fn rate(&self) -> String {
        match self.elapsed.map(|e| e.as_secs_f64()) {
            Some(secs) if secs > 0.0 => ((self.current as f64 / secs).round() as u64).to_string(),
            _ => "0".to_string(),
        }
    }
}

/// Replace the first `pat` that isn't followed by an identifier character.
fn replace_word(s: &str, pat: &str, to: &str) -> String {
    let hit = s.match_indices(pat).map(|(i, _)| i).find(|&i| {
        s[i + pat.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    });

    match hit {
        Some(i) => format!("{}{}{}", &s[..i], to, &s[i + pat.len()..]),
        None => s.to_string(),
    }
}

fn seconds(elapsed: Option<Duration>) -> String {
    elapsed
        .map(|e| format!("{:.1}", e.as_secs_f64()))
        .unwrap_or_else(|| "0.0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(current: u64, total: u64, width: u64) -> Frame {
        Frame {
            current,
            total,
            width,
            complete: '=',
            incomplete: '-',
            elapsed: None,
            columns: None,
        }
    }

    #[test]
    fn half_full_bar() {
        assert_eq!("=====-----", frame(5, 10, 10).render(":bar", &[]));
        assert_eq!("=====-----", frame(50, 100, 10).render(":bar", &[]));
    }

    #[test]
    fn empty_and_overfull_bars() {
        assert_eq!("----", frame(0, 8, 4).render(":bar", &[]));
        assert_eq!("======", frame(12, 8, 4).render(":bar", &[]));
    }

    #[test]
    fn counts_and_percent() {
        let line = frame(2, 4, 4).render(":percent done (:current/:total)", &[]);
        assert_eq!("50% done (2/4)", line);
        assert_eq!("13%", frame(1, 8, 8).render(":percent", &[]));
    }

    #[test]
    fn no_clock_yet() {
        let line = frame(0, 10, 10).render(":elapsed :eta :rate", &[]);
        assert_eq!("0.0 0.0 0", line);
    }

    #[test]
    fn timing_tokens() {
        let mut f = frame(2, 8, 8);
        f.elapsed = Some(Duration::from_millis(1500));
        assert_eq!("1.5 4.5 1", f.render(":elapsed :eta :rate", &[]));
    }

    #[test]
    fn zero_current_eta() {
        let mut f = frame(0, 8, 8);
        f.elapsed = Some(Duration::from_secs(3));
        assert_eq!("3.0 0.0", f.render(":elapsed :eta", &[]));
    }

    #[test]
    fn caller_tokens() {
        let tokens = vec![("speed".to_string(), "3MB/s".to_string())];
        assert_eq!("1/2 at 3MB/s", frame(1, 2, 2).render(":current/:total at :speed", &tokens));
    }

    #[test]
    fn only_first_occurrence() {
        assert_eq!("3 of :current", frame(3, 9, 9).render(":current of :current", &[]));

        let tokens = vec![("x".to_string(), "y".to_string())];
        assert_eq!("y :x", frame(0, 1, 1).render(":x :x", &tokens));
    }

    #[test]
    fn rate_is_a_whole_word() {
        let mut f = frame(4, 8, 8);
        f.elapsed = Some(Duration::from_secs(2));
        assert_eq!(":ratelimit 2", f.render(":ratelimit :rate", &[]));

        let tokens = vec![("rate".to_string(), "fast".to_string())];
        assert_eq!("fast", f.render(":rate", &tokens));
    }

    #[test]
    fn shrinks_to_columns() {
        let mut f = frame(5, 10, 10);
        f.columns = Some(12);
        // "[] 5/10" is 7 cells, leaving 5 for the bar.
        assert_eq!("[===--] 5/10", f.render("[:bar] :current/:total", &[]));

        f.columns = Some(3);
        assert_eq!("[] 5/10", f.render("[:bar] :current/:total", &[]));
    }
}
