//! Errors raised while building or drawing a [`ProgressBar`](crate::ProgressBar).

/// Everything that can go wrong with a bar.
///
/// The first three variants are construction failures: no bar is returned
/// when they occur. [`Error::Io`] comes from the underlying stream during a
/// redraw or release.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("format required")]
    FormatRequired,
    #[error("total required")]
    TotalRequired,
    #[error("width must be positive")]
    InvalidWidth,
    #[error("failed to write to the terminal: {0}")]
    Io(#[from] std::io::Error),
}
