//! Shared enums used by the printer and the command line driver.

/// Line terminator used when printing declaration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewLineKind {
    /// `\r\n`, the default of the original rewriter.
    #[default]
    CarriageReturnLineFeed,
    /// `\n`
    LineFeed,
}

impl NewLineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarriageReturnLineFeed => "\r\n",
            Self::LineFeed => "\n",
        }
    }
}
