use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use dts_common::NewLineKind;

use super::driver::DriverOptions;

/// CLI arguments for the downlevel-dts binary.
#[derive(Parser, Debug)]
#[command(
    name = "downlevel-dts",
    version,
    about = "Rewrite TypeScript declaration files for older compilers"
)]
pub struct CliArgs {
    /// Directory (or single `.d.ts` file) to read declarations from.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Directory the rewritten declarations are written to.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Set the newline character for emitted files.
    #[arg(long = "newLine", alias = "new-line", value_enum, ignore_case = true)]
    pub new_line: Option<NewLine>,

    /// Skip input paths matching this glob (relative to SRC). May be repeated.
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Print the path of every written file.
    #[arg(long = "listFiles", alias = "list-files")]
    pub list_files: bool,

    /// Enable color in diagnostics. Defaults to whether stderr is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

impl CliArgs {
    #[must_use]
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            new_line: self.new_line.map(NewLine::kind).unwrap_or_default(),
            excludes: self.exclude.clone(),
            list_files: self.list_files,
            pretty: self
                .pretty
                .unwrap_or_else(|| std::io::stderr().is_terminal()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum NewLine {
    /// Use carriage return followed by line feed (\\r\\n).
    Crlf,
    /// Use line feed only (\\n).
    Lf,
}

impl NewLine {
    #[must_use]
    pub const fn kind(self) -> NewLineKind {
        match self {
            Self::Crlf => NewLineKind::CarriageReturnLineFeed,
            Self::Lf => NewLineKind::LineFeed,
        }
    }
}
