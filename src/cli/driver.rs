//! Batch driver: discover, parse, rewrite, print and write declaration files.
//!
//! Every file is parsed and rewritten before anything is written, so a
//! syntax error or a rewrite failure in any input leaves `TARGET` untouched.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, info_span};

use dts_common::{Diagnostic, NewLineKind};
use dts_emitter::{PrinterOptions, print_parsed_file, transform_file};
use dts_parser::{ParsedFile, parse_file};

use super::fs::{build_exclude_set, discover_declaration_files, output_path};

/// Options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    pub new_line: NewLineKind,
    pub excludes: Vec<String>,
    pub list_files: bool,
    pub pretty: bool,
}

#[derive(Debug, Default)]
pub struct DownlevelResult {
    /// Parse diagnostics. When non-empty, nothing was written.
    pub diagnostics: Vec<Diagnostic>,
    /// Text of each file with diagnostics, under the name the diagnostics use.
    pub sources: Vec<(String, Arc<str>)>,
    pub written_files: Vec<PathBuf>,
    pub files_read: Vec<PathBuf>,
}

impl DownlevelResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

struct OutputFile {
    path: PathBuf,
    contents: String,
}

/// Rewrite every declaration file under `src` into `target`.
///
/// I/O failures and rewrite failures are returned as errors naming the
/// file. Parse diagnostics are returned in the result instead.
pub fn run(src: &Path, target: &Path, options: &DriverOptions) -> Result<DownlevelResult> {
    let _span = info_span!("downlevel", src = %src.display(), target = %target.display()).entered();

    let excludes = build_exclude_set(&options.excludes)?;
    let files = discover_declaration_files(src, &excludes)?;
    debug!(count = files.len(), "discovered declaration files");

    let parsed = read_and_parse(&files)?;

    let diagnostics: Vec<Diagnostic> = parsed
        .iter()
        .flat_map(|file| file.diagnostics.iter().cloned())
        .collect();
    if !diagnostics.is_empty() {
        info!(
            count = diagnostics.len(),
            "syntax errors found, no files written"
        );
        let sources = parsed
            .iter()
            .filter(|file| !file.diagnostics.is_empty())
            .filter_map(|file| {
                let text = file.source_text()?;
                Some((file.file_name.clone(), Arc::clone(text)))
            })
            .collect();
        return Ok(DownlevelResult {
            diagnostics,
            sources,
            written_files: Vec::new(),
            files_read: files,
        });
    }

    let transformed = parsed
        .into_par_iter()
        .map(|file| {
            let name = file.file_name.clone();
            transform_file(file).with_context(|| format!("failed to rewrite {name}"))
        })
        .collect::<Result<Vec<ParsedFile>>>()?;

    let printer_options = PrinterOptions {
        new_line: options.new_line,
    };
    let outputs: Vec<OutputFile> = files
        .par_iter()
        .zip(transformed.par_iter())
        .map(|(input, file)| OutputFile {
            path: output_path(src, target, input),
            contents: print_parsed_file(file, printer_options),
        })
        .collect();

    let written_files = write_outputs(&outputs)?;
    info!(
        count = written_files.len(),
        target = %target.display(),
        "wrote declaration files"
    );

    Ok(DownlevelResult {
        diagnostics: Vec::new(),
        sources: Vec::new(),
        written_files,
        files_read: files,
    })
}

fn read_and_parse(files: &[PathBuf]) -> Result<Vec<ParsedFile>> {
    files
        .par_iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(parse_file(path.display().to_string(), text))
        })
        .collect()
}

fn write_outputs(outputs: &[OutputFile]) -> Result<Vec<PathBuf>> {
    outputs.par_iter().try_for_each(|output| -> Result<()> {
        if let Some(parent) = output.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&output.path, &output.contents)
            .with_context(|| format!("failed to write {}", output.path.display()))?;
        Ok(())
    })?;

    Ok(outputs.iter().map(|output| output.path.clone()).collect())
}
