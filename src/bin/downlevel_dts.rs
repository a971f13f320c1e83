#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;

use downlevel_dts::cli::args::CliArgs;
use downlevel_dts::cli::{driver, reporter::Reporter};

#[cfg(not(target_arch = "wasm32"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Exit status when any input has syntax errors. Usage errors exit with 2
/// from clap; I/O and rewrite failures return `Err` from `main` (status 1).
const EXIT_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if DTS_LOG or RUST_LOG is set.
    downlevel_dts::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let options = args.driver_options();

    let result = driver::run(&args.src, &args.target, &options)?;

    if !result.diagnostics.is_empty() {
        let mut reporter = Reporter::new(options.pretty);
        for (file, text) in &result.sources {
            reporter.add_source(file.as_str(), &**text);
        }
        eprint!("{}", reporter.render(&result.diagnostics));
        if result.has_errors() {
            std::process::exit(EXIT_DIAGNOSTICS);
        }
    }

    if options.list_files {
        for file in &result.written_files {
            println!("{}", file.display());
        }
    }

    Ok(())
}
