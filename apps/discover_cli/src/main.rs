//! `discover` — standalone binary entry point.
//!
//! A thin wrapper around [`discover_cli::run_cli`], handling error
//! display and exit codes. All command logic lives in the library crate
//! for testability.
//!
//! # Exit Codes
//!
//! - `0` — Success
//! - `2` — Configuration error (bad move name, unknown structure,
//!   non-positive depth, empty seed set)
//! - `1` — Any other error

use discover_cli::cli::CliError;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = discover_cli::run_cli() {
        eprintln!("Error: {e}");
        let code = if e.downcast_ref::<CliError>().is_some() { 2 } else { 1 };
        std::process::exit(code);
    }
}
