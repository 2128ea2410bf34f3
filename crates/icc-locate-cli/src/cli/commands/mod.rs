//! CLI command handlers. Each command is in its own file.

mod extract;
mod resolve;
mod serve;

pub use extract::run_extract;
pub use resolve::run_resolve;
pub use serve::run_serve;

use std::process::ExitCode;

/// Exit status when no manifest was found.
pub const EXIT_NOT_FOUND: u8 = 2;

fn not_found() -> ExitCode {
    ExitCode::from(EXIT_NOT_FOUND)
}
