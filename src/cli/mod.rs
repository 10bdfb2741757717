//! Command-line interface.
//!
//! Called early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use coinlens::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(options) = run_cli_command(command) {
//!     // start the TUI with `options`
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Handle informational commands.
///
/// Returns the run options for a TUI run. `Version` and `Help` print and
/// exit; `Invalid` prints the problem plus usage and exits with status 2.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, version::USAGE);
            std::process::exit(2)
        }
        CliCommand::RunTui(options) => Some(options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_options() {
        let options = RunOptions {
            light: true,
            ..Default::default()
        };
        assert_eq!(run_cli_command(CliCommand::RunTui(options.clone())), Some(options));
    }
}
