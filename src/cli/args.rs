//! Command-line argument parsing.
//!
//! `coinlens [COIN_ID] [--light] [--api-url URL] [--version|-V] [--help|-h]`

use crate::config::AppConfig;

/// Options for a normal TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Open `/{coin_id}` instead of the list
    pub coin_id: Option<String>,
    /// Start in the light theme
    pub light: bool,
    /// Override the API base URL
    pub api_url: Option<String>,
}

impl RunOptions {
    /// Layer these flags over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(coin_id) = &self.coin_id {
            config = config.with_start_path(format!("/{}", coin_id));
        }
        if self.light {
            config = config.with_light_theme(true);
        }
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.as_str());
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// ```
/// use coinlens::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["coinlens".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--light" => options.light = true,
            "--api-url" => match args.next() {
                Some(url) => options.api_url = Some(url),
                None => return CliCommand::Invalid("--api-url needs a value".to_string()),
            },
            _ if arg.starts_with("--api-url=") => {
                options.api_url = Some(arg["--api-url=".len()..].to_string());
            }
            _ if arg.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option: {}", arg));
            }
            _ => {
                if options.coin_id.is_some() {
                    return CliCommand::Invalid(format!("unexpected argument: {}", arg));
                }
                let coin_id = arg.trim_matches('/');
                if coin_id.is_empty() || coin_id.contains('/') {
                    return CliCommand::Invalid(format!("invalid coin id: {}", arg));
                }
                options.coin_id = Some(coin_id.to_string());
            }
        }
    }
    CliCommand::RunTui(options)
}
