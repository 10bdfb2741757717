//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: coinlens [COIN_ID] [--light] [--api-url URL]

Arguments:
  COIN_ID          Open this coin directly (e.g. btc-bitcoin)

Options:
      --light      Start in the light theme
      --api-url    Coin API base URL
  -V, --version    Print version
  -h, --help       Print this help

Keys:
  Up/Down, k/j     Move the selection      Enter   Open coin
  p / c            Price / Chart tab       b, Esc  Back
  t                Toggle theme            q       Quit

Environment:
  COINLENS_API_URL, COINLENS_REFRESH_MS, COINLENS_LOG_DIR, COINLENS_LIGHT, RUST_LOG";

pub fn version_line() -> String {
    format!("coinlens {}", VERSION)
}

/// Print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("coinlens "));
    }

    #[test]
    fn test_usage_mentions_flags() {
        for flag in ["--light", "--api-url", "--version", "--help"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
