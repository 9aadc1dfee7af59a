use clap::Parser;

use cornice_core::config;

#[derive(Parser)]
#[command(
    name = "cornice",
    version,
    about = "Draws a temporary highlight border around a window"
)]
struct Cli {
    /// Handle of the window to highlight (hexadecimal, e.g. 0x3069C)
    #[arg(short = 'w', long, value_parser = parse_window_id)]
    window_id: usize,
}

/// Parses a window handle from a hex string (optional 0x prefix).
fn parse_window_id(s: &str) -> Result<usize, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    usize::from_str_radix(hex, 16).map_err(|_| format!("invalid window handle '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    cornice_core::log::init(&config.logging);

    if let Err(e) = cornice_windows::highlight::run(cli.window_id, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_hex() {
        assert_eq!(parse_window_id("3069C"), Ok(0x3069C));
    }

    #[test]
    fn parses_prefixed_hex() {
        assert_eq!(parse_window_id("0x3069C"), Ok(0x3069C));
        assert_eq!(parse_window_id("0X3069c"), Ok(0x3069C));
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!(parse_window_id("not-a-handle").is_err());
        assert!(parse_window_id("").is_err());
    }
}
