use std::process::ExitCode;

use casual_chess::chess_errors::ChessError;
use casual_chess::game_state::game_config::GameConfig;
use casual_chess::session::terminal_loop::run_stdio_loop;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Builds the setup from `--depth N`, `--chess960`, `--two-player` and
/// `--handicap side:PIECES`.
fn config_from_args(mut args: impl Iterator<Item = String>) -> Result<GameConfig, ChessError> {
    let mut config = GameConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--chess960" => config.set_option("Chess960", "true")?,
            "--two-player" => config.set_option("Mode", "human")?,
            "--depth" | "--handicap" => {
                let name = if arg == "--depth" { "Depth" } else { "Handicap" };
                let value = args.next().unwrap_or_default();
                config.set_option(name, &value)?;
            }
            other => {
                return Err(ChessError::InvalidOption {
                    name: other.to_owned(),
                    value: String::new(),
                })
            }
        }
    }
    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match config_from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "bad command line");
            eprintln!("usage: casual_chess [--depth N] [--chess960] [--two-player] [--handicap white|black:PIECES]");
            return ExitCode::FAILURE;
        }
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "terminal loop failed");
            ExitCode::FAILURE
        }
    }
}
