mod cli;
use cli::{CliMode, parse_cli_mode, run_agenda_mode};
mod tui;
use tui::run_tui;

use calview::storage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default config: {}", e);
            Config::default()
        }
    };

    match cli_mode {
        CliMode::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        CliMode::AgendaDate(date) => run_agenda_mode(&config, date),
        CliMode::Default => run_tui(config).await,
    }
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "calview.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("calview started");
}
