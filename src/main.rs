use anyhow::Context;

mod cli;
use cli::{parse_cli_mode, run_cli_mode, CliMode, USAGE};
mod tui;
use tui::run_tui;

use events_board::{
    storage::{config::Config, EventStore, SqliteStore},
    ui::theme::Theme,
};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = Config::load_or_create().context("Failed to load configuration")?;
    let backend = SqliteStore::open(&config.storage.database)
        .with_context(|| format!("Failed to open {}", config.storage.database.display()))?;
    let store = EventStore::load(Box::new(backend), &config.storage.key)
        .context("Failed to load events")?;

    if cli_mode == CliMode::Tui {
        run_tui(store, Theme::get_by_name(&config.ui.theme))?;
        return Ok(());
    }

    if !run_cli_mode(cli_mode, store)? {
        std::process::exit(1);
    }
    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "events-board.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("events-board started");
}
