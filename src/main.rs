#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};
use std::sync::Arc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Runtime;

use triplog::config::Config;
use triplog::geocode::BigDataCloudClient;
use triplog::logging;
use triplog::storage::CityManager;
use triplog::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env().map_err(AppError::from)?;
    logging::init(&config.log_path()).map_err(AppError::from)?;
    info!("Starting triplog with data in {}", config.data_dir.display());

    let store = CityManager::new(&config.data_dir).map_err(AppError::from)?;
    let geocoder = BigDataCloudClient::new(config.geocode_url.as_str(), config.http_timeout)
        .map_err(AppError::from)?;
    let runtime = Runtime::new().map_err(AppError::from)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(
        Arc::new(store),
        Arc::new(geocoder),
        runtime.handle().clone(),
        config.user_name,
    );
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    info!("Shutting down");
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
