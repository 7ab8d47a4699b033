//! Control-panel client for a remote transcription service.
//!
//! The service exposes `POST /start`, `POST /stop` and `GET /status`,
//! each answering `{ "status": ..., "message": ... }`. This crate keeps a
//! panel surface (any [`PanelSink`]) in sync with it: user-initiated
//! start/stop requests and a periodic status poll both feed the same
//! sequence-gated sync loop.

pub mod config;
pub mod panel;
pub mod service;

pub use config::PanelConfig;
pub use panel::{spawn_status_poll, stop_status_poll, PanelSink, PanelSync, PollHandle};
pub use service::{
    Controls, ServiceClient, ServiceStatus, StatusClass, StatusReport, TranscriptionControl,
};

/// Log directory under the platform data dir (e.g. %APPDATA%/scribe-panel/logs).
fn log_dir_path() -> std::path::PathBuf {
    dirs::data_dir()
        .map(|d| d.join("scribe-panel").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from(".").join("logs"))
}

pub fn init_logger() -> Result<std::path::PathBuf, fern::InitError> {
    let log_dir = log_dir_path();
    std::fs::create_dir_all(&log_dir).ok();
    let log_file = log_dir.join("scribe-panel.log");

    let format = |out: fern::FormatCallback<'_>, message: &std::fmt::Arguments<'_>, record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .chain(
            fern::Dispatch::new()
                .filter(|m| !m.target().starts_with("hyper") && !m.target().starts_with("reqwest"))
                .chain(std::io::stdout()),
        )
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}
