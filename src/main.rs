//! Interactive terminal panel for controlling a transcription service.

use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use scribe_panel::config::config_path;
use scribe_panel::{
    init_logger, spawn_status_poll, stop_status_poll, Controls, PanelConfig, PanelSink, PanelSync,
    ServiceClient, StatusClass,
};

/// Prints status lines and control hints to the terminal.
struct TerminalSink;

impl PanelSink for TerminalSink {
    fn render_status(&self, class: StatusClass, message: &str) {
        let tag = match class {
            StatusClass::Success => "ok",
            StatusClass::Error => "error",
            StatusClass::Neutral => "info",
        };
        println!("[{}] {}", tag, message);
    }

    fn set_controls(&self, controls: Controls) {
        let mut enabled = Vec::new();
        if controls.can_start {
            enabled.push("start");
        }
        if controls.can_stop {
            enabled.push("stop");
        }
        println!("(available: {})", enabled.join(", "));
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_path = init_logger().ok();

    let mut config = PanelConfig::load()?;
    if !config_path().exists() {
        config.save().ok();
    }
    if let Some(url) = std::env::args().nth(1) {
        config.service_url = url;
    }
    config.validate()?;

    let client = ServiceClient::new(
        &config.service_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let sync = Arc::new(PanelSync::new(client, Arc::new(TerminalSink)));
    let poll = spawn_status_poll(sync.clone(), Duration::from_secs(config.poll_interval_secs));
    info!("[panel] service url: {}", config.service_url);

    println!("Transcription control panel ({})", config.service_url);
    println!("Commands: start | stop | status | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        match line.trim() {
            "start" => sync.request_start().await,
            "stop" => sync.request_stop().await,
            "status" => sync.refresh_status().await,
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }

    stop_status_poll(poll);
    info!("[panel] exiting");
    Ok(())
}
