//! Core synchronization between service responses and the panel sink.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::warn;

use crate::service::{Controls, ServiceStatus, StatusClass, TranscriptionControl};

/// Where panel output lands. Implementations project status text and
/// control enablement onto an actual surface (terminal, test probe).
pub trait PanelSink: Send + Sync {
    fn render_status(&self, class: StatusClass, message: &str);
    fn set_controls(&self, controls: Controls);
}

/// Drives the panel from service responses.
///
/// Every request takes a sequence token before it is sent. A response is
/// applied only if no response with a newer token has been applied yet,
/// so the last request issued wins regardless of completion order.
pub struct PanelSync<C: TranscriptionControl> {
    service: C,
    sink: Arc<dyn PanelSink>,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl<C: TranscriptionControl> PanelSync<C> {
    pub fn new(service: C, sink: Arc<dyn PanelSink>) -> Self {
        PanelSync {
            service,
            sink,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    fn next_token(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Advance the applied high-water mark. Returns false when a newer
    /// response already landed; the caller must then discard its own.
    fn try_apply(&self, token: u64) -> bool {
        self.applied.fetch_max(token, Ordering::SeqCst) < token
    }

    /// Ask the service to start transcribing. The response message is
    /// always rendered; controls flip to stop-only on a `success` report.
    pub async fn request_start(&self) {
        let token = self.next_token();
        let result = self.service.start().await;
        if !self.try_apply(token) {
            return;
        }
        match result {
            Ok(report) => {
                self.sink.render_status(report.status.class(), &report.message);
                if report.status == ServiceStatus::Success {
                    self.sink.set_controls(Controls {
                        can_start: false,
                        can_stop: true,
                    });
                }
            }
            Err(e) => {
                self.sink.render_status(
                    StatusClass::Error,
                    &format!("Failed to start transcription: {}", e),
                );
            }
        }
    }

    /// Ask the service to stop transcribing. Symmetric to `request_start`.
    pub async fn request_stop(&self) {
        let token = self.next_token();
        let result = self.service.stop().await;
        if !self.try_apply(token) {
            return;
        }
        match result {
            Ok(report) => {
                self.sink.render_status(report.status.class(), &report.message);
                if report.status == ServiceStatus::Success {
                    self.sink.set_controls(Controls {
                        can_start: true,
                        can_stop: false,
                    });
                }
            }
            Err(e) => {
                self.sink.render_status(
                    StatusClass::Error,
                    &format!("Failed to stop transcription: {}", e),
                );
            }
        }
    }

    /// Fetch the current status and project it onto the sink: controls are
    /// recomputed from the reported status and the message is always
    /// rendered, including service-reported errors. Transport failures are
    /// logged and leave the panel untouched.
    pub async fn refresh_status(&self) {
        let token = self.next_token();
        let result = self.service.status().await;
        if !self.try_apply(token) {
            return;
        }
        match result {
            Ok(report) => {
                self.sink.set_controls(Controls::for_status(report.status));
                self.sink.render_status(report.status.class(), &report.message);
            }
            Err(e) => {
                warn!("[panel] status poll failed: {}", e);
            }
        }
    }
}
