use crate::api::ApiClient;
use crate::clock::{local_label, parse_timestamp};
use crate::elapsed::{ElapsedDisplay, ElapsedFrame};
use crate::errors::ApiError;
use crate::messages;
use tokio::sync::watch;
use tracing::info;

/// Everything the widget shows apart from the ticking elapsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub status_text: String,
    pub started_at_text: String,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub error_text: String,
    pub modal: Option<String>,
}

impl Default for WidgetView {
    fn default() -> Self {
        Self {
            status_text: messages::STATUS_READY.to_string(),
            started_at_text: "-".to_string(),
            start_enabled: true,
            stop_enabled: true,
            error_text: String::new(),
            modal: None,
        }
    }
}

pub struct Widget {
    api: ApiClient,
    display: ElapsedDisplay,
    view: WidgetView,
}

impl Widget {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            display: ElapsedDisplay::new(),
            view: WidgetView::default(),
        }
    }

    pub fn view(&self) -> &WidgetView {
        &self.view
    }

    pub fn elapsed(&self) -> ElapsedFrame {
        self.display.frame()
    }

    pub fn subscribe(&self) -> watch::Receiver<ElapsedFrame> {
        self.display.subscribe()
    }

    pub fn close_modal(&mut self) {
        self.view.modal = None;
    }

    pub async fn fetch_status(&mut self, show_alert: bool) {
        let result = self.try_fetch_status(show_alert).await;
        if self.settle(result).is_some() {
            self.view.error_text.clear();
        }
    }

    pub async fn start(&mut self) {
        let result = self.api.start().await;
        if self.settle(result).is_some() {
            info!("session started");
            self.fetch_status(false).await;
        }
    }

    pub async fn stop(&mut self) {
        let result = self.api.stop().await;
        if let Some(stop) = self.settle(result) {
            info!(minutes = ?stop.duration_minutes, "session harvested");
            self.view.modal = Some(messages::harvest(&stop));
            self.fetch_status(false).await;
        }
    }

    pub async fn show_total(&mut self) {
        let result = self.api.total().await;
        if let Some(total) = self.settle(result) {
            self.view.modal = Some(messages::total_summary(&total));
        }
    }

    pub async fn reset(&mut self) {
        let result = self.api.reset().await;
        if self.settle(result).is_some() {
            info!("forest reset");
            self.view.modal = Some(messages::RESET_DONE.to_string());
            self.fetch_status(false).await;
        }
    }

    async fn try_fetch_status(&mut self, show_alert: bool) -> Result<(), ApiError> {
        let snapshot = self.api.status().await?;
        let status = snapshot.status;

        if show_alert {
            let elapsed_text = self.display.frame().text;
            self.view.modal = Some(messages::status_alert(status.is_running, &elapsed_text));
        }

        let started_at = status.started_at.as_deref().and_then(parse_timestamp);
        self.view.status_text = messages::status_text(status.is_running).to_string();
        self.view.started_at_text = started_at
            .map(local_label)
            .unwrap_or_else(|| "-".to_string());
        self.view.start_enabled = !status.is_running;
        self.view.stop_enabled = status.is_running;

        match started_at {
            Some(start) if status.is_running => {
                self.display.begin_display(start, snapshot.server_now);
            }
            _ => {
                self.display.end_display();
                self.view.status_text = messages::STATUS_READY.to_string();
            }
        }

        Ok(())
    }

    /// Only a successful status refresh clears the error line.
    fn settle<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.view.error_text = messages::error_line(&err.message);
                None
            }
        }
    }
}
