//! Application lifecycle: construction, the main loop, the health monitor
//! task, and teardown.

use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::config::AppConfig;
use crate::client::ApiClient;
use crate::constants::{HEALTH_CHECK_INTERVAL, TICK_RATE};
use crate::domain::ConnectivityState;
use crate::handler;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppMessage, ClientForm, DataState, InvoiceForm, View};

impl App {
    /// Creates a new App instance for the configured backend.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let client = ApiClient::new(config.api_base_url);

        Self {
            view: View::default(),
            connectivity: ConnectivityState::Checking,
            health: None,
            data: DataState::default(),
            client_form: ClientForm::default(),
            invoice_form: InvoiceForm::default(),
            exit: false,
            message_tx,
            message_rx,
            client,
            health_task: None,
            redirect_task: None,
        }
    }

    /// Runs the main application loop until exit, then tears down timers.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_health_monitor();
        // Entering the initial view triggers its loader like any other
        // navigation.
        self.navigate(View::default());

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        handler::handle_key_event(self, key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.shutdown();
        Ok(())
    }

    // ========================================================================
    // Health Monitor
    // ========================================================================

    /// Spawns the recurring health probe.
    ///
    /// The interval's first tick fires immediately, so the indicator leaves
    /// `Checking` as soon as the first probe resolves; afterwards the probe
    /// repeats every [`HEALTH_CHECK_INTERVAL`]. The task handle is kept so
    /// teardown can release the timer.
    pub(crate) fn start_health_monitor(&mut self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        let handle = tokio::spawn(async move {
            let mut probe_interval = interval(HEALTH_CHECK_INTERVAL);
            loop {
                probe_interval.tick().await;
                let result = client.health().await.map_err(|e| e.to_string());
                if message_tx.send(AppMessage::HealthChecked(result)).is_err() {
                    // Receiver gone: the app is shutting down.
                    break;
                }
            }
        });

        self.health_task = Some(handle);
    }

    /// Releases every owned timer. Called once the main loop ends; in-flight
    /// HTTP requests are left to settle and their completions go nowhere.
    pub(crate) fn shutdown(&mut self) {
        if let Some(handle) = self.health_task.take() {
            handle.abort();
        }
        self.cancel_redirect();
    }
}

impl Drop for App {
    // Timers must not outlive the controller, even on an early error return.
    fn drop(&mut self) {
        self.shutdown();
    }
}
