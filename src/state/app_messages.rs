//! Message application: every background completion becomes a pure state
//! transition here.

use crate::domain::ConnectivityState;

use super::{App, AppMessage, View};

impl App {
    /// Drains the channel, applying each pending message.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    /// Applies one completion to app state.
    ///
    /// Failures never escape this function: every error lands in a local
    /// state slot (a view's error banner, a form's error line, or the
    /// `Offline` indicator) and rendering continues from whatever data was
    /// last known.
    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HealthChecked(Ok(payload)) => {
                self.connectivity = ConnectivityState::Online;
                self.health = Some(payload);
            }
            AppMessage::HealthChecked(Err(error)) => {
                // Silent beyond the indicator; the next probe may recover.
                tracing::debug!("health probe failed: {error}");
                self.connectivity = ConnectivityState::Offline;
            }
            AppMessage::ClientsLoaded { seq, result } => {
                self.data.clients.finish(seq, result);
            }
            AppMessage::InvoicesLoaded { seq, result } => {
                self.data.invoices.finish(seq, result);
            }
            AppMessage::DashboardLoaded { seq, result } => {
                self.data.dashboard.finish(seq, result);
            }
            AppMessage::ClientCreated(Ok(_)) => {
                self.client_form.reset();
                self.client_form.success = true;
                self.schedule_redirect(View::Clients);
            }
            AppMessage::ClientCreated(Err(error)) => {
                // Draft stays intact so the user can retry without retyping.
                self.client_form.submitting = false;
                self.client_form.error = Some(error);
            }
            AppMessage::InvoiceCreated(Ok(_)) => {
                self.invoice_form.reset();
                self.invoice_form.success = true;
                self.schedule_redirect(View::Invoices);
            }
            AppMessage::InvoiceCreated(Err(error)) => {
                self.invoice_form.submitting = false;
                self.invoice_form.error = Some(error);
            }
            AppMessage::RedirectDue(view) => {
                self.navigate(view);
            }
        }
    }
}
