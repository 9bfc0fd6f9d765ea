//! Navigation, view loaders, and mutation submitters.

use tokio::time::sleep;

use crate::constants::REDIRECT_DELAY;

use super::{App, AppMessage, DashboardData, DataRequirement, View};

impl App {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Makes `view` current, unconditionally.
    ///
    /// Navigating is idempotent and re-triggerable: every transition into a
    /// view re-runs its loader, which is what refreshes a list after a
    /// create redirects back into it. A pending redirect timer is dropped -
    /// the form that scheduled it is no longer mounted. Entering a form
    /// view starts from a fresh draft.
    pub fn navigate(&mut self, view: View) {
        self.cancel_redirect();
        self.view = view;
        match view {
            View::CreateClient => self.client_form.reset(),
            View::CreateInvoice => self.invoice_form.reset(),
            _ => {}
        }
        self.load_view_data(view);
    }

    /// Re-runs the current view's loader.
    pub fn refresh(&mut self) {
        self.load_view_data(self.view);
    }

    // ========================================================================
    // View Loaders
    // ========================================================================

    fn load_view_data(&mut self, view: View) {
        match view.data_requirement() {
            DataRequirement::None => {}
            DataRequirement::Clients => {
                let seq = self.data.clients.begin();
                self.spawn_clients_load(seq);
            }
            DataRequirement::Invoices => {
                let seq = self.data.invoices.begin();
                self.spawn_invoices_load(seq);
            }
            DataRequirement::ClientsAndInvoices => {
                let seq = self.data.dashboard.begin();
                self.spawn_dashboard_load(seq);
            }
        }
    }

    fn spawn_clients_load(&self, seq: u64) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.list_clients().await.map_err(|e| e.to_string());
            let _ = message_tx.send(AppMessage::ClientsLoaded { seq, result });
        });
    }

    fn spawn_invoices_load(&self, seq: u64) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.list_invoices().await.map_err(|e| e.to_string());
            let _ = message_tx.send(AppMessage::InvoicesLoaded { seq, result });
        });
    }

    /// Dashboard fetches run concurrently and settle as a unit: one
    /// aggregate error if any leg fails, data untouched until both succeed.
    fn spawn_dashboard_load(&self, seq: u64) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let (clients, invoices) =
                tokio::join!(client.list_clients(), client.list_invoices());

            let result = match (clients, invoices) {
                (Ok(clients), Ok(invoices)) => Ok(DashboardData { clients, invoices }),
                (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
            };

            let _ = message_tx.send(AppMessage::DashboardLoaded { seq, result });
        });
    }

    // ========================================================================
    // Mutation Submitters
    // ========================================================================

    /// Submits the client draft if it validates; otherwise records the
    /// validation error locally without issuing a request.
    pub fn submit_client_form(&mut self) {
        if self.client_form.submitting {
            return;
        }
        self.client_form.success = false;
        if let Err(message) = self.client_form.validate() {
            self.client_form.error = Some(message);
            return;
        }
        self.client_form.error = None;
        self.client_form.submitting = true;

        let draft = self.client_form.to_draft();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client
                .create_client(&draft)
                .await
                .map_err(|_| "Failed to create client".to_string());
            let _ = message_tx.send(AppMessage::ClientCreated(result));
        });
    }

    /// Submits the invoice draft if it validates; otherwise records the
    /// validation error locally without issuing a request.
    pub fn submit_invoice_form(&mut self) {
        if self.invoice_form.submitting {
            return;
        }
        self.invoice_form.success = false;
        if let Err(message) = self.invoice_form.validate() {
            self.invoice_form.error = Some(message);
            return;
        }
        self.invoice_form.error = None;
        self.invoice_form.submitting = true;

        let draft = self.invoice_form.to_draft();
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client
                .create_invoice(&draft)
                .await
                .map_err(|_| "Failed to create invoice".to_string());
            let _ = message_tx.send(AppMessage::InvoiceCreated(result));
        });
    }

    // ========================================================================
    // Redirect Timer
    // ========================================================================

    /// Schedules the delayed navigation back to `target` after a successful
    /// create. The timer is an owned task handle so it can be released if
    /// the user leaves the form before it fires.
    pub(crate) fn schedule_redirect(&mut self, target: View) {
        self.cancel_redirect();

        let message_tx = self.message_tx.clone();
        let handle = tokio::spawn(async move {
            sleep(REDIRECT_DELAY).await;
            let _ = message_tx.send(AppMessage::RedirectDue(target));
        });

        self.redirect_task = Some(handle);
    }

    /// Drops the pending redirect, if any.
    pub(crate) fn cancel_redirect(&mut self) {
        if let Some(handle) = self.redirect_task.take() {
            handle.abort();
        }
    }
}
