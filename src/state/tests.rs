//! Behavioral tests for the state controller.
//!
//! These drive the pure transition functions (`navigate`, `apply_message`,
//! `begin`/`finish`) directly; no test talks to a real backend.

use super::*;
use crate::config::AppConfig;
use crate::domain::{Client, ConnectivityState, HealthStatus, Invoice, InvoiceStatus};

fn test_app() -> App {
    App::new(AppConfig::default())
}

fn test_client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: Some("a@b.com".to_string()),
        phone: None,
        address: None,
        company_name: None,
        tax_id: None,
        notes: None,
        is_active: true,
        created_at: "2024-03-01T10:00:00Z".to_string(),
        updated_at: None,
    }
}

fn test_invoice(id: i64, number: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id,
        invoice_number: number.to_string(),
        client_id: 1,
        due_date: None,
        status,
        notes: None,
        payment_terms: None,
        tax_rate: 0.2,
        total_amount: 120.0,
        tax_amount: 20.0,
        issue_date: "2024-04-01".to_string(),
        created_at: "2024-04-01T09:30:00Z".to_string(),
        updated_at: None,
    }
}

fn online_payload() -> HealthStatus {
    HealthStatus {
        status: "Online".to_string(),
        message: "Backend Connected Successfully!".to_string(),
    }
}

// ============================================================================
// Navigation
// ============================================================================

mod navigation {
    use super::*;

    #[tokio::test]
    async fn navigating_to_a_list_view_triggers_exactly_one_load() {
        let mut app = test_app();
        assert_eq!(app.data.clients.seq(), 0);

        app.navigate(View::Clients);

        assert_eq!(app.current_view(), View::Clients);
        assert_eq!(app.data.clients.seq(), 1);
        assert!(app.data.clients.is_loading());
        // The other slots are untouched.
        assert_eq!(app.data.invoices.seq(), 0);
    }

    #[tokio::test]
    async fn re_entering_a_view_re_runs_its_loader() {
        let mut app = test_app();
        app.navigate(View::Clients);
        app.navigate(View::Clients);
        assert_eq!(app.data.clients.seq(), 2);
    }

    #[tokio::test]
    async fn form_views_load_nothing() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        assert_eq!(app.data.clients.seq(), 0);
        assert_eq!(app.data.invoices.seq(), 0);
        assert_eq!(app.data.dashboard.seq(), 0);
    }

    #[tokio::test]
    async fn dashboard_uses_its_own_joined_slot() {
        let mut app = test_app();
        app.navigate(View::Dashboard);
        assert_eq!(app.data.dashboard.seq(), 1);
        assert!(app.data.dashboard.is_loading());
        assert_eq!(app.data.clients.seq(), 0);
    }

    #[tokio::test]
    async fn entering_a_form_resets_its_draft() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        app.client_form.name = "left over".to_string();
        app.client_form.error = Some("old error".to_string());

        app.navigate(View::Clients);
        app.navigate(View::CreateClient);

        assert!(app.client_form.is_empty());
        assert!(app.client_form.error.is_none());
    }
}

// ============================================================================
// Health Monitor
// ============================================================================

mod health {
    use super::*;

    #[test]
    fn starts_checking() {
        let app = test_app();
        assert_eq!(app.connectivity, ConnectivityState::Checking);
        assert!(app.health.is_none());
    }

    #[test]
    fn successful_probe_goes_online() {
        let mut app = test_app();
        app.apply_message(AppMessage::HealthChecked(Ok(online_payload())));
        assert_eq!(app.connectivity, ConnectivityState::Online);
        assert_eq!(app.health.as_ref().unwrap().status, "Online");
    }

    #[test]
    fn failed_probe_goes_offline() {
        let mut app = test_app();
        app.apply_message(AppMessage::HealthChecked(Err("HTTP 500".to_string())));
        assert_eq!(app.connectivity, ConnectivityState::Offline);
    }

    #[test]
    fn never_returns_to_checking_and_recovers() {
        let mut app = test_app();
        app.apply_message(AppMessage::HealthChecked(Err("down".to_string())));
        assert_eq!(app.connectivity, ConnectivityState::Offline);

        app.apply_message(AppMessage::HealthChecked(Ok(online_payload())));
        assert_eq!(app.connectivity, ConnectivityState::Online);

        app.apply_message(AppMessage::HealthChecked(Err("down again".to_string())));
        assert_eq!(app.connectivity, ConnectivityState::Offline);
        assert!(app.connectivity.is_settled());
    }

    #[test]
    fn converges_under_constant_success() {
        let mut app = test_app();
        for _ in 0..5 {
            app.apply_message(AppMessage::HealthChecked(Ok(online_payload())));
            assert_eq!(app.connectivity, ConnectivityState::Online);
        }
    }

    #[test]
    fn probe_failure_does_not_touch_view_data() {
        let mut app = test_app();
        let seq = app.data.clients.begin();
        app.data.clients.finish(seq, Ok(vec![test_client(1, "Acme")]));

        app.apply_message(AppMessage::HealthChecked(Err("down".to_string())));

        assert_eq!(app.data.clients.data().len(), 1);
        assert!(app.data.clients.error().is_none());
    }
}

// ============================================================================
// View Loaders
// ============================================================================

mod loaders {
    use super::*;

    #[tokio::test]
    async fn successful_load_replaces_data() {
        let mut app = test_app();
        app.navigate(View::Clients);
        let seq = app.data.clients.seq();

        app.apply_message(AppMessage::ClientsLoaded {
            seq,
            result: Ok(vec![test_client(1, "Acme"), test_client(2, "Globex")]),
        });

        assert_eq!(app.data.clients.data().len(), 2);
        assert!(!app.data.clients.is_loading());
        assert!(app.data.clients.error().is_none());
    }

    #[tokio::test]
    async fn empty_list_is_a_successful_load() {
        let mut app = test_app();
        app.navigate(View::Clients);
        let seq = app.data.clients.seq();

        app.apply_message(AppMessage::ClientsLoaded {
            seq,
            result: Ok(Vec::new()),
        });

        assert!(app.data.clients.data().is_empty());
        assert!(!app.data.clients.is_loading());
        assert!(app.data.clients.error().is_none());
    }

    #[tokio::test]
    async fn failed_reload_keeps_stale_data() {
        let mut app = test_app();
        app.navigate(View::Invoices);
        let seq = app.data.invoices.seq();
        app.apply_message(AppMessage::InvoicesLoaded {
            seq,
            result: Ok(vec![test_invoice(1, "INV-001", InvoiceStatus::Paid)]),
        });

        app.navigate(View::Invoices);
        let seq = app.data.invoices.seq();
        app.apply_message(AppMessage::InvoicesLoaded {
            seq,
            result: Err("network error: connection refused".to_string()),
        });

        let invoices = app.data.invoices.data();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].invoice_number, "INV-001");
        assert!(app.data.invoices.error().is_some());
        assert!(!app.data.invoices.is_loading());
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let mut app = test_app();
        // Two rapid navigations into the same view issue two fetches.
        app.navigate(View::Clients);
        let first = app.data.clients.seq();
        app.navigate(View::Clients);
        let second = app.data.clients.seq();

        // The newer fetch resolves first...
        app.apply_message(AppMessage::ClientsLoaded {
            seq: second,
            result: Ok(vec![test_client(2, "Globex")]),
        });
        // ...then the older response arrives late and must be dropped.
        app.apply_message(AppMessage::ClientsLoaded {
            seq: first,
            result: Ok(vec![test_client(1, "Acme")]),
        });

        assert_eq!(app.data.clients.data().len(), 1);
        assert_eq!(app.data.clients.data()[0].name, "Globex");
    }

    #[tokio::test]
    async fn dashboard_join_fails_as_a_unit() {
        let mut app = test_app();
        app.navigate(View::Dashboard);
        let seq = app.data.dashboard.seq();
        app.apply_message(AppMessage::DashboardLoaded {
            seq,
            result: Ok(DashboardData {
                clients: vec![test_client(1, "Acme")],
                invoices: vec![test_invoice(1, "INV-001", InvoiceStatus::Draft)],
            }),
        });

        app.navigate(View::Dashboard);
        let seq = app.data.dashboard.seq();
        app.apply_message(AppMessage::DashboardLoaded {
            seq,
            result: Err("server returned HTTP 500".to_string()),
        });

        // One aggregate error; both halves of the snapshot survive.
        assert!(app.data.dashboard.error().is_some());
        assert_eq!(app.data.dashboard.data().clients.len(), 1);
        assert_eq!(app.data.dashboard.data().invoices.len(), 1);
    }
}

// ============================================================================
// Mutation Submitters
// ============================================================================

mod submitters {
    use super::*;

    #[test]
    fn empty_name_is_rejected_without_a_request() {
        let mut app = test_app();
        // No tokio runtime here: a validation failure must return before
        // any task is spawned, or this test would panic.
        app.submit_client_form();

        assert!(!app.client_form.submitting);
        assert_eq!(
            app.client_form.error.as_deref(),
            Some("Client name is required")
        );
    }

    #[test]
    fn invalid_invoice_draft_is_rejected_without_a_request() {
        let mut app = test_app();
        app.invoice_form.invoice_number = "INV-001".to_string();
        app.invoice_form.client_id = "not a number".to_string();

        app.submit_invoice_form();

        assert!(!app.invoice_form.submitting);
        assert!(app.invoice_form.error.is_some());
    }

    #[tokio::test]
    async fn valid_draft_starts_submitting() {
        let mut app = test_app();
        app.client_form.name = "Acme".to_string();
        app.submit_client_form();

        assert!(app.client_form.submitting);
        assert!(app.client_form.error.is_none());
    }

    #[tokio::test]
    async fn double_submit_is_ignored_while_in_flight() {
        let mut app = test_app();
        app.client_form.name = "Acme".to_string();
        app.submit_client_form();
        app.client_form.error = Some("sentinel".to_string());

        // Second Enter while submitting must not reset anything.
        app.submit_client_form();
        assert_eq!(app.client_form.error.as_deref(), Some("sentinel"));
    }

    #[tokio::test]
    async fn success_resets_draft_and_schedules_redirect() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        app.client_form.name = "Acme".to_string();
        app.client_form.email = "a@b.com".to_string();
        app.submit_client_form();

        app.apply_message(AppMessage::ClientCreated(Ok(test_client(1, "Acme"))));

        assert!(app.client_form.success);
        assert!(app.client_form.is_empty());
        assert!(!app.client_form.submitting);
        assert!(app.redirect_task.is_some());
    }

    #[tokio::test]
    async fn redirect_navigates_to_the_list_exactly_once() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        app.client_form.name = "Acme".to_string();
        app.submit_client_form();
        app.apply_message(AppMessage::ClientCreated(Ok(test_client(1, "Acme"))));

        // The timer firing delivers RedirectDue.
        app.apply_message(AppMessage::RedirectDue(View::Clients));

        assert_eq!(app.current_view(), View::Clients);
        // Entering the list re-ran its loader, so the new record shows up.
        assert_eq!(app.data.clients.seq(), 1);
        assert!(app.data.clients.is_loading());
        // The consumed timer is gone.
        assert!(app.redirect_task.is_none());
    }

    #[tokio::test]
    async fn manual_navigation_cancels_the_pending_redirect() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        app.client_form.name = "Acme".to_string();
        app.submit_client_form();
        app.apply_message(AppMessage::ClientCreated(Ok(test_client(1, "Acme"))));
        assert!(app.redirect_task.is_some());

        app.navigate(View::Dashboard);

        assert!(app.redirect_task.is_none());
        assert_eq!(app.current_view(), View::Dashboard);
    }

    #[tokio::test]
    async fn failure_keeps_draft_for_retry() {
        let mut app = test_app();
        app.navigate(View::CreateClient);
        app.client_form.name = "Acme".to_string();
        app.client_form.notes = "important".to_string();
        app.submit_client_form();

        app.apply_message(AppMessage::ClientCreated(Err(
            "Failed to create client".to_string(),
        )));

        assert_eq!(app.client_form.name, "Acme");
        assert_eq!(app.client_form.notes, "important");
        assert!(!app.client_form.submitting);
        assert!(!app.client_form.success);
        assert_eq!(
            app.client_form.error.as_deref(),
            Some("Failed to create client")
        );
        assert!(app.redirect_task.is_none());
    }

    #[tokio::test]
    async fn invoice_success_redirects_to_invoices() {
        let mut app = test_app();
        app.navigate(View::CreateInvoice);
        app.invoice_form.invoice_number = "INV-002".to_string();
        app.invoice_form.client_id = "1".to_string();
        app.submit_invoice_form();

        app.apply_message(AppMessage::InvoiceCreated(Ok(test_invoice(
            2,
            "INV-002",
            InvoiceStatus::Draft,
        ))));
        assert!(app.invoice_form.success);
        assert!(app.invoice_form.is_empty());

        app.apply_message(AppMessage::RedirectDue(View::Invoices));
        assert_eq!(app.current_view(), View::Invoices);
        assert!(app.data.invoices.is_loading());
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn health_monitor_task_is_owned_and_released() {
        let mut app = test_app();
        app.start_health_monitor();
        assert!(app.health_task.is_some());

        app.shutdown();
        assert!(app.health_task.is_none());
        assert!(app.redirect_task.is_none());
    }

    #[tokio::test]
    async fn channel_delivery_reaches_process_messages() {
        let mut app = test_app();
        app.message_tx
            .send(AppMessage::HealthChecked(Ok(online_payload())))
            .unwrap();

        app.process_messages();
        assert_eq!(app.connectivity, ConnectivityState::Online);
    }
}
