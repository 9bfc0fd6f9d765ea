//! Keyboard input handling.
//!
//! List views use single-key commands; form views route printable keys
//! into the focused field and reserve Esc/Tab/Enter for navigation,
//! focus cycling, and submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{App, View};

/// Dispatches one key event against the current view.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl-C always exits, regardless of view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.exit = true;
        return;
    }

    if app.current_view().is_form() {
        handle_form_key(app, key);
    } else {
        handle_browse_key(app, key);
    }
}

/// Keys for the dashboard and list views.
fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('d') => app.navigate(View::Dashboard),
        KeyCode::Char('c') => app.navigate(View::Clients),
        KeyCode::Char('i') => app.navigate(View::Invoices),
        KeyCode::Char('n') => {
            // Context-sensitive create: invoices open the invoice form,
            // everything else opens the client form.
            let form = match app.current_view() {
                View::Invoices => View::CreateInvoice,
                _ => View::CreateClient,
            };
            app.navigate(form);
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Tab => {
            let next = match app.current_view() {
                View::Dashboard => View::Clients,
                View::Clients => View::Invoices,
                _ => View::Dashboard,
            };
            app.navigate(next);
        }
        _ => {}
    }
}

/// Keys for the create-client and create-invoice views.
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let view = app.current_view();
    match key.code {
        KeyCode::Esc => {
            // Back to the associated list without submitting.
            if let Some(target) = view.redirect_target() {
                app.navigate(target);
            }
        }
        KeyCode::Enter => match view {
            View::CreateClient => app.submit_client_form(),
            View::CreateInvoice => app.submit_invoice_form(),
            _ => {}
        },
        KeyCode::Tab | KeyCode::Down => match view {
            View::CreateClient => app.client_form.focus_next(),
            View::CreateInvoice => app.invoice_form.focus_next(),
            _ => {}
        },
        KeyCode::BackTab | KeyCode::Up => match view {
            View::CreateClient => app.client_form.focus_prev(),
            View::CreateInvoice => app.invoice_form.focus_prev(),
            _ => {}
        },
        KeyCode::Backspace => match view {
            View::CreateClient => app.client_form.backspace(),
            View::CreateInvoice => app.invoice_form.backspace(),
            _ => {}
        },
        KeyCode::Char(c) => match view {
            View::CreateClient => app.client_form.insert_char(c),
            View::CreateInvoice => app.invoice_form.insert_char(c),
            _ => {}
        },
        _ => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
