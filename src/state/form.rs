//! Form drafts and submission state for the create views.
//!
//! Each form owns its field buffers, the focused-field index, and the
//! submitting/success/error flags. Validation happens before dispatch;
//! a failing draft never reaches the data access layer.

use crate::domain::{ClientDraft, InvoiceDraft, InvoiceItem};

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ============================================================================
// Client Form
// ============================================================================

/// Field labels for the client form, in focus order.
pub const CLIENT_FORM_FIELDS: [&str; 7] = [
    "Client Name",
    "Company Name",
    "Email",
    "Phone",
    "Address",
    "Tax ID",
    "Notes",
];

/// Draft state for the create-client view.
#[derive(Debug, Default)]
pub struct ClientForm {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub tax_id: String,
    pub notes: String,
    /// Index into [`CLIENT_FORM_FIELDS`].
    pub focus: usize,
    pub submitting: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl ClientForm {
    /// Clears everything back to an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The buffer for field `index`, in [`CLIENT_FORM_FIELDS`] order.
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.company_name,
            2 => &self.email,
            3 => &self.phone,
            4 => &self.address,
            5 => &self.tax_id,
            _ => &self.notes,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            1 => &mut self.company_name,
            2 => &mut self.email,
            3 => &mut self.phone,
            4 => &mut self.address,
            5 => &mut self.tax_id,
            _ => &mut self.notes,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % CLIENT_FORM_FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(CLIENT_FORM_FIELDS.len() - 1);
    }

    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    /// Required-field validation: `name` must be non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message describing the missing field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Client name is required".to_string());
        }
        Ok(())
    }

    /// Builds the wire draft; empty optional fields are omitted.
    #[must_use]
    pub fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            name: self.name.trim().to_string(),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            address: non_empty(&self.address),
            company_name: non_empty(&self.company_name),
            tax_id: non_empty(&self.tax_id),
            notes: non_empty(&self.notes),
        }
    }

    /// Returns `true` if every field buffer is empty.
    #[must_use]
    #[allow(dead_code)] // Part of the form API
    pub fn is_empty(&self) -> bool {
        (0..CLIENT_FORM_FIELDS.len()).all(|i| self.field(i).is_empty())
    }
}

// ============================================================================
// Invoice Form
// ============================================================================

/// Field labels for the invoice form, in focus order.
pub const INVOICE_FORM_FIELDS: [&str; 6] = [
    "Invoice Number",
    "Client ID",
    "Due Date (YYYY-MM-DD)",
    "Payment Terms",
    "Tax Rate",
    "Notes",
];

/// Draft state for the create-invoice view.
#[derive(Debug, Default)]
pub struct InvoiceForm {
    pub invoice_number: String,
    pub client_id: String,
    pub due_date: String,
    pub payment_terms: String,
    pub tax_rate: String,
    pub notes: String,
    /// Index into [`INVOICE_FORM_FIELDS`].
    pub focus: usize,
    pub submitting: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl InvoiceForm {
    /// Clears everything back to an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The buffer for field `index`, in [`INVOICE_FORM_FIELDS`] order.
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.invoice_number,
            1 => &self.client_id,
            2 => &self.due_date,
            3 => &self.payment_terms,
            4 => &self.tax_rate,
            _ => &self.notes,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.invoice_number,
            1 => &mut self.client_id,
            2 => &mut self.due_date,
            3 => &mut self.payment_terms,
            4 => &mut self.tax_rate,
            _ => &mut self.notes,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % INVOICE_FORM_FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(INVOICE_FORM_FIELDS.len() - 1);
    }

    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    /// Required-field validation: invoice number, a positive numeric client
    /// id, and a parseable tax rate when one was entered.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.invoice_number.trim().is_empty() {
            return Err("Invoice number is required".to_string());
        }
        match self.client_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => {}
            _ => return Err("Client ID must be a positive number".to_string()),
        }
        if !self.tax_rate.trim().is_empty() && self.tax_rate.trim().parse::<f64>().is_err() {
            return Err("Tax rate must be a number".to_string());
        }
        Ok(())
    }

    /// Builds the wire draft. Call only after [`Self::validate`] passed.
    #[must_use]
    pub fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            invoice_number: self.invoice_number.trim().to_string(),
            client_id: self.client_id.trim().parse().unwrap_or_default(),
            due_date: non_empty(&self.due_date),
            status: None,
            notes: non_empty(&self.notes),
            payment_terms: non_empty(&self.payment_terms),
            tax_rate: self.tax_rate.trim().parse().ok(),
            items: Vec::<InvoiceItem>::new(),
        }
    }

    /// Returns `true` if every field buffer is empty.
    #[must_use]
    #[allow(dead_code)] // Part of the form API
    pub fn is_empty(&self) -> bool {
        (0..INVOICE_FORM_FIELDS.len()).all(|i| self.field(i).is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_form_requires_name() {
        let mut form = ClientForm::default();
        assert!(form.validate().is_err());

        form.name = "   ".to_string();
        assert!(form.validate().is_err());

        form.name = "Acme".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_client_form_draft_omits_blanks() {
        let form = ClientForm {
            name: " Acme ".to_string(),
            email: "a@b.com".to_string(),
            ..ClientForm::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
        assert!(draft.phone.is_none());
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_client_form_focus_wraps() {
        let mut form = ClientForm::default();
        form.focus_prev();
        assert_eq!(form.focus, CLIENT_FORM_FIELDS.len() - 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_client_form_editing_targets_focused_field() {
        let mut form = ClientForm::default();
        form.insert_char('A');
        form.focus_next();
        form.insert_char('B');
        assert_eq!(form.name, "A");
        assert_eq!(form.company_name, "B");

        form.backspace();
        assert_eq!(form.company_name, "");
    }

    #[test]
    fn test_client_form_reset_clears_everything() {
        let mut form = ClientForm {
            name: "Acme".to_string(),
            focus: 3,
            error: Some("boom".to_string()),
            ..ClientForm::default()
        };
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form.focus, 0);
        assert!(form.error.is_none());
        assert!(!form.success);
    }

    #[test]
    fn test_invoice_form_validation() {
        let mut form = InvoiceForm::default();
        assert!(form.validate().is_err());

        form.invoice_number = "INV-001".to_string();
        assert!(form.validate().is_err(), "client id still missing");

        form.client_id = "abc".to_string();
        assert!(form.validate().is_err(), "client id must be numeric");

        form.client_id = "0".to_string();
        assert!(form.validate().is_err(), "client id must be positive");

        form.client_id = "3".to_string();
        assert!(form.validate().is_ok());

        form.tax_rate = "x".to_string();
        assert!(form.validate().is_err(), "tax rate must parse");

        form.tax_rate = "0.2".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invoice_form_draft() {
        let form = InvoiceForm {
            invoice_number: "INV-001".to_string(),
            client_id: "3".to_string(),
            tax_rate: "0.2".to_string(),
            ..InvoiceForm::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.invoice_number, "INV-001");
        assert_eq!(draft.client_id, 3);
        assert_eq!(draft.tax_rate, Some(0.2));
        assert!(draft.due_date.is_none());
        assert!(draft.items.is_empty());
    }
}
