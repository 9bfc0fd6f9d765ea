//! Invoice records and drafts.

use serde::{Deserialize, Serialize};

// ============================================================================
// Invoice Status
// ============================================================================

/// Invoice lifecycle status.
///
/// The backend treats this as an open set of strings; unknown values
/// round-trip through [`InvoiceStatus::Other`] instead of failing decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Other(String),
}

impl InvoiceStatus {
    /// The wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "sent" => Self::Sent,
            "paid" => Self::Paid,
            "overdue" => Self::Overdue,
            _ => Self::Other(value),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(value: InvoiceStatus) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Invoice
// ============================================================================

/// An invoice as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub client_id: i64,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    pub tax_rate: f64,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub issue_date: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One billable line on an invoice draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// The `POST /invoices` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub client_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    pub items: Vec<InvoiceItem>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::draft("draft", InvoiceStatus::Draft)]
    #[case::sent("sent", InvoiceStatus::Sent)]
    #[case::paid("paid", InvoiceStatus::Paid)]
    #[case::overdue("overdue", InvoiceStatus::Overdue)]
    fn test_known_status_round_trip(#[case] wire: &str, #[case] expected: InvoiceStatus) {
        let status = InvoiceStatus::from(wire.to_string());
        assert_eq!(status, expected);
        assert_eq!(status.as_str(), wire);
    }

    #[test]
    fn test_unknown_status_round_trips_through_other() {
        let status = InvoiceStatus::from("cancelled".to_string());
        assert_eq!(status, InvoiceStatus::Other("cancelled".to_string()));
        assert_eq!(String::from(status), "cancelled");
    }

    #[test]
    fn test_invoice_deserializes() {
        let json = r#"{
            "id": 7,
            "invoice_number": "INV-007",
            "client_id": 3,
            "status": "paid",
            "tax_rate": 0.2,
            "total_amount": 1200.0,
            "tax_amount": 200.0,
            "issue_date": "2024-04-01",
            "created_at": "2024-04-01T09:30:00Z"
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.invoice_number, "INV-007");
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert!(invoice.due_date.is_none());
    }

    #[test]
    fn test_draft_serializes_items() {
        let draft = InvoiceDraft {
            invoice_number: "INV-001".to_string(),
            client_id: 1,
            items: vec![InvoiceItem {
                description: "Consulting".to_string(),
                quantity: 2.0,
                unit_price: 100.0,
                total: 200.0,
            }],
            ..InvoiceDraft::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"items\""));
        assert!(json.contains("Consulting"));
        assert!(!json.contains("\"due_date\""));
    }
}
