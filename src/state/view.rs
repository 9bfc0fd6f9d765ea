//! The closed set of views and what each one needs loaded on entry.

// ============================================================================
// View
// ============================================================================

/// One named screen of the application. Exactly one is current at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Clients,
    Invoices,
    CreateClient,
    CreateInvoice,
}

/// The data a view requires when it becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRequirement {
    /// Pure-form views need nothing before submission.
    None,
    Clients,
    Invoices,
    /// The dashboard joins both resources and fails as a unit.
    ClientsAndInvoices,
}

impl View {
    /// Every view, in tab order.
    #[allow(dead_code)] // Part of the view registry API
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Clients,
        Self::Invoices,
        Self::CreateClient,
        Self::CreateInvoice,
    ];

    /// Human-readable title for headers and tabs.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Invoices => "Invoices",
            Self::CreateClient => "New Client",
            Self::CreateInvoice => "New Invoice",
        }
    }

    /// The loader contract of this view.
    #[must_use]
    pub const fn data_requirement(self) -> DataRequirement {
        match self {
            Self::Dashboard => DataRequirement::ClientsAndInvoices,
            Self::Clients => DataRequirement::Clients,
            Self::Invoices => DataRequirement::Invoices,
            Self::CreateClient | Self::CreateInvoice => DataRequirement::None,
        }
    }

    /// For form views, the list view a successful create redirects to.
    #[must_use]
    pub const fn redirect_target(self) -> Option<Self> {
        match self {
            Self::CreateClient => Some(Self::Clients),
            Self::CreateInvoice => Some(Self::Invoices),
            Self::Dashboard | Self::Clients | Self::Invoices => None,
        }
    }

    /// Returns `true` for the two form views.
    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(self, Self::CreateClient | Self::CreateInvoice)
    }
}

// ============================================================================
// Tests
// ============================================================================
