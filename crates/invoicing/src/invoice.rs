use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use huerta_core::{DomainError, DomainResult, Entity, InvoiceId, SupplierId};
use huerta_extraction::ExtractedFields;

/// Invoice currency. The set is closed; anything else degrades to ARS at
/// the extraction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ars,
    Usd,
}

impl Currency {
    /// Parse a collaborator-supplied currency code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ARS" => Some(Currency::Ars),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Ars
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Currency::Ars => f.write_str("ARS"),
            Currency::Usd => f.write_str("USD"),
        }
    }
}

/// Invoice status lifecycle.
///
/// Pending is the only entry point. Approval must precede settlement:
/// Pending → Scheduled → Paid, with Pending → Rejected as the refusal
/// branch. Paid and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Pending,
    Scheduled,
    Paid,
    Rejected,
}

impl InvoiceStatus {
    /// Whether any transition leaves this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Rejected)
    }

    /// The allowed-transition table.
    pub fn can_become(self, target: InvoiceStatus) -> bool {
        matches!(
            (self, target),
            (InvoiceStatus::Pending, InvoiceStatus::Scheduled)
                | (InvoiceStatus::Scheduled, InvoiceStatus::Paid)
                | (InvoiceStatus::Pending, InvoiceStatus::Rejected)
        )
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvoiceStatus::Pending => f.write_str("PENDING"),
            InvoiceStatus::Scheduled => f.write_str("SCHEDULED"),
            InvoiceStatus::Paid => f.write_str("PAID"),
            InvoiceStatus::Rejected => f.write_str("REJECTED"),
        }
    }
}

/// A supplier-submitted billing record tracked through the approval /
/// settlement lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    supplier_id: SupplierId,
    /// Free-text identifier, supplier- or extraction-assigned; not unique
    /// across suppliers.
    invoice_number: String,
    /// Amount in whole currency units.
    amount: u64,
    currency: Currency,
    upload_date: NaiveDate,
    estimated_payment_date: Option<NaiveDate>,
    payment_date: Option<NaiveDate>,
    status: InvoiceStatus,
    file_url: Option<String>,
    notes: Option<String>,
}

impl Invoice {
    /// Create a fresh pending invoice.
    pub fn new(
        id: InvoiceId,
        supplier_id: SupplierId,
        invoice_number: impl Into<String>,
        amount: u64,
        currency: Currency,
        upload_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            supplier_id,
            invoice_number: invoice_number.into(),
            amount,
            currency,
            upload_date,
            estimated_payment_date: None,
            payment_date: None,
            status: InvoiceStatus::Pending,
            file_url: None,
            notes: None,
        }
    }

    /// Rehydrate a known record (seed/reference data) with explicit status
    /// and dates, bypassing the transition machinery.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: InvoiceId,
        supplier_id: SupplierId,
        invoice_number: impl Into<String>,
        amount: u64,
        currency: Currency,
        upload_date: NaiveDate,
        estimated_payment_date: Option<NaiveDate>,
        payment_date: Option<NaiveDate>,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            id,
            supplier_id,
            invoice_number: invoice_number.into(),
            amount,
            currency,
            upload_date,
            estimated_payment_date,
            payment_date,
            status,
            file_url: None,
            notes: None,
        }
    }

    /// Materialize a pending invoice from best-effort extraction output.
    ///
    /// Never fails: missing or out-of-range fields degrade to defaults.
    /// - no amount, or a non-finite/negative one → 0
    /// - no currency, or one outside the closed set → ARS
    /// - no invoice number → a generated `TMP-…` placeholder, distinct
    ///   across calls
    pub fn from_extraction(
        supplier_id: SupplierId,
        fields: &ExtractedFields,
        upload_date: NaiveDate,
    ) -> Self {
        let amount = fields
            .amount
            .filter(|a| a.is_finite() && *a >= 0.0)
            .map(|a| a.round() as u64)
            .unwrap_or(0);

        let currency = fields
            .currency
            .as_deref()
            .and_then(Currency::parse)
            .unwrap_or_default();

        let invoice_number = fields
            .invoice_number
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(placeholder_invoice_number);

        Self::new(
            InvoiceId::generate(),
            supplier_id,
            invoice_number,
            amount,
            currency,
            upload_date,
        )
    }

    /// Apply a status transition, stamping the associated date.
    ///
    /// Approving stamps `estimated_payment_date`; settling stamps
    /// `payment_date`. Requests outside the allowed-transition table leave
    /// the record untouched and fail with `InvalidTransition`.
    pub fn transition_to(&mut self, target: InvoiceStatus, on: NaiveDate) -> DomainResult<()> {
        if !self.status.can_become(target) {
            return Err(DomainError::invalid_transition(format!(
                "{} -> {}",
                self.status, target
            )));
        }

        match target {
            InvoiceStatus::Scheduled => self.estimated_payment_date = Some(on),
            InvoiceStatus::Paid => self.payment_date = Some(on),
            InvoiceStatus::Pending | InvoiceStatus::Rejected => {}
        }
        self.status = target;
        Ok(())
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn invoice_number(&self) -> &str {
        &self.invoice_number
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn upload_date(&self) -> NaiveDate {
        self.upload_date
    }

    pub fn estimated_payment_date(&self) -> Option<NaiveDate> {
        self.estimated_payment_date
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether the amount still counts toward outstanding debt.
    ///
    /// Only live invoices count: settled and rejected records are out of
    /// the debt figure.
    pub fn is_outstanding(&self) -> bool {
        matches!(
            self.status,
            InvoiceStatus::Pending | InvoiceStatus::Scheduled
        )
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn placeholder_invoice_number() -> String {
    format!("TMP-{}", Uuid::now_v7().simple())
}
