//! Invoice domain types
//!
//! The single domain entity of the application. Amounts are carried in
//! minor units (cents) once they cross the write boundary; callers submit
//! whole currency units and read-side collaborators invert the conversion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Canonical wire form, as submitted and stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(format!("unknown invoice status: {}", other)),
        }
    }
}

/// A stored invoice row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Opaque unique identifier, assigned by the store, immutable.
    pub id: Uuid,

    /// Reference to an external customer entity.
    pub customer_id: String,

    /// Monetary amount in minor units (cents).
    pub amount_cents: i64,

    pub status: InvoiceStatus,

    /// Creation date, assigned by the system at insert time, immutable.
    pub date: NaiveDate,
}

impl Invoice {
    /// Amount in whole currency units — the read-time inversion of ×100.
    pub fn amount_units(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}

/// Fields for a new invoice; the store assigns the `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// The three caller-mutable fields. `id` and `date` never change after
/// creation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Convert a validated amount in whole currency units to minor units.
///
/// Happens exactly once, at write time.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
