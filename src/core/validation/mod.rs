//! Invoice form validation
//!
//! The schema turns raw form fields into a typed record or a field-error
//! map suitable for re-rendering the form with inline errors.
//!
//! Two parse modes exist on purpose, because the two mutation flows
//! genuinely differ:
//!
//! - [`InvoiceSchema::safe_parse`] never fails hard; every invalid field
//!   is reported. The create form uses it so the user can correct input.
//! - [`InvoiceSchema::parse`] treats invalid input as a programming
//!   error. The update flow uses it; there is no field-error reporting
//!   path there.
//!
//! `id` and `date` belong to the full invoice record but are
//! system-supplied, so the form schema never reads them.

pub mod validators;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::error::BillingError;
use crate::core::form::FormData;
use crate::core::invoice::InvoiceStatus;
use validators::{coerce_number, non_empty, status_value};

/// Message shown when no customer is selected.
pub const CUSTOMER_REQUIRED: &str = "Please select a customer.";
/// Message shown when the amount is missing, unparseable or not positive.
pub const AMOUNT_INVALID: &str = "Please enter a valid amount.";
/// Message shown when the status is not one of the known values.
pub const STATUS_INVALID: &str = "Please select a status.";

/// Mapping from form field name to validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate fields and their messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(field, msgs)| (field.as_str(), msgs.as_slice()))
    }

    /// Flat "field: message" listing for logs and display output.
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .flat_map(|(field, msgs)| {
                msgs.iter().map(move |msg| format!("{}: {}", field, msg))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A validated invoice submission: the caller-supplied fields only.
///
/// The amount is still in whole currency units here; conversion to minor
/// units happens in the action, at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Schema for create and update submissions.
pub struct InvoiceSchema;

impl InvoiceSchema {
    /// Non-throwing parse: every invalid field is reported.
    pub fn safe_parse(form: &FormData) -> Result<InvoiceInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = non_empty(form.get("customer_id"));
        if customer_id.is_none() {
            errors.push("customer_id", CUSTOMER_REQUIRED);
        }

        let amount = coerce_number(form.get("amount")).filter(|amount| *amount > 0.0);
        if amount.is_none() {
            errors.push("amount", AMOUNT_INVALID);
        }

        let status = status_value(form.get("status"));
        if status.is_none() {
            errors.push("status", STATUS_INVALID);
        }

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(InvoiceInput {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }

    /// Strict parse: any invalid field is a [`BillingError::Validation`].
    pub fn parse(form: &FormData) -> Result<InvoiceInput, BillingError> {
        Self::safe_parse(form).map_err(BillingError::Validation)
    }
}
