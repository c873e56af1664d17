//! Server-rendered pages
//!
//! Pure presentation: a static layout shell plus three tera templates.
//! Data arriving here is already typed; amounts are shown in whole
//! currency units, the read-time inversion of the stored cents.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::actions::FormState;
use crate::core::form::FormData;
use crate::core::invoice::Invoice;

const BASE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}Billing{% endblock title %}</title>
  </head>
  <body>
    {% block content %}{% endblock content %}
  </body>
</html>
"#;

const INVOICES: &str = r#"{% extends "base.html" %}
{% block title %}Invoices{% endblock title %}
{% block content %}
<h1>Invoices</h1>
<table>
  <thead>
    <tr><th>Customer</th><th>Amount</th><th>Status</th><th>Date</th><th></th></tr>
  </thead>
  <tbody>
    {% for invoice in invoices %}
    <tr>
      <td>{{ invoice.customer_id }}</td>
      <td>${{ invoice.amount }}</td>
      <td>{{ invoice.status }}</td>
      <td>{{ invoice.date }}</td>
      <td>
        <form method="post" action="/dashboard/invoices/{{ invoice.id }}/delete">
          <button type="submit">Delete</button>
        </form>
      </td>
    </tr>
    {% endfor %}
  </tbody>
</table>
<a href="/dashboard/invoices/create">New invoice</a>
{% endblock content %}
"#;

const INVOICE_FORM: &str = r#"{% extends "base.html" %}
{% block title %}Create Invoice{% endblock title %}
{% block content %}
<h1>Create Invoice</h1>
{% if message %}<p class="message">{{ message }}</p>{% endif %}
<form method="post" action="/dashboard/invoices">
  <label>Customer
    <input name="customer_id" value="{{ customer_id }}">
  </label>
  {% for error in customer_id_errors %}<p class="error">{{ error }}</p>{% endfor %}
  <label>Amount
    <input name="amount" value="{{ amount }}" placeholder="0.00">
  </label>
  {% for error in amount_errors %}<p class="error">{{ error }}</p>{% endfor %}
  <label>Status
    <select name="status">
      <option value="pending" {% if status == "pending" %}selected{% endif %}>Pending</option>
      <option value="paid" {% if status == "paid" %}selected{% endif %}>Paid</option>
    </select>
  </label>
  {% for error in status_errors %}<p class="error">{{ error }}</p>{% endfor %}
  <button type="submit">Create Invoice</button>
</form>
{% endblock content %}
"#;

const LOGIN: &str = r#"{% extends "base.html" %}
{% block title %}Log in{% endblock title %}
{% block content %}
<h1>Log in</h1>
{% if message %}<p class="error">{{ message }}</p>{% endif %}
<form method="post" action="/login">
  <label>Email
    <input name="email" type="email">
  </label>
  <label>Password
    <input name="password" type="password">
  </label>
  <button type="submit">Log in</button>
</form>
{% endblock content %}
"#;

/// One invoice row, pre-formatted for display.
#[derive(Serialize)]
struct InvoiceRow {
    id: String,
    customer_id: String,
    amount: String,
    status: String,
    date: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            customer_id: invoice.customer_id.clone(),
            amount: format!("{:.2}", invoice.amount_units()),
            status: invoice.status.to_string(),
            date: invoice.date.to_string(),
        }
    }
}

/// The application's template set.
#[derive(Clone)]
pub struct Pages {
    tera: Arc<Tera>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("invoices.html", INVOICES),
            ("invoice_form.html", INVOICE_FORM),
            ("login.html", LOGIN),
        ])?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// The invoice listing page.
    pub fn invoices(&self, invoices: &[Invoice]) -> Result<String> {
        let rows: Vec<InvoiceRow> = invoices.iter().map(InvoiceRow::from).collect();

        let mut context = Context::new();
        context.insert("invoices", &rows);

        Ok(self.tera.render("invoices.html", &context)?)
    }

    /// The create form, re-filled with the submitted values and any
    /// inline errors.
    pub fn invoice_form(&self, state: &FormState, form: &FormData) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", state.message.as_deref().unwrap_or(""));
        context.insert("customer_id", form.get("customer_id").unwrap_or(""));
        context.insert("amount", form.get("amount").unwrap_or(""));
        context.insert("status", form.get("status").unwrap_or(""));

        for field in ["customer_id", "amount", "status"] {
            let errors = state
                .errors
                .as_ref()
                .and_then(|errors| errors.get(field))
                .unwrap_or(&[]);
            context.insert(format!("{}_errors", field), errors);
        }

        Ok(self.tera.render("invoice_form.html", &context)?)
    }

    /// The login page, with an optional failure message.
    pub fn login(&self, message: Option<&str>) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", message.unwrap_or(""));

        Ok(self.tera.render("login.html", &context)?)
    }
}
