//! Storage backends for the `invoices` relation

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryInvoiceStore;
#[cfg(feature = "postgres")]
pub use postgres::{ensure_schema, PostgresInvoiceStore};
