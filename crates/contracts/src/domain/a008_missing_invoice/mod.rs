pub mod aggregate;

pub use aggregate::{fixtures, MissingInvoice, MissingInvoiceStatus};
