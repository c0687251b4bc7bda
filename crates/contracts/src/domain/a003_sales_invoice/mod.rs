pub mod aggregate;

pub use aggregate::{fixtures, SaleKind, SalesInvoice};
