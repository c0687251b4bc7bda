pub mod dto;
pub mod invoice_draft;

pub use dto::*;
pub use invoice_draft::{DraftError, DraftLine, InvoiceDraft, InvoiceTotals};
