pub mod dashboard;
mod invoice_modal;
mod report_modal;
