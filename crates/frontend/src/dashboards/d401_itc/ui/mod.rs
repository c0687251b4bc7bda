pub mod dashboard;
mod vendor_modals;
