pub mod dashboard;
mod tax_estimator;
