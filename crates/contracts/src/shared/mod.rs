pub mod chart;
pub mod config;
pub mod export;
pub mod indicators;
pub mod record_table;
pub mod search;
pub mod simulated_task;
pub mod tax;
