//! Multi-step user actions built on the session store.

pub mod u501_connect_gstin;
pub mod u502_generate_report;
