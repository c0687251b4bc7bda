pub mod ui;

pub use ui::dashboard::SalesPage;
