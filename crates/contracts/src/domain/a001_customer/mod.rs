pub mod aggregate;

pub use aggregate::{fixtures, Customer, CustomerStatus};
