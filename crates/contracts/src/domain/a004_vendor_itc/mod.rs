pub mod aggregate;

pub use aggregate::{fixtures, VendorItc};
