//! Shared model and DOM-free logic of the Pinnacle GST dashboard.
//!
//! The frontend crate renders these types; everything that can be decided
//! without a browser (session rules, route guards, plan capabilities,
//! search, admin record tables) lives here and is tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
