pub mod access;
pub mod admin;
pub mod auth;
pub mod onboarding;
pub mod routes;
pub mod session;
