pub mod legal;
pub mod login;
pub mod otp;
pub mod settings;
pub mod subscription;
pub mod support;
