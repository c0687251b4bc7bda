pub mod chart;
pub mod chart_toggle;
pub mod otp_input;
pub mod pagination_controls;
pub mod stat_card;
pub mod toast;
pub mod upgrade_modal;
