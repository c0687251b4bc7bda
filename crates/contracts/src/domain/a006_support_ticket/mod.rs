pub mod aggregate;

pub use aggregate::{fixtures, SupportTicket, TicketPriority, TicketStatus};
