pub mod aggregate;

pub use aggregate::{fixtures, monthly_recurring_revenue, ServicePlan, Subscription, SubscriptionStatus};
