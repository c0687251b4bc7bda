//! First-visit guided tour of the overview dashboard.

use crate::system::auth::Role;
use crate::system::routes::USER_HOME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourStep {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    /// DOM id the popover is anchored to; `None` centers it.
    pub anchor: Option<&'static str>,
}

pub const TOUR_STEPS: [TourStep; 7] = [
    TourStep {
        id: "welcome",
        title: "Welcome to Pinnacle",
        text: "Your comprehensive GST Analytics dashboard. Let us show you around quickly to help you get the most out of our platform.",
        anchor: None,
    },
    TourStep {
        id: "search",
        title: "Global Search",
        text: "Quickly find invoices, vendors, or navigate to any page using our smart search. Just press Cmd+K or Ctrl+K anywhere.",
        anchor: Some("global-search-container"),
    },
    TourStep {
        id: "navigation",
        title: "Main Navigation",
        text: "Access different modules here. Switch between your Input Tax Credit analysis, Sales Register, and Compliance checks.",
        anchor: Some("sidebar-nav"),
    },
    TourStep {
        id: "stats",
        title: "Financial Pulse",
        text: "Get an instant snapshot of your Tax Liability, ITC Claimed, and Net Payable amounts.",
        anchor: Some("overview-stats-grid"),
    },
    TourStep {
        id: "charts",
        title: "Analytics & Trends",
        text: "Visualize your monthly sales trends and liability vs. ITC comparison charts to identify gaps instantly.",
        anchor: Some("overview-charts-section"),
    },
    TourStep {
        id: "alerts",
        title: "Compliance Alerts",
        text: "Never miss a deadline. We notify you of critical issues like ITC mismatches or upcoming filing dates here.",
        anchor: Some("overview-alerts-card"),
    },
    TourStep {
        id: "credits",
        title: "Credits & Profile",
        text: "Check your report generation credits here. Click your profile to manage settings or connect more GSTINs.",
        anchor: Some("header-profile"),
    },
];

/// The tour runs for users on the overview page until it was completed once.
pub fn should_start(role: Role, path: &str, completed: bool) -> bool {
    role == Role::User && path == USER_HOME && !completed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
    Next,
    Back,
    /// "Skip Tour" on the welcome step
    Skip,
    Finish,
    /// Close icon; the tour may show again on the next visit.
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourTransition {
    Show(usize),
    /// Ended for good; persist the completion flag.
    Completed,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TourState {
    step: usize,
}

impl TourState {
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static TourStep {
        &TOUR_STEPS[self.step.min(TOUR_STEPS.len() - 1)]
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= TOUR_STEPS.len()
    }

    pub fn apply(&mut self, event: TourEvent) -> TourTransition {
        match event {
            TourEvent::Next if !self.is_last() => {
                self.step += 1;
                TourTransition::Show(self.step)
            }
            TourEvent::Next | TourEvent::Finish | TourEvent::Skip => TourTransition::Completed,
            TourEvent::Back => {
                self.step = self.step.saturating_sub(1);
                TourTransition::Show(self.step)
            }
            TourEvent::Dismiss => TourTransition::Dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_start_only_for_users_on_overview() {
        assert!(should_start(Role::User, "/dashboard/overview", false));
        assert!(!should_start(Role::User, "/dashboard/overview", true));
        assert!(!should_start(Role::User, "/dashboard/itc", false));
        assert!(!should_start(Role::Admin, "/dashboard/overview", false));
    }

    #[test]
    fn test_walk_through_all_steps() {
        let mut tour = TourState::default();
        assert_eq!(tour.current().title, "Welcome to Pinnacle");
        for expected in 1..TOUR_STEPS.len() {
            assert_eq!(tour.apply(TourEvent::Next), TourTransition::Show(expected));
        }
        assert!(tour.is_last());
        assert_eq!(tour.current().title, "Credits & Profile");
        assert_eq!(tour.apply(TourEvent::Finish), TourTransition::Completed);
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut tour = TourState::default();
        assert_eq!(tour.apply(TourEvent::Back), TourTransition::Show(0));
        tour.apply(TourEvent::Next);
        assert_eq!(tour.apply(TourEvent::Back), TourTransition::Show(0));
        assert_eq!(tour.apply(TourEvent::Skip), TourTransition::Completed);
        assert_eq!(tour.apply(TourEvent::Dismiss), TourTransition::Dismissed);
    }
}
