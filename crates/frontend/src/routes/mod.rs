//! Hash router: maps `AppGlobalContext::path` to a page through the guard in
//! `contracts::system::routes`.

use crate::dashboards::d400_overview::OverviewPage;
use crate::dashboards::d401_itc::ItcPage;
use crate::dashboards::d402_sales::SalesPage;
use crate::dashboards::d403_compliance::CompliancePage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::admin::customers::AdminCustomersPage;
use crate::system::admin::logs::AdminLogsPage;
use crate::system::admin::subscriptions::AdminSubscriptionsPage;
use crate::system::admin::tickets::AdminTicketsPage;
use crate::system::auth::context::use_session;
use crate::system::pages::legal::LegalPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::otp::OtpPage;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::subscription::SubscriptionPage;
use crate::system::pages::support::SupportPage;
use crate::usecases::u501_connect_gstin::GstConnectPage;
use contracts::system::routes::{resolve, AppRoute, RouteDecision};
use leptos::prelude::*;
use thaw::*;

fn route_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Otp => view! { <OtpPage /> }.into_any(),
        AppRoute::Legal => view! { <LegalPage /> }.into_any(),
        AppRoute::Overview => view! { <OverviewPage /> }.into_any(),
        AppRoute::Itc => view! { <ItcPage /> }.into_any(),
        AppRoute::Sales => view! { <SalesPage /> }.into_any(),
        AppRoute::Compliance => view! { <CompliancePage /> }.into_any(),
        AppRoute::GstConnect => view! { <GstConnectPage /> }.into_any(),
        AppRoute::Subscription => view! { <SubscriptionPage /> }.into_any(),
        AppRoute::AdminCustomers => view! { <AdminCustomersPage /> }.into_any(),
        AppRoute::AdminSubscriptions => view! { <AdminSubscriptionsPage /> }.into_any(),
        AppRoute::AdminTickets => view! { <AdminTicketsPage /> }.into_any(),
        AppRoute::AdminLogs => view! { <AdminLogsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::Support => view! { <SupportPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();

    let decision = Memo::new(move |_| {
        let path = ctx.path.get();
        session.store.with(|s| resolve(&path, s.user()))
    });

    Effect::new(move |_| {
        if let RouteDecision::Redirect(target) = decision.get() {
            log::debug!("redirect {} -> {}", ctx.path.get_untracked(), target);
            ctx.navigate(target);
        }
    });

    let route = Memo::new(move |_| match decision.get() {
        RouteDecision::Render(route) => Some(route),
        RouteDecision::Redirect(_) => None,
    });
    let in_shell = Memo::new(move |_| route.get().is_some_and(|r| r.uses_shell()));

    let page = move || match route.get() {
        Some(route) => route_view(route),
        None => view! {
            <div class="route-pending">
                <Spinner />
            </div>
        }
        .into_any(),
    };

    view! {
        <Show when=move || in_shell.get() fallback=page>
            <Shell>{page}</Shell>
        </Show>
    }
}
