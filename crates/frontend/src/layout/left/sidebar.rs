//! Role-based navigation. Users get the dashboard group, admins the admin
//! controls; both end with the sign-out button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::routes::{AppRoute, LOGIN_PATH};
use leptos::prelude::*;

struct NavItem {
    route: AppRoute,
    label: &'static str,
    icon: &'static str,
}

const fn item(route: AppRoute, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { route, label, icon }
}

static DASHBOARD_ITEMS: [NavItem; 4] = [
    item(AppRoute::Overview, "Overview", "bar-chart"),
    item(AppRoute::Itc, "Input Tax Credit", "file-text"),
    item(AppRoute::Sales, "Sales Register", "credit-card"),
    item(AppRoute::Compliance, "Compliance", "shield-check"),
];

static SUPPORT_ITEM: NavItem = item(AppRoute::Support, "Help & Support", "help-circle");

static ADMIN_ITEMS: [NavItem; 4] = [
    item(AppRoute::AdminCustomers, "Customers", "users"),
    item(AppRoute::AdminSubscriptions, "Subscriptions", "credit-card"),
    item(AppRoute::AdminTickets, "Support Tickets", "help-circle"),
    item(AppRoute::AdminLogs, "System Logs", "file-clock"),
];

fn nav_item(entry: &'static NavItem) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let path = entry.route.path();
    let item_id = format!("nav-item-{}", entry.label.to_lowercase().replace(' ', "-"));

    view! {
        <a
            id=item_id
            href=format!("#{path}")
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.path.get() == path
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(path);
            }
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{entry.label}</span>
            </div>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let dashboard_open = RwSignal::new(true);

    let logout = move |_| {
        session.logout();
        ctx.navigate(LOGIN_PATH);
    };

    let user_nav = move || {
        view! {
            <div class="app-sidebar__group">
                <button
                    class="app-sidebar__item app-sidebar__item--group"
                    on:click=move |_| dashboard_open.update(|open| *open = !*open)
                >
                    <div class="app-sidebar__item-content">
                        {icon("dashboard")}
                        <span>"Dashboard"</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || dashboard_open.get()
                    >
                        {icon("chevron-right")}
                    </div>
                </button>
                <Show when=move || dashboard_open.get()>
                    <div class="app-sidebar__children">
                        {DASHBOARD_ITEMS.iter().map(nav_item).collect_view()}
                    </div>
                </Show>
            </div>
            {nav_item(&SUPPORT_ITEM)}
        }
    };

    let admin_nav = move || {
        view! {
            <div class="app-sidebar__section-title">"Admin Controls"</div>
            {ADMIN_ITEMS.iter().map(nav_item).collect_view()}
        }
    };

    view! {
        <aside class="app-sidebar" class:app-sidebar--open=move || ctx.sidebar_open.get()>
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("hexagon")}</div>
                <div>
                    <span class="app-sidebar__title">"Pinnacle"</span>
                    <span class="app-sidebar__subtitle">"GST Analytics"</span>
                </div>
                <button class="app-sidebar__close" on:click=move |_| ctx.sidebar_open.set(false)>
                    {icon("x")}
                </button>
            </div>

            <nav class="app-sidebar__content" id="sidebar-nav">
                {move || if session.is_admin() { admin_nav().into_any() } else { user_nav().into_any() }}
            </nav>

            <div class="app-sidebar__footer">
                <button class="app-sidebar__logout" on:click=logout>
                    {icon("log-out")}
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
