//! Top bar: sidebar toggle, global search, report button, credits,
//! notifications and the profile menu.

pub mod global_search;
pub mod notifications;
pub mod profile_menu;
pub mod report_button;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::auth::ConnectedGstin;
use global_search::GlobalSearch;
use leptos::prelude::*;
use notifications::NotificationBell;
use profile_menu::ProfileMenu;
use report_button::ReportButton;

#[component]
fn CreditsBadge() -> impl IntoView {
    let session = use_session();
    let label = move || {
        session
            .user()
            .map(|u| u.credits_label())
            .unwrap_or_else(|| "0 Credits".to_string())
    };
    let hint = move || {
        if session.is_admin() {
            "You have unlimited credits as an administrator."
        } else {
            "Use credits for advanced reports and AI analysis."
        }
    };

    view! {
        <div id="credits-display" class="credits-badge" title=hint>
            {icon("zap")}
            <span class="credits-badge__value">{label}</span>
        </div>
    }
}

/// Switches the GSTIN the dashboards are showing. Users only.
#[component]
fn GstinSelector() -> impl IntoView {
    let session = use_session();
    let selected = RwSignal::new(String::new());
    let gstins = Memo::new(move |_| {
        session
            .user()
            .map(|u| u.connected_gstins)
            .unwrap_or_default()
    });

    Effect::new(move |_| {
        let list = gstins.get();
        let current = selected.get_untracked();
        if !list.iter().any(|g| g.gstin == current) {
            selected.set(list.first().map(|g| g.gstin.clone()).unwrap_or_default());
        }
    });

    view! {
        <Show when=move || !gstins.with(|g| g.is_empty())>
            <select
                class="gstin-selector"
                title="Active GSTIN"
                prop:value=move || selected.get()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    log::debug!("active GSTIN -> {value}");
                    selected.set(value);
                }
            >
                <For
                    each=move || gstins.get()
                    key=|g: &ConnectedGstin| g.id
                    children=|g: ConnectedGstin| {
                        view! { <option value=g.gstin.clone()>{format!("{} ({})", g.name, g.gstin)}</option> }
                    }
                />
            </select>
        </Show>
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let is_user = move || session.user().is_some_and(|u| !u.is_admin());

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__icon-btn top-header__menu"
                    on:click=move |_| ctx.toggle_sidebar()
                    aria-label="Toggle Sidebar"
                >
                    {icon("menu")}
                </button>
                <div class="top-header__brand">
                    {icon("hexagon")}
                    <span class="top-header__title">"Pinnacle"</span>
                </div>
                <div class="top-header__search" id="global-search-container">
                    <GlobalSearch />
                </div>
            </div>

            <div class="top-header__actions">
                <Show when=is_user>
                    <GstinSelector />
                    <ReportButton />
                </Show>
                <CreditsBadge />
                <NotificationBell />
                <div class="top-header__divider"></div>
                <ProfileMenu />
            </div>
        </header>
    }
}
