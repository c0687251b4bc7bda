pub mod global_context;
pub mod left;
pub mod top_header;
pub mod tour;

use crate::shared::components::toast::ToastHost;
use crate::shared::components::upgrade_modal::UpgradeModal;
use global_context::AppGlobalContext;
use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;
use tour::Tour;

/// Chrome around every authenticated page.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |           |     page (children)          |
/// |           |     footer                   |
/// +-----------+------------------------------+
/// ```
///
/// The toast host, upsell dialog and onboarding tour are mounted here so they
/// exist exactly once.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-layout">
            <Show when=move || ctx.sidebar_open.get()>
                <div class="app-sidebar__backdrop" on:click=move |_| ctx.sidebar_open.set(false)></div>
            </Show>
            <Sidebar />

            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    <div class="app-main__inner">
                        {children()}
                    </div>
                    <footer class="app-footer">
                        "© 2025 Pinnacle GST Analytics. Secure. Reliable. Compliant."
                    </footer>
                </main>
            </div>

            <ToastHost />
            <UpgradeModal />
            <Tour />
        </div>
    }
}
