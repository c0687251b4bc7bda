use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::routes::{AppRoute, LOGIN_PATH};
use leptos::prelude::*;

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let open = RwSignal::new(false);

    // any navigation closes the menu
    Effect::new(move |_| {
        ctx.path.track();
        open.set(false);
    });

    let name = move || session.user().map(|u| u.name).unwrap_or_else(|| "User".into());
    let badge = move || session.user().map(|u| u.badge()).unwrap_or("guest");
    let initials = move || session.user().map(|u| u.initials()).unwrap_or_else(|| "U".into());
    let credits = move || session.user().map(|u| u.credits_label()).unwrap_or_default();

    let go = move |route: AppRoute| {
        open.set(false);
        ctx.navigate(route.path());
    };
    let logout = move |_| {
        open.set(false);
        session.logout();
        ctx.navigate(LOGIN_PATH);
    };

    view! {
        <div class="profile-menu" id="header-profile">
            <button
                class="profile-menu__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <div class="profile-menu__who">
                    <p class="profile-menu__name">{name}</p>
                    <p class="profile-menu__badge">{badge}</p>
                </div>
                <div class="profile-menu__avatar" class:profile-menu__avatar--open=move || open.get()>
                    {initials}
                </div>
                <span class="profile-menu__chevron" class:profile-menu__chevron--open=move || open.get()>
                    {icon("chevron-down")}
                </span>
            </button>

            <Show when=move || open.get()>
                <div class="dropdown-backdrop" on:click=move |_| open.set(false)></div>
                <div class="profile-menu__dropdown">
                    <div class="profile-menu__summary">
                        <div class="profile-menu__avatar">{initials}</div>
                        <div>
                            <p class="profile-menu__name">{name}</p>
                            <p class="profile-menu__credits">{icon("zap")}{credits}</p>
                        </div>
                    </div>
                    <div class="profile-menu__links">
                        <Show when=move || !session.is_admin()>
                            <button class="profile-menu__link" on:click=move |_| go(AppRoute::GstConnect)>
                                {icon("link")}"GST Connection"
                            </button>
                            <button class="profile-menu__link" on:click=move |_| go(AppRoute::Subscription)>
                                {icon("credit-card")}"My Plan"
                            </button>
                        </Show>
                        <button class="profile-menu__link" on:click=move |_| go(AppRoute::Settings)>
                            {icon("settings")}"Settings"
                        </button>
                    </div>
                    <div class="profile-menu__separator"></div>
                    <button class="profile-menu__link profile-menu__link--danger" on:click=logout>
                        {icon("log-out")}"Sign Out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
