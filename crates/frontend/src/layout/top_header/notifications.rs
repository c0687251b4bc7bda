use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a009_notification::Notification;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let feed = ctx.notifications;
    let open = RwSignal::new(false);
    let unread = Memo::new(move |_| feed.with(|f| f.unread_count()));

    Effect::new(move |_| {
        ctx.path.track();
        open.set(false);
    });

    let row = move |n: Notification| {
        let id = n.id;
        view! {
            <div
                class="notifications__item"
                class:notifications__item--unread=!n.read
                on:click=move |_| {
                    feed.update(|f| {
                        f.mark_read(id);
                    });
                }
            >
                <div class=format!("notifications__icon notifications__icon--{}", n.kind.css_modifier())>
                    {icon(n.kind.icon())}
                </div>
                <div class="notifications__body">
                    <div class="notifications__head">
                        <p class="notifications__title">{n.title}</p>
                        <span class="notifications__time">{n.time}</span>
                    </div>
                    <p class="notifications__message">{n.message}</p>
                </div>
                <button
                    class="notifications__delete"
                    title="Delete"
                    on:click=move |e: ev::MouseEvent| {
                        e.stop_propagation();
                        feed.update(|f| {
                            f.remove(id);
                        });
                    }
                >
                    {icon("trash")}
                </button>
            </div>
        }
    };

    view! {
        <div class="notifications" id="header-notification-bell">
            <button class="top-header__icon-btn" on:click=move |_| open.update(|o| *o = !*o)>
                {icon("bell")}
                <Show when=move || { unread.get() > 0 }>
                    <span class="notifications__dot"></span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="dropdown-backdrop" on:click=move |_| open.set(false)></div>
                <div class="notifications__dropdown">
                    <div class="notifications__header">
                        <h3>"Notifications"</h3>
                        <Show when=move || { unread.get() > 0 }>
                            <button class="link-button" on:click=move |_| feed.update(|f| f.mark_all_read())>
                                "Mark all as read"
                            </button>
                        </Show>
                    </div>
                    <div class="notifications__list">
                        <Show
                            when=move || !feed.with(|f| f.is_empty())
                            fallback=|| view! {
                                <div class="notifications__empty">
                                    {icon("bell")}
                                    <p>"No notifications yet"</p>
                                </div>
                            }
                        >
                            <For
                                each=move || feed.with(|f| f.items().to_vec())
                                key=|n: &Notification| (n.id, n.read)
                                children=row
                            />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
