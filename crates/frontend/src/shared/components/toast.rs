use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    move || {
        ctx.toast.get().map(|toast| {
            let icon_name = match toast.kind {
                ToastKind::Success => "check-circle",
                ToastKind::Error => "x-circle",
                ToastKind::Info => "info",
            };
            view! {
                <div class=format!("toast toast--{}", toast.kind.css_modifier()) role="status">
                    <span class="toast__icon">{icon(icon_name)}</span>
                    <span class="toast__message">{toast.message}</span>
                    <button class="toast__close" on:click=move |_| ctx.dismiss_toast()>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
