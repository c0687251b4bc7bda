use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::simulated::{run_task, sleep};
use crate::system::auth::context::use_session;
use contracts::shared::simulated_task::{CancelToken, TaskOutcome};
use contracts::system::session::SessionError;
use contracts::usecases::u502_generate_report::{
    charge_report, report_task, INSUFFICIENT_CREDITS_MESSAGE, SUCCESS_MESSAGE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// "Generate Report (1 Credit)". Shown once the user has a GSTIN connected.
#[component]
pub fn ReportButton() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let generating = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let has_gstin = move || session.user().is_some_and(|u| !u.connected_gstins.is_empty());

    let on_click = move |_| {
        if generating.get_untracked() {
            return;
        }
        match session.mutate(charge_report) {
            Ok(remaining) => {
                log::info!("report charged, {remaining} credits left");
                generating.set(true);
                let timing = ctx.config.with_value(|c| c.timing);
                spawn_local(async move {
                    let outcome = run_task(report_task(timing.report_ms), &CancelToken::new(), || {
                        Ok(SUCCESS_MESSAGE.to_string())
                    })
                    .await;
                    generating.set(false);
                    if let TaskOutcome::Completed(text) = outcome {
                        message.set(Some(text));
                        sleep(timing.report_message_ms).await;
                        message.set(None);
                    }
                });
            }
            Err(SessionError::InsufficientCredits { .. }) => {
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message(INSUFFICIENT_CREDITS_MESSAGE);
                }
            }
            Err(e) => log::error!("report not started: {e}"),
        }
    };

    view! {
        <Show when=has_gstin>
            <button
                class="report-button"
                class:report-button--busy=move || generating.get()
                disabled=move || generating.get()
                on:click=on_click
            >
                {move || {
                    if generating.get() {
                        view! {
                            <span class="report-button__spin">{icon("loader")}</span>
                            "Generating..."
                        }
                            .into_any()
                    } else if let Some(text) = message.get() {
                        view! {
                            {icon("check")}
                            {text}
                        }
                            .into_any()
                    } else {
                        view! {
                            {icon("refresh")}
                            "Generate Report (1 Credit)"
                        }
                            .into_any()
                    }
                }}
            </button>
        </Show>
    }
}
