use contracts::system::access::{gstin_limit, upgrade_feature_for_limit, GstinLimit};
use contracts::system::auth::otp::OtpEntry;
use contracts::system::auth::{ConnectedGstin, PlanTier};
use contracts::usecases::u501_connect_gstin::{connect_within_limit, ConnectForm, ConnectOutcome, ConnectStep};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance};
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::otp_input::OtpInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::simulated::sleep;
use crate::system::auth::context::use_session;

const FORM_ID: &str = "connect-form";

fn allowance_text(plan: PlanTier, limit: GstinLimit) -> String {
    let allowed = match limit {
        GstinLimit::Limited(max) => max.to_string(),
        GstinLimit::Unlimited => "Unlimited".to_string(),
    };
    format!("Manage your connected GST Portals. {} plan allows up to {allowed} GSTINs.", plan.as_str())
}

fn scroll_to_form() {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ID))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
fn ConnectCard(form: RwSignal<ConnectForm>, otp: RwSignal<OtpEntry>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let username = move || form.with(|f| f.username.clone());

    let verify = move |_| {
        let code = form.with_untracked(|f| f.username.clone());
        let limits = ctx.config.with_value(|c| c.plans);
        match session.mutate(|store| connect_within_limit(store, &limits, &code)) {
            Ok(ConnectOutcome::Connected(added)) => {
                log::info!("GSTIN {} linked", added.gstin);
                form.update(ConnectForm::reset);
                otp.set(OtpEntry::new());
                ctx.show_toast("GSTIN Connected Successfully! Redirecting to Dashboard...", ToastKind::Success);
                let delay = ctx.config.with_value(|c| c.timing.otp_redirect_ms);
                spawn_local(async move {
                    sleep(delay).await;
                    ctx.navigate("/dashboard/overview");
                });
            }
            Ok(ConnectOutcome::UpgradeRequired(feature)) => ctx.open_upgrade(feature),
            Err(e) => ctx.show_toast(format!("Could not connect GSTIN: {e}"), ToastKind::Error),
        }
    };

    view! {
        <div id=FORM_ID class="card connect-card">
            {move || match form.with(|f| f.step) {
                ConnectStep::Username => view! {
                    <h2 class="connect-card__title">"New Connection"</h2>
                    <p class="muted">
                        "Enter your GST Portal Username or GSTIN to send an OTP and establish a secure connection."
                    </p>
                    <label class="field">
                        <span class="field__label">"GST Username / GSTIN"</span>
                        <input
                            type="text"
                            class="mono"
                            placeholder="e.g. 27ABCDE1234F1Z5"
                            prop:value=username
                            on:input=move |ev| form.update(|f| f.set_username(&event_target_value(&ev)))
                        />
                    </label>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="btn-block"
                        disabled=Signal::derive(move || form.with(|f| f.username.trim().is_empty()))
                        on_click=move |_| {
                            form.update(|f| {
                                f.send_otp();
                            });
                        }
                    >
                        "Send OTP"
                    </Button>
                }
                    .into_any(),
                ConnectStep::Otp => view! {
                    <h2 class="connect-card__title">"Verify Connection"</h2>
                    <p class="muted">
                        "Enter the 6-digit OTP sent to the registered mobile number linked to "
                        <span class="strong mono">{username}</span>
                        "."
                    </p>
                    <OtpInput entry=otp id_prefix="gstin" />
                    <Button appearance=ButtonAppearance::Primary class="btn-block" on_click=verify>"Verify & Connect"</Button>
                    <button class="btn-link btn-block" on:click=move |_| form.update(ConnectForm::back)>
                        "Back to Username"
                    </button>
                }
                    .into_any(),
            }}
        </div>
    }
}

/// Connected GST portals for the signed-in user, plus the add flow.
/// The plan limit is checked again at verification time.
#[component]
pub fn GstConnectPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let form = RwSignal::new(ConnectForm::default());
    let otp = RwSignal::new(OtpEntry::new());

    let plan = Memo::new(move |_| session.user().map(|u| u.user_type).unwrap_or_default());
    let connected = Memo::new(move |_| session.user().map(|u| u.connected_gstins).unwrap_or_default());
    let limit = Memo::new(move |_| ctx.config.with_value(|c| gstin_limit(plan.get(), &c.plans)));
    let limit_reached = Memo::new(move |_| !limit.get().allows(connected.with(Vec::len)));

    let start_connect = move |_| {
        if limit_reached.get_untracked() {
            ctx.open_upgrade(upgrade_feature_for_limit(plan.get_untracked()));
            return;
        }
        form.update(ConnectForm::reset);
        otp.set(OtpEntry::new());
        scroll_to_form();
    };

    view! {
        <PageFrame
            page_id="u501_connect_gstin--usecase"
            category=PAGE_CAT_USECASE
            title="Connect Your GSTIN"
        >
            <p class="page-lead">{move || allowance_text(plan.get(), limit.get())}</p>
            <div class="card connected-list">
                <div class="card__header">
                    <h3 class="card__title">
                        {move || format!("Connected Accounts ({}/{})", connected.with(Vec::len), limit.get().short_label())}
                    </h3>
                    <Show when=move || limit_reached.get()>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>{icon("lock")}"Plan Limit Reached"</Badge>
                    </Show>
                </div>

                <Show
                    when=move || !connected.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="empty-state">"No GSTINs connected yet. Connect one below to get started."</div>
                    }
                >
                    <For
                        each=move || connected.get()
                        key=|g: &ConnectedGstin| g.id
                        children=|g: ConnectedGstin| {
                            view! {
                                <div class="connected-list__row">
                                    <div class="connected-list__who">
                                        <span class="connected-list__icon">{icon("building")}</span>
                                        <div>
                                            <p class="strong mono">{g.gstin}</p>
                                            <p class="muted">{g.name}</p>
                                        </div>
                                    </div>
                                    <div class="connected-list__actions">
                                        <span class="pill pill--success">{icon("check-circle")}"Synced"</span>
                                        // Linked GSTINs stay for the life of the session.
                                        <button class="icon-button icon-button--danger" title="Remove">
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>

                <button
                    class="connected-list__add"
                    class:connected-list__add--locked=move || limit_reached.get()
                    on:click=start_connect
                >
                    {move || {
                        if limit_reached.get() {
                            view! { {icon("lock")}<span>"Upgrade to add more GSTINs"</span> }.into_any()
                        } else {
                            view! { {icon("plus")}<span>"Connect Another GSTIN"</span> }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || !limit_reached.get()>
                <ConnectCard form=form otp=otp />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowance_text() {
        assert_eq!(
            allowance_text(PlanTier::Individual, GstinLimit::Limited(1)),
            "Manage your connected GST Portals. Individual plan allows up to 1 GSTINs."
        );
        assert!(allowance_text(PlanTier::Ca, GstinLimit::Unlimited).ends_with("up to Unlimited GSTINs."));
    }
}
