//! Export & Settings: referral program, data exports, profile and
//! notification preferences.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::simulated::{run_task, sleep};
use crate::system::auth::context::use_session;
use crate::system::auth::guard::{require_capability, FeatureGate};
use contracts::shared::export::ExportKind;
use contracts::shared::simulated_task::{CancelToken, TaskOutcome};
use contracts::system::access::Capability;
use contracts::system::auth::{PlanTier, ProfileDetails, UserSession};

#[component]
fn ReferralCard() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let copied = RwSignal::new(false);

    let code = move || session.user().map(|u| u.referral_code).unwrap_or_default();
    let credits = move || session.user().map(|u| u.credits).unwrap_or(0);

    let copy = move |_| {
        let code = code();
        if code.is_empty() {
            return;
        }
        let reset_ms = ctx.config.with_value(|c| c.timing.copied_reset_ms);
        copy_to_clipboard_with_callback(&code, move || {
            copied.set(true);
            spawn_local(async move {
                sleep(reset_ms).await;
                copied.set(false);
            });
        });
    };

    view! {
        <div class="referral-card">
            <div class="referral-card__main">
                <div class="referral-card__kicker">{icon("zap")}"Referral Program"</div>
                <h2>"Refer Friends & Earn Credits"</h2>
                <p>
                    "Share your unique referral code with friends. They get "
                    <strong>"5 free credits"</strong>
                    " on signup, and you earn "
                    <strong>"5 credits"</strong>
                    " for every successful referral."
                </p>
                <div class="referral-card__code-row">
                    <div class="referral-card__code">{code}</div>
                    <button class="referral-card__copy" on:click=copy>
                        {move || if copied.get() { icon("check") } else { icon("copy") }}
                        {move || if copied.get() { "Copied" } else { "Copy Code" }}
                    </button>
                </div>
            </div>
            <div class="referral-card__balance">
                <div class="referral-card__balance-label">"Your Balance"</div>
                <div class="referral-card__balance-value">{credits}</div>
                <div class="referral-card__balance-hint">"Credits Available"</div>
            </div>
        </div>
    }
}

#[component]
fn ExportPanel() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let exporting = RwSignal::new(None::<ExportKind>);
    let custom_format = RwSignal::new("Excel".to_string());

    let start = move |kind: ExportKind| {
        if exporting.get_untracked().is_some() {
            return;
        }
        exporting.set(Some(kind));
        let delay = ctx.config.with_value(|c| c.timing.export_ms);
        spawn_local(async move {
            let outcome = run_task(kind.task(delay), &CancelToken::new(), || Ok(kind.completion_message())).await;
            exporting.set(None);
            match outcome {
                TaskOutcome::Completed(message) => ctx.show_toast(message, ToastKind::Success),
                TaskOutcome::Failed(e) => ctx.show_toast(e, ToastKind::Error),
                TaskOutcome::Cancelled => {}
            }
        });
    };

    let handle_export = move |kind: ExportKind| match kind.required_capability() {
        Some(capability) => require_capability(session, ctx, capability, || start(kind)),
        None => start(kind),
    };

    let export_button = move |kind: ExportKind, icon_name: &'static str| {
        let locked = move || {
            kind.required_capability()
                .is_some_and(|cap| !session.has(cap))
        };
        view! {
            <button
                class="export-button"
                class:export-button--locked=locked
                disabled=move || exporting.get().is_some()
                on:click=move |_| handle_export(kind)
            >
                <span class="export-button__label">
                    {icon(icon_name)}
                    {kind.button_label()}
                </span>
                {move || {
                    if locked() {
                        icon("lock")
                    } else if exporting.get() == Some(kind) {
                        view! { <span class="export-button__busy">"Processing..."</span> }.into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </button>
        }
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Export Data"</h2>
            <p class="card__subtitle">"Download your GST data in various formats."</p>
            <div class="export-panel">
                <div class="export-panel__buttons">
                    {export_button(ExportKind::Excel, "file-text")}
                    {export_button(ExportKind::Pdf, "file-text")}
                    {export_button(ExportKind::Csv, "download")}
                </div>
                <FeatureGate
                    capability=Capability::UnlimitedExport
                    message="Upgrade for Custom Exports"
                    compact=true
                >
                    <div class="export-panel__custom">
                        <div class="form-group">
                            <label>"Date Range (optional)"</label>
                            <input type="text" value="Last 30 days" readonly />
                        </div>
                        <div class="form-group">
                            <label>"File Format"</label>
                            <Select value=custom_format>
                                <option value="Excel">"Excel"</option>
                                <option value="PDF">"PDF"</option>
                                <option value="CSV">"CSV"</option>
                            </Select>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || exporting.get().is_some())
                            on_click=move |_| handle_export(ExportKind::Custom)
                        >
                            {icon("download")}
                            {ExportKind::Custom.button_label()}
                        </Button>
                    </div>
                </FeatureGate>
            </div>
        </div>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let current = session.user_untracked();
    let field = |f: fn(&UserSession) -> String| current.as_ref().map(f).unwrap_or_default();

    let name = RwSignal::new(field(|u| u.name.clone()));
    let email = RwSignal::new(field(|u| u.email.clone()));
    let company = RwSignal::new(field(|u| u.company_name.clone()));
    let plan = RwSignal::new(field(|u| u.user_type.as_str().to_string()));
    let phone = field(|u| u.phone_number.clone());
    let complete = move || session.user().is_some_and(|u| u.is_profile_complete);

    let save = move |_| {
        let details = ProfileDetails {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            company_name: company.get_untracked().trim().to_string(),
            user_type: plan.get_untracked().parse().unwrap_or_default(),
        };
        if details.name.is_empty() {
            ctx.show_toast("Name cannot be empty", ToastKind::Error);
            return;
        }
        match session.complete_profile(details) {
            Ok(_) => ctx.show_toast("Profile updated", ToastKind::Success),
            Err(e) => ctx.show_toast(format!("Profile not saved: {e}"), ToastKind::Error),
        }
    };

    view! {
        <div class="settings-column">
            <h3 class="settings-column__title">
                "Profile Information"
                <Show when=move || !complete()>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Incomplete"</Badge>
                </Show>
            </h3>
            <div class="form-group">
                <label>"Full Name"</label>
                <Input value=name placeholder="John Doe" />
            </div>
            <div class="form-group">
                <label>"Email"</label>
                <Input value=email placeholder="john@example.com" />
            </div>
            <div class="form-group">
                <label>"Company Name"</label>
                <Input value=company placeholder="Business Name Pvt Ltd" />
            </div>
            <div class="form-group">
                <label>"Plan"</label>
                <Select value=plan>
                    {PlanTier::ALL
                        .into_iter()
                        .map(|tier| view! { <option value=tier.as_str()>{tier.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form-group">
                <label>"Phone Number"</label>
                <div class="readonly-field">{phone}</div>
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=save>"Save Profile"</Button>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let email_notifs = RwSignal::new(true);
    let sms_notifs = RwSignal::new(false);

    view! {
        <PageFrame
            page_id="settings--system"
            category=PAGE_CAT_SYSTEM
            title="Export & Settings"
            subtitle="Manage your data exports and personalize your application settings."
        >
            <ReferralCard />
            <ExportPanel />

            <div class="card">
                <h2 class="card__title">"User Settings"</h2>
                <p class="card__subtitle">"Update your profile, notification preferences, and GSTIN status."</p>
                <div class="settings-grid">
                    <ProfileForm />

                    <div class="settings-column">
                        <h3 class="settings-column__title">"Notification Preferences"</h3>
                        <div class="toggle-row">
                            <div>
                                <p class="toggle-row__label">"Email Notifications"</p>
                                <p class="toggle-row__hint">"Receive updates and alerts via email."</p>
                            </div>
                            <Switch checked=email_notifs />
                        </div>
                        <div class="toggle-row">
                            <div>
                                <p class="toggle-row__label">"SMS Notifications"</p>
                                <p class="toggle-row__hint">"Get critical alerts directly to your phone."</p>
                            </div>
                            <Switch checked=sms_notifs />
                        </div>
                    </div>

                    <div class="settings-column">
                        <h3 class="settings-column__title">"GSTIN Connection Status"</h3>
                        <div class="status-box status-box--success">
                            <div>
                                <p class="status-box__title">"Connected"</p>
                                <p class="status-box__hint">"Sync is active."</p>
                            </div>
                            {icon("check")}
                        </div>
                        <button class="btn-secondary btn-block">{icon("refresh")}"Re-verify GSTIN"</button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
