use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::otp_input::OtpInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::context::use_session;
use contracts::domain::a007_activity_log::LogCategory;
use contracts::system::auth::otp::OtpEntry;
use contracts::system::auth::{PendingLogin, Role};
use contracts::system::routes::home_path;

/// Any six digits verify. The admin phone number logs in as administrator.
#[component]
pub fn OtpPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let entry = RwSignal::new(OtpEntry::new());

    // Reloading the OTP page loses the pending login; fall back to the demo number.
    let pending = ctx.pending_login.get_untracked().unwrap_or_else(|| PendingLogin {
        phone_number: ctx.config.with_value(|c| c.session.default_phone.clone()),
        ..Default::default()
    });
    let phone_label = pending.phone_number.clone();
    let pending = StoredValue::new(pending);

    let verify = move |_| {
        let pending = pending.get_value();
        let admin_phone = ctx.config.with_value(|c| c.session.admin_phone.clone());
        let role = Role::for_phone(&pending.phone_number, &admin_phone);
        match session.login(pending, role) {
            Ok(user) => {
                log::info!("{} signed in as {}", user.phone_number, user.role.as_str());
                ctx.admin.update(|a| {
                    a.record(&user.phone_number, LogCategory::Auth, format!("Signed in as {}", user.role.as_str()))
                });
                ctx.pending_login.set(None);
                ctx.navigate(home_path(user.role));
            }
            Err(e) => ctx.show_toast(format!("Sign-in failed: {e}"), ToastKind::Error),
        }
    };

    view! {
        <PageFrame page_id="otp--public" category=PAGE_CAT_PUBLIC>
            <div class="auth-card auth-card--narrow">
                <div class="auth-card__badge">{icon("mail")}</div>
                <h1 class="auth-card__heading">"Verification"</h1>
                <p class="auth-card__lead">
                    "Enter the 6-digit code sent to "
                    <strong>{phone_label}</strong>
                </p>

                <OtpInput entry=entry id_prefix="login" />

                <Button appearance=ButtonAppearance::Primary class="btn-block" on_click=verify>
                    "Verify & Proceed"
                </Button>
                <button class="btn-link btn-block" disabled=true>
                    "Resend Code in 30s"
                </button>
            </div>
        </PageFrame>
    }
}
