use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use contracts::system::auth::{PendingLogin, PlanTier, RegistrationData};
use contracts::system::routes::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let default_phone = ctx.config.with_value(|c| c.session.default_phone.clone());
    let admin_phone = ctx.config.with_value(|c| c.session.admin_phone.clone());

    let is_login = RwSignal::new(true);
    let phone_number = RwSignal::new(default_phone);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let user_type = RwSignal::new(PlanTier::Individual);
    let referral_code = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let phone = phone_number.get_untracked().trim().to_string();
        if phone.is_empty() {
            error_message.set(Some("Enter your phone number".into()));
            return;
        }
        error_message.set(None);

        let pending = if is_login.get_untracked() {
            PendingLogin::sign_in(phone, referral_code.get_untracked())
        } else {
            PendingLogin::sign_up(
                phone,
                RegistrationData {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    company_name: company_name.get_untracked(),
                    user_type: user_type.get_untracked(),
                    referral_code: referral_code.get_untracked(),
                },
            )
        };
        log::debug!("verification requested for {}", pending.phone_number);
        ctx.pending_login.set(Some(pending));
        ctx.navigate(AppRoute::Otp.path());
    };

    let text_field = move |label: &'static str, kind: &'static str, placeholder: &'static str, icon_name: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <div class="input-with-icon">
                    {icon(icon_name)}
                    <input
                        type=kind
                        required
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </div>
            </div>
        }
    };

    view! {
        <PageFrame page_id="login--public" category=PAGE_CAT_PUBLIC>
            <div class="auth-card">
                <div class="auth-card__brand">
                    <div class="auth-card__logo">{icon("hexagon")}</div>
                    <h1>"Pinnacle Analytics"</h1>
                    <p>"GST Compliance & Analytics Platform"</p>
                </div>

                <div class="segmented">
                    <Button
                        appearance=move || if is_login.get() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                        class="segmented__item"
                        on_click=move |_| is_login.set(true)
                    >
                        "Sign In"
                    </Button>
                    <Button
                        appearance=move || if !is_login.get() { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                        class="segmented__item"
                        on_click=move |_| is_login.set(false)
                    >
                        "Create Account"
                    </Button>
                </div>

                <Show when=move || !is_login.get()>
                    <div class="alert alert--success">
                        {icon("gift")}
                        "Get 5 Free Credits on Sign Up!"
                    </div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {text_field("Phone Number", "text", "Enter 10 digit number", "phone", phone_number)}

                    <Show when=move || !is_login.get()>
                        <div class="form-row">
                            {text_field("Full Name", "text", "John Doe", "user", name)}
                            {text_field("Email", "email", "john@example.com", "mail", email)}
                        </div>
                        {text_field("Company Name", "text", "Business Name Pvt Ltd", "building", company_name)}

                        <div class="form-group">
                            <label>"I am a..."</label>
                            <div class="plan-picker">
                                {PlanTier::ALL
                                    .into_iter()
                                    .map(|tier| {
                                        view! {
                                            <button
                                                type="button"
                                                class="plan-picker__option"
                                                class:plan-picker__option--active=move || user_type.get() == tier
                                                on:click=move |_| user_type.set(tier)
                                            >
                                                {tier.as_str()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="form-group">
                            <label>"Referral Code " <span class="muted">"(Optional)"</span></label>
                            <input
                                type="text"
                                placeholder="PIN-XXXXX"
                                prop:value=move || referral_code.get()
                                on:input=move |ev| referral_code.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <Show when=move || is_login.get()>
                        <div class="demo-hint">
                            <p class="demo-hint__title">"Demo Credentials:"</p>
                            <p>"Admin: " <code>{admin_phone.clone()}</code></p>
                            <p>"User: Any other number"</p>
                        </div>
                    </Show>

                    <button type="submit" class="btn-primary btn-block">
                        {move || if is_login.get() { "Send Verification Code" } else { "Verify & Create Account" }}
                        {icon("arrow-right")}
                    </button>
                </form>

                <div class="auth-card__footer">
                    "By continuing, you agree to our "
                    <a href="#/legal">"Terms"</a>
                    " and "
                    <a href="#/legal">"Privacy Policy"</a>
                </div>
            </div>
        </PageFrame>
    }
}
