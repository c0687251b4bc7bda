//! Help & Support: ticket form, direct contacts and the FAQ list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::simulated::run_task;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::require_capability;
use contracts::shared::simulated_task::{CancelToken, SimulatedTask, TaskOutcome};
use contracts::system::access::Capability;

const SUPPORT_EMAIL: &str = "support@pinnaclegst.com";
const SUPPORT_PHONE: &str = "+91 1800-123-4567";

static TOPICS: [(&str, &str); 4] = [
    ("Billing", "Billing & Subscription"),
    ("Technical", "Technical Issue"),
    ("Feature", "Feature Request"),
    ("Other", "Other"),
];

static FAQS: [(&str, &str); 4] = [
    (
        "How do I connect my GST Portal?",
        "Go to Settings > GST Connection. Enter your GST username and verify via OTP sent to your registered mobile number.",
    ),
    (
        "Is my financial data secure?",
        "Yes, we use AES-256 encryption for all data at rest and SSL/TLS for data in transit. We do not share your data with third parties.",
    ),
    (
        "How can I upgrade my plan?",
        "Navigate to the Subscription page from the user menu to view and select upgrade options.",
    ),
    (
        "What happens if I exceed my GSTIN limit?",
        "You will be prompted to upgrade to a Business or CA plan to add more GSTINs.",
    ),
];

fn topic_label(value: &str) -> &str {
    TOPICS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

#[component]
fn TicketForm() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let name = move || session.user().map(|u| u.name).unwrap_or_default();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let topic = subject.get_untracked();
        let body = message.get_untracked().trim().to_string();
        if topic.is_empty() || body.is_empty() {
            ctx.show_toast("Please choose a subject and describe your issue.", ToastKind::Error);
            return;
        }

        sending.set(true);
        let delay = ctx.config.with_value(|c| c.timing.ticket_ms);
        let requester = session
            .user_untracked()
            .map(|u| if u.name.is_empty() { u.phone_number } else { u.name })
            .unwrap_or_default();
        spawn_local(async move {
            let task = SimulatedTask::new("Support ticket", delay);
            let outcome = run_task(task, &CancelToken::new(), || Ok(())).await;
            sending.set(false);
            if outcome.is_completed() {
                ctx.admin.update(|admin| {
                    let reference = admin.open_ticket(&requester, topic_label(&topic), &body);
                    log::info!("Support ticket {reference} filed");
                });
                subject.set(String::new());
                message.set(String::new());
                ctx.show_toast(
                    "Ticket created successfully! We will contact you shortly.",
                    ToastKind::Success,
                );
            } else if let TaskOutcome::Failed(e) = outcome {
                ctx.show_toast(e, ToastKind::Error);
            }
        });
    };

    view! {
        <div class="card support-form">
            <h2 class="card__title">{icon("message-square")}"Submit a Ticket"</h2>
            <form on:submit=submit>
                <div class="form-row">
                    <div class="form-group">
                        <label>"Name"</label>
                        <input type="text" prop:value=name disabled />
                    </div>
                    <div class="form-group">
                        <label>"Email"</label>
                        <input type="email" prop:value=email disabled />
                    </div>
                </div>
                <div class="form-group">
                    <label>"Subject"</label>
                    <select
                        prop:value=move || subject.get()
                        on:change=move |ev| subject.set(event_target_value(&ev))
                    >
                        <option value="">"Select a topic"</option>
                        {TOPICS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Message"</label>
                    <textarea
                        rows="4"
                        placeholder="Describe your issue in detail..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="btn-primary btn-block" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn ContactBox() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let phone_locked = move || !session.has(Capability::PriorityPhoneSupport);

    let call = move |_| {
        require_capability(session, ctx, Capability::PriorityPhoneSupport, || {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(&format!("tel:{}", SUPPORT_PHONE.replace([' ', '-'], "")));
            }
        });
    };

    view! {
        <div class="contact-box">
            <h3 class="contact-box__title">"Contact Us Directly"</h3>
            <div class="contact-box__row">
                {icon("mail")}
                <div>
                    <p class="contact-box__label">"Email Support"</p>
                    <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
                </div>
            </div>
            <div
                class="contact-box__row contact-box__row--action"
                class:contact-box__row--locked=phone_locked
                on:click=call
            >
                {icon("phone")}
                <div>
                    <p class="contact-box__label">
                        "Priority Phone Support"
                        <Show when=phone_locked>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"PRO"</Badge>
                        </Show>
                    </p>
                    <p class="contact-box__value">{SUPPORT_PHONE}</p>
                </div>
                <Show when=phone_locked>{icon("lock")}</Show>
            </div>
        </div>
    }
}

#[component]
fn FaqList() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <div class="card">
            <h2 class="card__title">{icon("help-circle")}"Frequently Asked Questions"</h2>
            <div class="faq">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class="faq__item" class:faq__item--open=is_open>
                                <button
                                    class="faq__question"
                                    on:click=move |_| {
                                        open.update(|o| *o = if *o == Some(index) { None } else { Some(index) })
                                    }
                                >
                                    <span>{*question}</span>
                                    {move || if is_open() { icon("chevron-up") } else { icon("chevron-down") }}
                                </button>
                                <Show when=is_open>
                                    <p class="faq__answer">{*answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <PageFrame
            page_id="support--system"
            category=PAGE_CAT_SYSTEM
            title="Help & Support"
            subtitle="Need help? We are here for you. Browse FAQs or contact our support team."
        >
            <div class="support-grid">
                <div class="support-grid__main">
                    <TicketForm />
                </div>
                <div class="support-grid__side">
                    <ContactBox />
                    <FaqList />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_labels() {
        assert_eq!(topic_label("Billing"), "Billing & Subscription");
        assert_eq!(topic_label("Other"), "Other");
        assert_eq!(topic_label("Unknown"), "Unknown");
    }
}
