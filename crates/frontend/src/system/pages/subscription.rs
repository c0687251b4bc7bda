use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_session;
use contracts::system::access::plans::{offer_for, PlanOffer, PLAN_OFFERS};
use contracts::system::auth::PlanTier;

const RENEWAL_DATE: &str = "January 15, 2025";
const PAYMENT_METHOD: &str = "Visa ending in 5678";
const BILLING_HISTORY_ROWS: usize = 5;

#[component]
fn PlanCard(offer: &'static PlanOffer, #[prop(into)] current: Signal<PlanTier>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_current = move || current.get() == offer.tier;

    let choose = move |_| {
        if !is_current() {
            ctx.show_toast(
                format!("Our team will contact you about the {} plan.", offer.tier.as_str()),
                ToastKind::Info,
            );
        }
    };

    view! {
        <div class="plan-card" class:plan-card--current=is_current>
            <div class="plan-card__head">
                <h3>{offer.tier.as_str()}</h3>
                <p>{offer.tagline}</p>
            </div>
            <div class="plan-card__price">
                <span class="plan-card__amount">{offer.price}</span>
                <span class="plan-card__period">"/month"</span>
            </div>
            <ul class="plan-card__features">
                {offer
                    .features
                    .iter()
                    .map(|f| view! { <li>{icon("check")}<span>{*f}</span></li> })
                    .collect_view()}
            </ul>
            <Button
                appearance=move || if is_current() { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                class="btn-block"
                on_click=choose
            >
                {move || offer.action_label(current.get())}
            </Button>
        </div>
    }
}

#[component]
fn ManageSubscriptionModal(current: Signal<PlanTier>, on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let option = move |label: &'static str, hint: &'static str, danger: bool, message: &'static str| {
        view! {
            <button
                class="manage-option"
                class:manage-option--danger=danger
                on:click=move |_| {
                    on_close.run(());
                    ctx.show_toast(message, ToastKind::Info);
                }
            >
                <div>
                    <span class="manage-option__label">{label}</span>
                    <span class="manage-option__hint">{hint}</span>
                </div>
                {icon("arrow-right")}
            </button>
        }
    };

    view! {
        <Modal
            title="Manage Subscription".to_string()
            on_close=on_close
            footer=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Close"</Button>
                }
                    .into_any()
            })
        >
            <div class="manage-summary">
                <div class="manage-summary__row">
                    <span>{move || format!("Current Plan: {} (Annual)", current.get().as_str())}</span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge>
                </div>
                <p>{format!("Next billing date: {RENEWAL_DATE}")}</p>
            </div>
            <h4>"Options"</h4>
            <div class="manage-options">
                {option(
                    "Change Plan",
                    "Upgrade or downgrade your current subscription",
                    false,
                    "Pick a plan below to switch.",
                )}
                {option(
                    "Update Payment Method",
                    "Change credit card or billing details",
                    false,
                    "Payment method updates are handled by our billing team.",
                )}
                {option(
                    "Cancel Subscription",
                    "Turn off auto-renewal at end of billing cycle",
                    true,
                    "Auto-renewal will be turned off at the end of the billing cycle.",
                )}
            </div>
        </Modal>
    }
}

#[component]
fn BillingHistoryModal(amount: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <Modal title="Billing History".to_string() on_close=on_close class="modal--wide">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Invoice"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {(0..BILLING_HISTORY_ROWS)
                        .map(|_| {
                            view! {
                                <TableRow>
                                    <TableCell>"Jan 15, 2024"</TableCell>
                                    <TableCell class="strong">{move || amount.get()}</TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>{icon("check")}"Paid"</Badge>
                                    </TableCell>
                                    <TableCell class="text-right">
                                        <button
                                            class="link-button"
                                            on:click=move |_| {
                                                ctx.show_toast("Invoice download started", ToastKind::Info)
                                            }
                                        >
                                            {icon("download")}
                                            "PDF"
                                        </button>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </Modal>
    }
}

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let session = use_session();
    let show_manage = RwSignal::new(false);
    let show_history = RwSignal::new(false);

    let current = Signal::derive(move || session.user().map(|u| u.user_type).unwrap_or_default());
    let price = move || offer_for(current.get()).price;
    let invoice_amount = Signal::derive(move || format!("{}.00", offer_for(current.get()).price));

    view! {
        <PageFrame
            page_id="subscription--system"
            category=PAGE_CAT_SYSTEM
            title="Subscription Management"
            subtitle="Manage your plan, billing details, and explore available upgrades."
        >
            <Show when=move || show_manage.get()>
                <ManageSubscriptionModal current=current on_close=Callback::new(move |_| show_manage.set(false)) />
            </Show>
            <Show when=move || show_history.get()>
                <BillingHistoryModal
                    amount=invoice_amount
                    on_close=Callback::new(move |_| show_history.set(false))
                />
            </Show>

            <div class="card current-plan">
                <div>
                    <div class="current-plan__head">
                        <h2>"Your Current Subscription"</h2>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge>
                    </div>
                    <p>{move || format!("{} Plan - Annual", current.get().as_str())}</p>
                    <div class="current-plan__price">{price}<span>"/month"</span></div>
                    <p class="current-plan__renewal">{format!("Renews on {RENEWAL_DATE}")}</p>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_manage.set(true)>
                    "Manage Subscription"
                </Button>
            </div>

            <h2 class="section-title">"Explore Our Plans"</h2>
            <div class="plan-grid">
                {PLAN_OFFERS
                    .iter()
                    .map(|offer| view! { <PlanCard offer=offer current=current /> })
                    .collect_view()}
            </div>

            <div class="card">
                <h2 class="card__title">"Billing Information"</h2>
                <div class="billing-info">
                    <div class="billing-info__row">{icon("credit-card")}{format!("Payment Method: {PAYMENT_METHOD}")}</div>
                    <div class="billing-info__row">{icon("calendar")}{format!("Next Billing Date: {RENEWAL_DATE}")}</div>
                </div>
                <div class="billing-info__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_manage.set(true)>
                        "Update Payment Method"
                    </Button>
                    <button class="link-button" on:click=move |_| show_history.set(true)>
                        "View Billing History"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
