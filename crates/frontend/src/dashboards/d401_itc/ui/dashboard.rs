use contracts::dashboards::d401_itc::*;
use contracts::domain::a004_vendor_itc::{self, VendorItc};
use contracts::domain::a008_missing_invoice::{self, MissingInvoiceStatus};
use contracts::shared::chart::ChartKind;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use super::vendor_modals::{VendorDetailModal, VendorListModal};
use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::chart::ShareChart;
use crate::shared::components::chart_toggle::ChartTypeToggle;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const LEDGER_ROWS: usize = 5;

fn missing_status_class(status: MissingInvoiceStatus) -> &'static str {
    match status {
        MissingInvoiceStatus::Missing => "pill pill--danger",
        MissingInvoiceStatus::Pending => "pill pill--warning",
        MissingInvoiceStatus::Resolved => "pill pill--success",
    }
}

#[component]
fn OverviewTab(ineligible_only: RwSignal<bool>, selected: RwSignal<Option<VendorItc>>, show_all: RwSignal<bool>) -> impl IntoView {
    let chart_kind = RwSignal::new(ChartKind::Pie);
    let vendors = StoredValue::new(a004_vendor_itc::fixtures());
    let ledger = Memo::new(move |_| {
        vendors.with_value(|v| {
            let mut rows = filter_vendors(v, "", ineligible_only.get());
            rows.truncate(LEDGER_ROWS);
            rows
        })
    });

    view! {
        <div class="stat-grid stat-grid--five">
            {summary_cards()
                .into_iter()
                .map(|indicator| view! { <StatCard indicator=indicator /> })
                .collect_view()}
        </div>

        <div class="itc-grid">
            <div class="card itc-grid__ledger">
                <div class="card__header">
                    <h2 class="card__title">"Vendor-wise ITC Ledger"</h2>
                    <button class="link-button" on:click=move |_| show_all.set(true)>"View All"</button>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Vendor Name"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Eligible"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Ineligible"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Action"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            ledger
                                .get()
                                .into_iter()
                                .map(|vendor| {
                                    let for_view = vendor.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <p class="strong">{vendor.name.clone()}</p>
                                                <p class="mono muted">{vendor.gstin.clone()}</p>
                                            </TableCell>
                                            <TableCell class="text-right amount--good">{vendor.eligible.clone()}</TableCell>
                                            <TableCell class="text-right amount--bad">{vendor.ineligible.clone()}</TableCell>
                                            <TableCell class="text-right">
                                                <button
                                                    class="icon-button"
                                                    title="View details"
                                                    on:click=move |_| selected.set(Some(for_view.clone()))
                                                >
                                                    {icon("search")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=move || ledger.with(Vec::is_empty)>
                    <div class="empty-state">"No vendors with ineligible credit"</div>
                </Show>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"ITC Utilization"</h2>
                    <ChartTypeToggle options=&ChartKind::RADIAL value=chart_kind />
                </div>
                <ShareChart slices=utilization() kind=chart_kind />
                <div class="share-list">
                    {utilization()
                        .into_iter()
                        .map(|slice| view! {
                            <div class="share-list__row">
                                <span>
                                    <span class="share-list__dot" style=format!("background:{}", slice.color)></span>
                                    {slice.label}
                                </span>
                                <strong>{format!("{}%", slice.value)}</strong>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReconciliationTab() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let report = RwSignal::new(mismatch_report());
    let missing = a008_missing_invoice::fixtures();

    let set_decision = move |id: u32, decision: MismatchDecision| {
        let known = report.try_update(|rows| decide(rows, id, decision)).unwrap_or(false);
        if !known {
            log::warn!("No mismatch row #{id}");
        }
    };

    view! {
        <div class="action-center">
            <div>
                <h3>"Reconciliation Action Center"</h3>
                <p>{RECONCILIATION_NOTICE}</p>
            </div>
            <div class="action-center__buttons">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.show_toast("Purchase register upload is not available in the demo", ToastKind::Info)
                >
                    {icon("download")}
                    "Upload Purchase Register"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        report.update(|rows| {
                            for row in rows.iter_mut().filter(|r| r.decision.is_none()) {
                                row.decision = Some(MismatchDecision::Accepted);
                            }
                        });
                        ctx.show_toast("Open mismatches accepted", ToastKind::Success);
                    }
                >
                    "Auto-Reconcile"
                </Button>
            </div>
        </div>

        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Mismatch Report"</h2>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Invoice"</TableHeaderCell>
                        <TableHeaderCell>"Vendor"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Books"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"GSTR-2B"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Action"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        report
                            .get()
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                let action = match row.decision {
                                    Some(MismatchDecision::Accepted) => {
                                        view! { <span class="pill pill--success">"Accepted"</span> }.into_any()
                                    }
                                    Some(MismatchDecision::Rejected) => {
                                        view! { <span class="pill pill--danger">"Rejected"</span> }.into_any()
                                    }
                                    None => view! {
                                        <button
                                            class="decision decision--accept"
                                            on:click=move |_| set_decision(id, MismatchDecision::Accepted)
                                        >
                                            "Accept"
                                        </button>
                                        <button
                                            class="decision decision--reject"
                                            on:click=move |_| set_decision(id, MismatchDecision::Rejected)
                                        >
                                            "Reject"
                                        </button>
                                    }
                                        .into_any(),
                                };
                                view! {
                                    <TableRow>
                                        <TableCell class="strong">{row.invoice_no}</TableCell>
                                        <TableCell>{row.vendor}</TableCell>
                                        <TableCell class="text-right">{row.books_amount}</TableCell>
                                        <TableCell class="text-right">{row.portal_amount}</TableCell>
                                        <TableCell class="text-right nowrap">{action}</TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>

        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Missing in GSTR-2B"</h2>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Invoice Details"</TableHeaderCell>
                        <TableHeaderCell>"Vendor"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Amount"</TableHeaderCell>
                        <TableHeaderCell class="text-center">"Source"</TableHeaderCell>
                        <TableHeaderCell class="text-center">"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {missing
                        .into_iter()
                        .map(|inv| view! {
                            <TableRow>
                                <TableCell>
                                    <p class="strong">{inv.number}</p>
                                    <p class="muted">{inv.date}</p>
                                </TableCell>
                                <TableCell class="mono muted">{inv.vendor_gstin}</TableCell>
                                <TableCell class="text-right strong">{inv.amount}</TableCell>
                                <TableCell class="text-center"><span class="tag">"Purchase Reg"</span></TableCell>
                                <TableCell class="text-center">
                                    <span class=missing_status_class(inv.status)>{inv.status.as_str()}</span>
                                </TableCell>
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ItcPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let tab = RwSignal::new(ItcTab::Overview);
    let ineligible_only = RwSignal::new(false);
    let selected = RwSignal::new(None::<VendorItc>);
    let show_all = RwSignal::new(false);

    view! {
        <PageFrame
            page_id="d401_itc--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Input Tax Credit Analytics"
            subtitle="Real-time reconciliation and status of your Input Tax Credit."
            actions=std::sync::Arc::new(move || {
                view! {
                    <Button
                        appearance=move || if ineligible_only.get() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        attr:title="Only vendors with ineligible credit"
                        on_click=move |_| ineligible_only.update(|f| *f = !*f)
                    >
                        {icon("filter")}
                        "Filter"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.show_toast("Use Generate Report in the header to build a full ITC report", ToastKind::Info)
                    >
                        {icon("download")}
                        "Report"
                    </Button>
                }
                    .into_any()
            })
        >
            <Show when=move || show_all.get()>
                <VendorListModal on_close=Callback::new(move |_| show_all.set(false)) />
            </Show>
            {move || selected.get().map(|vendor| view! {
                <VendorDetailModal vendor=vendor on_close=Callback::new(move |_| selected.set(None)) />
            })}

            <nav class="tabs">
                {ItcTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <Button
                            appearance=move || if tab.get() == t { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                            class="tabs__item"
                            on_click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </Button>
                    })
                    .collect_view()}
            </nav>

            {move || match tab.get() {
                ItcTab::Overview => view! {
                    <OverviewTab ineligible_only=ineligible_only selected=selected show_all=show_all />
                }
                    .into_any(),
                ItcTab::Reconciliation => view! { <ReconciliationTab /> }.into_any(),
                ItcTab::Gstr2b => view! {
                    <div class="placeholder-panel">
                        {icon("file-text")}
                        <h3>"GSTR-2B Data View"</h3>
                        <p>{GSTR2B_PLACEHOLDER}</p>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate("/gst-connection")>
                            "Connect Portal"
                        </Button>
                    </div>
                }
                    .into_any(),
            }}
        </PageFrame>
    }
}
