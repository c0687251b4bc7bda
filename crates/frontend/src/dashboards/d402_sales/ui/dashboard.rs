use contracts::dashboards::d402_sales::*;
use contracts::domain::a003_sales_invoice;
use contracts::shared::chart::ChartKind;
use leptos::prelude::*;
use thaw::*;

use super::invoice_modal::InvoiceModal;
use super::report_modal::{kind_class, FullReportModal};
use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::chart::CartesianChart;
use crate::shared::components::chart_toggle::ChartTypeToggle;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const PERIODS: [&str; 3] = ["Monthly", "Quarterly", "Yearly"];

#[component]
fn TopCustomers() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Top Customers"</h2>
            <div class="rank-list">
                {top_customers()
                    .into_iter()
                    .map(|customer| view! {
                        <div class="rank-list__row">
                            <div class="rank-list__who">
                                <span class="avatar avatar--initial">{customer.initial().to_string()}</span>
                                <span class="strong">{customer.name.clone()}</span>
                            </div>
                            <span class="strong">{customer.amount.clone()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn GeographicReach() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Geographic Reach"</h2>
            {geo_split()
                .into_iter()
                .map(|(state, share)| view! {
                    <div class="geo-row">
                        <span class="geo-row__state">{icon("map-pin")}{state}</span>
                        <div class="geo-row__bar">
                            <div class="progress">
                                <div class="progress__fill" style=format!("width:{share}%")></div>
                            </div>
                            <span class="strong">{format!("{share}%")}</span>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SalesPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let period = RwSignal::new(PERIODS[0].to_string());
    let chart_kind = RwSignal::new(ChartKind::Area);
    let creating = RwSignal::new(false);
    let reporting = RwSignal::new(false);

    let recent = a003_sales_invoice::fixtures();
    let preview = PageWindow::new(0, REPORT_PAGE_SIZE, full_register(&recent).len());

    Effect::new(move |_| log::debug!("sales period: {}", period.get()));

    view! {
        <PageFrame
            page_id="d402_sales--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Sales Overview"
            subtitle="Breakdown of B2B, B2C, and export sales performance."
            actions=std::sync::Arc::new(move || {
                view! {
                    <div class="period-select">
                        {icon("calendar")}
                        <Select value=period>
                            {PERIODS
                                .into_iter()
                                .map(|p| view! { <option value=p>{p}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        "Create Invoice"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.show_toast(EXPORT_NOTICE, ToastKind::Info)>
                        {icon("download")}
                        "Export"
                    </Button>
                }
                    .into_any()
            })
        >
            <Show when=move || creating.get()>
                <InvoiceModal on_close=Callback::new(move |_| creating.set(false)) />
            </Show>
            <Show when=move || reporting.get()>
                <FullReportModal on_close=Callback::new(move |_| reporting.set(false)) />
            </Show>

            <div class="stat-grid">
                {summary_cards()
                    .into_iter()
                    .map(|indicator| view! { <StatCard indicator=indicator /> })
                    .collect_view()}
            </div>

            <div class="sales-grid">
                <div class="card sales-grid__chart">
                    <div class="card__header">
                        <div>
                            <h2 class="card__title">"Monthly Sales Trend"</h2>
                            <div class="card__headline">{TREND_HEADLINE}</div>
                        </div>
                        <div class="card__header-tools">
                            <ChartTypeToggle options=&ChartKind::CARTESIAN value=chart_kind />
                            <span class="pill pill--success">{TREND_CHANGE}</span>
                        </div>
                    </div>
                    <CartesianChart data=sales_trend() kind=chart_kind />
                </div>
                <div class="sales-grid__side">
                    <TopCustomers />
                    <GeographicReach />
                </div>
            </div>

            <div class="table-card">
                <div class="card__header">
                    <h2 class="card__title">"Detailed Sales Transactions"</h2>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reporting.set(true)>"Full Report"</Button>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Invoice No."</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Customer"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Taxable Value"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"GST Amount"</TableHeaderCell>
                            <TableHeaderCell class="text-right">"Total Value"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {recent
                            .into_iter()
                            .map(|inv| view! {
                                <TableRow>
                                    <TableCell class="strong link">{inv.invoice_no}</TableCell>
                                    <TableCell class="muted">{inv.date}</TableCell>
                                    <TableCell>{inv.customer}</TableCell>
                                    <TableCell><span class=kind_class(inv.kind)>{inv.kind.as_str()}</span></TableCell>
                                    <TableCell class="text-right">{inv.taxable_value}</TableCell>
                                    <TableCell class="text-right">{inv.gst_amount}</TableCell>
                                    <TableCell class="text-right strong">{inv.total_value}</TableCell>
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
                <div class="pagination">
                    <span class="pagination__label">{preview.label()}</span>
                    <div class="pagination__buttons">
                        <button class="icon-button" disabled=true>{icon("chevron-left")}</button>
                        <button class="icon-button" title="Full Report" on:click=move |_| reporting.set(true)>
                            {icon("chevron-right")}
                        </button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
