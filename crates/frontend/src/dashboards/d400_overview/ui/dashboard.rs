use contracts::dashboards::d400_overview::*;
use contracts::shared::chart::ChartKind;
use contracts::system::access::Capability;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::chart::CartesianChart;
use crate::shared::components::chart_toggle::ChartTypeToggle;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::FeatureGate;

const ALERT_TONES: [&str; 3] = ["danger", "warning", "info"];

fn filing_row(filing: UpcomingFiling) -> impl IntoView {
    let badge = match filing.status {
        FilingStatus::Due => "filing-badge filing-badge--due",
        FilingStatus::Filed => "filing-badge filing-badge--filed",
    };
    view! {
        <div class="filing-row">
            <div>
                <span class="filing-row__form">{filing.form}</span>
                <span class="filing-row__date">{format!("Due: {}", filing.due_date)}</span>
            </div>
            <span class=badge>{filing.status.as_str()}</span>
        </div>
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let date_range = RwSignal::new(DATE_RANGES[0].to_string());
    let trend_kind = RwSignal::new(ChartKind::Bar);
    let liability_kind = RwSignal::new(ChartKind::Line);

    let welcome = move || {
        session
            .user()
            .map(|u| {
                let name = if u.name.is_empty() { "User".to_string() } else { u.name };
                format!("Welcome back, {name} ({})", u.user_type.as_str())
            })
            .unwrap_or_default()
    };

    let link = move |label: &'static str, path: &'static str| {
        view! { <button class="link-button" on:click=move |_| ctx.navigate(path)>{label}</button> }
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__heading">
                    <h1 class="page__title">"Dashboard Overview"</h1>
                    <p class="page__subtitle">{welcome}</p>
                </div>
                <div class="date-range">
                    {icon("calendar")}
                    <Select value=date_range>
                        {DATE_RANGES
                            .into_iter()
                            .map(|r| view! { <option value=r>{r}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>

            <div class="stat-grid" id="overview-stats-grid">
                {stat_cards()
                    .into_iter()
                    .map(|indicator| view! { <StatCard indicator=indicator /> })
                    .collect_view()}
            </div>

            <div class="chart-row" id="overview-charts-section">
                <div class="card chart-card">
                    <div class="chart-card__header">
                        <h2 class="chart-card__title chart-card__title--indigo">"Sales & Purchase Trends"</h2>
                        <div class="chart-card__tools">
                            <ChartTypeToggle options=&ChartKind::CARTESIAN value=trend_kind />
                            {link("View Details", "/dashboard/sales")}
                        </div>
                    </div>
                    <CartesianChart data=sales_purchase_trend() kind=trend_kind />
                </div>

                <div class="card chart-card">
                    <FeatureGate capability=Capability::LiabilityAnalytics message=LIABILITY_GATE_TEXT>
                        <div class="chart-card__header">
                            <h2 class="chart-card__title chart-card__title--emerald">"Liability vs ITC"</h2>
                            <div class="chart-card__tools">
                                <ChartTypeToggle options=&ChartKind::CARTESIAN value=liability_kind />
                                {link("View Details", "/dashboard/itc")}
                            </div>
                        </div>
                        <CartesianChart data=liability_vs_itc() kind=liability_kind />
                    </FeatureGate>
                </div>
            </div>

            <div class="chart-row">
                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Upcoming Filings"</h2>
                        {link("Manage", "/dashboard/compliance")}
                    </div>
                    <div class="filing-list">
                        {upcoming_filings().into_iter().map(filing_row).collect_view()}
                    </div>
                </div>

                <div class="card" id="overview-alerts-card">
                    <div class="card__header">
                        <h2 class="card__title">"Critical Alerts"</h2>
                        {link("Resolve", "/dashboard/compliance")}
                    </div>
                    <div class="alert-list">
                        {critical_alerts()
                            .into_iter()
                            .zip(ALERT_TONES)
                            .map(|(alert, tone)| {
                                let clickable = alert.link.is_some();
                                let target = alert.link.clone();
                                view! {
                                    <div
                                        class=format!("overview-alert overview-alert--{tone}")
                                        class:overview-alert--clickable=clickable
                                        on:click=move |_| {
                                            if let Some(path) = target.as_deref() {
                                                ctx.navigate(path);
                                            }
                                        }
                                    >
                                        <div class="overview-alert__icon">{icon(&alert.icon)}</div>
                                        <div>
                                            <p class="overview-alert__title">{alert.title}</p>
                                            <p class="overview-alert__text">{alert.text}</p>
                                            <p class="overview-alert__age">{alert.age}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
