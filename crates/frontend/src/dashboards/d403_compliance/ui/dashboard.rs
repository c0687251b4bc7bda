use contracts::dashboards::d403_compliance::*;
use contracts::domain::a005_compliance_alert::{self, ComplianceAlert, Severity};
use contracts::system::access::Capability;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use super::tax_estimator::TaxEstimator;
use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::guard::FeatureGate;

/// Where "Take Action Now" leads. Alerts without a page of their own get a reminder.
fn action_path(alert: &ComplianceAlert) -> Option<&'static str> {
    let kind = alert.kind.to_lowercase();
    if kind.contains("itc") || kind.contains("vendor") {
        Some("/dashboard/itc")
    } else if kind.contains("gstr") {
        Some("/dashboard/overview")
    } else {
        None
    }
}

#[component]
fn ScoreGauge(score: u32) -> impl IntoView {
    view! {
        <div class="gauge">
            <svg viewBox="0 0 100 60" class="gauge__svg">
                <path class="gauge__track" d="M 10 50 A 40 40 0 0 1 90 50" fill="none" stroke-width="10" />
                <path
                    class="gauge__value"
                    d="M 10 50 A 40 40 0 0 1 90 50"
                    fill="none"
                    stroke-width="10"
                    stroke-dasharray=GAUGE_ARC.to_string()
                    stroke-dashoffset=gauge_offset(score).to_string()
                />
            </svg>
            <div class="gauge__label">
                <span class="gauge__score">{score}</span>
                <span class="gauge__rating">{score_rating(score)}</span>
            </div>
        </div>
    }
}

#[component]
fn FilingTimeline() -> impl IntoView {
    view! {
        <div class="card timeline">
            <div class="card__header">
                {icon("calendar")}
                <h3 class="card__title">"Filing Timeline"</h3>
            </div>
            <ol class="timeline__list">
                {filing_timeline()
                    .into_iter()
                    .map(|entry| {
                        let marker = match entry.state {
                            TimelineState::Done => icon("check"),
                            TimelineState::Pending => view! { <span class="timeline__dot"></span> }.into_any(),
                            TimelineState::Upcoming => ().into_any(),
                        };
                        view! {
                            <li class=format!("timeline__item timeline__item--{}", entry.state.css_modifier())>
                                <span class="timeline__marker">{marker}</span>
                                <div>
                                    <span class="timeline__date">{entry.date}</span>
                                    <h4>{entry.title}</h4>
                                    <p class="muted">{entry.note}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn AlertDetailModal(alert: ComplianceAlert, on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let target = action_path(&alert);
    let period = alert.period.clone();
    let take_action = move |_| {
        on_close.run(());
        match target {
            Some(path) => ctx.navigate(path),
            None => ctx.show_toast(format!("Reminder set for {period}"), ToastKind::Info),
        }
    };

    view! {
        <Modal title="Compliance Alert".to_string() on_close=on_close>
            <div class="alert-detail">
                <div class="alert-detail__head">
                    <span class="alert-detail__icon">{icon("alert-octagon")}</span>
                    <div>
                        <h4>{alert.kind.clone()}</h4>
                        <span class=format!("severity severity--{}", alert.severity.css_modifier())>
                            {format!("{} Priority", alert.severity.as_str())}
                        </span>
                    </div>
                </div>
                <p class="alert-detail__text">{alert.description.clone()}</p>
                <div class="alert-detail__meta">
                    <span class="muted">"Period:"</span>
                    <span class="strong">{alert.period.clone()}</span>
                </div>
                <Button appearance=ButtonAppearance::Primary class="btn-block" on_click=take_action>
                    "Take Action Now"
                    {icon("arrow-right")}
                </Button>
            </div>
        </Modal>
    }
}

#[component]
pub fn CompliancePage() -> impl IntoView {
    let selected = RwSignal::new(None::<ComplianceAlert>);
    let mut alerts = a005_compliance_alert::fixtures();
    alerts.sort_by_key(|a| a.severity);
    let critical = alerts.iter().filter(|a| a.severity == Severity::Critical).count();

    view! {
        <PageFrame
            page_id="d403_compliance--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="GST Compliance Dashboard"
            subtitle="Monitor your GST compliance status, track key metrics, and get real-time alerts on potential issues."
        >
            {move || selected.get().map(|alert| view! {
                <AlertDetailModal alert=alert on_close=Callback::new(move |_| selected.set(None)) />
            })}

            <div class="compliance-grid">
                <div class="card compliance-grid__score">
                    <FeatureGate capability=Capability::ComplianceScoring message=SCORE_GATE_TEXT>
                        <div class="health">
                            <div class="health__text">
                                <h2 class="card__title">"Compliance Health"</h2>
                                <p class="muted">{HEALTH_TEXT}</p>
                                <div class="health__metrics">
                                    {health_metrics()
                                        .into_iter()
                                        .map(|(value, label)| view! {
                                            <div class="health__metric">
                                                <div class="health__value">{value}</div>
                                                <div class="health__label">{label}</div>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <ScoreGauge score=COMPLIANCE_SCORE />
                        </div>
                    </FeatureGate>
                </div>
                <TaxEstimator />
            </div>

            <div class="compliance-grid">
                <div class="table-card compliance-grid__alerts">
                    <div class="card__header">
                        <h2 class="card__title">
                            {icon("alert-octagon")}
                            "Compliance Alerts"
                        </h2>
                        <span class="pill pill--danger">{format!("{critical} critical")}</span>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Period"</TableHeaderCell>
                                <TableHeaderCell>"Severity"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {alerts
                                .into_iter()
                                .map(|alert| {
                                    let severity = alert.severity;
                                    let for_view = alert.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell class="strong">{alert.kind}</TableCell>
                                            <TableCell>{alert.description}</TableCell>
                                            <TableCell class="muted">{alert.period}</TableCell>
                                            <TableCell>
                                                <span class=format!("severity severity--{}", severity.css_modifier())>
                                                    {severity.as_str()}
                                                </span>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <button
                                                    class="icon-button"
                                                    title="View details"
                                                    on:click=move |_| selected.set(Some(for_view.clone()))
                                                >
                                                    {icon("external-link")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </div>
                <FilingTimeline />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_path_by_alert_kind() {
        let alerts = a005_compliance_alert::fixtures();
        let path_for = |kind: &str| alerts.iter().find(|a| a.kind == kind).and_then(action_path);
        assert_eq!(path_for("GSTR-3B Filing"), Some("/dashboard/overview"));
        assert_eq!(path_for("ITC Mismatch"), Some("/dashboard/itc"));
        assert_eq!(path_for("Vendor Filing"), Some("/dashboard/itc"));
        assert_eq!(path_for("Export Docs"), None);
    }
}
