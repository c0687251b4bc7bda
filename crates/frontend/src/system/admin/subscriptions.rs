use contracts::dashboards::d402_sales::PageWindow;
use contracts::domain::a002_subscription::{monthly_recurring_revenue, ServicePlan, Subscription, SubscriptionStatus};
use contracts::domain::a007_activity_log::LogCategory;
use contracts::shared::indicators::{Indicator, IndicatorStatus};
use leptos::prelude::*;
use thaw::*;

use super::{admin_actor, apply_admin_edit, confirm, sort_header, SortState, ADMIN_PAGE_SIZE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

fn status_color(status: SubscriptionStatus) -> BadgeColor {
    match status {
        SubscriptionStatus::Active => BadgeColor::Success,
        SubscriptionStatus::Pending => BadgeColor::Warning,
        SubscriptionStatus::Cancelled => BadgeColor::Danger,
        SubscriptionStatus::Suspended => BadgeColor::Severe,
    }
}

fn summary_cards(rows: &[Subscription]) -> Vec<Indicator> {
    let count = |status: SubscriptionStatus| rows.iter().filter(|s| s.status == status).count().to_string();
    vec![
        Indicator::new("subs-active", "Total Active Subscriptions", &count(SubscriptionStatus::Active), "trending-up")
            .with_change("+5% last month")
            .with_status(IndicatorStatus::Good),
        Indicator::new("subs-mrr", "Monthly Recurring Revenue", &monthly_recurring_revenue(rows), "credit-card")
            .with_change("+2.3% last month")
            .with_status(IndicatorStatus::Good),
        Indicator::new("subs-cancelled", "Cancelled Subscriptions", &count(SubscriptionStatus::Cancelled), "trending-down")
            .with_subtext("0.8% decrease")
            .with_status(IndicatorStatus::Bad),
        Indicator::new("subs-pending", "Pending Subscriptions", &count(SubscriptionStatus::Pending), "clock")
            .with_subtext("Awaiting activation")
            .with_status(IndicatorStatus::Warning),
    ]
}

#[component]
pub fn AdminSubscriptionsPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let plan_filter = RwSignal::new(String::new());
    let sort = SortState::new("name");
    let page = RwSignal::new(0usize);

    let rows = Memo::new(move |_| {
        let status = status_filter.get().parse::<SubscriptionStatus>().ok();
        let plan = plan_filter.get().parse::<ServicePlan>().ok();
        let mut rows: Vec<Subscription> = ctx
            .admin
            .with(|a| a.subscriptions.filter_by_status(&query.get(), status))
            .into_iter()
            .filter(|s| plan.map_or(true, |p| s.plan == p))
            .collect();
        sort_list(&mut rows, sort.field.get(), sort.ascending.get());
        rows
    });
    let window = Memo::new(move |_| PageWindow::new(page.get(), ADMIN_PAGE_SIZE, rows.with(Vec::len)));

    Effect::new(move |_| {
        query.track();
        status_filter.track();
        plan_filter.track();
        page.set(0);
    });

    let change_status = move |sub: Subscription, status: SubscriptionStatus| {
        if sub.status == status {
            return;
        }
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("{} is now {}", sub.customer_name, status.as_str()), |admin| {
            admin.subscriptions.set_status(sub.id, status)?;
            admin.record(
                &actor,
                LogCategory::Subscription,
                format!("{} moved to {}", sub.customer_name, status.as_str()),
            );
            Ok(())
        });
    };

    let delete = move |sub: Subscription| {
        if !confirm(&format!("Remove the subscription of {}?", sub.customer_name)) {
            return;
        }
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("Subscription of {} removed", sub.customer_name), |admin| {
            admin.subscriptions.remove(sub.id)?;
            admin.record(
                &actor,
                LogCategory::Subscription,
                format!("Subscription of {} removed", sub.customer_name),
            );
            Ok(())
        });
    };

    view! {
        <PageFrame
            page_id="admin_subscriptions--list"
            category=PAGE_CAT_LIST
            title="Subscription Management"
            subtitle="Manage all customer subscriptions, plans, and their states."
        >
            <div class="stat-grid">
                {move || {
                    ctx.admin
                        .with(|a| summary_cards(a.subscriptions.rows()))
                        .into_iter()
                        .map(|indicator| view! { <StatCard indicator=indicator /> })
                        .collect_view()
                }}
            </div>

            <div class="list-controls">
                <div class="list-controls__search">
                    <Input value=query placeholder="Search subscriptions..." />
                </div>
                <Select value=status_filter>
                    <option value="">"All Statuses"</option>
                    {SubscriptionStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </Select>
                <Select value=plan_filter>
                    <option value="">"All Plans"</option>
                    {ServicePlan::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="table-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {sort_header(sort, "name", "Customer Name")}
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            {sort_header(sort, "plan", "Plan")}
                            {sort_header(sort, "status", "Status")}
                            <TableHeaderCell>"Start Date"</TableHeaderCell>
                            {sort_header(sort, "end", "End Date")}
                            <TableHeaderCell>"Monthly Price"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let range = window.get().range();
                            let q = query.get();
                            rows.with(|rows| {
                                rows[range]
                                    .iter()
                                    .cloned()
                                    .map(|sub| {
                                        let for_status = sub.clone();
                                        let for_delete = sub.clone();
                                        let customer_name_view = highlight_matches(&sub.customer_name, &q);
                                        let email_view = highlight_matches(&sub.email, &q);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <span class="strong">{customer_name_view}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{email_view}</span>
                                                </TableCell>
                                                <TableCell>{sub.plan.as_str()}</TableCell>
                                                <TableCell>
                                                    <Badge appearance=BadgeAppearance::Tint color=status_color(sub.status)>
                                                        {sub.status.as_str()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{sub.start_date.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{sub.end_date.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="strong">{sub.monthly_price.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <select
                                                            prop:value=sub.status.as_str()
                                                            on:change=move |ev| {
                                                                if let Ok(status) = event_target_value(&ev).parse::<SubscriptionStatus>() {
                                                                    change_status(for_status.clone(), status);
                                                                }
                                                            }
                                                        >
                                                            {SubscriptionStatus::ALL
                                                                .into_iter()
                                                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                                                .collect_view()}
                                                        </select>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| delete(for_delete.clone())
                                                        >
                                                            {icon("trash")}
                                                        </Button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </TableBody>
                </Table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <div class="empty-state">"No subscriptions match the filters."</div>
                </Show>
                <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_subscription;

    #[test]
    fn test_summary_cards_follow_rows() {
        let cards = summary_cards(&a002_subscription::fixtures());
        assert_eq!(cards[0].value, "3");
        assert_eq!(cards[2].value, "1");
        assert_eq!(cards[3].value, "1");
        assert_eq!(cards[1].status, IndicatorStatus::Good);
    }
}
