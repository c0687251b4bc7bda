use contracts::dashboards::d402_sales::PageWindow;
use contracts::domain::a007_activity_log::LogCategory;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const LOG_PAGE_SIZE: usize = 10;

fn category_color(category: LogCategory) -> BadgeColor {
    match category {
        LogCategory::Auth => BadgeColor::Informative,
        LogCategory::Customer => BadgeColor::Success,
        LogCategory::Subscription => BadgeColor::Warning,
        LogCategory::Ticket => BadgeColor::Severe,
        LogCategory::System => BadgeColor::Subtle,
    }
}

/// Read-only activity feed, newest entry first.
#[component]
pub fn AdminLogsPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let page = RwSignal::new(0usize);

    let rows = Memo::new(move |_| {
        let category = category.get().parse::<LogCategory>().ok();
        ctx.admin.with(|a| a.filter_logs(&query.get(), category))
    });
    let window = Memo::new(move |_| PageWindow::new(page.get(), LOG_PAGE_SIZE, rows.with(Vec::len)));

    Effect::new(move |_| {
        query.track();
        category.track();
        page.set(0);
    });

    view! {
        <PageFrame
            page_id="admin_logs--list"
            category=PAGE_CAT_LIST
            title="System Logs"
            subtitle="Sign-ins and every change made from the admin pages."
        >
            <div class="list-controls">
                <div class="list-controls__search">
                    <Input value=query placeholder="Search logs..." />
                </div>
                <Select value=category>
                    <option value="">"All Categories"</option>
                    {LogCategory::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="table-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Time"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Actor"</TableHeaderCell>
                            <TableHeaderCell>"Message"</TableHeaderCell>
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
                                    .map(|entry| {
                                        let actor_view = highlight_matches(&entry.actor, &q);
                                        let message_view = highlight_matches(&entry.message, &q);
                                        view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="mono muted">{entry.timestamp.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=category_color(entry.category)>
                                                    {entry.category.as_str()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{actor_view}</TableCell>
                                            <TableCell>{message_view}</TableCell>
                                        </TableRow>
                                    }})
                                    .collect_view()
                            })
                        }}
                    </TableBody>
                </Table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <div class="empty-state">"No log entries match the filters."</div>
                </Show>
                <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
            </div>
        </PageFrame>
    }
}
