use contracts::dashboards::d402_sales::PageWindow;
use contracts::domain::a006_support_ticket::{SupportTicket, TicketPriority, TicketStatus};
use contracts::domain::a007_activity_log::LogCategory;
use leptos::prelude::*;
use thaw::*;

use super::{admin_actor, apply_admin_edit, confirm, sort_header, SortState, ADMIN_PAGE_SIZE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_list};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

fn status_color(status: TicketStatus) -> BadgeColor {
    match status {
        TicketStatus::Open => BadgeColor::Informative,
        TicketStatus::InProgress => BadgeColor::Warning,
        TicketStatus::Resolved => BadgeColor::Success,
        TicketStatus::Closed => BadgeColor::Subtle,
    }
}

fn priority_class(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::High => "priority priority--high",
        TicketPriority::Normal => "priority priority--normal",
        TicketPriority::Low => "priority priority--low",
    }
}

#[component]
fn TicketDetails(ticket: SupportTicket, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=format!("{} · {}", ticket.reference(), ticket.subject) on_close=on_close>
            <dl class="details-list">
                <dt>"Requester"</dt>
                <dd>{ticket.requester.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{ticket.created_at.clone()}</dd>
                <dt>"Priority"</dt>
                <dd><span class=priority_class(ticket.priority)>{ticket.priority.as_str()}</span></dd>
                <dt>"Status"</dt>
                <dd>
                    <Badge appearance=BadgeAppearance::Tint color=status_color(ticket.status)>
                        {ticket.status.as_str()}
                    </Badge>
                </dd>
            </dl>
            <p class="ticket-message">{ticket.message.clone()}</p>
        </Modal>
    }
}

#[component]
pub fn AdminTicketsPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let sort = SortState::new("created");
    sort.ascending.set(false);
    let page = RwSignal::new(0usize);
    let viewing = RwSignal::new(None::<SupportTicket>);

    let rows = Memo::new(move |_| {
        let status = status_filter.get().parse::<TicketStatus>().ok();
        let mut rows = ctx.admin.with(|a| a.tickets.filter_by_status(&query.get(), status));
        sort_list(&mut rows, sort.field.get(), sort.ascending.get());
        rows
    });
    let window = Memo::new(move |_| PageWindow::new(page.get(), ADMIN_PAGE_SIZE, rows.with(Vec::len)));
    let open_count = move || {
        ctx.admin.with(|a| {
            a.tickets.count_status(TicketStatus::Open) + a.tickets.count_status(TicketStatus::InProgress)
        })
    };

    Effect::new(move |_| {
        query.track();
        status_filter.track();
        page.set(0);
    });

    let change_status = move |ticket: SupportTicket, status: TicketStatus| {
        if ticket.status == status {
            return;
        }
        let actor = admin_actor(session);
        let reference = ticket.reference();
        apply_admin_edit(ctx, format!("{reference} marked {}", status.as_str()), |admin| {
            admin.tickets.set_status(ticket.id, status)?;
            admin.record(
                &actor,
                LogCategory::Ticket,
                format!("{reference} moved to {}", status.as_str()),
            );
            Ok(())
        });
    };

    let delete = move |ticket: SupportTicket| {
        let reference = ticket.reference();
        if !confirm(&format!("Delete ticket {reference}?")) {
            return;
        }
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("{reference} deleted"), |admin| {
            admin.tickets.remove(ticket.id)?;
            admin.record(&actor, LogCategory::Ticket, format!("{reference} deleted"));
            Ok(())
        });
    };

    view! {
        <PageFrame
            page_id="admin_tickets--list"
            category=PAGE_CAT_LIST
            title="Support Tickets"
            subtitle="Requests sent from the Help & Support page."
        >
            {move || viewing.get().map(|ticket| view! {
                <TicketDetails ticket=ticket on_close=Callback::new(move |_| viewing.set(None)) />
            })}

            <div class="list-controls">
                <div class="list-controls__search">
                    <Input value=query placeholder="Search tickets..." />
                </div>
                <Select value=status_filter>
                    <option value="">"All Statuses"</option>
                    {TicketStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </Select>
                <span class="list-controls__summary">{move || format!("{} open", open_count())}</span>
            </div>

            <div class="table-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {sort_header(sort, "id", "Ticket")}
                            <TableHeaderCell>"Subject"</TableHeaderCell>
                            <TableHeaderCell>"Requester"</TableHeaderCell>
                            {sort_header(sort, "priority", "Priority")}
                            {sort_header(sort, "status", "Status")}
                            {sort_header(sort, "created", "Created")}
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
                                    .map(|ticket| {
                                        let for_view = ticket.clone();
                                        let for_status = ticket.clone();
                                        let for_delete = ticket.clone();
                                        let reference = ticket.reference();
                                        let subject_view = highlight_matches(&ticket.subject, &q);
                                        let requester_view = highlight_matches(&ticket.requester, &q);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <span class="mono">{reference}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <a class="link-button" on:click=move |_| viewing.set(Some(for_view.clone()))>
                                                        {subject_view}
                                                    </a>
                                                </TableCell>
                                                <TableCell>{requester_view}</TableCell>
                                                <TableCell>
                                                    <span class=priority_class(ticket.priority)>{ticket.priority.as_str()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <Badge appearance=BadgeAppearance::Tint color=status_color(ticket.status)>
                                                        {ticket.status.as_str()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{ticket.created_at.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <select
                                                            prop:value=ticket.status.as_str()
                                                            on:change=move |ev| {
                                                                if let Ok(status) = event_target_value(&ev).parse::<TicketStatus>() {
                                                                    change_status(for_status.clone(), status);
                                                                }
                                                            }
                                                        >
                                                            {TicketStatus::ALL
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
                    <div class="empty-state">"No tickets match the filters."</div>
                </Show>
                <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
            </div>
        </PageFrame>
    }
}
