use chrono::Local;
use contracts::dashboards::d402_sales::PageWindow;
use contracts::domain::a001_customer::{Customer, CustomerStatus};
use contracts::domain::a007_activity_log::LogCategory;
use leptos::prelude::*;
use thaw::*;

use super::{admin_actor, apply_admin_edit, confirm, sort_header, SortState, ADMIN_PAGE_SIZE};
use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_list};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

fn status_color(status: CustomerStatus) -> BadgeColor {
    match status {
        CustomerStatus::Active => BadgeColor::Success,
        CustomerStatus::Trial => BadgeColor::Informative,
        CustomerStatus::Inactive => BadgeColor::Subtle,
    }
}

#[component]
fn NewCustomerModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let name = RwSignal::new(String::new());
    let status = RwSignal::new(CustomerStatus::Trial.as_str().to_string());

    let save = move |_| {
        let name = name.get_untracked().trim().to_string();
        if name.is_empty() {
            ctx.show_toast("Customer name is required", ToastKind::Error);
            return;
        }
        let subscription = status.get_untracked().parse().unwrap_or(CustomerStatus::Trial);
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("{name} added"), |admin| {
            let id = admin.customers.next_id();
            admin.customers.insert(Customer {
                id,
                name: name.clone(),
                avatar: Customer::avatar_url(id),
                subscription,
                total_spend: "$0.00".to_string(),
                last_active: "just now".to_string(),
                joined: Local::now().format("%b %d, %Y").to_string(),
            })?;
            admin.record(&actor, LogCategory::Customer, format!("Customer {name} created"));
            Ok(())
        });
        on_close.run(());
    };

    view! {
        <Modal
            title="New Customer".to_string()
            on_close=on_close
            footer=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Create"</Button>
                }
                    .into_any()
            })
        >
            <div class="form-group">
                <label>"Name"</label>
                <Input value=name placeholder="Customer name" />
            </div>
            <div class="form-group">
                <label>"Subscription"</label>
                <Select value=status>
                    {CustomerStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
        </Modal>
    }
}

#[component]
pub fn AdminCustomersPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let sort = SortState::new("name");
    let page = RwSignal::new(0usize);
    let show_new = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let status = status_filter.get().parse::<CustomerStatus>().ok();
        let mut rows = ctx.admin.with(|a| a.customers.filter_by_status(&query.get(), status));
        sort_list(&mut rows, sort.field.get(), sort.ascending.get());
        rows
    });
    let window = Memo::new(move |_| PageWindow::new(page.get(), ADMIN_PAGE_SIZE, rows.with(Vec::len)));

    // filters start over on the first page
    Effect::new(move |_| {
        query.track();
        status_filter.track();
        page.set(0);
    });

    let change_status = move |customer: Customer, status: CustomerStatus| {
        if customer.subscription == status {
            return;
        }
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("{} is now {}", customer.name, status.as_str()), |admin| {
            admin.customers.set_status(customer.id, status)?;
            admin.record(
                &actor,
                LogCategory::Customer,
                format!("{} moved to {}", customer.name, status.as_str()),
            );
            Ok(())
        });
    };

    let delete = move |customer: Customer| {
        if !confirm(&format!("Delete customer {}?", customer.name)) {
            return;
        }
        let actor = admin_actor(session);
        apply_admin_edit(ctx, format!("{} deleted", customer.name), |admin| {
            admin.customers.remove(customer.id)?;
            admin.record(&actor, LogCategory::Customer, format!("Customer {} deleted", customer.name));
            Ok(())
        });
    };

    let export = move |_| {
        let count = rows.with_untracked(Vec::len);
        ctx.show_toast(format!("Exported {count} customers"), ToastKind::Info);
    };

    view! {
        <PageFrame
            page_id="admin_customers--list"
            category=PAGE_CAT_LIST
            title="Customer Management"
            actions=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=export>
                        {icon("download")}
                        "Export"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_new.set(true)>
                        {icon("plus")}
                        "New Customer"
                    </Button>
                }
                    .into_any()
            })
        >
            <Show when=move || show_new.get()>
                <NewCustomerModal on_close=Callback::new(move |_| show_new.set(false)) />
            </Show>

            <div class="list-controls">
                <div class="list-controls__search">
                    <Input value=query placeholder="Search customers..." />
                </div>
                <label class="list-controls__filter">
                    "Status:"
                    <Select value=status_filter>
                        <option value="">"All"</option>
                        {CustomerStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </Select>
                </label>
            </div>

            <div class="table-card">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {sort_header(sort, "name", "Customer")}
                            {sort_header(sort, "status", "Subscription")}
                            {sort_header(sort, "spend", "Total Spend")}
                            <TableHeaderCell>"Last Active"</TableHeaderCell>
                            <TableHeaderCell>"Joined"</TableHeaderCell>
                            <TableHeaderCell>"Contact"</TableHeaderCell>
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
                                    .map(|customer| {
                                        let for_status = customer.clone();
                                        let for_delete = customer.clone();
                                        let name_view = highlight_matches(&customer.name, &q);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="customer-cell">
                                                            <img class="avatar" src=customer.avatar.clone() alt="" />
                                                            <span class="strong">{name_view}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Badge appearance=BadgeAppearance::Tint color=status_color(customer.subscription)>
                                                        {customer.subscription.as_str()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="strong">{customer.total_spend.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{customer.last_active.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="muted">{customer.joined.clone()}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <a class="icon-link" title="Send email" href="mailto:">{icon("mail")}</a>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <select
                                                            prop:value=customer.subscription.as_str()
                                                            on:change=move |ev| {
                                                                if let Ok(status) = event_target_value(&ev).parse::<CustomerStatus>() {
                                                                    change_status(for_status.clone(), status);
                                                                }
                                                            }
                                                        >
                                                            {CustomerStatus::ALL
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
                    <div class="empty-state">"No customers match the filters."</div>
                </Show>
                <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
            </div>
        </PageFrame>
    }
}
