use contracts::dashboards::d402_sales::{full_register, PageWindow, REPORT_PAGE_SIZE};
use contracts::domain::a003_sales_invoice::{self, SaleKind, SalesInvoice};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;

pub(super) fn kind_class(kind: SaleKind) -> &'static str {
    match kind {
        SaleKind::B2B => "tag tag--indigo",
        SaleKind::B2C => "tag tag--blue",
        SaleKind::Export => "tag tag--amber",
    }
}

/// Empty `kind` keeps every type.
fn filter_register(rows: &[SalesInvoice], query: &str, kind: &str) -> Vec<SalesInvoice> {
    rows.iter()
        .filter(|inv| kind.is_empty() || inv.kind.as_str() == kind)
        .filter(|inv| inv.matches(query))
        .cloned()
        .collect()
}

#[component]
pub fn FullReportModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let register = StoredValue::new(full_register(&a003_sales_invoice::fixtures()));
    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let page = RwSignal::new(0usize);

    let rows = Memo::new(move |_| register.with_value(|r| filter_register(r, &query.get(), &kind.get())));
    let window = Memo::new(move |_| PageWindow::new(page.get(), REPORT_PAGE_SIZE, rows.with(Vec::len)));

    Effect::new(move |_| {
        query.track();
        kind.track();
        page.set(0);
    });

    view! {
        <Modal title="Full Sales Register Report".to_string() on_close=on_close class="modal--wide">
            <div class="modal-toolbar">
                <div class="modal-search">
                    <Input value=query placeholder="Search invoices..." />
                </div>
                <Select value=kind>
                    <option value="">"All Types"</option>
                    <option value="B2B">"B2B"</option>
                    <option value="B2C">"B2C"</option>
                </Select>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.show_toast("Preparing sales register PDF...", ToastKind::Info)
                >
                    {icon("download")}
                    "Export PDF"
                </Button>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Invoice No."</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Taxable"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"GST"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Total"</TableHeaderCell>
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
                                .map(|inv| {
                                    let invoice_no_view = highlight_matches(&inv.invoice_no, &q);
                                    let customer_view = highlight_matches(&inv.customer, &q);
                                    view! {
                                    <TableRow>
                                        <TableCell class="strong">{invoice_no_view}</TableCell>
                                        <TableCell class="muted">{inv.date.clone()}</TableCell>
                                        <TableCell>{customer_view}</TableCell>
                                        <TableCell><span class=kind_class(inv.kind)>{inv.kind.as_str()}</span></TableCell>
                                        <TableCell class="text-right">{inv.taxable_value.clone()}</TableCell>
                                        <TableCell class="text-right">{inv.gst_amount.clone()}</TableCell>
                                        <TableCell class="text-right strong">{inv.total_value.clone()}</TableCell>
                                    </TableRow>
                                }})
                                .collect_view()
                        })
                    }}
                </TableBody>
            </Table>
            <Show when=move || rows.with(Vec::is_empty)>
                <div class="empty-state">"No invoices match the filters."</div>
            </Show>
            <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_register_by_type_and_text() {
        let register = full_register(&a003_sales_invoice::fixtures());
        let all = filter_register(&register, "", "");
        assert_eq!(all.len(), register.len());

        let b2c = filter_register(&register, "", "B2C");
        assert!(!b2c.is_empty());
        assert!(b2c.iter().all(|inv| inv.kind == SaleKind::B2C));

        let first = &register[0];
        let by_number = filter_register(&register, &first.invoice_no.to_lowercase(), "");
        assert_eq!(by_number.len(), 3);
    }
}
