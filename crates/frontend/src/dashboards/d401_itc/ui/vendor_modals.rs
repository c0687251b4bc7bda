use contracts::dashboards::d401_itc::{filter_vendors, VendorContact};
use contracts::domain::a004_vendor_itc::{self, VendorItc};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;

/// Every vendor ledger, searchable by name or GSTIN.
#[component]
pub fn VendorListModal(on_close: Callback<()>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let vendors = StoredValue::new(a004_vendor_itc::fixtures());
    let rows = Memo::new(move |_| vendors.with_value(|v| filter_vendors(v, &query.get(), false)));

    view! {
        <Modal title="All Vendor Ledgers".to_string() on_close=on_close class="modal--wide">
            <div class="modal-search">
                <Input value=query placeholder="Search vendors by name or GSTIN..." />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Vendor Name"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Total ITC"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Eligible"</TableHeaderCell>
                        <TableHeaderCell class="text-right">"Ineligible"</TableHeaderCell>
                        <TableHeaderCell class="text-center">"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let q = query.get();
                        rows.get()
                            .into_iter()
                            .map(|v| {
                                let name_view = highlight_matches(&v.name, &q);
                                let gstin_view = highlight_matches(&v.gstin, &q);
                                view! {
                                <TableRow>
                                    <TableCell>
                                        <p class="strong">{name_view}</p>
                                        <p class="mono muted">{gstin_view}</p>
                                    </TableCell>
                                    <TableCell class="text-right">{v.total.clone()}</TableCell>
                                    <TableCell class="text-right amount--good">{v.eligible.clone()}</TableCell>
                                    <TableCell class="text-right amount--bad">{v.ineligible.clone()}</TableCell>
                                    <TableCell class="text-center"><Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge></TableCell>
                                </TableRow>
                            }})
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <Show when=move || rows.with(Vec::is_empty)>
                <div class="empty-state">"No vendors found"</div>
            </Show>
        </Modal>
    }
}

#[component]
pub fn VendorDetailModal(vendor: VendorItc, on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let contact = VendorContact::for_vendor(&vendor);
    let initial = vendor.name.chars().next().unwrap_or('?');
    let name = vendor.name.clone();

    view! {
        <Modal
            title="Vendor Details".to_string()
            on_close=on_close
            footer=std::sync::Arc::new(move || {
                let name = name.clone();
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Close"</Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            on_close.run(());
                            ctx.show_toast(format!("Invoices of {name} are listed in the Sales Register"), ToastKind::Info);
                        }
                    >
                        "View Invoices"
                    </Button>
                }
                    .into_any()
            })
        >
            <div class="vendor-head">
                <div class="vendor-head__avatar">{initial.to_string()}</div>
                <div>
                    <h4>{vendor.name.clone()}</h4>
                    <p class="mono muted">{vendor.gstin.clone()}</p>
                </div>
            </div>
            <div class="vendor-figures">
                <div class="vendor-figure">
                    <span>"Total ITC"</span>
                    <strong>{vendor.total.clone()}</strong>
                </div>
                <div class="vendor-figure vendor-figure--good">
                    <span>"Eligible"</span>
                    <strong>{vendor.eligible.clone()}</strong>
                </div>
                <div class="vendor-figure vendor-figure--bad">
                    <span>"Ineligible"</span>
                    <strong>{vendor.ineligible.clone()}</strong>
                </div>
                <div class="vendor-figure vendor-figure--warning">
                    <span>"Pending"</span>
                    <strong>{contact.pending}</strong>
                </div>
            </div>
            <div class="vendor-contact">
                <div>{icon("map-pin")}<span>{contact.address}</span></div>
                <div>{icon("phone")}<span>{contact.phone}</span></div>
                <div>{icon("mail")}<span>{contact.email}</span></div>
            </div>
        </Modal>
    }
}
