use contracts::dashboards::d402_sales::invoice_draft::rupees;
use contracts::dashboards::d402_sales::{DraftLine, InvoiceDraft};
use contracts::shared::tax::GstRate;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[derive(Clone, Copy)]
enum LineField {
    Description,
    Quantity,
    Rate,
}

fn field_mut(line: &mut DraftLine, field: LineField) -> &mut String {
    match field {
        LineField::Description => &mut line.description,
        LineField::Quantity => &mut line.quantity,
        LineField::Rate => &mut line.rate,
    }
}

#[component]
fn LineRow(draft: RwSignal<InvoiceDraft>, index: usize) -> impl IntoView {
    let value = move |field: LineField| {
        draft.with(|d| {
            d.lines
                .get(index)
                .map(|line| match field {
                    LineField::Description => line.description.clone(),
                    LineField::Quantity => line.quantity.clone(),
                    LineField::Rate => line.rate.clone(),
                })
                .unwrap_or_default()
        })
    };
    let set = move |field: LineField, raw: String| {
        draft.update(|d| {
            if let Some(line) = d.line_mut(index) {
                *field_mut(line, field) = raw;
            }
        });
    };
    let line_total = move || {
        draft.with(|d| match d.lines.get(index).and_then(DraftLine::total) {
            Some(total) => rupees(total),
            None => "-".to_string(),
        })
    };

    view! {
        <div class="line-items__row">
            <input
                type="text"
                placeholder="e.g. Web Design Services"
                prop:value=move || value(LineField::Description)
                on:input=move |ev| set(LineField::Description, event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                placeholder="1"
                prop:value=move || value(LineField::Quantity)
                on:input=move |ev| set(LineField::Quantity, event_target_value(&ev))
            />
            <div class="line-items__rate">
                <span>"₹"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || value(LineField::Rate)
                    on:input=move |ev| set(LineField::Rate, event_target_value(&ev))
                />
            </div>
            <span class="line-items__total">{line_total}</span>
            <button
                class="icon-button icon-button--danger"
                title="Remove line"
                on:click=move |_| draft.update(|d| d.remove_line(index))
            >
                {icon("trash")}
            </button>
        </div>
    }
}

/// "Create New Invoice" dialog. Totals follow every keystroke.
#[component]
pub fn InvoiceModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let draft = RwSignal::new(InvoiceDraft::default());
    let error = RwSignal::new(None::<String>);
    let line_count = Memo::new(move |_| draft.with(|d| d.lines.len()));
    let totals = Memo::new(move |_| draft.with(InvoiceDraft::totals));

    let generate = move |_| {
        let result = draft.with(|d| d.validate().map(|totals| (d.customer.trim().to_string(), totals)));
        match result {
            Ok((customer, totals)) => {
                log::info!("invoice drafted for {customer}: {}", rupees(totals.total));
                ctx.show_toast(
                    format!("Invoice generated for {customer} ({})", rupees(totals.total)),
                    ToastKind::Success,
                );
                on_close.run(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    Effect::new(move |_| {
        draft.track();
        error.set(None);
    });

    view! {
        <Modal
            title="Create New Invoice".to_string()
            on_close=on_close
            class="modal--wide"
            footer=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Cancel"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=generate>"Generate Invoice"</Button>
                }
                    .into_any()
            })
        >
            <div class="form-grid">
                <label class="field">
                    <span class="field__label">"Customer Name"</span>
                    <input
                        type="text"
                        placeholder="Search or select customer..."
                        prop:value=move || draft.with(|d| d.customer.clone())
                        on:input=move |ev| draft.update(|d| d.customer = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Invoice Date"</span>
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.date.clone())
                        on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="line-items">
                <div class="line-items__heading">
                    <h4>"Items & Services"</h4>
                    <span class="muted">"Add products to invoice"</span>
                </div>
                <div class="line-items__row line-items__row--head">
                    <span>"Item Description"</span>
                    <span>"Qty"</span>
                    <span>"Rate"</span>
                    <span>"Total"</span>
                    <span></span>
                </div>
                {move || (0..line_count.get()).map(|index| view! { <LineRow draft=draft index=index /> }).collect_view()}
                <button class="link-button" on:click=move |_| draft.update(InvoiceDraft::add_line)>
                    {icon("plus")}
                    "Add Line Item"
                </button>
            </div>

            <div class="invoice-summary">
                <div class="invoice-summary__row">
                    <span>"Subtotal"</span>
                    <span>{move || rupees(totals.get().subtotal)}</span>
                </div>
                <div class="invoice-summary__row">
                    <span>
                        "GST "
                        <select
                            prop:value=move || draft.with(|d| d.rate.percent().to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                if let Some(rate) = GstRate::ALL.into_iter().find(|r| r.percent().to_string() == raw) {
                                    draft.update(|d| d.rate = rate);
                                }
                            }
                        >
                            {GstRate::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.percent().to_string()>{r.label()}</option> })
                                .collect_view()}
                        </select>
                    </span>
                    <span>{move || rupees(totals.get().gst)}</span>
                </div>
                <div class="invoice-summary__row invoice-summary__row--total">
                    <span>"Total Amount"</span>
                    <span>{move || rupees(totals.get().total)}</span>
                </div>
            </div>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
        </Modal>
    }
}
