use contracts::shared::tax::{estimate, GstRate};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

#[component]
pub fn TaxEstimator() -> impl IntoView {
    let taxable = RwSignal::new(String::new());
    let rate = RwSignal::new(GstRate::Eighteen);
    let result = Memo::new(move |_| estimate(&taxable.get(), rate.get()));

    view! {
        <div class="card estimator">
            <div class="card__header">
                {icon("activity")}
                <h3 class="card__title">"Quick Tax Estimator"</h3>
            </div>
            <label class="field">
                <span class="field__label">"Taxable Value (₹)"</span>
                <Input value=taxable input_type=InputType::Number placeholder="e.g. 50000" />
            </label>
            <div class="field">
                <span class="field__label">"GST Rate (%)"</span>
                <div class="segmented">
                    {GstRate::ALL
                        .into_iter()
                        .map(|r| view! {
                            <Button
                                appearance=move || if rate.get() == r { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                class="segmented__item"
                                on_click=move |_| rate.set(r)
                            >
                                {r.label()}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="estimator__result">
                <div class="estimator__row">
                    <span>"GST Amount"</span>
                    <span class="strong">{move || format!("₹ {}", result.get().gst_label())}</span>
                </div>
                <div class="estimator__row estimator__row--total">
                    <span>"Total Value"</span>
                    <span class="strong">{move || format!("₹ {}", result.get().total_label())}</span>
                </div>
            </div>
        </div>
    }
}
