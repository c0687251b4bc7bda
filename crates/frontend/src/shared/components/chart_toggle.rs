use crate::shared::icons::icon;
use contracts::shared::chart::ChartKind;
use leptos::prelude::*;

#[component]
pub fn ChartTypeToggle(options: &'static [ChartKind], value: RwSignal<ChartKind>) -> impl IntoView {
    view! {
        <div class="chart-toggle" role="group">
            {options
                .iter()
                .copied()
                .map(|kind| {
                    view! {
                        <button
                            class="chart-toggle__btn"
                            class:chart-toggle__btn--active=move || value.get() == kind
                            title=kind.title()
                            on:click=move |_| value.set(kind)
                        >
                            {icon(kind.icon())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
