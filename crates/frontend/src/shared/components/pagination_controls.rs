use crate::shared::icons::icon;
use contracts::dashboards::d402_sales::PageWindow;
use leptos::prelude::*;

/// Prev/next pager with the "Showing a - b of n records" caption.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || window.get().label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get();
                    if w.has_prev() {
                        on_page_change.run(w.page - 1);
                    }
                }
                disabled=move || !window.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-page">
                {move || {
                    let w = window.get();
                    format!("{} / {}", w.page + 1, w.page_count().max(1))
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let w = window.get();
                    if w.has_next() {
                        on_page_change.run(w.page + 1);
                    }
                }
                disabled=move || !window.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
