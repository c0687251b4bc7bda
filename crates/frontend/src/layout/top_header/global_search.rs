//! Header search box with a keyboard-driven results dropdown.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::{a003_sales_invoice, a004_vendor_itc};
use contracts::shared::search::{SearchAction, SearchCursor, SearchIndex, SearchItem, SearchKey};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn GlobalSearch() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let max_results = ctx.config.with_value(|c| c.search.max_results);
    let index = StoredValue::new(SearchIndex::build(
        &a003_sales_invoice::fixtures(),
        &a004_vendor_itc::fixtures(),
        max_results,
    ));

    let query = RwSignal::new(String::new());
    let cursor = RwSignal::new(SearchCursor::default());
    let input_ref = NodeRef::<html::Input>::new();

    let results = Memo::new(move |_| query.with(|q| index.with_value(|i| i.query(q))));
    Effect::new(move |_| {
        results.track();
        cursor.update(|c| c.reset());
    });

    let select = move |item: SearchItem| {
        log::debug!("search -> {}", item.path);
        query.set(String::new());
        cursor.update(|c| c.open = false);
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.blur();
        }
        ctx.navigate(&item.path);
    };

    let handle = window_event_listener(ev::keydown, move |e| {
        let Some(key) = SearchKey::from_key(&e.key(), e.ctrl_key() || e.meta_key()) else {
            return;
        };
        let count = results.with_untracked(|r| r.len());
        let mut state = cursor.get_untracked();
        let action = state.handle(key, count);
        cursor.set(state);
        match action {
            SearchAction::None => {}
            SearchAction::Moved => e.prevent_default(),
            SearchAction::Focus => {
                e.prevent_default();
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            SearchAction::Select(i) => {
                if let Some(item) = results.with_untracked(|r| r.get(i).cloned()) {
                    select(item);
                }
            }
            SearchAction::Close => {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.blur();
                }
            }
        }
    });
    on_cleanup(move || handle.remove());

    let dropdown_visible =
        move || cursor.with(|c| c.open) && (!query.with(|q| q.is_empty()) || !results.with(|r| r.is_empty()));

    view! {
        <div class="global-search">
            <div class="global-search__field">
                <span class="global-search__icon">{icon("search")}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class="global-search__input"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:focus=move |_| cursor.update(|c| c.open = true)
                    on:input=move |e| {
                        query.set(event_target_value(&e));
                        cursor.update(|c| c.open = true);
                    }
                />
                <kbd class="global-search__kbd">"⌘K"</kbd>
            </div>

            <Show when=dropdown_visible>
                <div class="dropdown-backdrop" on:click=move |_| cursor.update(|c| c.open = false)></div>
                <div class="global-search__dropdown">
                    <Show
                        when=move || !results.with(|r| r.is_empty())
                        fallback=move || view! {
                            <div class="global-search__empty">
                                {move || format!("No results found for \"{}\"", query.get())}
                            </div>
                        }
                    >
                        <div class="global-search__caption">
                            <span>"Results"</span>
                            <span>{move || format!("{} found", results.with(|r| r.len()))}</span>
                        </div>
                        <ul class="global-search__results">
                            {move || {
                                let q = query.get();
                                results
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        let title = highlight_matches(&item.title, &q);
                                        let description = item
                                            .description
                                            .clone()
                                            .map(|d| view! { <span class="global-search__desc">{d}</span> });
                                        let icon_name = item.icon.clone();
                                        let category = item.category.as_str();
                                        view! {
                                            <li
                                                class="global-search__item"
                                                class:global-search__item--selected=move || cursor.with(|c| c.selected == i)
                                                on:mouseenter=move |_| cursor.update(|c| c.selected = i)
                                                on:click=move |_| select(item.clone())
                                            >
                                                <span class="global-search__item-icon">{icon(&icon_name)}</span>
                                                <div class="global-search__item-text">
                                                    <span class="global-search__title">{title}</span>
                                                    {description}
                                                </div>
                                                <span class="global-search__category">{category}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
