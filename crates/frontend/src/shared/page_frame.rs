//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element and picks the BEM modifier class from the category.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"d402_sales--dashboard"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Page heading
    #[prop(optional)]
    title: Option<&'static str>,
    /// Line under the heading
    #[prop(optional)]
    subtitle: Option<&'static str>,
    /// Buttons on the right of the heading
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_PUBLIC => "page page--public",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {title.map(|title| view! {
                <div class="page__header">
                    <div class="page__heading">
                        <h1 class="page__title">{title}</h1>
                        {subtitle.map(|s| view! { <p class="page__subtitle">{s}</p> })}
                    </div>
                    {actions.as_ref().map(|actions| view! {
                        <div class="page__actions">{actions()}</div>
                    })}
                </div>
            })}
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
