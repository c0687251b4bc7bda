use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::indicators::{Indicator, Trend};
use leptos::prelude::*;

/// KPI card. Cards carrying a link navigate on click.
#[component]
pub fn StatCard(indicator: Indicator) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let status_class = format!("stat-card stat-card--{}", indicator.status.css_modifier());

    let change_view = indicator.change.clone().map(|change| {
        let cls = match indicator.trend {
            Some(Trend::Up) => "stat-card__change stat-card__change--up",
            Some(Trend::Down) => "stat-card__change stat-card__change--down",
            None => "stat-card__change stat-card__change--flat",
        };
        view! {
            <span class=cls>
                {indicator.trend.map(|t| icon(t.icon()))}
                {change}
            </span>
        }
    });

    let subtitle_view = indicator
        .subtext
        .clone()
        .map(|s| view! { <div class="stat-card__subtitle">{s}</div> });

    let link = indicator.link.clone();
    let clickable = link.is_some();
    let on_click = move |_| {
        if let Some(path) = &link {
            ctx.navigate(path);
        }
    };

    view! {
        <div class=status_class class:stat-card--clickable=clickable on:click=on_click>
            <div class="stat-card__icon">
                {icon(&indicator.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{indicator.label.clone()}</div>
                <div class="stat-card__value">
                    {indicator.value.clone()}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
