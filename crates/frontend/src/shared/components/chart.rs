//! SVG charts drawn from the geometry in `contracts::shared::chart`.

use contracts::shared::chart::{slice_paths, ChartData, ChartKind, Plot, Slice};
use leptos::prelude::*;

fn n(v: f64) -> String {
    format!("{v:.1}")
}

fn legend(items: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(name, color)| {
                    view! {
                        <span class="chart-legend__item">
                            <span class="chart-legend__swatch" style=format!("background:{color}")></span>
                            {name}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn series_marks(data: &ChartData, plot: &Plot, index: usize, filled: bool) -> AnyView {
    let color = data.series[index].color.clone();
    let area = filled.then(|| {
        view! { <path d=data.area_path(plot, index) fill=color.clone() fill-opacity="0.15" stroke="none"/> }
    });
    let dots = data
        .points(plot, index)
        .into_iter()
        .map(|(x, y)| view! { <circle cx=n(x) cy=n(y) r="3" fill=color.clone()/> })
        .collect_view();
    view! {
        <g class="chart__series">
            {area}
            <polyline points=data.polyline(plot, index) fill="none" stroke=color.clone() stroke-width="2.5"/>
            {dots}
        </g>
    }
    .into_any()
}

fn cartesian_svg(data: &ChartData, kind: ChartKind) -> AnyView {
    let plot = Plot::default();

    let grid = data
        .ticks(&plot)
        .into_iter()
        .map(|tick| {
            view! {
                <g class="chart__tick">
                    <line
                        class="chart__grid"
                        x1=n(plot.left)
                        x2=n(plot.width - plot.right)
                        y1=n(tick.y)
                        y2=n(tick.y)
                    />
                    <text x=n(plot.left - 8.0) y=n(tick.y + 4.0) text-anchor="end">{tick.label}</text>
                </g>
            }
        })
        .collect_view();

    let labels = data
        .label_positions(&plot)
        .into_iter()
        .map(|(x, label)| {
            view! {
                <text class="chart__label" x=n(x) y=n(plot.height - 10.0) text-anchor="middle">{label}</text>
            }
        })
        .collect_view();

    let marks = match kind {
        ChartKind::Line | ChartKind::Area => (0..data.series.len())
            .map(|i| series_marks(data, &plot, i, kind == ChartKind::Area))
            .collect_view()
            .into_any(),
        // radial kinds fall back to bars here
        _ => data
            .bars(&plot)
            .into_iter()
            .map(|bar| {
                let color = data.series[bar.series].color.clone();
                view! {
                    <rect x=n(bar.x) y=n(bar.y) width=n(bar.width) height=n(bar.height) rx="3" fill=color/>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <svg class="chart__svg" viewBox=plot.view_box() preserveAspectRatio="xMidYMid meet" role="img">
            {grid}
            {marks}
            {labels}
        </svg>
    }
    .into_any()
}

/// Bar, line or area chart over shared x labels.
#[component]
pub fn CartesianChart(data: ChartData, #[prop(into)] kind: Signal<ChartKind>) -> impl IntoView {
    let legend_items = data
        .series
        .iter()
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect::<Vec<_>>();
    let data = StoredValue::new(data);

    view! {
        <div class="chart">
            {move || {
                let kind = kind.get();
                data.with_value(|d| cartesian_svg(d, kind))
            }}
            {legend(legend_items)}
        </div>
    }
}

fn radial_svg(slices: &[Slice], donut: bool) -> AnyView {
    let inner = if donut { 50.0 } else { 0.0 };
    let paths = slice_paths(slices, 100.0, 100.0, 90.0, inner);
    view! {
        <svg class="chart__svg chart__svg--radial" viewBox="0 0 200 200" role="img">
            {paths
                .into_iter()
                .zip(slices.iter())
                .map(|(d, s)| view! { <path d=d fill=s.color.clone() stroke="#fff" stroke-width="2"/> })
                .collect_view()}
        </svg>
    }
    .into_any()
}

fn share_bars(slices: &[Slice]) -> AnyView {
    view! {
        <div class="share-bars">
            {slices
                .iter()
                .map(|s| {
                    view! {
                        <div class="share-bars__row">
                            <span class="share-bars__label">{s.label.clone()}</span>
                            <div class="share-bars__track">
                                <div
                                    class="share-bars__fill"
                                    style=format!("width:{}%;background:{}", s.value, s.color)
                                ></div>
                            </div>
                            <span class="share-bars__value">{format!("{}%", s.value)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Pie or donut. `ChartKind::Bar` draws horizontal share bars instead.
#[component]
pub fn ShareChart(slices: Vec<Slice>, #[prop(into)] kind: Signal<ChartKind>) -> impl IntoView {
    let legend_items = slices
        .iter()
        .map(|s| (format!("{} ({}%)", s.label, s.value), s.color.clone()))
        .collect::<Vec<_>>();
    let slices = StoredValue::new(slices);

    view! {
        <div class="chart chart--share">
            {move || {
                let kind = kind.get();
                slices.with_value(|slices| match kind {
                    ChartKind::Pie => radial_svg(slices, false),
                    ChartKind::Donut => radial_svg(slices, true),
                    _ => share_bars(slices),
                })
            }}
            {legend(legend_items)}
        </div>
    }
}
