//! First-visit walkthrough of the overview page. Each step highlights the
//! element whose DOM id the step names.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::simulated::sleep;
use crate::system::auth::context::use_session;
use contracts::system::onboarding::{should_start, TourEvent, TourState, TourTransition, TOUR_STEPS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const START_DELAY_MS: u32 = 1000;
const HIGHLIGHT_CLASS: &str = "tour-highlight";

fn anchor_element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn set_highlight(id: Option<&str>, on: bool) {
    let Some(el) = id.and_then(anchor_element) else {
        return;
    };
    let classes = el.class_list();
    let _ = if on {
        classes.add_1(HIGHLIGHT_CLASS)
    } else {
        classes.remove_1(HIGHLIGHT_CLASS)
    };
}

/// Scrolls the anchor into view and returns the popover position.
fn place_near(id: &str) -> Option<String> {
    let el = anchor_element(id)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);

    let rect = el.get_bounding_client_rect();
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    let left = rect.left().clamp(16.0, (width - 360.0).max(16.0));
    Some(format!("top:{:.0}px;left:{:.0}px", rect.bottom() + 12.0, left))
}

#[component]
pub fn Tour() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let session = use_session();
    let state = RwSignal::new(None::<TourState>);

    // (re)arm on every visit to the overview
    Effect::new(move |_| {
        let path = ctx.path.get();
        let Some(role) = session.user().map(|u| u.role) else {
            return;
        };
        if state.get_untracked().is_some() || !should_start(role, &path, session.tour_completed()) {
            return;
        }
        spawn_local(async move {
            sleep(START_DELAY_MS).await;
            let still_here = ctx.path.get_untracked() == path && state.get_untracked().is_none();
            if still_here && anchor_element("overview-stats-grid").is_some() {
                log::debug!("starting onboarding tour");
                state.set(Some(TourState::default()));
            }
        });
    });

    // leaving the page ends the tour without completing it
    Effect::new(move |prev: Option<String>| {
        let path = ctx.path.get();
        if prev.is_some_and(|p| p != path) {
            state.set(None);
        }
        path
    });

    // move the highlight along with the current step
    Effect::new(move |prev: Option<Option<&'static str>>| {
        let anchor = state.get().and_then(|s| s.current().anchor);
        if let Some(old) = prev {
            set_highlight(old, false);
        }
        set_highlight(anchor, true);
        anchor
    });

    let apply = move |event: TourEvent| {
        let Some(mut tour) = state.get_untracked() else {
            return;
        };
        match tour.apply(event) {
            TourTransition::Show(_) => state.set(Some(tour)),
            TourTransition::Completed => {
                session.mark_tour_completed();
                state.set(None);
            }
            TourTransition::Dismissed => state.set(None),
        }
    };

    move || {
        state.get().map(|tour| {
            let step = tour.current();
            let style = step.anchor.and_then(place_near);
            let centered = style.is_none();
            let progress = format!("{} of {}", tour.step() + 1, TOUR_STEPS.len());

            let buttons = if tour.is_first() {
                view! {
                    <button class="tour__btn tour__btn--secondary" on:click=move |_| apply(TourEvent::Skip)>
                        "Skip Tour"
                    </button>
                    <button class="tour__btn" on:click=move |_| apply(TourEvent::Next)>"Start Tour"</button>
                }
                .into_any()
            } else if tour.is_last() {
                view! {
                    <button class="tour__btn tour__btn--secondary" on:click=move |_| apply(TourEvent::Back)>"Back"</button>
                    <button class="tour__btn" on:click=move |_| apply(TourEvent::Finish)>"Finish"</button>
                }
                .into_any()
            } else {
                view! {
                    <button class="tour__btn tour__btn--secondary" on:click=move |_| apply(TourEvent::Back)>"Back"</button>
                    <button class="tour__btn" on:click=move |_| apply(TourEvent::Next)>"Next"</button>
                }
                .into_any()
            };

            view! {
                <div class="tour__overlay"></div>
                <div
                    class="tour__popover"
                    class:tour__popover--centered=centered
                    style=style.unwrap_or_default()
                    role="dialog"
                >
                    <div class="tour__header">
                        <h3 class="tour__title">{step.title}</h3>
                        <button class="tour__close" title="Close" on:click=move |_| apply(TourEvent::Dismiss)>
                            {icon("x")}
                        </button>
                    </div>
                    <p class="tour__text">{step.text}</p>
                    <div class="tour__footer">
                        <span class="tour__progress">{progress}</span>
                        <div class="tour__buttons">{buttons}</div>
                    </div>
                </div>
            }
        })
    }
}
