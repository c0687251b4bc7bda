use contracts::system::auth::otp::{OtpEntry, OTP_LENGTH};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn focus_cell(id: &str) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        let _ = input.focus();
        input.select();
    }
}

/// Six single-digit cells. Typing a digit moves focus to the next cell;
/// anything else is dropped.
#[component]
pub fn OtpInput(
    entry: RwSignal<OtpEntry>,
    /// Prefix for the cell ids, unique per page
    id_prefix: &'static str,
) -> impl IntoView {
    let cell = move |index: usize| {
        let id = format!("{id_prefix}-otp-{index}");
        view! {
            <input
                id=id
                class="otp-input__cell"
                type="text"
                inputmode="numeric"
                maxlength="1"
                prop:value=move || entry.with(|e| e.cell(index))
                on:focus=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        input.select();
                    }
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    match entry.try_update(|e| e.input(index, &value)) {
                        Some(Ok(Some(next))) => focus_cell(&format!("{id_prefix}-otp-{next}")),
                        Some(Ok(None)) => {}
                        _ => {
                            // restore the previous digit in the DOM
                            entry.update(|_| {});
                        }
                    }
                }
            />
        }
    };

    view! {
        <div class="otp-input">
            {(0..OTP_LENGTH).map(cell).collect_view()}
        </div>
    }
}
