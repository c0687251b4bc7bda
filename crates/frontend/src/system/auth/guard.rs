use contracts::system::access::Capability;
use leptos::prelude::*;
use thaw::*;

use super::context::{use_session, SessionContext};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

/// Renders `children` and, when the session lacks `capability`, covers them
/// with a lock panel whose button opens the upsell dialog.
#[component]
pub fn FeatureGate(
    capability: Capability,
    /// Text on the lock panel
    #[prop(optional)]
    message: Option<&'static str>,
    /// Compact panel for small cards
    #[prop(optional)]
    compact: bool,
    children: Children,
) -> impl IntoView {
    let session = use_session();
    let ctx = expect_context::<AppGlobalContext>();
    let locked = Memo::new(move |_| !session.has(capability));
    let message = message.unwrap_or("Upgrade to Business or CA plan to unlock this feature.");

    view! {
        <div class="feature-gate" class:feature-gate--locked=move || locked.get()>
            <div class="feature-gate__content" aria-hidden=move || locked.get().to_string()>
                {children()}
            </div>
            <Show when=move || locked.get()>
                <div class="feature-gate__overlay" class:feature-gate__overlay--compact=compact>
                    <div class="feature-gate__lock">{icon("lock")}</div>
                    <h3 class="feature-gate__title">{capability.feature_name()}</h3>
                    <p class="feature-gate__text">{message}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_upgrade(capability)
                    >
                        "Unlock Feature"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

/// Runs `action` when the capability is present, otherwise opens the upsell.
/// Safe to call from event handlers: both handles are passed in.
pub fn require_capability(
    session: SessionContext,
    ctx: AppGlobalContext,
    capability: Capability,
    action: impl FnOnce(),
) {
    if session.has_untracked(capability) {
        action();
    } else {
        ctx.open_upgrade(capability);
    }
}
