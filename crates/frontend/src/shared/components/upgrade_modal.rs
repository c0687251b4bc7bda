use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::system::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

const BENEFITS: [&str; 3] = [
    "Unlock advanced GST analytics",
    "Unlimited export options",
    "Priority support access",
];

/// Upsell dialog opened by locked features anywhere in the app.
#[component]
pub fn UpgradeModal() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let on_close = Callback::new(move |_| ctx.close_upgrade());

    move || {
        ctx.upgrade_feature.get().map(|feature| {
            view! {
                <Modal title="Upgrade to Access".to_string() on_close=on_close class="modal--narrow">
                    <div class="upgrade">
                        <div class="upgrade__icon">{icon("lock")}</div>
                        <p class="upgrade__text">
                            {format!(
                                "The \"{}\" feature is available on Business & CA plans.",
                                feature.feature_name(),
                            )}
                        </p>
                        <ul class="upgrade__benefits">
                            {BENEFITS
                                .iter()
                                .map(|b| view! { <li>{icon("check")}<span>{*b}</span></li> })
                                .collect_view()}
                        </ul>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    ctx.close_upgrade();
                                    ctx.navigate(AppRoute::Subscription.path());
                                }
                            >
                                "View Upgrade Plans"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.close_upgrade()>
                                "Maybe Later"
                            </Button>
                        </Flex>
                    </div>
                </Modal>
            }
        })
    }
}
