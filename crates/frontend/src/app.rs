use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use crate::system::auth::storage;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

fn startup_config() -> AppConfig {
    match load_config(storage::config_override().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration failed to load: {e:#}");
            AppConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = startup_config();

    // Session store first: the route guard reads it on the first render.
    provide_context(SessionContext::open(&config));

    let ctx = AppGlobalContext::new(config);
    ctx.init_hash_routing();
    provide_context(ctx);

    view! {
        <AppRoutes />
    }
}
