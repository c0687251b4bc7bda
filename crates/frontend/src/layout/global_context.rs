use contracts::domain::a009_notification::{self, NotificationFeed};
use contracts::shared::config::AppConfig;
use contracts::system::access::Capability;
use contracts::system::admin::AdminData;
use contracts::system::auth::PendingLogin;
use contracts::system::routes::normalize_hash;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::simulated::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// App-wide state shared through context. Every field is a signal handle,
/// so the struct is `Copy` and cheap to move into closures.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Normalized hash path, e.g. `/dashboard/itc`.
    pub path: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
    pub toast: RwSignal<Option<Toast>>,
    pub notifications: RwSignal<NotificationFeed>,
    /// Shared by every admin page for the lifetime of the app.
    pub admin: RwSignal<AdminData>,
    /// Phone number and sign-up data waiting for OTP verification.
    pub pending_login: RwSignal<Option<PendingLogin>>,
    /// Feature the upsell dialog is currently open for.
    pub upgrade_feature: RwSignal<Option<Capability>>,
    pub config: StoredValue<AppConfig>,
    toast_seq: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            path: RwSignal::new(current_hash_path()),
            sidebar_open: RwSignal::new(false),
            toast: RwSignal::new(None),
            notifications: RwSignal::new(NotificationFeed::new(a009_notification::fixtures())),
            admin: RwSignal::new(AdminData::from_fixtures()),
            pending_login: RwSignal::new(None),
            upgrade_feature: RwSignal::new(None),
            config: StoredValue::new(config),
            toast_seq: StoredValue::new(0),
        }
    }

    /// Keeps `path` in sync with `location.hash`. Installed once for the app.
    pub fn init_hash_routing(&self) {
        let path = self.path;
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let next = current_hash_path();
            if path.get_untracked() != next {
                log::debug!("hashchange -> {next}");
                path.set(next);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    pub fn navigate(&self, target: &str) {
        let target = normalize_hash(target);
        if let Some(w) = window() {
            let _ = w.location().set_hash(&target);
        }
        self.sidebar_open.set(false);
        if self.path.get_untracked() != target {
            self.path.set(target);
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Shows a transient toast; a newer toast replaces the current one.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(id);
        self.toast.set(Some(Toast {
            id,
            message: message.into(),
            kind,
        }));

        let toast = self.toast;
        let delay = self.config.with_value(|c| c.timing.toast_ms);
        spawn_local(async move {
            sleep(delay).await;
            if toast.with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
                toast.set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }

    pub fn open_upgrade(&self, feature: Capability) {
        log::debug!("upsell for {:?}", feature);
        self.upgrade_feature.set(Some(feature));
    }

    pub fn close_upgrade(&self) {
        self.upgrade_feature.set(None);
    }
}

fn current_hash_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    normalize_hash(&hash)
}
