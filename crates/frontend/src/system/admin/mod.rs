//! Administrator pages. All of them edit the single `AdminData` held in the
//! app context, so a change on one page shows up on the others and in the log.

pub mod customers;
pub mod logs;
pub mod subscriptions;
pub mod tickets;

use contracts::shared::record_table::RecordError;
use contracts::system::admin::AdminData;
use leptos::prelude::*;
use thaw::TableHeaderCell;

use crate::layout::global_context::{AppGlobalContext, ToastKind};
use crate::shared::list_utils::sort_indicator;
use crate::system::auth::context::SessionContext;

/// Rows per page on the admin tables.
pub(crate) const ADMIN_PAGE_SIZE: usize = 5;

/// Who gets credited in the activity log.
pub(crate) fn admin_actor(session: SessionContext) -> String {
    session
        .user_untracked()
        .map(|u| u.phone_number)
        .unwrap_or_else(|| "system".to_string())
}

pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Runs an edit against the admin tables and reports the result as a toast.
pub(crate) fn apply_admin_edit(
    ctx: AppGlobalContext,
    success: impl Into<String>,
    edit: impl FnOnce(&mut AdminData) -> Result<(), RecordError>,
) {
    match ctx.admin.try_update(edit) {
        Some(Ok(())) => ctx.show_toast(success, ToastKind::Success),
        Some(Err(e)) => {
            log::warn!("Admin edit rejected: {e}");
            ctx.show_toast(e.to_string(), ToastKind::Error);
        }
        None => {}
    }
}

/// Clickable column headers: the first click sorts ascending, the next flips.
#[derive(Clone, Copy)]
pub(crate) struct SortState {
    pub field: RwSignal<&'static str>,
    pub ascending: RwSignal<bool>,
}

impl SortState {
    pub fn new(field: &'static str) -> Self {
        Self {
            field: RwSignal::new(field),
            ascending: RwSignal::new(true),
        }
    }

    pub fn toggle(&self, field: &'static str) {
        if self.field.get_untracked() == field {
            self.ascending.update(|a| *a = !*a);
        } else {
            self.field.set(field);
            self.ascending.set(true);
        }
    }

    pub fn indicator(&self, field: &'static str) -> &'static str {
        sort_indicator(self.field.get(), field, self.ascending.get())
    }
}

/// Sortable header cell.
pub(crate) fn sort_header(sort: SortState, field: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div class="sortable" on:click=move |_| sort.toggle(field)>
                {label}
                <span class="sort-indicator">{move || sort.indicator(field)}</span>
            </div>
        </TableHeaderCell>
    }
}
