//! List-screen operations shared by every catalog collection
//!
//! Each helper spawns the request, then reconciles the store and reports
//! through the alert service. Nothing is changed locally before the server
//! confirms.

use crate::shared::alert::{AlertService, AlertVariant};
use crate::shared::collection::CollectionStore;
use crate::shared::remote::RemoteCollection;
use contracts::domain::common::CatalogRecord;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Blocking yes/no browser dialog; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(win) => win.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}

/// Fetch the whole collection into the store
pub fn load_collection<R, C>(store: RwSignal<CollectionStore<R>>, client: C, alerts: AlertService)
where
    R: CatalogRecord,
    C: RemoteCollection<R> + 'static,
{
    store.update(|s| s.begin_load());
    spawn_local(async move {
        let result = client.list().await;
        if let Err(e) = &result {
            alerts.error(e);
        }
        // screen may have been unmounted while loading
        let _ = store.try_update(|s| s.finish_load(result));
    });
}

/// Ask for confirmation, `DELETE`, then drop the record from the store
pub fn delete_record<R, C>(
    store: RwSignal<CollectionStore<R>>,
    client: C,
    alerts: AlertService,
    id: String,
    question: &str,
) where
    R: CatalogRecord,
    C: RemoteCollection<R> + 'static,
{
    if !confirm(question) {
        return;
    }

    spawn_local(async move {
        let result = client.delete(&id).await;
        match store.try_update(|s| s.finish_delete(&id, result)) {
            Some(Ok(_)) => alerts.success(format!("{} deleted", R::element_name())),
            Some(Err(e)) => alerts.error(&e),
            // screen was unmounted
            None => {}
        }
    });
}

/// Reconcile a record confirmed by the server after an editor save
pub fn apply_saved<R: CatalogRecord>(
    store: RwSignal<CollectionStore<R>>,
    alerts: AlertService,
    record: R,
    mode: FormMode,
) {
    match mode {
        FormMode::Create => {
            store.update(|s| s.apply_create(record));
            alerts.success(format!("{} added", R::element_name()));
        }
        FormMode::Edit => {
            let replaced = store.try_update(|s| s.apply_update(record)).unwrap_or(false);
            if replaced {
                alerts.success(format!("{} updated", R::element_name()));
            } else {
                alerts.show(
                    format!("{} was saved but is no longer in the list", R::element_name()),
                    AlertVariant::Warning,
                    None,
                );
            }
        }
    }
}
