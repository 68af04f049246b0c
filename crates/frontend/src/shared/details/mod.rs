//! Editor-modal ViewModel shared by every catalog collection
//!
//! Each aggregate supplies only the modal heading; the session, sub-item
//! commands and the save flow are the same for all of them.

use crate::shared::alert::AlertService;
use crate::shared::collection::{FormSession, SubmitOutcome};
use crate::shared::remote::HttpCollection;
use contracts::domain::common::CatalogRecord;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;

/// Heading for the editor; the argument is the edited record, `None` when creating
pub type TitleFn<R> = fn(Option<&R>) -> String;

/// ViewModel behind one editor modal
pub struct DetailsViewModel<R: CatalogRecord> {
    pub session: RwSignal<FormSession<R>>,
    client: StoredValue<HttpCollection<R>>,
    alerts: AlertService,
    title: TitleFn<R>,
}

impl<R: CatalogRecord> Clone for DetailsViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CatalogRecord> Copy for DetailsViewModel<R> {}

impl<R: CatalogRecord> DetailsViewModel<R> {
    pub fn new(
        session: RwSignal<FormSession<R>>,
        client: HttpCollection<R>,
        alerts: AlertService,
        title: TitleFn<R>,
    ) -> Self {
        Self {
            session,
            client: StoredValue::new(client),
            alerts,
            title,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.session.with(|s| s.mode() == FormMode::Edit)
    }

    pub fn is_submitting(&self) -> bool {
        self.session.with(|s| s.is_submitting())
    }

    pub fn title(&self) -> String {
        let title = self.title;
        self.session.with(|s| title(s.snapshot()))
    }

    // ============================================================================
    // Sub-items
    // ============================================================================

    pub fn sub_items(&self) -> Vec<String> {
        self.session.with(|s| s.sub_items().items().to_vec())
    }

    pub fn pending_sub_item(&self) -> String {
        self.session.with(|s| s.sub_items().pending().to_string())
    }

    pub fn set_pending_sub_item(&self, text: String) {
        self.session.update(|s| {
            s.edit_sub_items(|e| e.set_pending(text));
        });
    }

    pub fn add_sub_item(&self) {
        self.session.update(|s| {
            s.edit_sub_items(|e| e.commit_pending());
        });
    }

    pub fn remove_sub_item(&self, position: usize) {
        self.session.update(|s| {
            s.edit_sub_items(|e| e.remove_at(position));
        });
    }

    pub fn reorder_sub_items(&self, from: usize, to: usize) {
        self.session.update(|s| {
            s.edit_sub_items(|e| {
                e.reorder(from, to);
            });
        });
    }

    pub fn move_sub_item_up(&self, position: usize) {
        self.session.update(|s| {
            s.edit_sub_items(|e| {
                e.move_up(position);
            });
        });
    }

    pub fn move_sub_item_down(&self, position: usize) {
        self.session.update(|s| {
            s.edit_sub_items(|e| {
                e.move_down(position);
            });
        });
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Close the editor; ignored while a save is in flight
    pub fn cancel_command(&self) {
        self.session.update(|s| {
            s.close();
        });
    }

    /// Validate, send, and hand the server's record to `on_saved`
    pub fn save_command(&self, on_saved: Callback<(R, FormMode)>) {
        let ticket = match self.session.try_update(|s| s.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                self.alerts.error(&e);
                return;
            }
            None => return,
        };

        let session = self.session;
        let alerts = self.alerts;
        let client = self.client.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = ticket.send(&client).await;
            match session.try_update(|s| s.complete_submit(ticket.generation(), result)) {
                Some(SubmitOutcome::Saved(record)) => on_saved.run((record, ticket.mode())),
                Some(SubmitOutcome::Failed(e)) => alerts.error(&e),
                Some(SubmitOutcome::Stale) | None => {
                    log::debug!("{}: editor gone before the response arrived", R::element_name())
                }
            }
        });
    }
}
