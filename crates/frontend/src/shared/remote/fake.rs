//! In-memory collection standing in for the REST API in tests

use super::RemoteCollection;
use crate::shared::error::{SyncError, WriteAction};
use async_trait::async_trait;
use contracts::domain::common::CatalogRecord;
use std::cell::{Cell, RefCell};

/// Assigns sequential ids like the mock API and counts every call
pub struct FakeCollection<R> {
    items: RefCell<Vec<R>>,
    next_id: Cell<u64>,
    failure: RefCell<Option<String>>,
    calls: Cell<usize>,
}

impl<R: CatalogRecord> FakeCollection<R> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<R>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            failure: RefCell::new(None),
            calls: Cell::new(0),
        }
    }

    /// Make every following call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn items(&self) -> Vec<R> {
        self.items.borrow().clone()
    }

    fn enter(&self) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.failure.borrow().clone()
    }
}

#[async_trait(?Send)]
impl<R: CatalogRecord> RemoteCollection<R> for FakeCollection<R> {
    async fn list(&self) -> Result<Vec<R>, SyncError> {
        if let Some(message) = self.enter() {
            return Err(SyncError::fetch(message));
        }
        Ok(self.items())
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, SyncError> {
        if let Some(message) = self.enter() {
            return Err(SyncError::write(WriteAction::Create, message));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let record = R::from_draft(id.to_string(), draft.clone());
        self.items.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, SyncError> {
        if let Some(message) = self.enter() {
            return Err(SyncError::write(WriteAction::Update, message));
        }
        let mut items = self.items.borrow_mut();
        let slot = items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| SyncError::write(WriteAction::Update, "HTTP 404: Not found"))?;
        *slot = R::from_draft(id.to_string(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        if let Some(message) = self.enter() {
            return Err(SyncError::write(WriteAction::Delete, message));
        }
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|r| r.id() != id);
        if items.len() == before {
            return Err(SyncError::write(WriteAction::Delete, "HTTP 404: Not found"));
        }
        Ok(())
    }
}
