use super::pagination::{paginate, total_pages, PageWindow};
use crate::shared::error::SyncError;
use contracts::domain::common::CatalogRecord;

/// Where the last `load` stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Authoritative in-memory list of one screen
///
/// Holds only confirmed server representations. The store performs no I/O:
/// callers run the request and hand the result to `finish_load` / `apply_*`.
/// The page index is clamped after every change of the list or window, so
/// the view never points past the last page.
#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    items: Vec<R>,
    window: PageWindow,
    status: LoadStatus,
}

impl<R: CatalogRecord> CollectionStore<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            window: PageWindow::new(1, page_size),
            status: LoadStatus::Idle,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    // ============================================================================
    // Load
    // ============================================================================

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Replace the list wholesale on success; keep prior contents on failure
    pub fn finish_load(&mut self, result: Result<Vec<R>, SyncError>) {
        match result {
            Ok(items) => {
                log::debug!("{}: loaded {} records", R::list_name(), items.len());
                self.items = items;
                self.status = LoadStatus::Loaded;
                self.clamp_window();
            }
            Err(e) => {
                log::error!("{}: {}", R::list_name(), e);
                self.status = LoadStatus::Failed(e.user_message());
            }
        }
    }

    // ============================================================================
    // Reconcile confirmed writes
    // ============================================================================

    /// Append a freshly created record; no re-sort
    pub fn apply_create(&mut self, record: R) {
        log::debug!("{}: created {}", R::list_name(), record.id());
        self.items.push(record);
        self.clamp_window();
    }

    /// Replace the record with the same id; `false` when there is none
    pub fn apply_update(&mut self, record: R) -> bool {
        match self.items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                log::debug!("{}: updated {}", R::list_name(), record.id());
                *slot = record;
                true
            }
            None => {
                log::warn!(
                    "{}: update for unknown id {} ignored",
                    R::list_name(),
                    record.id()
                );
                false
            }
        }
    }

    /// Remove the record with `id`; `false` when there is none
    ///
    /// Deleting the last record of a page moves the view one page back.
    pub fn apply_delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        let removed = self.items.len() < before;
        if removed {
            log::debug!("{}: deleted {}", R::list_name(), id);
            self.clamp_window();
        }
        removed
    }

    /// Drop `id` once the server confirmed the `DELETE`; a failure leaves the list as is
    pub fn finish_delete(
        &mut self,
        id: &str,
        result: Result<(), SyncError>,
    ) -> Result<bool, SyncError> {
        match result {
            Ok(()) => Ok(self.apply_delete(id)),
            Err(e) => {
                log::error!("{}: {}", R::list_name(), e);
                Err(e)
            }
        }
    }

    // ============================================================================
    // Page window
    // ============================================================================

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn page_index(&self) -> usize {
        self.window.page_index()
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.window.page_size())
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.window = self.window.with_page(page_index);
        self.clamp_window();
    }

    /// Change the page size keeping the page index where possible
    pub fn set_page_size(&mut self, page_size: usize) {
        self.window = self.window.with_page_size(page_size);
        self.clamp_window();
    }

    /// Records visible in the current window
    pub fn page_items(&self) -> &[R] {
        paginate(&self.items, self.window)
    }

    fn clamp_window(&mut self) {
        self.window = self.window.clamped(self.items.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote::fake::FakeCollection;
    use crate::shared::remote::RemoteCollection;
    use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;

    fn chapter(id: &str, title: &str) -> CurriculumChapter {
        CurriculumChapter {
            id: id.to_string(),
            title: title.to_string(),
            duration: "1 hour".to_string(),
            description: String::new(),
            lessons: vec![],
        }
    }

    fn loaded(ids: &[&str], page_size: usize) -> CollectionStore<CurriculumChapter> {
        let mut store = CollectionStore::new(page_size);
        store.begin_load();
        store.finish_load(Ok(ids
            .iter()
            .map(|id| chapter(id, &format!("Ch{}", id)))
            .collect()));
        store
    }

    #[test]
    fn test_delete_last_item_of_last_page_moves_back() {
        let mut store = loaded(&["1", "2"], 1);
        store.set_page(2);
        assert_eq!(store.page_items()[0].id, "2");

        assert!(store.apply_delete("2"));
        assert_eq!(store.page_index(), 1);
        assert_eq!(store.page_items().len(), 1);
        assert_eq!(store.page_items()[0].id, "1");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = loaded(&["1", "2", "3"], 10);
        assert!(store.apply_delete("2"));
        assert_eq!(store.len(), 2);
        assert!(!store.apply_delete("42"));
        assert_eq!(store.len(), 2);
        assert!(store.get("2").is_none());
    }

    #[test]
    fn test_update_replaces_only_matching_id() {
        let mut store = loaded(&["1", "2", "3"], 10);
        let before = store.items().to_vec();

        assert!(store.apply_update(chapter("2", "Renamed")));
        assert_eq!(store.items()[0], before[0]);
        assert_eq!(store.items()[1].title, "Renamed");
        assert_eq!(store.items()[2], before[2]);

        assert!(!store.apply_update(chapter("9", "Ghost")));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_create_appends_without_sorting() {
        let mut store = loaded(&["5", "3"], 10);
        store.apply_create(chapter("1", "New"));
        let ids: Vec<&str> = store.items().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "3", "1"]);
    }

    #[test]
    fn test_failed_load_keeps_prior_contents() {
        let mut store = loaded(&["1", "2"], 10);
        store.begin_load();
        assert!(store.is_loading());
        store.finish_load(Err(SyncError::fetch("HTTP 500")));
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.status(),
            &LoadStatus::Failed("Failed to load data: HTTP 500".to_string())
        );
    }

    #[test]
    fn test_reload_replaces_wholesale_and_clamps() {
        let mut store = loaded(&["1", "2", "3", "4"], 2);
        store.set_page(2);
        store.finish_load(Ok(vec![chapter("7", "Only")]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.page_index(), 1);
        assert_eq!(store.page_items()[0].id, "7");
    }

    #[test]
    fn test_page_size_change_keeps_index_within_range() {
        let mut store = loaded(&["1", "2", "3", "4", "5", "6"], 2);
        store.set_page(3);
        store.set_page_size(3);
        assert_eq!(store.page_index(), 2);
        assert_eq!(store.page_items().len(), 3);

        store.set_page_size(1);
        assert_eq!(store.page_index(), 2);
        assert_eq!(store.page_items()[0].id, "2");
        assert_eq!(store.total_pages(), 6);
    }

    #[test]
    fn test_set_page_is_clamped() {
        let mut store = loaded(&["1", "2", "3"], 2);
        store.set_page(10);
        assert_eq!(store.page_index(), 2);
        store.set_page(0);
        assert_eq!(store.page_index(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_exactly_one() {
        let client = FakeCollection::with_items(vec![
            chapter("1", "Ch1"),
            chapter("2", "Ch2"),
            chapter("3", "Ch3"),
        ]);
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);

        let result = client.delete("2").await;
        assert_eq!(store.finish_delete("2", result), Ok(true));
        assert_eq!(store.len(), 2);
        assert!(store.get("2").is_none());
        assert_eq!(client.items().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_list_unchanged() {
        let client = FakeCollection::with_items(vec![chapter("1", "Ch1"), chapter("2", "Ch2")]);
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);
        let before = store.items().to_vec();

        client.fail_with("HTTP 500");
        let result = client.delete("1").await;
        assert!(matches!(
            store.finish_delete("1", result),
            Err(SyncError::Write { .. })
        ));
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(client.items().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_of_unknown_id_leaves_list_unchanged() {
        let client = FakeCollection::with_items(vec![chapter("1", "Ch1"), chapter("2", "Ch2")]);
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);
        let before = store.items().to_vec();

        let result = client.delete("42").await;
        let err = store.finish_delete("42", result).unwrap_err();
        assert!(err.to_string().contains("404"));
        assert_eq!(store.items(), before.as_slice());
    }
}
