use super::sub_items::SubItemEditor;
use crate::shared::error::SyncError;
use crate::shared::remote::RemoteCollection;
use contracts::domain::common::{CatalogRecord, FieldValues};
use contracts::shared::metadata::FormMode;

/// Lifecycle of one editor: `Closed -> Open -> Submitting -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
    Submitting,
}

/// Payload of one submit attempt
///
/// `target` is the id of the edited record and is absent in create mode; the
/// draft itself never carries an id.
#[derive(Debug, Clone)]
pub struct SubmitTicket<R: CatalogRecord> {
    generation: u64,
    target: Option<String>,
    draft: R::Draft,
}

impl<R: CatalogRecord> SubmitTicket<R> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        if self.target.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// `POST` in create mode, `PUT {id}` in edit mode
    pub async fn send<C>(&self, client: &C) -> Result<R, SyncError>
    where
        C: RemoteCollection<R> + ?Sized,
    {
        match &self.target {
            None => client.create(&self.draft).await,
            Some(id) => client.update(id, &self.draft).await,
        }
    }
}

/// Result of handing a response back to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    /// The server's record; the session is closed
    Saved(R),
    /// The session is open again with the error recorded
    Failed(SyncError),
    /// The response belongs to an editor that was closed or reopened since
    Stale,
}

/// Transient edit buffer for one record (new or existing)
///
/// Edit mode snapshots the record when the editor opens; later changes to
/// that record are not reflected until it is reopened. A submitted request
/// runs to completion: `close` is refused while `Submitting`, so a record the
/// server confirmed always comes back as `Saved`. Every `open_*` and `close`
/// starts a new generation, and responses tagged with an older one are
/// dropped.
#[derive(Debug, Clone)]
pub struct FormSession<R: CatalogRecord> {
    state: SessionState,
    snapshot: Option<R>,
    fields: FieldValues,
    sub_items: SubItemEditor,
    generation: u64,
    last_error: Option<SyncError>,
}

impl<R: CatalogRecord> Default for FormSession<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CatalogRecord> FormSession<R> {
    pub fn new() -> Self {
        Self {
            state: SessionState::Closed,
            snapshot: None,
            fields: FieldValues::new(),
            sub_items: SubItemEditor::new(),
            generation: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    pub fn mode(&self) -> FormMode {
        if self.snapshot.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// The record as it was when the editor opened (edit mode only)
    pub fn snapshot(&self) -> Option<&R> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&SyncError> {
        self.last_error.as_ref()
    }

    // ============================================================================
    // Open / close
    // ============================================================================

    pub fn open_create(&mut self) {
        self.reset();
        self.fields = R::field_metadata()
            .iter()
            .map(|f| (f.name, String::new()))
            .collect();
        self.state = SessionState::Open;
        log::debug!("{}: editor opened (create)", R::element_name());
    }

    pub fn open_edit(&mut self, record: &R) {
        self.reset();
        self.fields = record.field_values();
        self.sub_items = SubItemEditor::from_items(record.sub_items().to_vec());
        self.snapshot = Some(record.clone());
        self.state = SessionState::Open;
        log::debug!("{}: editor opened (edit {})", R::element_name(), record.id());
    }

    /// Discard the buffer; `false` while a submit is in flight
    pub fn close(&mut self) -> bool {
        if self.state == SessionState::Submitting {
            log::debug!("{}: close ignored while saving", R::element_name());
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Closed;
        self.snapshot = None;
        self.fields.clear();
        self.sub_items = SubItemEditor::new();
        self.last_error = None;
    }

    // ============================================================================
    // Buffer
    // ============================================================================

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Set a field by wire name; ignored unless the editor is open and idle
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if self.state != SessionState::Open {
            return;
        }
        match R::field_metadata().iter().find(|f| f.name == name) {
            Some(meta) => {
                self.fields.insert(meta.name, value.into());
            }
            None => log::warn!("{}: unknown field '{}'", R::element_name(), name),
        }
    }

    pub fn sub_items(&self) -> &SubItemEditor {
        &self.sub_items
    }

    /// Mutate the sub-item list; `None` unless the editor is open and idle
    pub fn edit_sub_items<T>(&mut self, f: impl FnOnce(&mut SubItemEditor) -> T) -> Option<T> {
        if self.state != SessionState::Open {
            return None;
        }
        Some(f(&mut self.sub_items))
    }

    // ============================================================================
    // Submit
    // ============================================================================

    /// First blank required field, in form order
    pub fn validate(&self) -> Result<(), SyncError> {
        let mode = self.mode();
        for meta in R::field_metadata() {
            meta.check(self.field(meta.name), mode)
                .map_err(SyncError::validation)?;
        }
        Ok(())
    }

    /// Validate and build the payload; moves to `Submitting`
    ///
    /// Nothing is sent here. The caller runs [`SubmitTicket::send`] and
    /// hands the result to [`complete_submit`](Self::complete_submit).
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<R>, SyncError> {
        match self.state {
            SessionState::Closed => return Err(SyncError::NotOpen),
            SessionState::Submitting => return Err(SyncError::Busy),
            SessionState::Open => {}
        }

        if let Err(e) = self.validate() {
            self.last_error = Some(e.clone());
            return Err(e);
        }

        let draft = R::build_draft(&self.fields, self.sub_items.items().to_vec());
        self.state = SessionState::Submitting;
        self.last_error = None;

        Ok(SubmitTicket {
            generation: self.generation,
            target: self.snapshot.as_ref().map(|r| r.id().to_string()),
            draft,
        })
    }

    pub fn complete_submit(
        &mut self,
        generation: u64,
        result: Result<R, SyncError>,
    ) -> SubmitOutcome<R> {
        if generation != self.generation || self.state != SessionState::Submitting {
            log::debug!(
                "{}: dropping response of closed editor (generation {})",
                R::element_name(),
                generation
            );
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(record) => {
                log::info!("{}: saved {}", R::element_name(), record.id());
                self.reset();
                SubmitOutcome::Saved(record)
            }
            Err(e) => {
                log::error!("{}: {}", R::element_name(), e);
                self.state = SessionState::Open;
                self.last_error = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// `begin_submit`, send, `complete_submit` in one call
    pub async fn submit<C>(&mut self, client: &C) -> Result<R, SyncError>
    where
        C: RemoteCollection<R> + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = ticket.send(client).await;
        match self.complete_submit(ticket.generation(), result) {
            SubmitOutcome::Saved(record) => Ok(record),
            SubmitOutcome::Failed(e) => Err(e),
            SubmitOutcome::Stale => Err(SyncError::NotOpen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::store::CollectionStore;
    use crate::shared::error::WriteAction;
    use crate::shared::remote::fake::FakeCollection;
    use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;
    use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;

    fn chapter(id: &str, title: &str) -> CurriculumChapter {
        CurriculumChapter {
            id: id.to_string(),
            title: title.to_string(),
            duration: "2 hours".to_string(),
            description: String::new(),
            lessons: vec!["Intro".to_string()],
        }
    }

    fn filled_create_session() -> FormSession<CurriculumChapter> {
        let mut session = FormSession::new();
        session.open_create();
        session.set_field("title", "Ch3");
        session.set_field("duration", "3 hours");
        session.edit_sub_items(|e| {
            e.append("Traits");
            e.append("Generics");
        });
        session
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let client = FakeCollection::with_items(vec![chapter("1", "Ch1"), chapter("2", "Ch2")]);
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);

        let mut session = filled_create_session();
        let saved = session.submit(&client).await.unwrap();
        store.apply_create(saved.clone());

        assert_eq!(store.len(), 3);
        assert_eq!(store.items().last(), Some(&saved));
        assert_eq!(saved.id, "3");
        assert_eq!(saved.lessons, vec!["Traits", "Generics"]);
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[tokio::test]
    async fn test_empty_title_never_reaches_the_client() {
        let client = FakeCollection::<CurriculumChapter>::new();
        let mut session = FormSession::new();
        session.open_create();
        session.set_field("title", "   ");
        session.set_field("duration", "1 hour");

        let err = session.submit(&client).await.unwrap_err();
        assert_eq!(err, SyncError::validation("Chapter title"));
        assert_eq!(client.calls(), 0);
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.last_error(), Some(&err));
    }

    #[tokio::test]
    async fn test_edit_updates_by_id() {
        let client = FakeCollection::with_items(vec![
            chapter("1", "Ch1"),
            chapter("2", "Ch2"),
            chapter("3", "Ch3"),
        ]);
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);
        let original = store.items().to_vec();

        let mut session = FormSession::new();
        session.open_edit(&original[1]);
        session.set_field("title", "Ch2 - revised");
        session.edit_sub_items(|e| e.append("Closures"));

        let ticket = session.begin_submit().unwrap();
        assert_eq!(ticket.target(), Some("2"));
        assert_eq!(ticket.mode(), FormMode::Edit);

        let result = ticket.send(&client).await;
        match session.complete_submit(ticket.generation(), result) {
            SubmitOutcome::Saved(record) => assert!(store.apply_update(record)),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(store.items()[0], original[0]);
        assert_eq!(store.items()[2], original[2]);
        assert_eq!(store.items()[1].title, "Ch2 - revised");
        assert_eq!(store.items()[1].lessons, vec!["Intro", "Closures"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_session_open_for_retry() {
        let client = FakeCollection::<CurriculumChapter>::new();
        client.fail_with("HTTP 500");
        let mut session = filled_create_session();

        let err = session.submit(&client).await.unwrap_err();
        assert!(matches!(err, SyncError::Write { .. }));
        assert_eq!(session.state(), SessionState::Open);
        assert_eq!(session.field("title"), "Ch3");
        assert_eq!(session.sub_items().len(), 2);

        client.recover();
        let saved = session.submit(&client).await.unwrap();
        assert_eq!(saved.title, "Ch3");
        assert_eq!(client.items().len(), 1);
    }

    #[test]
    fn test_second_submit_is_rejected_while_in_flight() {
        let mut session = filled_create_session();
        let _ticket = session.begin_submit().unwrap();
        assert_eq!(session.begin_submit().unwrap_err(), SyncError::Busy);

        session.set_field("title", "changed while saving");
        assert_eq!(session.field("title"), "Ch3");
        assert_eq!(session.edit_sub_items(|e| e.append("x")), None);
    }

    #[tokio::test]
    async fn test_close_during_save_keeps_server_record() {
        let client = FakeCollection::<CurriculumChapter>::new();
        let mut store = CollectionStore::new(10);
        store.finish_load(client.list().await);

        let mut session = filled_create_session();
        let ticket = session.begin_submit().unwrap();
        assert!(!session.close());
        assert_eq!(session.state(), SessionState::Submitting);

        let result = ticket.send(&client).await;
        match session.complete_submit(ticket.generation(), result) {
            SubmitOutcome::Saved(record) => store.apply_create(record),
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(store.items(), client.items().as_slice());
        assert_eq!(store.len(), 1);
        assert_eq!(session.state(), SessionState::Closed);
        assert!(session.close());
    }

    #[test]
    fn test_response_for_older_generation_is_stale() {
        let mut session = filled_create_session();
        let ticket = session.begin_submit().unwrap();
        let failed = Err(SyncError::write(WriteAction::Create, "HTTP 500"));
        session.complete_submit(ticket.generation(), failed);
        assert!(session.close());

        let outcome = session.complete_submit(ticket.generation(), Ok(chapter("9", "Late")));
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(session.state(), SessionState::Closed);

        // reopened editor ignores the old generation too
        let mut session = filled_create_session();
        let old = session.begin_submit().unwrap();
        session.open_create();
        assert_eq!(
            session.complete_submit(old.generation(), Ok(chapter("9", "Late"))),
            SubmitOutcome::Stale
        );
        assert_eq!(session.state(), SessionState::Open);
    }

    #[test]
    fn test_closed_session_cannot_submit() {
        let mut session = FormSession::<CurriculumChapter>::new();
        assert_eq!(session.begin_submit().unwrap_err(), SyncError::NotOpen);
    }

    #[test]
    fn test_edit_buffer_is_a_snapshot() {
        let record = chapter("4", "Ch4");
        let mut session = FormSession::new();
        session.open_edit(&record);
        session.set_field("title", "Other");
        session.edit_sub_items(|e| e.remove_at(0));

        assert_eq!(record.title, "Ch4");
        assert_eq!(record.lessons.len(), 1);
        assert_eq!(session.snapshot().map(|r| r.title.as_str()), Some("Ch4"));
        assert!(session.sub_items().is_empty());
    }

    #[test]
    fn test_sale_price_optional_when_editing_plan() {
        let plan = PricingPlan {
            id: "1".into(),
            name: "Basic".into(),
            price: "100".into(),
            sale_price: String::new(),
            benefits: vec![],
        };
        let mut session = FormSession::new();
        session.open_edit(&plan);
        assert!(session.validate().is_ok());

        let mut session = FormSession::<PricingPlan>::new();
        session.open_create();
        session.set_field("name", "Basic");
        session.set_field("price", "100");
        assert_eq!(session.validate(), Err(SyncError::validation("Sale price")));
    }

    #[test]
    fn test_create_ticket_has_no_target() {
        let mut session = filled_create_session();
        let ticket = session.begin_submit().unwrap();
        assert_eq!(ticket.target(), None);
        assert_eq!(ticket.draft().title, "Ch3");
        assert!(session.is_submitting());
    }
}
