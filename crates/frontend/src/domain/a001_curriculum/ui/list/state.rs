use crate::shared::collection::{CollectionStore, FormSession};
use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;
use leptos::prelude::*;

pub fn create_state(page_size: usize) -> RwSignal<CollectionStore<CurriculumChapter>> {
    RwSignal::new(CollectionStore::new(page_size))
}

/// The single chapter editor of the screen
pub fn create_session() -> RwSignal<FormSession<CurriculumChapter>> {
    RwSignal::new(FormSession::new())
}
