use crate::shared::collection::{CollectionStore, FormSession};
use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;
use leptos::prelude::*;

pub fn create_state(page_size: usize) -> RwSignal<CollectionStore<PricingPlan>> {
    RwSignal::new(CollectionStore::new(page_size))
}

pub fn create_session() -> RwSignal<FormSession<PricingPlan>> {
    RwSignal::new(FormSession::new())
}
