pub mod state;

use self::state::{create_session, create_state};
use crate::domain::a002_pricing_plan::api::{self, shows_discount, DELETE_QUESTION};
use crate::domain::a002_pricing_plan::ui::details::{plan_title, PlanDetails, PlanDetailsViewModel};
use crate::shared::alert::use_alert;
use crate::shared::collection::LoadStatus;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{apply_saved, delete_record, load_collection};
use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PricingPlanList() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let alerts = use_alert();
    let client = StoredValue::new(api::client(&config.api));
    let store = create_state(config.pagination.page_size);
    let page_size_options = StoredValue::new(config.pagination.page_size_options.clone());
    let session = create_session();
    let vm = PlanDetailsViewModel::new(session, client.get_value(), alerts, plan_title);

    let fetch = move || load_collection(store, client.get_value(), alerts);

    let handle_delete = move |id: String| {
        delete_record(store, client.get_value(), alerts, id, DELETE_QUESTION);
    };

    let on_saved = Callback::new(move |(plan, mode): (PricingPlan, FormMode)| {
        apply_saved(store, alerts, plan, mode);
    });

    fetch();

    view! {
        <div class="page pricing-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("tag")}" Pricing plans"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| session.update(|s| s.open_create())
                    >
                        {icon("plus")}
                        " New plan"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || store.with(|s| s.is_loading()))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || store.with(|s| match s.status() {
                LoadStatus::Failed(message) => Some(message.clone()),
                _ => None,
            }).map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            {move || {
                if store.with(|s| s.is_loading()) {
                    view! {
                        <Flex justify=FlexJustify::Center style="padding: var(--spacing-4xl);">
                            <Spinner label="Loading plans..." />
                        </Flex>
                    }.into_any()
                } else if store.with(|s| s.is_empty()) {
                    view! { <div class="empty-state">"No pricing plans yet."</div> }.into_any()
                } else {
                    let cards = store.with(|s| s.page_items().to_vec()).into_iter().map(|plan| {
                        let for_edit = plan.clone();
                        let id = plan.id.clone();
                        let discounted = shows_discount(&plan);
                        view! {
                            <div class="card plan-card">
                                <Flex justify=FlexJustify::SpaceBetween>
                                    <h3 class="plan-card__name">{plan.name.clone()}</h3>
                                    <Badge appearance=BadgeAppearance::Outline>{format!("#{}", plan.id)}</Badge>
                                </Flex>
                                <div class="plan-card__prices">
                                    <span class="plan-card__sale-price">
                                        {if plan.sale_price.trim().is_empty() { plan.price.clone() } else { plan.sale_price.clone() }}
                                    </span>
                                    {discounted.then(|| view! {
                                        <s class="plan-card__original-price">{plan.price.clone()}</s>
                                    })}
                                </div>
                                <ul class="plan-card__benefits">
                                    {plan.benefits.iter().map(|benefit| view! {
                                        <li>"✓ "{benefit.clone()}</li>
                                    }).collect_view()}
                                </ul>
                                <Space>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| session.update(|s| s.open_edit(&for_edit))
                                    >
                                        {icon("edit")}
                                        " Edit"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| handle_delete(id.clone())
                                    >
                                        {icon("delete")}
                                        " Delete"
                                    </Button>
                                </Space>
                            </div>
                        }
                    }).collect_view();
                    view! { <div class="card-list">{cards}</div> }.into_any()
                }
            }}

            <Show when=move || !store.with(|s| s.is_empty())>
                <PaginationControls
                    current_page=Signal::derive(move || store.with(|s| s.page_index()))
                    total_pages=Signal::derive(move || store.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || store.with(|s| s.len()))
                    page_size=Signal::derive(move || store.with(|s| s.page_size()))
                    on_page_change=Callback::new(move |page| store.update(|s| s.set_page(page)))
                    on_page_size_change=Callback::new(move |size| store.update(|s| s.set_page_size(size)))
                    page_size_options=page_size_options.get_value()
                />
            </Show>

            <Show when=move || session.with(|s| s.is_open())>
                <PlanDetails vm=vm on_saved=on_saved />
            </Show>
        </div>
    }
}
