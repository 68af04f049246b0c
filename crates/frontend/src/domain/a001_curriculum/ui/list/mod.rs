pub mod state;

use self::state::{create_session, create_state};
use crate::domain::a001_curriculum::api::{self, lesson_count_label, DELETE_QUESTION};
use crate::domain::a001_curriculum::ui::details::{chapter_title, ChapterDetails, ChapterDetailsViewModel};
use crate::shared::alert::use_alert;
use crate::shared::collection::LoadStatus;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{apply_saved, delete_record, load_collection};
use contracts::domain::a001_curriculum::aggregate::CurriculumChapter;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CurriculumList() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let alerts = use_alert();
    let client = StoredValue::new(api::client(&config.api));
    let store = create_state(config.pagination.page_size);
    let page_size_options = StoredValue::new(config.pagination.page_size_options.clone());
    let session = create_session();
    let vm = ChapterDetailsViewModel::new(session, client.get_value(), alerts, chapter_title);

    let fetch = move || load_collection(store, client.get_value(), alerts);

    let handle_delete = move |id: String| {
        delete_record(store, client.get_value(), alerts, id, DELETE_QUESTION);
    };

    let on_saved = Callback::new(move |(chapter, mode): (CurriculumChapter, FormMode)| {
        apply_saved(store, alerts, chapter, mode);
    });

    let load_error = move || {
        store.with(|s| match s.status() {
            LoadStatus::Failed(message) => Some(message.clone()),
            _ => None,
        })
    };

    fetch();

    view! {
        <div class="page curriculum-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("book")}" Curriculum"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || format!("{} chapters", store.with(|s| s.len()))}
                    </Badge>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| session.update(|s| s.open_create())
                    >
                        {icon("plus")}
                        " New chapter"
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

            {move || load_error().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show
                when=move || !store.with(|s| s.is_loading())
                fallback=|| view! {
                    <Flex justify=FlexJustify::Center style="padding: var(--spacing-4xl);">
                        <Spinner label="Loading chapters..." />
                    </Flex>
                }
            >
                <Show
                    when=move || !store.with(|s| s.is_empty())
                    fallback=|| view! { <div class="empty-state">"No chapters yet. Add the first one."</div> }
                >
                    <div class="card-list">
                        {move || store.with(|s| s.page_items().to_vec()).into_iter().map(|chapter| {
                            let for_edit = chapter.clone();
                            let id = chapter.id.clone();
                            view! {
                                <div class="card chapter-card">
                                    <Flex justify=FlexJustify::SpaceBetween>
                                        <div class="chapter-card__heading">
                                            <span class="chapter-card__id">{format!("Chapter {}", chapter.id)}</span>
                                            <h3 class="chapter-card__title">{chapter.title.clone()}</h3>
                                        </div>
                                        <Space>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| session.update(|s| s.open_edit(&for_edit))
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| handle_delete(id.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </Space>
                                    </Flex>
                                    <div class="chapter-card__meta">
                                        <span>{format!("⏱ {}", chapter.duration)}</span>
                                        <span>{lesson_count_label(chapter.lessons.len())}</span>
                                    </div>
                                    {(!chapter.description.is_empty()).then(|| view! {
                                        <p class="chapter-card__description">{chapter.description.clone()}</p>
                                    })}
                                    <ol class="chapter-card__lessons">
                                        {chapter.lessons.iter().map(|lesson| view! {
                                            <li>{lesson.clone()}</li>
                                        }).collect_view()}
                                    </ol>
                                </div>
                            }
                        }).collect_view()}
                    </div>

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
            </Show>

            <Show when=move || session.with(|s| s.is_open())>
                <ChapterDetails vm=vm on_saved=on_saved />
            </Show>
        </div>
    }
}
