use crate::domain::a001_curriculum::ui::list::CurriculumList;
use crate::domain::a002_pricing_plan::ui::list::PricingPlanList;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// localStorage key remembering the last opened screen
const SCREEN_STORAGE_KEY: &str = "catalog_admin_screen";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Curriculum,
    Pricing,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Curriculum, Screen::Pricing];

    pub fn key(self) -> &'static str {
        match self {
            Screen::Curriculum => "curriculum",
            Screen::Pricing => "pricing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Curriculum => "Curriculum",
            Screen::Pricing => "Pricing plans",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Screen::Curriculum => "book",
            Screen::Pricing => "tag",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn restore_screen() -> Screen {
    storage()
        .and_then(|s| s.get_item(SCREEN_STORAGE_KEY).ok().flatten())
        .and_then(|key| Screen::from_key(&key))
        .unwrap_or(Screen::Curriculum)
}

fn remember_screen(screen: Screen) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(SCREEN_STORAGE_KEY, screen.key());
    }
}

#[component]
fn Sidebar(active: RwSignal<Screen>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Course admin"</div>
            {Screen::ALL.into_iter().map(|screen| view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || active.get() == screen
                    on:click=move |_| {
                        remember_screen(screen);
                        active.set(screen);
                    }
                >
                    {icon(screen.icon_name())}
                    <span>{screen.title()}</span>
                </button>
            }).collect_view()}
        </nav>
    }
}

/// Sidebar plus the active list screen; switching unmounts the previous one
#[component]
pub fn AppRoutes() -> impl IntoView {
    let active = RwSignal::new(restore_screen());

    view! {
        <div class="app-layout">
            <Sidebar active=active />
            <main class="app-layout__content">
                {move || match active.get() {
                    Screen::Curriculum => view! { <CurriculumList /> }.into_any(),
                    Screen::Pricing => view! { <PricingPlanList /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_keys_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
        assert_eq!(Screen::from_key("orders"), None);
    }
}
