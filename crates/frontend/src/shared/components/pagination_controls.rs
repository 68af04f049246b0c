use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / next / last buttons plus a page-size select
///
/// Pages are 1-based. The parent owns the window and clamps whatever page
/// this component asks for.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Available page sizes
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get().max(1);
    let fallback_size = page_size_options.first().copied().unwrap_or(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get(),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
