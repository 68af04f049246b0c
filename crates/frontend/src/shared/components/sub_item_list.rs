use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Editable ordered list of free-text entries (lessons, benefits)
///
/// Stateless: the editor owns the list and the pending text, this component
/// only reports user intents. Rows can be reordered by drag-and-drop or with
/// the up/down buttons.
#[component]
pub fn SubItemList(
    /// Heading above the list, e.g. "Lessons"
    label: &'static str,
    #[prop(into)]
    items: Signal<Vec<String>>,
    /// Text currently typed into the "new entry" input
    #[prop(into)]
    pending: Signal<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    on_pending_change: Callback<String>,
    on_append: Callback<()>,
    on_remove: Callback<usize>,
    /// `(from, to)` positions, from drag-and-drop
    on_reorder: Callback<(usize, usize)>,
    on_move_up: Callback<usize>,
    on_move_down: Callback<usize>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    let dragged = RwSignal::new(None::<usize>);
    let drop_target = RwSignal::new(None::<usize>);

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_append.run(());
        }
    };

    let finish_drag = move || {
        dragged.set(None);
        drop_target.set(None);
    };

    view! {
        <div class="sub-item-list">
            <label class="form__label">
                {label}
                " "
                <span class="sub-item-list__count">{move || format!("({})", items.get().len())}</span>
            </label>

            <div class="sub-item-list__input" style="display: flex; gap: var(--spacing-sm);">
                <input
                    type="text"
                    class="form__input"
                    style="flex: 1;"
                    placeholder=placeholder.unwrap_or("Add an entry and press Enter")
                    prop:value=move || pending.get()
                    on:input=move |ev| on_pending_change.run(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_append.run(())
                    disabled=move || disabled.get() || pending.get().trim().is_empty()
                    title="Add"
                >
                    {icon("plus")}
                </button>
            </div>

            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <div class="sub-item-list__empty">"No entries yet"</div> }
            >
                <ul class="sub-item-list__rows">
                    {move || {
                        let rows = items.get();
                        let last = rows.len().saturating_sub(1);
                        rows.into_iter().enumerate().map(|(position, text)| {
                            view! {
                                <li
                                    class="sub-item-list__row"
                                    class:sub-item-list__row--dragging=move || dragged.get() == Some(position)
                                    class:sub-item-list__row--drop-target=move || drop_target.get() == Some(position)
                                    draggable=move || if disabled.get() { "false" } else { "true" }
                                    on:dragstart=move |ev: ev::DragEvent| {
                                        dragged.set(Some(position));
                                        // Firefox only starts a drag when data is set
                                        if let Some(dt) = ev.data_transfer() {
                                            let _ = dt.set_data("text/plain", &position.to_string());
                                        }
                                    }
                                    on:dragover=move |ev: ev::DragEvent| {
                                        ev.prevent_default();
                                        drop_target.set(Some(position));
                                    }
                                    on:drop=move |ev: ev::DragEvent| {
                                        ev.prevent_default();
                                        if let Some(from) = dragged.get_untracked() {
                                            on_reorder.run((from, position));
                                        }
                                        finish_drag();
                                    }
                                    on:dragend=move |_| finish_drag()
                                >
                                    <span class="sub-item-list__grip">{icon("grip")}</span>
                                    <span class="sub-item-list__index">{position + 1}"."</span>
                                    <span class="sub-item-list__text">{text}</span>
                                    <span class="sub-item-list__actions">
                                        <button
                                            type="button"
                                            class="button button--ghost"
                                            title="Move up"
                                            disabled=move || disabled.get() || position == 0
                                            on:click=move |_| on_move_up.run(position)
                                        >
                                            {icon("arrow-up")}
                                        </button>
                                        <button
                                            type="button"
                                            class="button button--ghost"
                                            title="Move down"
                                            disabled=move || disabled.get() || position == last
                                            on:click=move |_| on_move_down.run(position)
                                        >
                                            {icon("arrow-down")}
                                        </button>
                                        <button
                                            type="button"
                                            class="button button--ghost"
                                            title="Remove"
                                            disabled=move || disabled.get()
                                            on:click=move |_| on_remove.run(position)
                                        >
                                            {icon("x")}
                                        </button>
                                    </span>
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
