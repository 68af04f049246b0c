use crate::shared::collection::FormSession;
use contracts::domain::common::CatalogRecord;
use leptos::prelude::*;

/// Text inputs for every field a record kind declares, bound to an editor
#[component]
pub fn RecordFields<R: CatalogRecord>(session: RwSignal<FormSession<R>>) -> impl IntoView {
    let disabled = move || session.with(|s| s.is_submitting());

    R::field_metadata()
        .iter()
        .map(|meta| {
            let name = meta.name;
            let input_id = format!("field-{}", name);
            let value = move || session.with(|s| s.field(name).to_string());
            let on_input = move |ev: leptos::ev::Event| {
                session.update(|s| s.set_field(name, event_target_value(&ev)))
            };
            let placeholder = meta.ui.placeholder.unwrap_or_default();

            let input = if meta.ui.multiline {
                view! {
                    <textarea
                        id=input_id.clone()
                        class="form__textarea"
                        rows="3"
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                        disabled=disabled
                    />
                }
                .into_any()
            } else {
                view! {
                    <input
                        type="text"
                        id=input_id.clone()
                        class="form__input"
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                        disabled=disabled
                    />
                }
                .into_any()
            };

            view! {
                <div class="form__group">
                    <label class="form__label" for=input_id>
                        {meta.ui.label}
                        {move || session.with(|s| meta.is_required(s.mode())).then_some(" *")}
                    </label>
                    {input}
                </div>
            }
        })
        .collect_view()
}
