use super::view_model::PlanDetailsViewModel;
use crate::shared::components::record_fields::RecordFields;
use crate::shared::components::sub_item_list::SubItemList;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_pricing_plan::aggregate::PricingPlan;
use contracts::domain::common::CatalogRecord;
use contracts::shared::metadata::FormMode;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PlanDetails(vm: PlanDetailsViewModel, on_saved: Callback<(PricingPlan, FormMode)>) -> impl IntoView {
    let submitting = Signal::derive(move || vm.is_submitting());

    view! {
        <ModalFrame
            on_close=Callback::new(move |_| vm.cancel_command())
            modal_class="plan-details-modal"
            modal_style="max-width: min(560px, 95vw); width: min(560px, 95vw);"
        >
            <div class="details-container plan-details">
                <div class="modal-header">
                    <h3 class="modal-title">{move || vm.title()}</h3>
                    <div class="modal-header-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command(on_saved)
                            disabled=submitting
                        >
                            <Show when=move || submitting.get() fallback=|| icon("save")>
                                <Spinner size=SpinnerSize::Tiny />
                            </Show>
                            {move || match (submitting.get(), vm.is_edit_mode()) {
                                (true, _) => " Saving...",
                                (false, true) => " Save changes",
                                (false, false) => " Create plan",
                            }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.cancel_command()
                            disabled=submitting
                        >
                            {icon("x")}
                            " Cancel"
                        </Button>
                    </div>
                </div>

                <div class="modal-body">
                    <RecordFields session=vm.session />

                    <SubItemList
                        label=PricingPlan::sub_items_label()
                        placeholder="e.g. Lifetime access"
                        items=Signal::derive(move || vm.sub_items())
                        pending=Signal::derive(move || vm.pending_sub_item())
                        disabled=submitting
                        on_pending_change=Callback::new(move |text| vm.set_pending_sub_item(text))
                        on_append=Callback::new(move |_| vm.add_sub_item())
                        on_remove=Callback::new(move |position| vm.remove_sub_item(position))
                        on_reorder=Callback::new(move |(from, to)| vm.reorder_sub_items(from, to))
                        on_move_up=Callback::new(move |position| vm.move_sub_item_up(position))
                        on_move_down=Callback::new(move |position| vm.move_sub_item_down(position))
                    />
                </div>
            </div>
        </ModalFrame>
    }
}
