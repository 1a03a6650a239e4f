use leptos::prelude::*;

use super::screen_input;
use crate::domain::a001_screen::ui::wizard::model::{FileSlot, ScreenField};
use crate::domain::a001_screen::ui::wizard::view_model::AddScreenWizardVm;
use crate::shared::components::ui::MultiFileInput;

#[component]
pub fn ComponentsStep(vm: AddScreenWizardVm) -> impl IntoView {
    view! {
        <div class="wizard__section">
            <h3 class="wizard__section-title">"Power supply"</h3>
            <div class="wizard__grid">
                {screen_input(vm, ScreenField::PowerSupplyType, "Type", "text")}
                {screen_input(vm, ScreenField::PowerSupplyQty, "Quantity", "number")}
                {screen_input(vm, ScreenField::PowerSupplySpareQty, "Spare quantity", "number")}
            </div>
        </div>
        <div class="wizard__section">
            <h3 class="wizard__section-title">"Receiving card"</h3>
            <div class="wizard__grid">
                {screen_input(vm, ScreenField::ReceivingCardType, "Type", "text")}
                {screen_input(vm, ScreenField::ReceivingCardQty, "Quantity", "number")}
                {screen_input(vm, ScreenField::ReceivingCardSpareQty, "Spare quantity", "number")}
            </div>
        </div>
        <div class="wizard__section">
            <h3 class="wizard__section-title">"Files"</h3>
            <div class="wizard__grid">
                {FileSlot::ALL.into_iter().map(|slot| view! {
                    <MultiFileInput
                        label=slot.label()
                        on_change=Callback::new(move |files| vm.attach_file(slot, files))
                        error=Signal::derive(move || vm.error(slot.error_key()))
                        disabled=Signal::derive(move || vm.is_submitting())
                    />
                    {move || vm.file_name(slot).map(|name| view! {
                        <span class="file-input__attached">{format!("Attached: {}", name)}</span>
                    })}
                }).collect_view()}
            </div>
        </div>
    }
}
