use contracts::domain::a001_screen::aggregate::Solution;
use leptos::prelude::*;

use crate::domain::a001_screen::ui::wizard::model::{CabinetKey, ModuleField};
use crate::domain::a001_screen::ui::wizard::view_model::AddScreenWizardVm;
use crate::shared::components::ui::Input;

fn module_label(field: ModuleField) -> &'static str {
    match field {
        ModuleField::Quantity => "Quantity",
        ModuleField::Height => "Height (m)",
        ModuleField::Width => "Width (m)",
        ModuleField::BatchNumber => "Batch number",
    }
}

#[component]
fn ModuleEntry(vm: AddScreenWizardVm, cabinet: CabinetKey) -> impl IntoView {
    view! {
        <div class="wizard__entry">
            <div class="wizard__entry-header">
                <span class="wizard__entry-title">
                    {move || format!("Module for cabinet {}", vm.cabinet_position(cabinet))}
                </span>
            </div>
            <div class="wizard__grid">
                {ModuleField::ALL.into_iter().map(|field| view! {
                    <Input
                        label=module_label(field)
                        input_type=if field == ModuleField::Quantity { "number" } else { "text" }
                        value=Signal::derive(move || vm.module_field(cabinet, field))
                        on_input=Callback::new(move |v| vm.set_module_field(cabinet, field, v))
                        error=Signal::derive(move || vm.error(&field.key(cabinet)))
                        disabled=Signal::derive(move || vm.is_submitting())
                    />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Module data per cabinet; only asked for `Module` screens
#[component]
pub fn ModulesStep(vm: AddScreenWizardVm) -> impl IntoView {
    let is_module = Memo::new(move |_| vm.solution() == Solution::Module);

    view! {
        <Show
            when=move || is_module.get()
            fallback=|| view! {
                <div class="wizard__note">
                    "Cabinet screens have no module data. Submit to create the screen."
                </div>
            }
        >
            <div class="wizard__section">
                <For
                    each=move || vm.cabinet_keys()
                    key=|key| *key
                    children=move |key| view! { <ModuleEntry vm=vm cabinet=key /> }
                />
            </div>
        </Show>
    }
}
