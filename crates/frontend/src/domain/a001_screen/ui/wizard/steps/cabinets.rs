use leptos::prelude::*;

use crate::domain::a001_screen::ui::wizard::model::{CabinetField, CabinetKey};
use crate::domain::a001_screen::ui::wizard::view_model::AddScreenWizardVm;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;

fn cabinet_label(field: CabinetField) -> &'static str {
    match field {
        CabinetField::Quantity => "Quantity",
        CabinetField::Height => "Height (m)",
        CabinetField::Width => "Width (m)",
        CabinetField::Kind => "Type",
    }
}

fn cabinet_input_type(field: CabinetField) -> &'static str {
    match field {
        CabinetField::Quantity => "number",
        _ => "text",
    }
}

#[component]
fn CabinetEntry(vm: AddScreenWizardVm, cabinet: CabinetKey) -> impl IntoView {
    view! {
        <div class="wizard__entry">
            <div class="wizard__entry-header">
                <span class="wizard__entry-title">
                    {move || format!("Cabinet {}", vm.cabinet_position(cabinet))}
                </span>
                <button
                    class="button button--ghost"
                    title="Remove cabinet"
                    disabled=move || vm.is_submitting()
                    on:click=move |_| vm.remove_cabinet(cabinet)
                >
                    {icon("trash")}
                </button>
            </div>
            <div class="wizard__grid">
                {CabinetField::ALL.into_iter().map(|field| view! {
                    <Input
                        label=cabinet_label(field)
                        input_type=cabinet_input_type(field)
                        value=Signal::derive(move || vm.cabinet_field(cabinet, field))
                        on_input=Callback::new(move |v| vm.set_cabinet_field(cabinet, field, v))
                        error=Signal::derive(move || vm.error(&field.key(cabinet)))
                        disabled=Signal::derive(move || vm.is_submitting())
                    />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CabinetsStep(vm: AddScreenWizardVm) -> impl IntoView {
    view! {
        <div class="wizard__section">
            <For
                each=move || vm.cabinet_keys()
                key=|key| *key
                children=move |key| view! { <CabinetEntry vm=vm cabinet=key /> }
            />
            <button
                class="button button--secondary"
                disabled=move || vm.is_submitting()
                on:click=move |_| vm.add_cabinet()
            >
                {icon("plus")}
                " Add cabinet"
            </button>
        </div>
    }
}
