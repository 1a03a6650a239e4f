//! One view per wizard step. All state lives in [`AddScreenWizardVm`].

mod cabinets;
mod components;
mod modules;
mod screen;

pub use cabinets::CabinetsStep;
pub use components::ComponentsStep;
pub use modules::ModulesStep;
pub use screen::ScreenStep;

use leptos::prelude::*;

use super::model::ScreenField;
use super::view_model::AddScreenWizardVm;
use crate::shared::components::ui::Input;

/// Input bound to one of the draft's scalar fields
fn screen_input(
    vm: AddScreenWizardVm,
    field: ScreenField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <Input
            label=label
            input_type=input_type
            value=Signal::derive(move || vm.field(field))
            on_input=Callback::new(move |v| vm.set_field(field, v))
            error=Signal::derive(move || vm.error(field.key()))
            disabled=Signal::derive(move || vm.is_submitting())
        />
    }
}
