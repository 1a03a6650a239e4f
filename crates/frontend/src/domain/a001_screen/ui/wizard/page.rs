use leptos::prelude::*;
use thaw::*;

use super::steps::{CabinetsStep, ComponentsStep, ModulesStep, ScreenStep};
use super::validation::WizardStep;
use super::view_model::AddScreenWizardVm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;

#[component]
pub fn AddScreenWizard() -> impl IntoView {
    let vm = AddScreenWizardVm::new();

    // step views are rebuilt only when the step changes, not on every keystroke
    let step = Memo::new(move |_| vm.step());
    let is_first = Memo::new(move |_| vm.is_first_step());
    let is_final = Memo::new(move |_| vm.is_final_step());
    let submitting = Memo::new(move |_| vm.is_submitting());

    let stepper = WizardStep::ALL
        .into_iter()
        .map(|s| {
            let number = s.number();
            view! {
                <li
                    class="wizard__stepper-item"
                    class:wizard__stepper-item--active=move || step.get() == number
                    class:wizard__stepper-item--done={move || step.get() > number}
                >
                    <span class="wizard__stepper-number">{number}</span>
                    <span class="wizard__stepper-title">{s.title()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a001_screen--new" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Add screen"</h1>
                </div>
            </div>

            <div class="page__content wizard">
                <ol class="wizard__stepper">{stepper}</ol>

                <div class="wizard__body">
                    {move || match WizardStep::from_number(step.get()) {
                        Some(WizardStep::Screen) => view! { <ScreenStep vm=vm /> }.into_any(),
                        Some(WizardStep::Components) => view! { <ComponentsStep vm=vm /> }.into_any(),
                        Some(WizardStep::Cabinets) => view! { <CabinetsStep vm=vm /> }.into_any(),
                        Some(WizardStep::Modules) => view! { <ModulesStep vm=vm /> }.into_any(),
                        None => ().into_any(),
                    }}
                </div>

                <div class="wizard__footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.prev()
                        disabled=Signal::derive(move || is_first.get() || submitting.get())
                    >
                        "Back"
                    </Button>
                    <Show
                        when=move || is_final.get()
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.next()>
                                "Next"
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.submit()
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {move || if submitting.get() { "Saving..." } else { "Submit" }}
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
