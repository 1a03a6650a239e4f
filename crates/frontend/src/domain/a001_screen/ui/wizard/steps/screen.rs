use contracts::domain::a001_screen::aggregate::{ScreenType, Solution};
use leptos::prelude::*;

use super::screen_input;
use crate::domain::a001_screen::ui::wizard::model::ScreenField;
use crate::domain::a001_screen::ui::wizard::view_model::AddScreenWizardVm;
use crate::shared::components::ui::CustomSelect;

#[component]
pub fn ScreenStep(vm: AddScreenWizardVm) -> impl IntoView {
    let type_options: Vec<(String, String)> = ScreenType::ALL
        .iter()
        .map(|t| (t.code().to_string(), t.label().to_string()))
        .collect();
    let solution_options: Vec<(String, String)> = Solution::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect();

    view! {
        <div class="wizard__grid">
            {screen_input(vm, ScreenField::Name, "Name", "text")}
            <CustomSelect
                label="Screen type"
                value=Signal::derive(move || vm.screen_type().code().to_string())
                options=type_options
                on_change=Callback::new(move |code| vm.set_screen_type(code))
            />
            {screen_input(vm, ScreenField::Location, "Location", "text")}
            {screen_input(vm, ScreenField::Height, "Height (m)", "text")}
            {screen_input(vm, ScreenField::Width, "Width (m)", "text")}
            <CustomSelect
                label="Solution"
                value=Signal::derive(move || vm.solution().code().to_string())
                options=solution_options
                on_change=Callback::new(move |code| vm.set_solution(code))
            />
            {screen_input(vm, ScreenField::ScreenFan, "Screen fan (optional)", "text")}
        </div>
    }
}
