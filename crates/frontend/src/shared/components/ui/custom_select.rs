use crate::shared::icons::icon;
use leptos::prelude::*;

/// Option list rendered as a dropdown panel, with a placeholder shown while
/// nothing is picked. Only the open/closed state lives here.
#[component]
pub fn CustomSelect(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    let selected_label = move || {
        let current = value.get();
        options
            .get()
            .into_iter()
            .find(|(val, _)| *val == current)
            .map(|(_, label)| label)
            .or_else(|| placeholder.get())
            .unwrap_or_default()
    };

    view! {
        <div class="form__group custom-select">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <button
                type="button"
                class="custom-select__trigger"
                class:custom-select__trigger--placeholder=move || value.get().is_empty()
                class:form__select--invalid=move || error.get().is_some()
                on:click=move |_| open.update(|o| *o = !*o)
                on:blur=move |_| open.set(false)
            >
                <span>{selected_label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <ul class="custom-select__options" role="listbox">
                    <For
                        each=move || options.get()
                        key=|(val, _)| val.clone()
                        children=move |(val, label)| {
                            let val_for_check = val.clone();
                            view! {
                                <li
                                    role="option"
                                    class="custom-select__option"
                                    class:custom-select__option--selected=move || value.get() == val_for_check
                                    // mousedown fires before the trigger's blur closes the list
                                    on:mousedown=move |_| {
                                        on_change.run(val.clone());
                                        open.set(false);
                                    }
                                >
                                    {label}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            {move || error.get().map(|msg| view! { <span class="form__error">{msg}</span> })}
        </div>
    }
}
