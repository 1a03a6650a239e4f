use leptos::prelude::*;

/// Native select with label, placeholder option and inline error
#[component]
pub fn DropdownInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; empty selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--invalid=move || error.get().is_some()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" selected=move || value.get().is_empty()>{p}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|msg| view! { <span class="form__error">{msg}</span> })}
        </div>
    }
}
