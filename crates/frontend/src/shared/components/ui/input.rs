use leptos::prelude::*;

/// Input component with label and inline error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "password", "email", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                class:form__input--invalid=has_error
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|msg| view! { <span class="form__error">{msg}</span> })}
        </div>
    }
}
