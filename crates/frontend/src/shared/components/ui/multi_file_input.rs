use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Files currently held by a file input element
pub fn picked_files(input: &HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// File picker that reports the picked files and lists their names
#[component]
pub fn MultiFileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// `accept` attribute, e.g. ".json,.xml"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    #[prop(optional)]
    multiple: bool,
    on_change: Callback<Vec<web_sys::File>>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let names = RwSignal::new(Vec::<String>::new());

    let on_pick = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = picked_files(&input);
        names.set(files.iter().map(|f| f.name()).collect());
        on_change.run(files);
    };

    view! {
        <div class="form__group file-input">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <label
                class="file-input__picker"
                class:form__input--invalid=move || error.get().is_some()
            >
                <input
                    type="file"
                    class="file-input__native"
                    accept=move || accept.get().unwrap_or_default()
                    multiple=multiple
                    disabled=move || disabled.get()
                    on:change=on_pick
                />
                <span>
                    {move || names.with(|n| {
                        if n.is_empty() { "Choose file".to_string() } else { n.join(", ") }
                    })}
                </span>
            </label>
            {move || error.get().map(|msg| view! { <span class="form__error">{msg}</span> })}
        </div>
    }
}
