use leptos::prelude::*;

use crate::shared::components::ui::Input;
use crate::shared::validation::ValidationErrors;
use crate::system::users::form::{UserField, UserForm};

/// Username, email, password and full name inputs bound to `form`.
///
/// Editing a field clears that field's error.
#[component]
pub fn UserFormFields(
    form: RwSignal<UserForm>,
    errors: RwSignal<ValidationErrors>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let fields = [
        (UserField::Username, "text", "username"),
        (UserField::Email, "email", "email"),
        (UserField::Password, "password", "new-password"),
        (UserField::FullName, "text", "name"),
    ];

    fields
        .into_iter()
        .map(|(field, input_type, autocomplete)| {
            view! {
                <Input
                    label=field.label()
                    input_type=input_type
                    autocomplete=autocomplete
                    value=Signal::derive(move || form.with(|f| field.get(f).to_string()))
                    on_input=Callback::new(move |v| {
                        form.update(|f| field.set(f, v));
                        errors.update(|e| {
                            e.remove(field.key());
                        });
                    })
                    error=Signal::derive(move || errors.with(|e| e.get(field.key()).map(str::to_string)))
                    disabled=disabled
                />
            }
        })
        .collect_view()
}
