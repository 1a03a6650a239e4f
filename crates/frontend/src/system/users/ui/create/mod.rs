use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::navigator::use_navigator;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::CustomCheckbox;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::validation::ValidationErrors;
use crate::system::users::api;
use crate::system::users::form::{build_user_dto, UserForm};
use crate::system::users::ui::form_fields::UserFormFields;

#[component]
pub fn CreateUser() -> impl IntoView {
    let toasts = use_toasts();
    let navigator = StoredValue::new(use_navigator());

    let form = RwSignal::new(UserForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let dto = match form.with_untracked(build_user_dto) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(user) => {
                    log::info!("user '{}' created (id {})", user.username, user.id);
                    toasts.success(format!("User {} created", user.username));
                    form.set(UserForm::default());
                    errors.set(ValidationErrors::new());
                    navigator.with_value(|n| n.reload());
                }
                Err(e) => {
                    log::error!("create user failed: {}", e);
                    toasts.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_user--new" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New user"</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="form">
                    <UserFormFields form=form errors=errors disabled=saving />
                    <CustomCheckbox
                        label="Administrator"
                        checked=Signal::derive(move || form.with(|f| f.is_admin))
                        on_change=Callback::new(move |checked| form.update(|f| f.is_admin = checked))
                        disabled=saving
                    />
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save()
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Create user" }}
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
