use contracts::domain::a002_company::aggregate::CompanyId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_company::api;
use crate::layout::navigator::use_navigator;
use crate::layout::toast_service::use_toasts;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::validation::ValidationErrors;
use crate::system::users::form::{build_user_dto, UserForm};
use crate::system::users::ui::form_fields::UserFormFields;

/// Form creating a user account inside one company.
///
/// Closes its tab after a successful save and refreshes the lists.
#[component]
pub fn AddUserToCompany(company_id: CompanyId, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let navigator = StoredValue::new(use_navigator());

    let form = RwSignal::new(UserForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        // company users are never administrators
        let dto = match form.with_untracked(build_user_dto) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::add_user(company_id, &dto).await {
                Ok(user) => {
                    log::info!("user '{}' added to company {}", user.username, company_id);
                    toasts.success(format!("User {} added", user.username));
                    saving.set(false);
                    navigator.with_value(|n| n.reload());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("add user to company {} failed: {}", company_id, e);
                    toasts.error(e.user_message());
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a002_company--add_user" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Add user to company #{}", company_id)}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <div class="form">
                    <UserFormFields form=form errors=errors disabled=saving />
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save()
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Add user" }}
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
