use contracts::shared::page::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_screen::api::fetch_screens;
use crate::domain::a002_company::api::fetch_companies;
use crate::domain::a003_contract::api;
use crate::domain::a003_contract::form::{build_contract_dto, ContractForm};
use crate::layout::navigator::use_navigator;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{DropdownInput, Input};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::validation::ValidationErrors;

/// Size of the single page fetched to fill each dropdown
const OPTIONS_PAGE_SIZE: usize = 100;

fn options_request() -> PageRequest {
    PageRequest {
        page: 0,
        size: OPTIONS_PAGE_SIZE,
        search: None,
    }
}

#[component]
pub fn CreateContract() -> impl IntoView {
    let toasts = use_toasts();
    let navigator = StoredValue::new(use_navigator());

    let form = RwSignal::new(ContractForm::default());
    let errors = RwSignal::new(ValidationErrors::new());
    let saving = RwSignal::new(false);
    let company_options = RwSignal::new(Vec::<(String, String)>::new());
    let screen_options = RwSignal::new(Vec::<(String, String)>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_companies(&options_request()).await {
                Ok(page) => company_options.set(
                    page.content
                        .into_iter()
                        .map(|c| (c.id.to_string(), c.name))
                        .collect(),
                ),
                Err(e) => {
                    log::error!("failed to load companies for contract form: {}", e);
                    toasts.error(e.user_message());
                }
            }
        });
        spawn_local(async move {
            match fetch_screens(&options_request()).await {
                Ok(page) => screen_options.set(
                    page.content
                        .into_iter()
                        .map(|s| (s.id.to_string(), s.name))
                        .collect(),
                ),
                Err(e) => {
                    log::error!("failed to load screens for contract form: {}", e);
                    toasts.error(e.user_message());
                }
            }
        });
    });

    let field = move |key: &'static str, get: fn(&ContractForm) -> &String| {
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Signal::derive(move || errors.with(|e| e.get(key).map(str::to_string))),
        )
    };
    let edit = move |key: &'static str, set: fn(&mut ContractForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| set(f, value));
            errors.update(|e| {
                e.remove(key);
            });
        })
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let dto = match form.with_untracked(build_contract_dto) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match api::create_contract(&dto).await {
                Ok(contract) => {
                    log::info!("contract {} created", contract.id);
                    toasts.success("Contract created");
                    form.set(ContractForm::default());
                    errors.set(ValidationErrors::new());
                    navigator.with_value(|n| n.reload());
                }
                Err(e) => {
                    log::error!("create contract failed: {}", e);
                    toasts.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    let (company_value, company_error) = field("company_id", |f| &f.company_id);
    let (screen_value, screen_error) = field("screen_id", |f| &f.screen_id);
    let (start_value, start_error) = field("start_date", |f| &f.start_date);
    let (end_value, end_error) = field("end_date", |f| &f.end_date);
    let (price_value, price_error) = field("monthly_price", |f| &f.monthly_price);

    view! {
        <PageFrame page_id="a003_contract--new" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"New contract"</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="form">
                    <DropdownInput
                        label="Company"
                        placeholder="Select a company"
                        value=company_value
                        options=company_options
                        on_change=edit("company_id", |f, v| f.company_id = v)
                        error=company_error
                        disabled=saving
                    />
                    <DropdownInput
                        label="Screen"
                        placeholder="Select a screen"
                        value=screen_value
                        options=screen_options
                        on_change=edit("screen_id", |f, v| f.screen_id = v)
                        error=screen_error
                        disabled=saving
                    />
                    <Input
                        label="Start date"
                        input_type="date"
                        value=start_value
                        on_input=edit("start_date", |f, v| f.start_date = v)
                        error=start_error
                        disabled=saving
                    />
                    <Input
                        label="End date"
                        input_type="date"
                        value=end_value
                        on_input=edit("end_date", |f, v| f.end_date = v)
                        error=end_error
                        disabled=saving
                    />
                    <Input
                        label="Monthly price"
                        input_type="text"
                        value=price_value
                        on_input=edit("monthly_price", |f, v| f.monthly_price = v)
                        error=price_error
                        disabled=saving
                    />
                    <div class="form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| save()
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Create contract" }}
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
