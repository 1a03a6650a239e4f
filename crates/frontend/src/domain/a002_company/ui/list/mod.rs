use std::sync::Arc;

use contracts::domain::a002_company::aggregate::Company;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_company::api::{self, CompanyNameSource};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigator::use_navigator;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::company_add_user_key;
use crate::shared::components::{DataList, MultiSearchBar, PaginationControls};
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::list_query::ListQuery;
use crate::shared::list_utils::SuggestionSource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let config = use_app_config();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let navigator = StoredValue::new(use_navigator());

    let state = RwSignal::new(ListQuery::<Company>::new(config.default_page_size));

    let load_page = move || {
        let Some(request) = state.try_update(|s| {
            s.begin_load();
            s.page_request()
        }) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_companies(&request).await {
                Ok(page) => state.update(|s| s.apply_page(page)),
                Err(e) => {
                    log::error!("failed to load companies: {}", e);
                    state.update(|s| s.apply_error(e.user_message()));
                }
            }
        });
    };

    Effect::new(move |_| {
        ctx.refresh.track();
        load_page();
    });

    let run_search = move |label: String| {
        let Some(request) = state.try_update(|s| {
            s.begin_load();
            s.search_request(&label)
        }) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_companies(&request).await {
                Ok(page) => state.update(|s| s.apply_search_results(&label, page.content)),
                Err(e) => {
                    log::error!("company search '{}' failed: {}", label, e);
                    state.update(|s| s.apply_error(e.user_message()));
                }
            }
        });
    };

    let go_to_page = move |requested: i64| {
        if state.try_update(|s| s.go_to_page(requested)).flatten().is_some() {
            load_page();
        }
    };

    let add_user = move |company: &Company| {
        let key = company_add_user_key(company.id.0);
        let title = detail_tab_label("Add user", &company.name);
        navigator.with_value(|n| n.open(&key, &title));
    };

    let source: Arc<dyn SuggestionSource> = Arc::new(CompanyNameSource {
        page_size: config.default_page_size,
    });

    view! {
        <PageFrame page_id="a002_company--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Companies"</h1>
                    <Badge>{move || state.with(|s| s.total_elements.to_string())}</Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <MultiSearchBar
                                source=source
                                on_select=Callback::new(run_search)
                                on_clear=Callback::new(move |_| state.update(|s| s.clear_search()))
                                placeholder="Search companies by name..."
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <Show when=move || state.with(|s| s.search.is_none())>
                                <PaginationControls
                                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                    total_count=Signal::derive(move || state.with(|s| s.total_elements))
                                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                                    on_page_change=Callback::new(go_to_page)
                                />
                            </Show>
                        </div>
                    </div>
                </div>

                <DataList
                    is_loading=Signal::derive(move || state.with(|s| s.is_loading))
                    error=Signal::derive(move || state.with(|s| s.error_message.clone()))
                    count=Signal::derive(move || state.with(|s| s.rendered_count()))
                    empty_label="No companies found"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Phone"</TableHeaderCell>
                                    <TableHeaderCell>"Address"</TableHeaderCell>
                                    <TableHeaderCell>"Users"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.filtered_items.clone())
                                    key=|company| company.id
                                    children=move |company: Company| {
                                        let for_action = company.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{company.name.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{company.email.clone().unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{company.phone.clone().unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{company.address.clone().unwrap_or_default()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{company.users_count}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| add_user(&for_action)
                                                    >
                                                        {icon("plus")}
                                                        " Add user"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </DataList>
            </div>
        </PageFrame>
    }
}
