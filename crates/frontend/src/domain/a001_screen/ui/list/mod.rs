use std::sync::Arc;

use contracts::domain::a001_screen::aggregate::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_screen::api::{self, ScreenNameSource};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::navigator::use_navigator;
use crate::layout::tabs::tab_labels::{screen_detail_key, SCREEN_NEW};
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::{DataList, MultiSearchBar, PaginationControls};
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::list_query::ListQuery;
use crate::shared::list_utils::SuggestionSource;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn format_size(height: f64, width: f64) -> String {
    format!("{} × {} m", height, width)
}

#[component]
pub fn ScreensPage() -> impl IntoView {
    let config = use_app_config();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let navigator = StoredValue::new(use_navigator());

    let state = RwSignal::new(ListQuery::<Screen>::new(config.default_page_size));

    let load_page = move || {
        let Some(request) = state.try_update(|s| {
            s.begin_load();
            s.page_request()
        }) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_screens(&request).await {
                Ok(page) => state.update(|s| s.apply_page(page)),
                Err(e) => {
                    log::error!("failed to load screens: {}", e);
                    state.update(|s| s.apply_error(e.user_message()));
                }
            }
        });
    };

    // initial load plus every refresh request from a finished create
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
            match api::fetch_screens(&request).await {
                Ok(page) => state.update(|s| s.apply_search_results(&label, page.content)),
                Err(e) => {
                    log::error!("screen search '{}' failed: {}", label, e);
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

    let open_details = move |screen: &Screen| {
        let key = screen_detail_key(screen.id.0);
        let title = detail_tab_label("Screen", &screen.name);
        navigator.with_value(|n| n.open(&key, &title));
    };

    let source: Arc<dyn SuggestionSource> = Arc::new(ScreenNameSource {
        page_size: config.default_page_size,
    });

    view! {
        <PageFrame page_id="a001_screen--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Screens"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            navigator.with_value(|n| n.open(SCREEN_NEW, tab_label_for_key(SCREEN_NEW)))
                        }
                    >
                        {icon("plus")}
                        " Add screen"
                    </Button>
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
                                placeholder="Search screens by name..."
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
                    empty_label="No screens found"
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"Location"</TableHeaderCell>
                                    <TableHeaderCell>"Size"</TableHeaderCell>
                                    <TableHeaderCell>"Solution"</TableHeaderCell>
                                    <TableHeaderCell>"Cabinets"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || state.with(|s| s.filtered_items.clone())
                                    key=|screen| screen.id
                                    children=move |screen: Screen| {
                                        let for_click = screen.clone();
                                        view! {
                                            <TableRow
                                                on:click=move |_| open_details(&for_click)
                                                attr:style="cursor: pointer;"
                                            >
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{screen.name.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{screen.screen_type.label()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{screen.location.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_size(screen.height, screen.width)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{screen.solution.code()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{screen.cabinets.len()}</TableCellLayout>
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
