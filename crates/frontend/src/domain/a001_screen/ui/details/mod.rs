use contracts::domain::a001_screen::aggregate::{Screen, ScreenId, Solution};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_screen::api;
use crate::shared::api_utils::ApiError;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "—".to_string())
}

fn part_summary(kind: Option<String>, qty: Option<u32>) -> String {
    match (kind, qty) {
        (Some(kind), Some(qty)) => format!("{} × {}", kind, qty),
        (kind, _) => or_dash(kind),
    }
}

fn field_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details__row">
            <span class="details__label">{label}</span>
            <span class="details__value">{value}</span>
        </div>
    }
}

fn screen_view(screen: Screen) -> AnyView {
    let has_modules = screen.solution == Solution::Module && !screen.modules.is_empty();
    let modules = screen.modules.clone();

    view! {
        <div class="details">
            <section class="details__section">
                <h3 class="details__section-title">"Screen"</h3>
                {field_row("Name", screen.name.clone())}
                {field_row("Type", screen.screen_type.label().to_string())}
                {field_row("Location", screen.location.clone())}
                {field_row("Height", screen.height.to_string())}
                {field_row("Width", screen.width.to_string())}
                {field_row("Solution", screen.solution.code().to_string())}
                {field_row("Screen fan", or_dash(screen.screen_fan.clone()))}
            </section>
            <section class="details__section">
                <h3 class="details__section-title">"Components"</h3>
                {field_row(
                    "Power supply",
                    part_summary(screen.power_supply_type.clone(), screen.power_supply_qty),
                )}
                {field_row(
                    "Receiving card",
                    part_summary(screen.receiving_card_type.clone(), screen.receiving_card_qty),
                )}
            </section>
            <section class="details__section">
                <h3 class="details__section-title">"Cabinets"</h3>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Height"</TableHeaderCell>
                            <TableHeaderCell>"Width"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {screen.cabinets.into_iter().map(|cabinet| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{cabinet.kind}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{cabinet.quantity}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{cabinet.height}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{cabinet.width}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </section>
            {has_modules.then(|| view! {
                <section class="details__section">
                    <h3 class="details__section-title">"Modules"</h3>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Batch"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Height"</TableHeaderCell>
                                <TableHeaderCell>"Width"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {modules.into_iter().map(|module| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{module.batch_number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{module.quantity}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{module.height}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{module.width}</TableCellLayout></TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </section>
            })}
        </div>
    }
    .into_any()
}

/// Read-only screen card. A failed load is rendered as `Err` so the tab's
/// error boundary takes over.
#[component]
pub fn ScreenDetails(id: ScreenId, on_close: Callback<()>) -> impl IntoView {
    let loaded = RwSignal::new(None::<Result<Screen, ApiError>>);

    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::fetch_screen(id).await;
            if let Err(e) = &result {
                log::error!("failed to load screen {}: {}", id, e);
            }
            loaded.set(Some(result));
        });
    });

    let title = move || {
        loaded.with(|l| match l {
            Some(Ok(screen)) => screen.name.clone(),
            _ => format!("Screen #{}", id),
        })
    };

    view! {
        <PageFrame page_id="a001_screen--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || -> Result<AnyView, ApiError> {
                    match loaded.get() {
                        None => Ok(view! { <div class="data-list__loading">"Loading..."</div> }.into_any()),
                        Some(result) => result.map(screen_view),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_summary_shows_kind_and_quantity() {
        assert_eq!(part_summary(Some("Meanwell".into()), Some(4)), "Meanwell × 4");
        assert_eq!(part_summary(Some("Meanwell".into()), None), "Meanwell");
        assert_eq!(part_summary(None, Some(4)), "—");
        assert_eq!(or_dash(Some("  ".into())), "—");
    }
}
