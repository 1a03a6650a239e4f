use leptos::prelude::*;

/// Which of the mutually exclusive list states is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay {
    Loading,
    Error(String),
    Empty,
    Content,
}

/// Precedence: loading, then error, then empty, then content
pub fn list_display(is_loading: bool, error: Option<&str>, count: usize) -> ListDisplay {
    if is_loading {
        ListDisplay::Loading
    } else if let Some(message) = error {
        ListDisplay::Error(message.to_string())
    } else if count == 0 {
        ListDisplay::Empty
    } else {
        ListDisplay::Content
    }
}

/// Wraps a rendered list with its loading, error and empty states
#[component]
pub fn DataList(
    #[prop(into)]
    is_loading: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Number of rows the children will render
    #[prop(into)]
    count: Signal<usize>,
    /// Label for the "no results" state
    #[prop(optional, into)]
    empty_label: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let display = Memo::new(move |_| {
        error.with(|e| list_display(is_loading.get(), e.as_deref(), count.get()))
    });

    move || match display.get() {
        ListDisplay::Loading => view! {
            <div class="data-list__loading">"Loading..."</div>
        }
        .into_any(),
        ListDisplay::Error(message) => view! {
            <div class="data-list__error alert alert--error">{message}</div>
        }
        .into_any(),
        ListDisplay::Empty => view! {
            <div class="data-list__empty">
                {empty_label.get().unwrap_or_else(|| "No results found".to_string())}
            </div>
        }
        .into_any(),
        ListDisplay::Content => children().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(list_display(true, Some("boom"), 5), ListDisplay::Loading);
        assert_eq!(list_display(true, None, 0), ListDisplay::Loading);
    }

    #[test]
    fn error_wins_over_empty_and_content() {
        assert_eq!(
            list_display(false, Some("boom"), 0),
            ListDisplay::Error("boom".into())
        );
        assert_eq!(
            list_display(false, Some("boom"), 3),
            ListDisplay::Error("boom".into())
        );
    }

    #[test]
    fn empty_is_distinct_from_content() {
        assert_eq!(list_display(false, None, 0), ListDisplay::Empty);
        assert_eq!(list_display(false, None, 1), ListDisplay::Content);
    }
}
