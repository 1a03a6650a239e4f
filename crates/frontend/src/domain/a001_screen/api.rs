use async_trait::async_trait;
use contracts::domain::a001_screen::aggregate::{
    CreateCabinetDto, CreateModuleDto, Screen, ScreenId,
};
use contracts::shared::page::{PageRequest, PageResponse};

use crate::shared::api_utils::{get_json, post_form, post_json_unit, with_query, ApiError};
use crate::shared::list_utils::SuggestionSource;

/// Fetch one page of screens, optionally filtered by name
pub async fn fetch_screens(query: &PageRequest) -> Result<PageResponse<Screen>, ApiError> {
    get_json(&with_query("/api/screens", query)?).await
}

pub async fn fetch_screen(id: ScreenId) -> Result<Screen, ApiError> {
    get_json(&format!("/api/screens/{}", id)).await
}

/// Multipart `POST /screens` (scalar fields plus the three files)
pub async fn create_screen(form: web_sys::FormData) -> Result<(), ApiError> {
    post_form("/api/screens", form).await
}

pub async fn create_cabinet(dto: &CreateCabinetDto) -> Result<(), ApiError> {
    post_json_unit("/api/cabin", dto).await
}

pub async fn create_module(dto: &CreateModuleDto) -> Result<(), ApiError> {
    post_json_unit("/api/module", dto).await
}

/// Screen-name typeahead backed by the list endpoint
pub struct ScreenNameSource {
    pub page_size: usize,
}

#[async_trait(?Send)]
impl SuggestionSource for ScreenNameSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let page = fetch_screens(&PageRequest {
            page: 0,
            size: self.page_size,
            search: Some(query.to_string()),
        })
        .await?;
        Ok(page.content.into_iter().map(|s| s.name).collect())
    }
}
