use async_trait::async_trait;
use contracts::domain::a002_company::aggregate::{AddCompanyUserDto, Company, CompanyId};
use contracts::shared::page::{PageRequest, PageResponse};
use contracts::system::users::User;

use crate::shared::api_utils::{get_json, post_json, with_query, ApiError};
use crate::shared::list_utils::SuggestionSource;

pub async fn fetch_companies(query: &PageRequest) -> Result<PageResponse<Company>, ApiError> {
    get_json(&with_query("/api/companies", query)?).await
}

/// Create a user account attached to `company`
pub async fn add_user(company: CompanyId, dto: &AddCompanyUserDto) -> Result<User, ApiError> {
    post_json(&format!("/api/companies/{}/users", company), dto).await
}

/// Company-name typeahead backed by the list endpoint
pub struct CompanyNameSource {
    pub page_size: usize,
}

#[async_trait(?Send)]
impl SuggestionSource for CompanyNameSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let page = fetch_companies(&PageRequest {
            page: 0,
            size: self.page_size,
            search: Some(query.to_string()),
        })
        .await?;
        Ok(page.content.into_iter().map(|c| c.name).collect())
    }
}
