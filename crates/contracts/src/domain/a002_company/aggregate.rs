use serde::{Deserialize, Serialize};

use crate::numeric_id;
use crate::system::users::CreateUserDto;

numeric_id!(
    /// Backend id of a customer company
    CompanyId
);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub users_count: u32,
}

/// Body of `POST /companies/:id/users`
///
/// Same shape as a standalone user account; the company comes from the path.
pub type AddCompanyUserDto = CreateUserDto;
