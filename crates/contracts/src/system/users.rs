use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub company_id: Option<i64>,
}

/// Body of `POST /users` and `POST /companies/:id/users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}
