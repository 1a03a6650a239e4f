use contracts::system::users::{CreateUserDto, User};

use crate::shared::api_utils::{post_json, ApiError};

/// Create a standalone user account
pub async fn create_user(dto: &CreateUserDto) -> Result<User, ApiError> {
    post_json("/api/users", dto).await
}
