use contracts::domain::a003_contract::aggregate::{Contract, CreateContractDto};

use crate::shared::api_utils::{post_json, ApiError};

pub async fn create_contract(dto: &CreateContractDto) -> Result<Contract, ApiError> {
    post_json("/api/contracts", dto).await
}
