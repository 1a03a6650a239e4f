use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_screen::aggregate::ScreenId;
use crate::domain::a002_company::aggregate::CompanyId;
use crate::numeric_id;

numeric_id!(
    /// Backend id of a rental contract
    ContractId
);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: ContractId,
    pub company_id: CompanyId,
    pub screen_id: ScreenId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_price: f64,
}

/// Body of `POST /contracts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractDto {
    pub company_id: CompanyId,
    pub screen_id: ScreenId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_serialize_as_iso_strings() {
        let dto = CreateContractDto {
            company_id: CompanyId(1),
            screen_id: ScreenId(9),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            monthly_price: 1500.0,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["startDate"], "2026-01-01");
        assert_eq!(json["companyId"], 1);
        assert_eq!(json["screenId"], 9);
    }
}
