//! Contract form state and validation.

use chrono::NaiveDate;
use contracts::domain::a001_screen::aggregate::ScreenId;
use contracts::domain::a002_company::aggregate::CompanyId;
use contracts::domain::a003_contract::aggregate::CreateContractDto;
use contracts::domain::common::AggregateId;

use crate::shared::validation::{check, parse_positive_number, parse_required, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractForm {
    /// Selected company id as the dropdown reports it
    pub company_id: String,
    pub screen_id: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub start_date: String,
    pub end_date: String,
    pub monthly_price: String,
}

fn parse_id<T: AggregateId>(value: &str, label: &str) -> Result<T, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    T::from_string(raw).map_err(|_| format!("{} is required", label))
}

fn parse_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    let raw = parse_required(value, label)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| format!("{} must be a valid date", label))
}

pub fn build_contract_dto(form: &ContractForm) -> Result<CreateContractDto, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let company_id = check(
        &mut errors,
        "company_id",
        parse_id::<CompanyId>(&form.company_id, "Company"),
    );
    let screen_id = check(
        &mut errors,
        "screen_id",
        parse_id::<ScreenId>(&form.screen_id, "Screen"),
    );
    let start_date = check(&mut errors, "start_date", parse_date(&form.start_date, "Start date"));
    let end_date = check(&mut errors, "end_date", parse_date(&form.end_date, "End date"));
    let monthly_price = check(
        &mut errors,
        "monthly_price",
        parse_positive_number(&form.monthly_price, "Monthly price"),
    );

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.insert("end_date", "End date cannot be before the start date");
        }
    }

    match (company_id, screen_id, start_date, end_date, monthly_price) {
        (Some(company_id), Some(screen_id), Some(start_date), Some(end_date), Some(monthly_price))
            if errors.is_empty() =>
        {
            Ok(CreateContractDto {
                company_id,
                screen_id,
                start_date,
                end_date,
                monthly_price,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContractForm {
        ContractForm {
            company_id: "3".into(),
            screen_id: "11".into(),
            start_date: "2026-01-01".into(),
            end_date: "2026-06-30".into(),
            monthly_price: "1200,50".into(),
        }
    }

    #[test]
    fn valid_form_builds_dto() {
        let dto = build_contract_dto(&filled()).unwrap();
        assert_eq!(dto.company_id, CompanyId(3));
        assert_eq!(dto.screen_id, ScreenId(11));
        assert_eq!(dto.monthly_price, 1200.5);
    }

    #[test]
    fn same_day_contract_is_allowed() {
        let mut form = filled();
        form.end_date = form.start_date.clone();
        assert!(build_contract_dto(&form).is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = filled();
        form.end_date = "2025-12-31".into();
        let errors = build_contract_dto(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("end_date"));
    }

    #[test]
    fn price_must_be_positive() {
        let mut form = filled();
        form.monthly_price = "0".into();
        assert!(build_contract_dto(&form).unwrap_err().contains("monthly_price"));
    }

    #[test]
    fn empty_form_flags_every_field() {
        let errors = build_contract_dto(&ContractForm::default()).unwrap_err();
        for key in ["company_id", "screen_id", "start_date", "end_date", "monthly_price"] {
            assert!(errors.contains(key), "{key}");
        }
    }
}
