//! Per-step validation of the screen draft and conversion to request DTOs.
//!
//! Each step's checker both records field errors and returns the parsed
//! values, so `validate_step` and `build_submission` cannot disagree.

use contracts::domain::a001_screen::aggregate::{
    CreateCabinetDto, CreateModuleDto, CreateScreenForm, Solution,
};

use super::model::{CabinetField, FileSlot, ModuleField, PartDraft, ScreenDraft, ScreenField};
use crate::shared::validation::{
    check, parse_non_negative_integer, parse_positive_integer, parse_positive_number,
    parse_required, ValidationErrors,
};

pub const STEP_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Screen,
    Components,
    Cabinets,
    Modules,
}

impl WizardStep {
    pub const ALL: [WizardStep; STEP_COUNT] = [
        WizardStep::Screen,
        WizardStep::Components,
        WizardStep::Cabinets,
        WizardStep::Modules,
    ];

    /// 1-based step number → step
    pub fn from_number(step: usize) -> Option<Self> {
        step.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn number(&self) -> usize {
        match self {
            WizardStep::Screen => 1,
            WizardStep::Components => 2,
            WizardStep::Cabinets => 3,
            WizardStep::Modules => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Screen => "Screen",
            WizardStep::Components => "Components",
            WizardStep::Cabinets => "Cabinets",
            WizardStep::Modules => "Modules",
        }
    }
}

/// Requests produced from a fully valid draft
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub screen: CreateScreenForm,
    pub cabinets: Vec<CreateCabinetDto>,
    /// Empty unless the solution is `Module`
    pub modules: Vec<CreateModuleDto>,
}

struct ScreenStep {
    name: String,
    location: String,
    height: f64,
    width: f64,
}

struct PartValues {
    kind: String,
    qty: u32,
    spare_qty: u32,
}

struct ComponentsStep {
    power_supply: PartValues,
    receiving_card: PartValues,
}

fn check_screen(draft: &ScreenDraft, errors: &mut ValidationErrors) -> Option<ScreenStep> {
    let name = check(errors, ScreenField::Name.key(), parse_required(&draft.name, "Name"));
    let location = check(
        errors,
        ScreenField::Location.key(),
        parse_required(&draft.location, "Location"),
    );
    let height = check(
        errors,
        ScreenField::Height.key(),
        parse_positive_number(&draft.height, "Height"),
    );
    let width = check(
        errors,
        ScreenField::Width.key(),
        parse_positive_number(&draft.width, "Width"),
    );
    Some(ScreenStep {
        name: name?,
        location: location?,
        height: height?,
        width: width?,
    })
}

fn check_part(
    part: &PartDraft,
    keys: [ScreenField; 3],
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<PartValues> {
    let [kind_key, qty_key, spare_key] = keys;
    let kind = check(
        errors,
        kind_key.key(),
        parse_required(&part.kind, &format!("{} type", label)),
    );
    let qty = check(
        errors,
        qty_key.key(),
        parse_positive_integer(&part.qty, &format!("{} quantity", label)),
    );
    let spare_qty = check(
        errors,
        spare_key.key(),
        parse_non_negative_integer(&part.spare_qty, &format!("{} spare quantity", label)),
    );
    Some(PartValues {
        kind: kind?,
        qty: qty?,
        spare_qty: spare_qty?,
    })
}

fn check_components(draft: &ScreenDraft, errors: &mut ValidationErrors) -> Option<ComponentsStep> {
    let power_supply = check_part(
        &draft.power_supply,
        [
            ScreenField::PowerSupplyType,
            ScreenField::PowerSupplyQty,
            ScreenField::PowerSupplySpareQty,
        ],
        "Power supply",
        errors,
    );
    let receiving_card = check_part(
        &draft.receiving_card,
        [
            ScreenField::ReceivingCardType,
            ScreenField::ReceivingCardQty,
            ScreenField::ReceivingCardSpareQty,
        ],
        "Receiving card",
        errors,
    );
    let mut files_ok = true;
    for slot in FileSlot::ALL {
        if draft.files.get(slot).is_none() {
            errors.insert(slot.error_key(), format!("{} is required", slot.label()));
            files_ok = false;
        }
    }
    let step = ComponentsStep {
        power_supply: power_supply?,
        receiving_card: receiving_card?,
    };
    files_ok.then_some(step)
}

fn check_cabinets(draft: &ScreenDraft, errors: &mut ValidationErrors) -> Vec<CreateCabinetDto> {
    let mut dtos = Vec::with_capacity(draft.cabinets.len());
    for cabinet in &draft.cabinets {
        let key = cabinet.key;
        let quantity = check(
            errors,
            CabinetField::Quantity.key(key),
            parse_positive_integer(&cabinet.quantity, "Quantity"),
        );
        let height = check(
            errors,
            CabinetField::Height.key(key),
            parse_positive_number(&cabinet.height, "Height"),
        );
        let width = check(
            errors,
            CabinetField::Width.key(key),
            parse_positive_number(&cabinet.width, "Width"),
        );
        let kind = check(
            errors,
            CabinetField::Kind.key(key),
            parse_required(&cabinet.kind, "Cabinet type"),
        );
        if let (Some(quantity), Some(height), Some(width), Some(kind)) =
            (quantity, height, width, kind)
        {
            dtos.push(CreateCabinetDto {
                quantity,
                height,
                width,
                kind,
            });
        }
    }
    dtos
}

fn check_modules(draft: &ScreenDraft, errors: &mut ValidationErrors) -> Vec<CreateModuleDto> {
    if draft.solution != Solution::Module {
        return Vec::new();
    }
    let mut dtos = Vec::with_capacity(draft.cabinets.len());
    for cabinet in &draft.cabinets {
        let key = cabinet.key;
        let module = &cabinet.module;
        let quantity = check(
            errors,
            ModuleField::Quantity.key(key),
            parse_positive_integer(&module.quantity, "Module quantity"),
        );
        let height = check(
            errors,
            ModuleField::Height.key(key),
            parse_positive_number(&module.height, "Module height"),
        );
        let width = check(
            errors,
            ModuleField::Width.key(key),
            parse_positive_number(&module.width, "Module width"),
        );
        let batch_number = check(
            errors,
            ModuleField::BatchNumber.key(key),
            parse_required(&module.batch_number, "Batch number"),
        );
        if let (Some(quantity), Some(height), Some(width), Some(batch_number)) =
            (quantity, height, width, batch_number)
        {
            dtos.push(CreateModuleDto {
                quantity,
                height,
                width,
                batch_number,
            });
        }
    }
    dtos
}

/// Errors of one step only; unknown step numbers have no fields
pub fn validate_step(step: usize, draft: &ScreenDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match WizardStep::from_number(step) {
        Some(WizardStep::Screen) => {
            check_screen(draft, &mut errors);
        }
        Some(WizardStep::Components) => {
            check_components(draft, &mut errors);
        }
        Some(WizardStep::Cabinets) => {
            check_cabinets(draft, &mut errors);
        }
        Some(WizardStep::Modules) => {
            check_modules(draft, &mut errors);
        }
        None => {}
    }
    errors
}

/// Validate every step and build the requests, or return all errors
pub fn build_submission(draft: &ScreenDraft) -> Result<Submission, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let screen = check_screen(draft, &mut errors);
    let components = check_components(draft, &mut errors);
    let cabinets = check_cabinets(draft, &mut errors);
    let modules = check_modules(draft, &mut errors);

    match (screen, components) {
        (Some(screen), Some(components)) if errors.is_empty() => Ok(Submission {
            screen: CreateScreenForm {
                name: screen.name,
                screen_type: draft.screen_type,
                location: screen.location,
                height: screen.height,
                width: screen.width,
                solution: draft.solution,
                screen_fan: draft.screen_fan.trim().to_string(),
                power_supply_type: components.power_supply.kind,
                power_supply_qty: components.power_supply.qty,
                power_supply_spare_qty: components.power_supply.spare_qty,
                receiving_card_type: components.receiving_card.kind,
                receiving_card_qty: components.receiving_card.qty,
                receiving_card_spare_qty: components.receiving_card.spare_qty,
            },
            cabinets,
            modules,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a001_screen::ui::wizard::model::CabinetKey;

    /// Draft that passes every step
    pub(crate) fn complete_draft(solution: Solution) -> ScreenDraft {
        let mut d = ScreenDraft::new();
        d.name = "Mall Atrium".into();
        d.location = "Level 2".into();
        d.height = "3.2".into();
        d.width = "5,76".into();
        d.solution = solution;
        d.power_supply = PartDraft {
            kind: "G-Energy 200W".into(),
            qty: "12".into(),
            spare_qty: "0".into(),
        };
        d.receiving_card = PartDraft {
            kind: "Novastar A5s".into(),
            qty: "12".into(),
            spare_qty: "2".into(),
        };
        for slot in FileSlot::ALL {
            d.files.set(slot, Some(format!("{:?}.rcfgx", slot)));
        }
        let c = &mut d.cabinets[0];
        c.quantity = "12".into();
        c.height = "0.96".into();
        c.width = "0.96".into();
        c.kind = "Die-cast".into();
        c.module.quantity = "4".into();
        c.module.height = "0.32".into();
        c.module.width = "0.16".into();
        c.module.batch_number = "B-2291".into();
        d
    }

    #[test]
    fn every_step_is_clean_for_a_complete_draft() {
        let d = complete_draft(Solution::Module);
        for step in 1..=STEP_COUNT {
            assert!(validate_step(step, &d).is_empty(), "step {}", step);
        }
    }

    #[test]
    fn step_one_reports_only_its_own_fields() {
        let d = ScreenDraft::new();
        let errors = validate_step(1, &d);
        let keys: Vec<&str> = errors.keys().collect();
        assert_eq!(keys, vec!["height", "location", "name", "width"]);
    }

    #[test]
    fn step_two_requires_all_three_files() {
        let mut d = complete_draft(Solution::Cabinet);
        d.files.set(FileSlot::Config, None);
        let errors = validate_step(2, &d);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("config_file"), Some("Config file is required"));
    }

    #[test]
    fn spare_quantity_may_be_zero_but_quantity_may_not() {
        let mut d = complete_draft(Solution::Cabinet);
        d.power_supply.qty = "0".into();
        let errors = validate_step(2, &d);
        assert!(errors.contains("power_supply_qty"));
        assert!(!errors.contains("power_supply_spare_qty"));
    }

    #[test]
    fn cabinet_errors_use_stable_keys() {
        let mut d = complete_draft(Solution::Cabinet);
        let key = d.push_cabinet();
        let errors = validate_step(3, &d);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&format!("cabinet_{}_type", key)));
        assert!(!errors.contains("cabinet_1_type"));
    }

    #[test]
    fn module_step_depends_on_solution() {
        let mut d = complete_draft(Solution::Cabinet);
        d.cabinets[0].module = Default::default();
        assert!(validate_step(4, &d).is_empty());

        d.solution = Solution::Module;
        let errors = validate_step(4, &d);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains("module_1_batch_number"));
    }

    #[test]
    fn submission_skips_modules_for_cabinet_solution() {
        let s = build_submission(&complete_draft(Solution::Cabinet)).unwrap();
        assert_eq!(s.cabinets.len(), 1);
        assert!(s.modules.is_empty());
        assert_eq!(s.screen.width, 5.76);
        assert_eq!(s.screen.receiving_card_spare_qty, 2);
    }

    #[test]
    fn submission_collects_errors_from_all_steps() {
        let mut d = complete_draft(Solution::Module);
        d.name.clear();
        d.cabinets[0].module.quantity = "x".into();
        let errors = build_submission(&d).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains(&format!("module_{}_quantity", CabinetKey(1))));
    }

    #[test]
    fn step_numbers_outside_the_wizard_have_no_fields() {
        assert!(validate_step(0, &ScreenDraft::new()).is_empty());
        assert!(validate_step(9, &ScreenDraft::new()).is_empty());
        assert_eq!(WizardStep::from_number(4), Some(WizardStep::Modules));
    }
}
