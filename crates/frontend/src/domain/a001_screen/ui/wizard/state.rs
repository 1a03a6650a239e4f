//! Screen-specific operations on the multi-step form engine.

use contracts::domain::a001_screen::aggregate::{ScreenType, Solution};

use super::model::{
    cabinet_prefix, module_prefix, CabinetField, CabinetKey, FileSlot, ModuleField, ScreenDraft,
    ScreenField,
};
use super::validation::{validate_step, STEP_COUNT};
use crate::shared::wizard::MultiStepForm;

pub type ScreenWizard = MultiStepForm<ScreenDraft>;

pub fn new_screen_wizard() -> ScreenWizard {
    MultiStepForm::new(ScreenDraft::new(), STEP_COUNT, validate_step)
}

/// Edits the wizard refuses, shown to the user as a warning toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardWarning {
    LastCabinet,
}

impl WizardWarning {
    pub fn message(&self) -> &'static str {
        match self {
            WizardWarning::LastCabinet => "A screen needs at least one cabinet",
        }
    }
}

impl MultiStepForm<ScreenDraft> {
    pub fn set_screen_field(&mut self, field: ScreenField, value: String) {
        self.form.set_field(field, value);
        self.clear_error(field.key());
    }

    pub fn set_screen_type(&mut self, screen_type: ScreenType) {
        self.form.screen_type = screen_type;
    }

    pub fn set_solution(&mut self, solution: Solution) {
        self.form.solution = solution;
        if solution == Solution::Cabinet {
            self.errors.remove_prefixed("module_");
        }
    }

    /// Record (or clear) the picked file name of a slot
    pub fn attach_file(&mut self, slot: FileSlot, name: Option<String>) {
        self.form.files.set(slot, name);
        self.clear_error(slot.error_key());
    }

    pub fn set_cabinet_field(&mut self, key: CabinetKey, field: CabinetField, value: String) {
        if let Some(cabinet) = self.form.cabinet_mut(key) {
            field.set(cabinet, value);
            self.clear_error(&field.key(key));
        }
    }

    pub fn set_module_field(&mut self, key: CabinetKey, field: ModuleField, value: String) {
        if let Some(cabinet) = self.form.cabinet_mut(key) {
            field.set(&mut cabinet.module, value);
            self.clear_error(&field.key(key));
        }
    }

    pub fn add_cabinet(&mut self) -> CabinetKey {
        self.form.push_cabinet()
    }

    /// Remove a cabinet and its error entries; the last one always stays
    pub fn remove_cabinet(&mut self, key: CabinetKey) -> Result<(), WizardWarning> {
        if self.form.cabinets.len() <= 1 {
            return Err(WizardWarning::LastCabinet);
        }
        self.form.cabinets.retain(|c| c.key != key);
        self.errors.remove_prefixed(&cabinet_prefix(key));
        self.errors.remove_prefixed(&module_prefix(key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_screen::ui::wizard::validation::tests::complete_draft;

    fn wizard_with(draft: ScreenDraft) -> ScreenWizard {
        let mut w = new_screen_wizard();
        w.form = draft;
        w
    }

    #[test]
    fn next_on_empty_first_step_stays_put() {
        let mut w = new_screen_wizard();
        assert!(!w.next());
        assert_eq!(w.step(), 1);
        assert_eq!(w.errors.len(), 4);
        // repeating the call changes nothing
        assert!(!w.next());
        assert_eq!(w.errors.len(), 4);
    }

    #[test]
    fn prev_then_next_returns_to_the_same_step() {
        let mut w = wizard_with(complete_draft(Solution::Cabinet));
        w.next();
        w.next();
        assert_eq!(w.step(), 3);
        w.prev();
        assert!(w.next());
        assert_eq!(w.step(), 3);
    }

    #[test]
    fn returning_to_a_step_reproduces_its_error_map() {
        let mut w = wizard_with(complete_draft(Solution::Module));
        w.next();
        w.next();
        w.next();
        assert_eq!(w.step(), 4);
        w.form.cabinets[0].module.batch_number.clear();

        assert!(!w.next());
        let before = w.errors.clone();
        assert_eq!(before.len(), 1);

        w.prev();
        assert!(w.next());
        assert_eq!(w.step(), 4);
        assert!(!w.next());
        assert_eq!(w.errors, before);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut w = new_screen_wizard();
        w.next();
        w.set_screen_field(ScreenField::Name, "Atrium".into());
        assert!(!w.errors.contains("name"));
        assert!(w.errors.contains("location"));
    }

    #[test]
    fn last_cabinet_cannot_be_removed() {
        let mut w = new_screen_wizard();
        let only = w.form.cabinets[0].key;
        assert_eq!(w.remove_cabinet(only), Err(WizardWarning::LastCabinet));
        assert_eq!(w.form.cabinets.len(), 1);
    }

    #[test]
    fn removing_a_middle_cabinet_keeps_other_errors_attached() {
        let mut w = wizard_with(complete_draft(Solution::Cabinet));
        let middle = w.add_cabinet();
        let last = w.add_cabinet();
        w.next();
        w.next();
        assert!(!w.next());
        assert!(w.errors.contains(&CabinetField::Height.key(middle)));
        assert!(w.errors.contains(&CabinetField::Height.key(last)));

        w.remove_cabinet(middle).unwrap();
        assert!(!w.errors.contains(&CabinetField::Height.key(middle)));
        assert!(w.errors.contains(&CabinetField::Height.key(last)));
        assert_eq!(w.errors.len(), 4);

        w.set_cabinet_field(last, CabinetField::Height, "1".into());
        assert!(!w.errors.contains(&CabinetField::Height.key(last)));
    }

    #[test]
    fn attaching_a_file_clears_its_error() {
        let mut d = complete_draft(Solution::Cabinet);
        d.files.set(FileSlot::Version, None);
        let mut w = wizard_with(d);
        w.next();
        assert!(!w.next());
        assert!(w.errors.contains("version_file"));
        w.attach_file(FileSlot::Version, Some("fw-1.2.bin".into()));
        assert!(w.errors.is_empty());
        assert!(w.next());
    }
}
