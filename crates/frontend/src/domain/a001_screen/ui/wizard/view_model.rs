use std::collections::HashMap;

use contracts::domain::a001_screen::aggregate::{ScreenType, Solution};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::gateway::HttpScreenGateway;
use super::model::{CabinetField, CabinetKey, FileSlot, ModuleField, ScreenDraft, ScreenField};
use super::state::{new_screen_wizard, ScreenWizard};
use super::submit::{submit_screen, SubmitError, INVALID_MESSAGE};
use crate::layout::navigator::{use_navigator, NavigatorHandle};
use crate::layout::toast_service::{use_toasts, ToastService};
use crate::shared::wizard::SubmitBlocked;

/// ViewModel for the Add Screen wizard
#[derive(Clone, Copy)]
pub struct AddScreenWizardVm {
    pub wizard: RwSignal<ScreenWizard>,
    /// Picked file handles; the draft only keeps their names
    files: StoredValue<HashMap<FileSlot, web_sys::File>, LocalStorage>,
    toasts: ToastService,
    navigator: StoredValue<NavigatorHandle>,
}

impl AddScreenWizardVm {
    pub fn new() -> Self {
        Self {
            wizard: RwSignal::new(new_screen_wizard()),
            files: StoredValue::new_local(HashMap::new()),
            toasts: use_toasts(),
            navigator: StoredValue::new(use_navigator()),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn step(&self) -> usize {
        self.wizard.with(|w| w.step())
    }

    pub fn is_first_step(&self) -> bool {
        self.wizard.with(|w| w.is_first_step())
    }

    pub fn is_final_step(&self) -> bool {
        self.wizard.with(|w| w.is_final_step())
    }

    pub fn is_submitting(&self) -> bool {
        self.wizard.with(|w| w.is_submitting())
    }

    pub fn error(&self, key: &str) -> Option<String> {
        self.wizard.with(|w| w.errors.get(key).map(str::to_string))
    }

    pub fn field(&self, field: ScreenField) -> String {
        self.wizard.with(|w| w.form.field(field).to_string())
    }

    pub fn screen_type(&self) -> ScreenType {
        self.wizard.with(|w| w.form.screen_type)
    }

    pub fn solution(&self) -> Solution {
        self.wizard.with(|w| w.form.solution)
    }

    pub fn file_name(&self, slot: FileSlot) -> Option<String> {
        self.wizard.with(|w| w.form.files.get(slot).map(str::to_string))
    }

    /// Cabinet keys in display order
    pub fn cabinet_keys(&self) -> Vec<CabinetKey> {
        self.wizard
            .with(|w| w.form.cabinets.iter().map(|c| c.key).collect())
    }

    /// 1-based position of a cabinet, for headings only
    pub fn cabinet_position(&self, key: CabinetKey) -> usize {
        self.wizard.with(|w| {
            w.form
                .cabinets
                .iter()
                .position(|c| c.key == key)
                .map_or(0, |i| i + 1)
        })
    }

    pub fn cabinet_field(&self, key: CabinetKey, field: CabinetField) -> String {
        self.wizard.with(|w| {
            w.form
                .cabinets
                .iter()
                .find(|c| c.key == key)
                .map(|c| field.get(c).to_string())
                .unwrap_or_default()
        })
    }

    pub fn module_field(&self, key: CabinetKey, field: ModuleField) -> String {
        self.wizard.with(|w| {
            w.form
                .cabinets
                .iter()
                .find(|c| c.key == key)
                .map(|c| field.get(&c.module).to_string())
                .unwrap_or_default()
        })
    }

    // ── Edits ────────────────────────────────────────────────────────────

    pub fn set_field(&self, field: ScreenField, value: String) {
        self.wizard.update(|w| w.set_screen_field(field, value));
    }

    pub fn set_screen_type(&self, code: String) {
        if let Some(screen_type) = ScreenType::from_code(&code) {
            self.wizard.update(|w| w.set_screen_type(screen_type));
        }
    }

    pub fn set_solution(&self, code: String) {
        if let Some(solution) = Solution::from_code(&code) {
            self.wizard.update(|w| w.set_solution(solution));
        }
    }

    /// Keep the first picked file of a slot; an empty pick clears the slot
    pub fn attach_file(&self, slot: FileSlot, picked: Vec<web_sys::File>) {
        let file = picked.into_iter().next();
        let name = file.as_ref().map(|f| f.name());
        self.files.update_value(|files| match file {
            Some(file) => {
                files.insert(slot, file);
            }
            None => {
                files.remove(&slot);
            }
        });
        self.wizard.update(|w| w.attach_file(slot, name));
    }

    pub fn set_cabinet_field(&self, key: CabinetKey, field: CabinetField, value: String) {
        self.wizard.update(|w| w.set_cabinet_field(key, field, value));
    }

    pub fn set_module_field(&self, key: CabinetKey, field: ModuleField, value: String) {
        self.wizard.update(|w| w.set_module_field(key, field, value));
    }

    pub fn add_cabinet(&self) {
        self.wizard.update(|w| {
            w.add_cabinet();
        });
    }

    pub fn remove_cabinet(&self, key: CabinetKey) {
        let outcome = self.wizard.try_update(|w| w.remove_cabinet(key));
        if let Some(Err(warning)) = outcome {
            self.toasts.warning(warning.message());
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────

    pub fn next(&self) {
        self.wizard.update(|w| {
            w.next();
        });
    }

    pub fn prev(&self) {
        self.wizard.update(|w| w.prev());
    }

    /// Validate the last step and run the sequential submission
    pub fn submit(&self) {
        match self.wizard.try_update(|w| w.begin_submit()) {
            Some(Ok(())) => {}
            Some(Err(SubmitBlocked::Invalid)) => {
                self.toasts.warning(INVALID_MESSAGE);
                return;
            }
            Some(Err(blocked)) => {
                log::debug!("submit ignored: {:?}", blocked);
                return;
            }
            None => return,
        }

        let draft = self.wizard.with_untracked(|w| w.form.clone());
        let files = self.files.with_value(|f| f.clone());
        let vm = *self;
        spawn_local(async move {
            let gateway = HttpScreenGateway::new(files);
            match submit_screen(&gateway, &draft).await {
                Ok(report) => {
                    log::info!(
                        "screen '{}' created with {} cabinet(s) and {} module(s)",
                        draft.name,
                        report.cabinets,
                        report.modules
                    );
                    vm.wizard.update(|w| w.finish_submit(true, ScreenDraft::new));
                    vm.files.update_value(|f| f.clear());
                    vm.toasts.success("Screen created");
                    vm.navigator.with_value(|n| n.reload());
                }
                Err(e) => {
                    log::error!("screen submission failed: {}", e);
                    vm.toasts.error(e.user_message());
                    vm.wizard.update(|w| {
                        if let SubmitError::Invalid(errors) = &e {
                            w.errors = errors.clone();
                        }
                        w.finish_submit(false, ScreenDraft::new);
                    });
                }
            }
        });
    }
}
